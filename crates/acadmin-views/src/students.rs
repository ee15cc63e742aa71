//! Student views: detail, create, assign-module, set-grade.

use serde::Serialize;
use tracing::info;

use acadmin_client::models::{Grade, NewGrade, NewStudent, Resource, Student};
use acadmin_client::RecordsApi;
use acadmin_common::{resolve_reference, Result};

use crate::aggregate::{distinct_ids, missing_as_not_found};
use crate::forms::{mark_in_range, required};
use crate::modules::ModuleRow;
use crate::state::{Redirect, ViewState};

/// Student record with its cohort reference resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRow {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub cohort: String,
}

impl From<Student> for StudentRow {
    fn from(student: Student) -> Self {
        Self {
            cohort: resolve_reference(&student.cohort).to_string(),
            student_id: student.student_id,
            first_name: student.first_name,
            last_name: student.last_name,
            email: student.email,
        }
    }
}

/// One grade line with the module reference resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRow {
    pub module: String,
    pub ca_mark: i32,
    pub exam_mark: i32,
    pub total_grade: Option<f64>,
}

impl From<Grade> for GradeRow {
    fn from(grade: Grade) -> Self {
        Self {
            module: resolve_reference(&grade.module).to_string(),
            ca_mark: grade.ca_mark,
            exam_mark: grade.exam_mark,
            total_grade: grade.total_grade,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentDetail {
    pub student: StudentRow,
    /// Distinct module codes the student holds grade records for,
    /// first-seen order.
    pub registered_modules: Vec<String>,
    pub grades: Vec<GradeRow>,
}

/// Student detail: the student record and their grade rows are required
/// and fetched concurrently. An upstream 404 on the student is the view's
/// `not_found`; any other required failure is `error`.
pub async fn student_detail<A: RecordsApi + ?Sized>(
    api: &A,
    student_id: &str,
) -> ViewState<StudentDetail> {
    ViewState::from_result(load_student_detail(api, student_id).await)
}

async fn load_student_detail<A: RecordsApi + ?Sized>(
    api: &A,
    student_id: &str,
) -> Result<StudentDetail> {
    let (student, grades) = tokio::try_join!(
        async {
            api.get_student(student_id)
                .await
                .map_err(|e| missing_as_not_found(e, "student"))
        },
        api.list_grades(Some(student_id), None)
    )?;
    Ok(StudentDetail {
        student: StudentRow::from(student),
        registered_modules: distinct_ids(grades.iter().map(|g| g.module.as_str())),
        grades: grades.into_iter().map(GradeRow::from).collect(),
    })
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct StudentForm {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    /// Bare cohort id selected in the form; selection is mandatory.
    pub cohort: String,
}

pub async fn create_student<A: RecordsApi + ?Sized>(
    api: &A,
    form: &StudentForm,
) -> Result<Redirect> {
    let cohort = required(&form.cohort, "Cohort")?;
    let new = NewStudent {
        student_id: required(&form.student_id, "Student ID")?,
        first_name: required(&form.first_name, "First Name")?,
        last_name: required(&form.last_name, "Last Name")?,
        email: form
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(String::from),
        cohort: api.reference(Resource::Cohort, &cohort),
    };
    let created = api.create_student(&new).await?;
    info!(student = %created.student_id, "student created");
    Ok(Redirect::to(format!("/student/{}", created.student_id)))
}

/// Data the assign-module form needs: the student plus the module options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignModuleView {
    pub student: StudentRow,
    pub modules: Vec<ModuleRow>,
}

pub async fn assign_module_view<A: RecordsApi + ?Sized>(
    api: &A,
    student_id: &str,
) -> ViewState<AssignModuleView> {
    ViewState::from_result(load_assign_module_view(api, student_id).await)
}

async fn load_assign_module_view<A: RecordsApi + ?Sized>(
    api: &A,
    student_id: &str,
) -> Result<AssignModuleView> {
    let (student, modules) = tokio::try_join!(
        async {
            api.get_student(student_id)
                .await
                .map_err(|e| missing_as_not_found(e, "student"))
        },
        api.list_modules(None)
    )?;
    Ok(AssignModuleView {
        student: StudentRow::from(student),
        modules: modules.into_iter().map(ModuleRow::from).collect(),
    })
}

/// Assign a module to a student: creates a grade record with zero marks
/// against the student's own cohort. Whether an existing student+module
/// pair is rejected or upserted is the API's decision; its answer is
/// surfaced unchanged.
pub async fn assign_module<A: RecordsApi + ?Sized>(
    api: &A,
    student_id: &str,
    module_code: &str,
) -> Result<Redirect> {
    let module_code = required(module_code, "Module")?;
    let student = api.get_student(student_id).await?;
    let new = NewGrade {
        student: api.reference(Resource::Student, &student.student_id),
        module: api.reference(Resource::Module, &module_code),
        cohort: student.cohort.clone(),
        ca_mark: 0,
        exam_mark: 0,
    };
    api.create_grade(&new).await?;
    info!(student = %student.student_id, module = %module_code, "module assigned");
    Ok(Redirect::to(format!("/student/{}", student.student_id)))
}

/// Data the set-grade form needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetGradeView {
    pub student: StudentRow,
    pub module_code: String,
}

pub async fn set_grade_view<A: RecordsApi + ?Sized>(
    api: &A,
    student_id: &str,
    module_code: &str,
) -> ViewState<SetGradeView> {
    ViewState::from_result(async {
        let student = api
            .get_student(student_id)
            .await
            .map_err(|e| missing_as_not_found(e, "student"))?;
        Ok(SetGradeView {
            student: StudentRow::from(student),
            module_code: module_code.to_string(),
        })
    }
    .await)
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct GradeForm {
    pub ca_mark: i32,
    pub exam_mark: i32,
}

/// Set marks for an existing student+module pair. The total grade stays
/// with the API; this layer never computes it.
pub async fn set_grade<A: RecordsApi + ?Sized>(
    api: &A,
    student_id: &str,
    module_code: &str,
    form: &GradeForm,
) -> Result<Redirect> {
    let module_code = required(module_code, "Module")?;
    let student = api.get_student(student_id).await?;
    let new = NewGrade {
        student: api.reference(Resource::Student, &student.student_id),
        module: api.reference(Resource::Module, &module_code),
        cohort: student.cohort.clone(),
        ca_mark: mark_in_range(form.ca_mark, "CA Mark")?,
        exam_mark: mark_in_range(form.exam_mark, "Exam Mark")?,
    };
    api.create_grade(&new).await?;
    info!(student = %student.student_id, module = %module_code, "grade set");
    Ok(Redirect::to(format!("/student/{}", student.student_id)))
}
