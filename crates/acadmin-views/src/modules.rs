//! Module views: list, detail, delivered-to, create.

use serde::Serialize;
use tracing::info;

use acadmin_client::models::{Module, NewModule, Resource};
use acadmin_client::RecordsApi;
use acadmin_common::Result;

use crate::aggregate::{distinct_ids, fan_out, missing_as_not_found};
use crate::forms::required;
use crate::state::{Redirect, ViewState};
use crate::students::StudentRow;

/// Module record with its cohort references resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleRow {
    pub code: String,
    pub full_name: String,
    pub ca_split: i32,
    pub delivered_to: Vec<String>,
}

impl From<Module> for ModuleRow {
    fn from(module: Module) -> Self {
        Self {
            delivered_to: distinct_ids(module.delivered_to.iter().map(String::as_str)),
            code: module.code,
            full_name: module.full_name,
            ca_split: module.ca_split,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleDetail {
    pub module: ModuleRow,
    pub students: Vec<StudentRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModulesDelivered {
    pub cohort_id: String,
    pub modules: Vec<ModuleRow>,
}

pub async fn all_modules<A: RecordsApi + ?Sized>(api: &A) -> ViewState<Vec<ModuleRow>> {
    ViewState::from_result(
        api.list_modules(None)
            .await
            .map(|modules| modules.into_iter().map(ModuleRow::from).collect()),
    )
}

/// Module detail with its enrolled students.
///
/// The module record and the module's grade rows are required and fetched
/// concurrently; the grade rows then fan out into one student fetch per
/// distinct referenced id (first-seen order). A single failed student
/// fetch drops that row, it does not fail the view.
pub async fn module_detail<A: RecordsApi + ?Sized>(api: &A, code: &str) -> ViewState<ModuleDetail> {
    ViewState::from_result(load_module_detail(api, code).await)
}

async fn load_module_detail<A: RecordsApi + ?Sized>(api: &A, code: &str) -> Result<ModuleDetail> {
    let (module, grades) = tokio::try_join!(
        async {
            api.get_module(code)
                .await
                .map_err(|e| missing_as_not_found(e, "module"))
        },
        api.list_grades(None, Some(code))
    )?;

    let student_ids = distinct_ids(grades.iter().map(|g| g.student.as_str()));
    let students = fan_out(&student_ids, |id| async move {
        api.get_student(&id).await
    })
    .await;

    Ok(ModuleDetail {
        module: ModuleRow::from(module),
        students: students.into_iter().map(StudentRow::from).collect(),
    })
}

pub async fn modules_delivered<A: RecordsApi + ?Sized>(
    api: &A,
    cohort_id: &str,
) -> ViewState<ModulesDelivered> {
    ViewState::from_result(
        api.list_modules(Some(cohort_id))
            .await
            .map(|modules| ModulesDelivered {
                cohort_id: cohort_id.to_string(),
                modules: modules.into_iter().map(ModuleRow::from).collect(),
            }),
    )
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ModuleForm {
    pub code: String,
    pub full_name: String,
    pub ca_split: i32,
    /// Comma-separated cohort ids, expanded to hyperlinks before POSTing.
    pub delivered_to: String,
}

pub async fn create_module<A: RecordsApi + ?Sized>(api: &A, form: &ModuleForm) -> Result<Redirect> {
    let delivered_to: Vec<String> = form
        .delivered_to
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| api.reference(Resource::Cohort, id))
        .collect();
    let new = NewModule {
        code: required(&form.code, "Module Code")?,
        full_name: required(&form.full_name, "Full Name")?,
        ca_split: form.ca_split,
        delivered_to,
    };
    let created = api.create_module(&new).await?;
    info!(module = %created.code, "module created");
    Ok(Redirect::to("/modules"))
}
