//! In-memory [`RecordsApi`] double for tests.
//!
//! Seeded builder-style, records every call it serves, and can be told to
//! fail a given endpoint either at the transport level or with a structured
//! API error (status + JSON detail), mirroring the two failure classes the
//! real client produces.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;

use acadmin_common::{hyperlink, resolve_reference, AdminError, Result};

use crate::api::RecordsApi;
use crate::models::{
    Cohort, Degree, Grade, Module, NewCohort, NewDegree, NewGrade, NewModule, NewStudent,
    Resource, Student,
};

pub const MOCK_BASE: &str = "http://mock.test/api";

#[derive(Default)]
pub struct MockRecordsApi {
    degrees: Mutex<Vec<Degree>>,
    cohorts: Mutex<Vec<Cohort>>,
    modules: Mutex<Vec<Module>>,
    students: Mutex<Vec<Student>>,
    grades: Mutex<Vec<Grade>>,
    /// Endpoint keys that fail as transport errors.
    broken: HashSet<String>,
    /// Endpoint keys that fail as API errors (status, detail body).
    rejections: HashMap<String, (u16, serde_json::Value)>,
    calls: Mutex<Vec<String>>,
}

impl MockRecordsApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_degree(self, shortcode: &str, full_name: &str) -> Self {
        self.degrees.lock().unwrap().push(Degree {
            shortcode: shortcode.to_string(),
            full_name: full_name.to_string(),
        });
        self
    }

    pub fn with_cohort(self, id: &str, year: i32, degree_shortcode: &str) -> Self {
        self.cohorts.lock().unwrap().push(Cohort {
            id: id.to_string(),
            name: None,
            year,
            degree: self.link(Resource::Degree, degree_shortcode),
        });
        self
    }

    pub fn with_module(self, code: &str, full_name: &str, ca_split: i32, cohorts: &[&str]) -> Self {
        self.modules.lock().unwrap().push(Module {
            code: code.to_string(),
            full_name: full_name.to_string(),
            ca_split,
            delivered_to: cohorts
                .iter()
                .map(|id| self.link(Resource::Cohort, id))
                .collect(),
        });
        self
    }

    pub fn with_student(self, student_id: &str, first: &str, last: &str, cohort_id: &str) -> Self {
        self.students.lock().unwrap().push(Student {
            student_id: student_id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: Some(format!("{}@uni.test", student_id.to_lowercase())),
            cohort: self.link(Resource::Cohort, cohort_id),
        });
        self
    }

    pub fn with_grade(
        self,
        student_id: &str,
        module_code: &str,
        cohort_id: &str,
        ca_mark: i32,
        exam_mark: i32,
    ) -> Self {
        self.grades.lock().unwrap().push(Grade {
            student: self.link(Resource::Student, student_id),
            module: self.link(Resource::Module, module_code),
            cohort: self.link(Resource::Cohort, cohort_id),
            ca_mark,
            exam_mark,
            total_grade: None,
        });
        self
    }

    /// Make an endpoint fail as a transport error. Keys are the trait method
    /// name, optionally suffixed with `/<id>` for item fetches
    /// (e.g. `"list_degrees"`, `"get_student/S2"`).
    pub fn broken_endpoint(mut self, key: &str) -> Self {
        self.broken.insert(key.to_string());
        self
    }

    /// Make an endpoint answer with a non-2xx status and JSON detail body.
    pub fn rejecting_endpoint(mut self, key: &str, status: u16, detail: serde_json::Value) -> Self {
        self.rejections.insert(key.to_string(), (status, detail));
        self
    }

    /// Every call served so far, in order, as endpoint keys.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn link(&self, resource: Resource, id: &str) -> String {
        hyperlink::reference(MOCK_BASE, resource.as_str(), id)
    }

    fn record(&self, key: &str) -> Result<()> {
        self.calls.lock().unwrap().push(key.to_string());
        if self.broken.contains(key) {
            return Err(AdminError::Other(anyhow!("mock transport failure for {key}")));
        }
        if let Some((status, detail)) = self.rejections.get(key) {
            return Err(AdminError::Api {
                status: *status,
                status_text: Self::status_text(*status),
                detail: detail.clone(),
            });
        }
        Ok(())
    }

    fn not_found(what: &str) -> AdminError {
        AdminError::Api {
            status: 404,
            status_text: Self::status_text(404),
            detail: serde_json::json!({ "detail": format!("{what} not found") }),
        }
    }

    /// Canonical reason phrase for the status, matching what the real
    /// client reads off the wire.
    fn status_text(status: u16) -> String {
        reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("")
            .to_string()
    }
}

#[async_trait]
impl RecordsApi for MockRecordsApi {
    async fn list_degrees(&self) -> Result<Vec<Degree>> {
        self.record("list_degrees")?;
        Ok(self.degrees.lock().unwrap().clone())
    }

    async fn create_degree(&self, new: &NewDegree) -> Result<Degree> {
        self.record("create_degree")?;
        let degree = Degree {
            shortcode: new.shortcode.clone(),
            full_name: new.full_name.clone(),
        };
        self.degrees.lock().unwrap().push(degree.clone());
        Ok(degree)
    }

    async fn list_cohorts(&self, degree: Option<&str>) -> Result<Vec<Cohort>> {
        self.record("list_cohorts")?;
        let cohorts = self.cohorts.lock().unwrap();
        Ok(cohorts
            .iter()
            .filter(|c| degree.map_or(true, |d| resolve_reference(&c.degree) == d))
            .cloned()
            .collect())
    }

    async fn create_cohort(&self, new: &NewCohort) -> Result<Cohort> {
        self.record("create_cohort")?;
        let cohort = Cohort {
            id: new.id.clone(),
            name: None,
            year: new.year,
            degree: new.degree.clone(),
        };
        self.cohorts.lock().unwrap().push(cohort.clone());
        Ok(cohort)
    }

    async fn list_modules(&self, delivered_to: Option<&str>) -> Result<Vec<Module>> {
        self.record("list_modules")?;
        let modules = self.modules.lock().unwrap();
        Ok(modules
            .iter()
            .filter(|m| {
                delivered_to.map_or(true, |cohort| {
                    m.delivered_to.iter().any(|link| resolve_reference(link) == cohort)
                })
            })
            .cloned()
            .collect())
    }

    async fn get_module(&self, code: &str) -> Result<Module> {
        self.record(&format!("get_module/{code}"))?;
        self.modules
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.code == code)
            .cloned()
            .ok_or_else(|| Self::not_found("module"))
    }

    async fn create_module(&self, new: &NewModule) -> Result<Module> {
        self.record("create_module")?;
        let module = Module {
            code: new.code.clone(),
            full_name: new.full_name.clone(),
            ca_split: new.ca_split,
            delivered_to: new.delivered_to.clone(),
        };
        self.modules.lock().unwrap().push(module.clone());
        Ok(module)
    }

    async fn list_students(&self, cohort: Option<&str>) -> Result<Vec<Student>> {
        self.record("list_students")?;
        let students = self.students.lock().unwrap();
        Ok(students
            .iter()
            .filter(|s| cohort.map_or(true, |c| resolve_reference(&s.cohort) == c))
            .cloned()
            .collect())
    }

    async fn get_student(&self, student_id: &str) -> Result<Student> {
        self.record(&format!("get_student/{student_id}"))?;
        self.students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.student_id == student_id)
            .cloned()
            .ok_or_else(|| Self::not_found("student"))
    }

    async fn create_student(&self, new: &NewStudent) -> Result<Student> {
        self.record("create_student")?;
        let student = Student {
            student_id: new.student_id.clone(),
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            email: new.email.clone(),
            cohort: new.cohort.clone(),
        };
        self.students.lock().unwrap().push(student.clone());
        Ok(student)
    }

    async fn list_grades(
        &self,
        student: Option<&str>,
        module: Option<&str>,
    ) -> Result<Vec<Grade>> {
        self.record("list_grades")?;
        let grades = self.grades.lock().unwrap();
        Ok(grades
            .iter()
            .filter(|g| student.map_or(true, |s| resolve_reference(&g.student) == s))
            .filter(|g| module.map_or(true, |m| resolve_reference(&g.module) == m))
            .cloned()
            .collect())
    }

    async fn create_grade(&self, new: &NewGrade) -> Result<Grade> {
        self.record("create_grade")?;
        let grade = Grade {
            student: new.student.clone(),
            module: new.module.clone(),
            cohort: new.cohort.clone(),
            ca_mark: new.ca_mark,
            exam_mark: new.exam_mark,
            total_grade: None,
        };
        self.grades.lock().unwrap().push(grade.clone());
        Ok(grade)
    }

    fn reference(&self, resource: Resource, id: &str) -> String {
        self.link(resource, id)
    }
}
