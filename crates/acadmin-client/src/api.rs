//! Common interface over the records API.
//!
//! Views are generic over this trait so they can run against the HTTP
//! client in production and an in-memory double in tests.

use async_trait::async_trait;

use acadmin_common::Result;

use crate::models::{
    Cohort, Degree, Grade, Module, NewCohort, NewDegree, NewGrade, NewModule, NewStudent,
    Resource, Student,
};

#[async_trait]
pub trait RecordsApi: Send + Sync {
    async fn list_degrees(&self) -> Result<Vec<Degree>>;
    async fn create_degree(&self, new: &NewDegree) -> Result<Degree>;

    /// List cohorts, optionally filtered to one degree shortcode.
    async fn list_cohorts(&self, degree: Option<&str>) -> Result<Vec<Cohort>>;
    async fn create_cohort(&self, new: &NewCohort) -> Result<Cohort>;

    /// List modules, optionally filtered to those delivered to one cohort.
    async fn list_modules(&self, delivered_to: Option<&str>) -> Result<Vec<Module>>;
    async fn get_module(&self, code: &str) -> Result<Module>;
    async fn create_module(&self, new: &NewModule) -> Result<Module>;

    /// List students, optionally filtered to one cohort id.
    async fn list_students(&self, cohort: Option<&str>) -> Result<Vec<Student>>;
    async fn get_student(&self, student_id: &str) -> Result<Student>;
    async fn create_student(&self, new: &NewStudent) -> Result<Student>;

    /// List grades filtered by student id and/or module code.
    async fn list_grades(&self, student: Option<&str>, module: Option<&str>)
        -> Result<Vec<Grade>>;
    async fn create_grade(&self, new: &NewGrade) -> Result<Grade>;

    /// Absolute hyperlink for a foreign-key field in a create payload.
    fn reference(&self, resource: Resource, id: &str) -> String;
}
