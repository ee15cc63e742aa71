//! Records mirrored from the external API.
//!
//! Foreign-key fields arrive as absolute hyperlink strings (HATEOAS style)
//! and are kept verbatim here; resolution to bare identifiers happens at
//! render time via `acadmin_common::resolve_reference`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Degree {
    pub shortcode: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cohort {
    pub id: String,
    /// Optional display name; older records carry only the id.
    #[serde(default)]
    pub name: Option<String>,
    pub year: i32,
    /// Hyperlink to the owning degree.
    pub degree: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub code: String,
    pub full_name: String,
    /// Coursework/exam weighting percentage.
    pub ca_split: i32,
    /// Hyperlinks to the cohorts the module is delivered to.
    pub delivered_to: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Hyperlink to the student's cohort.
    pub cohort: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Hyperlink to the student.
    pub student: String,
    /// Hyperlink to the module.
    pub module: String,
    /// Hyperlink to the cohort.
    pub cohort: String,
    pub ca_mark: i32,
    pub exam_mark: i32,
    /// Computed by the API; absent until it has weighed the marks.
    #[serde(default)]
    pub total_grade: Option<f64>,
}

// === Create payloads ===
//
// Distinct from the read models: foreign keys are already expanded to
// absolute hyperlinks by the caller before POSTing.

#[derive(Debug, Clone, Serialize)]
pub struct NewDegree {
    pub shortcode: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCohort {
    pub id: String,
    pub year: i32,
    pub degree: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewModule {
    pub code: String,
    pub full_name: String,
    pub ca_split: i32,
    pub delivered_to: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewStudent {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub cohort: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewGrade {
    pub student: String,
    pub module: String,
    pub cohort: String,
    pub ca_mark: i32,
    pub exam_mark: i32,
}

/// The five resource collections the API exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Degree,
    Cohort,
    Module,
    Student,
    Grade,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Degree  => "degree",
            Resource::Cohort  => "cohort",
            Resource::Module  => "module",
            Resource::Student => "student",
            Resource::Grade   => "grade",
        }
    }
}
