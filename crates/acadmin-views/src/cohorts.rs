//! Cohort views: list, detail, create.

use serde::Serialize;
use tracing::info;

use acadmin_client::models::{Cohort, NewCohort, Resource};
use acadmin_client::RecordsApi;
use acadmin_common::{resolve_reference, Result};

use crate::aggregate::require_match;
use crate::forms::{required, year_in_range};
use crate::state::{Redirect, ViewState};
use crate::students::StudentRow;

/// Cohort record with its degree reference resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortRow {
    pub id: String,
    pub name: Option<String>,
    pub year: i32,
    pub degree: String,
}

impl From<Cohort> for CohortRow {
    fn from(cohort: Cohort) -> Self {
        Self {
            degree: resolve_reference(&cohort.degree).to_string(),
            id: cohort.id,
            name: cohort.name,
            year: cohort.year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortDetail {
    pub cohort: CohortRow,
    pub students: Vec<StudentRow>,
}

pub async fn all_cohorts<A: RecordsApi + ?Sized>(api: &A) -> ViewState<Vec<CohortRow>> {
    ViewState::from_result(
        api.list_cohorts(None)
            .await
            .map(|cohorts| cohorts.into_iter().map(CohortRow::from).collect()),
    )
}

/// Cohort detail: the cohort collection and the cohort's students are
/// fetched concurrently and both are required. The route id missing from
/// the collection is `not_found`, independent of how many students the
/// other fetch returned.
pub async fn cohort_detail<A: RecordsApi + ?Sized>(
    api: &A,
    cohort_id: &str,
) -> ViewState<CohortDetail> {
    ViewState::from_result(load_cohort_detail(api, cohort_id).await)
}

async fn load_cohort_detail<A: RecordsApi + ?Sized>(
    api: &A,
    cohort_id: &str,
) -> Result<CohortDetail> {
    let (cohorts, students) =
        tokio::try_join!(api.list_cohorts(None), api.list_students(Some(cohort_id)))?;
    let cohort = require_match(cohorts, cohort_id, |c| c.id == cohort_id)?;
    Ok(CohortDetail {
        cohort: CohortRow::from(cohort),
        students: students.into_iter().map(StudentRow::from).collect(),
    })
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct CohortForm {
    pub id: String,
    pub year: i32,
    /// Bare degree shortcode selected in the form.
    pub degree: String,
}

pub async fn create_cohort<A: RecordsApi + ?Sized>(api: &A, form: &CohortForm) -> Result<Redirect> {
    let degree = required(&form.degree, "Degree")?;
    let new = NewCohort {
        id: required(&form.id, "Cohort ID")?,
        year: year_in_range(form.year)?,
        degree: api.reference(Resource::Degree, &degree),
    };
    let created = api.create_cohort(&new).await?;
    info!(cohort = %created.id, "cohort created");
    Ok(Redirect::to(format!("/degree/{degree}")))
}
