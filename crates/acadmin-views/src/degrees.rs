//! Degree views: list, detail, create.

use serde::Serialize;
use tracing::info;

use acadmin_client::models::{Degree, NewDegree};
use acadmin_client::RecordsApi;
use acadmin_common::Result;

use crate::aggregate::require_match;
use crate::cohorts::CohortRow;
use crate::forms::required;
use crate::state::{Redirect, ViewState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeDetail {
    pub degree: Degree,
    pub cohorts: Vec<CohortRow>,
}

pub async fn all_degrees<A: RecordsApi + ?Sized>(api: &A) -> ViewState<Vec<Degree>> {
    ViewState::from_result(api.list_degrees().await)
}

/// Degree detail: join-then-filter the degree collection for the route's
/// shortcode, concurrently with the cohorts delivered under it. Both
/// fetches are required; the view only loads once both have settled.
pub async fn degree_detail<A: RecordsApi + ?Sized>(
    api: &A,
    shortcode: &str,
) -> ViewState<DegreeDetail> {
    ViewState::from_result(load_degree_detail(api, shortcode).await)
}

async fn load_degree_detail<A: RecordsApi + ?Sized>(
    api: &A,
    shortcode: &str,
) -> Result<DegreeDetail> {
    let (degrees, cohorts) =
        tokio::try_join!(api.list_degrees(), api.list_cohorts(Some(shortcode)))?;
    let degree = require_match(degrees, shortcode, |d| d.shortcode == shortcode)?;
    Ok(DegreeDetail {
        degree,
        cohorts: cohorts.into_iter().map(CohortRow::from).collect(),
    })
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct DegreeForm {
    pub shortcode: String,
    pub full_name: String,
}

pub async fn create_degree<A: RecordsApi + ?Sized>(
    api: &A,
    form: &DegreeForm,
) -> Result<Redirect> {
    let new = NewDegree {
        shortcode: required(&form.shortcode, "Shortcode")?,
        full_name: required(&form.full_name, "Full Name")?,
    };
    let created = api.create_degree(&new).await?;
    info!(shortcode = %created.shortcode, "degree created");
    Ok(Redirect::to("/degrees"))
}
