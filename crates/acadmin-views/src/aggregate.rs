//! Dependent-fetch aggregation.
//!
//! Two patterns cover every joined view: join-then-filter (fetch a
//! collection, require the one record matching a route key) and fan-out
//! (resolve the distinct referenced identifiers out of one result set,
//! then fetch each referenced resource concurrently, dropping individual
//! failures instead of aborting the aggregation).

use std::collections::HashSet;
use std::future::Future;

use futures::future::join_all;
use tracing::warn;

use acadmin_common::{resolve_reference, AdminError, Result};

/// Locate the single record matching a key obtained from the route.
/// A miss is a `NotFound`, kept distinct from any network failure.
pub fn require_match<T>(items: Vec<T>, key: &str, pred: impl FnMut(&T) -> bool) -> Result<T> {
    items
        .into_iter()
        .find(pred)
        .ok_or_else(|| AdminError::NotFound(key.to_string()))
}

/// Resolve hyperlink references to bare identifiers, deduplicated in
/// first-seen order. Empty references are skipped.
pub fn distinct_ids<'a>(links: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for link in links {
        let id = resolve_reference(link);
        if !id.is_empty() && seen.insert(id.to_string()) {
            ids.push(id.to_string());
        }
    }
    ids
}

/// Fetch one resource per identifier, concurrently. A failed item is
/// dropped from the result set and logged as recoverable; the aggregation
/// itself still succeeds.
pub async fn fan_out<T, F, Fut>(ids: &[String], fetch: F) -> Vec<T>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let results = join_all(ids.iter().cloned().map(fetch)).await;
    results
        .into_iter()
        .zip(ids)
        .filter_map(|(res, id)| match res {
            Ok(item) => Some(item),
            Err(err) => {
                warn!(%id, error = %err, "dropping item after fan-out fetch failure");
                None
            }
        })
        .collect()
}

/// Map an upstream 404 on a route's primary resource to the view's
/// `not_found` state instead of a page-level error.
pub fn missing_as_not_found(err: AdminError, what: &str) -> AdminError {
    match err {
        AdminError::Api { status: 404, .. } => AdminError::NotFound(what.to_string()),
        other => other,
    }
}
