//! Discovery of the terms (school years) that have courses
//!
//! The unfiltered course listing does not return every course, so terms are
//! found by probing each year of a window around the current one. A probe
//! that fails counts as "no courses that year".

use crate::application::config::TermDiscoveryConfig;
use crate::error::AppError;
use futures::stream::{self, StreamExt};
use std::collections::BTreeSet;
use std::future::Future;
use tracing::debug;

/// Years probed for the given current year, oldest first
#[must_use]
pub fn probe_window(current_year: i32, config: &TermDiscoveryConfig) -> Vec<i32> {
    (current_year - config.years_back..=current_year + config.years_ahead).collect()
}

/// Probes every year of the window and returns the terms found
///
/// At most `config.concurrency` probes are in flight. Each probe returns the
/// number of courses for its year; years with at least one course are kept.
///
/// # Returns
/// Terms as strings, most recent first, or `[current_year]` when none was found
pub async fn discover_terms<F, Fut>(
    current_year: i32,
    config: &TermDiscoveryConfig,
    probe: F,
) -> Vec<String>
where
    F: Fn(i32) -> Fut,
    Fut: Future<Output = Result<usize, AppError>>,
{
    let found: BTreeSet<i32> = stream::iter(probe_window(current_year, config))
        .map(|year| {
            let outcome = probe(year);
            async move { (year, outcome.await) }
        })
        .buffer_unordered(config.concurrency.max(1))
        .filter_map(|(year, outcome)| async move {
            match outcome {
                Ok(count) if count > 0 => {
                    debug!("Term {}: {} courses", year, count);
                    Some(year)
                }
                Ok(_) => None,
                Err(e) => {
                    debug!("Term {} skipped: {}", year, e);
                    None
                }
            }
        })
        .collect()
        .await;

    if found.is_empty() {
        return vec![current_year.to_string()];
    }
    found.iter().rev().map(i32::to_string).collect()
}
