// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sorting, filtering and lookup over project sequences.
//!
//! Every function takes any iterator of `&Project` and returns a fresh
//! `Vec`, so callers can chain them over the catalog or over each other's
//! output without copying records.

use crate::types::{CategoryFilter, Project};
use crate::view::period::month_start;
use std::cmp::Reverse;

/// Most recent `end_period` first. Ties keep their input order; periods that
/// do not parse go last.
pub fn sort_by_end_date_descending<'a, I>(projects: I) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut sorted: Vec<&Project> = projects.into_iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|p| Reverse(month_start(&p.end_period)));
    sorted
}

/// Keep the records the filter matches, in order.
pub fn filter_by_category<'a, I>(projects: I, filter: &CategoryFilter) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    if let CategoryFilter::Unmatched(raw) = filter {
        tracing::debug!(filter = %raw, "category filter names no category");
    }
    projects
        .into_iter()
        .filter(|p| filter.matches(p.category))
        .collect()
}

/// First record with the given id.
pub fn find_by_id<'a, I>(projects: I, id: &str) -> Option<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    projects.into_iter().find(|p| p.id == id)
}
