// SPDX-License-Identifier: PMPL-1.0-or-later

//! `YYYY-MM` work-period handling.

use chrono::NaiveDate;

/// Separator between the two ends of a range.
pub const PERIOD_SEPARATOR: &str = " — ";

/// `YYYY-MM` → `MM/YYYY`. The dash-separated segments are reversed and joined
/// with `/`, so malformed input is reshuffled rather than rejected.
pub fn format_month(period: &str) -> String {
    period.split('-').rev().collect::<Vec<_>>().join("/")
}

/// Human-readable period.
///
/// # Examples
///
/// ```
/// use portfolio_catalog::view::format_period;
/// assert_eq!(format_period("2025-09", "2025-09"), "09/2025");
/// assert_eq!(format_period("2025-04", "2025-08"), "04/2025 — 08/2025");
/// ```
pub fn format_period(start: &str, end: &str) -> String {
    if start == end {
        format_month(start)
    } else {
        format!("{}{}{}", format_month(start), PERIOD_SEPARATOR, format_month(end))
    }
}

/// First day of the month named by `period`, or `None` when it does not parse.
pub fn month_start(period: &str) -> Option<NaiveDate> {
    let (year, month) = period.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}
