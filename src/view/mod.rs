// SPDX-License-Identifier: PMPL-1.0-or-later

//! The catalog view-model.
//!
//! Stateless functions from (projects, locale, category filter) to exactly
//! what the grid and detail views show. Nothing here mutates its input or
//! keeps state between calls; a language switch or filter change is just a
//! fresh call.

mod links;
mod locale;
mod ordering;
mod pages;
mod period;

pub use links::{
    is_hosted_video, resolve_call_to_action, resolve_embed, resolve_media, tag_preview,
    CallToAction, Media, TagPreview,
};
pub use locale::{is_default_locale, resolve_localized_field, DEFAULT_LOCALE_PREFIX};
pub use ordering::{filter_by_category, find_by_id, sort_by_end_date_descending};
pub use pages::{
    build_detail, build_grid, contact_section, default_document_title, detail_page, grid_card,
    CallToActionView, ContactSection, DetailPage, DetailView, EmbedSection, GridCard, GridPage,
    NotFoundPage,
};
pub use period::{format_month, format_period, month_start, PERIOD_SEPARATOR};
