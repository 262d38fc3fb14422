// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page assembly: turns catalog records into exactly what the grid and
//! detail views display. Pages borrow from the catalog.

use crate::config::{ContactLink, SiteConfig};
use crate::i18n::Localizer;
use crate::types::{Category, CategoryFilter, Project};
use crate::view::links::{
    resolve_call_to_action, resolve_embed, resolve_media, tag_preview, CallToAction, Media,
    TagPreview,
};
use crate::view::ordering::{filter_by_category, find_by_id, sort_by_end_date_descending};
use crate::view::period::format_period;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCard<'a> {
    pub id: &'a str,
    pub category: Category,
    pub category_label: &'static str,
    pub title: &'a str,
    pub summary: &'a str,
    pub period: String,
    pub tags: TagPreview<'a>,
    pub details_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSection<'a> {
    pub title: &'static str,
    pub description: &'static str,
    pub links: &'a [ContactLink],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridPage<'a> {
    pub locale: String,
    pub document_title: String,
    pub heading: &'a str,
    pub subtitle: &'static str,
    /// Filter-bar entries: sentinel first, then each category.
    pub filters: Vec<String>,
    pub active_filter: String,
    pub cards: Vec<GridCard<'a>>,
    /// Set when no card survives the filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
    pub contact: ContactSection<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallToActionView<'a> {
    pub action: CallToAction<'a>,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedSection<'a> {
    pub url: &'a str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPage<'a> {
    pub id: &'a str,
    pub document_title: String,
    pub back_label: &'static str,
    pub category: Category,
    pub category_label: &'static str,
    pub title: &'a str,
    pub about_heading: &'static str,
    pub body: &'a str,
    pub period: String,
    pub technologies_heading: &'static str,
    pub technologies: &'a [String],
    pub call_to_action: CallToActionView<'a>,
    pub media: Media<'a>,
    pub media_alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<EmbedSection<'a>>,
    pub contact: ContactSection<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotFoundPage {
    pub requested_id: String,
    pub document_title: String,
    pub message: &'static str,
}

/// Outcome of a detail-route render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailView<'a> {
    Found(DetailPage<'a>),
    NotFound(NotFoundPage),
}

/// Document title shown outside a detail page.
pub fn default_document_title(owner: &str, loc: &Localizer) -> String {
    format!("{} | {}", owner, loc.t("page.default_suffix"))
}

pub fn contact_section<'a>(config: &'a SiteConfig, loc: &Localizer) -> ContactSection<'a> {
    ContactSection {
        title: loc.t("contact.title"),
        description: loc.t("contact.description"),
        links: &config.contact,
    }
}

pub fn grid_card<'a>(project: &'a Project, config: &SiteConfig, loc: &Localizer) -> GridCard<'a> {
    GridCard {
        id: &project.id,
        category: project.category,
        category_label: project.category.label(loc.lang()),
        title: project.localized_title(loc.tag()),
        summary: project.localized_summary(loc.tag()),
        period: format_period(&project.start_period, &project.end_period),
        tags: tag_preview(&project.technologies, config.tag_preview_limit),
        details_label: loc.t("grid.details"),
    }
}

/// Sort the whole sequence, then filter, then build one card per record.
pub fn build_grid<'a, I>(
    projects: I,
    filter: &CategoryFilter,
    config: &'a SiteConfig,
    loc: &Localizer,
) -> GridPage<'a>
where
    I: IntoIterator<Item = &'a Project>,
{
    let sorted = sort_by_end_date_descending(projects);
    let visible = filter_by_category(sorted, filter);
    if let CategoryFilter::Unmatched(raw) = filter {
        tracing::warn!(filter = %raw, "unknown category filter, grid is empty");
    }

    let mut filters = vec![CategoryFilter::All.label(loc.lang())];
    filters.extend(Category::all().iter().map(|c| c.label(loc.lang()).to_string()));

    let cards: Vec<GridCard<'a>> = visible
        .into_iter()
        .map(|p| grid_card(p, config, loc))
        .collect();

    GridPage {
        locale: loc.tag().to_string(),
        document_title: default_document_title(&config.owner, loc),
        heading: &config.owner,
        subtitle: loc.t("grid.subtitle"),
        filters,
        active_filter: filter.label(loc.lang()),
        empty_message: cards.is_empty().then(|| loc.t("grid.empty")),
        cards,
        contact: contact_section(config, loc),
    }
}

pub fn detail_page<'a>(
    project: &'a Project,
    config: &'a SiteConfig,
    loc: &Localizer,
) -> DetailPage<'a> {
    let title = project.localized_title(loc.tag());
    let action = resolve_call_to_action(project);
    let media = resolve_media(project, &config.placeholder_image);
    DetailPage {
        id: &project.id,
        document_title: format!("{} | {}", title, config.owner),
        back_label: loc.t("detail.back"),
        category: project.category,
        category_label: project.category.label(loc.lang()),
        title,
        about_heading: loc.t("detail.about"),
        body: project.localized_body(loc.tag()),
        period: format_period(&project.start_period, &project.end_period),
        technologies_heading: loc.t("detail.technologies"),
        technologies: &project.technologies,
        call_to_action: CallToActionView {
            action,
            label: loc.t(action.label_key()),
        },
        media_alt: media_alt(&media, title, loc),
        media,
        embed: resolve_embed(project).map(|url| EmbedSection {
            url,
            title: loc.t("detail.embed_title"),
        }),
        contact: contact_section(config, loc),
    }
}

/// Alt text for the media slot: "Video de …" for videos, the bare title for
/// the placeholder image.
fn media_alt(media: &Media<'_>, title: &str, loc: &Localizer) -> String {
    match media {
        Media::HostedVideo { .. } | Media::DirectVideo { .. } => {
            format!("{} {}", loc.t("detail.video_of"), title)
        }
        Media::Placeholder { .. } => title.to_string(),
    }
}

/// Look `id` up and render either the detail page or the not-found page.
pub fn build_detail<'a, I>(
    projects: I,
    id: &str,
    config: &'a SiteConfig,
    loc: &Localizer,
) -> DetailView<'a>
where
    I: IntoIterator<Item = &'a Project>,
{
    match find_by_id(projects, id) {
        Some(project) => DetailView::Found(detail_page(project, config, loc)),
        None => {
            tracing::debug!(id, "project not found");
            DetailView::NotFound(NotFoundPage {
                requested_id: id.to_string(),
                document_title: default_document_title(&config.owner, loc),
                message: loc.t("detail.not_found"),
            })
        }
    }
}
