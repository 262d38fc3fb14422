// SPDX-License-Identifier: PMPL-1.0-or-later

//! Outbound links, embeds and media for the detail view.

use crate::types::{non_empty, Project};
use serde::Serialize;

/// Hosts whose links are rewritten to their embeddable player form.
const HOSTED_VIDEO_HOSTS: &[&str] = &["youtube.com", "youtu.be"];

/// The one outbound action shown on a project's detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum CallToAction<'a> {
    CaseStudy(&'a str),
    ExternalLink(&'a str),
    /// No link; the page shows the hardware/offline note instead.
    None,
}

impl<'a> CallToAction<'a> {
    pub fn url(&self) -> Option<&'a str> {
        match *self {
            CallToAction::CaseStudy(url) | CallToAction::ExternalLink(url) => Some(url),
            CallToAction::None => None,
        }
    }

    /// Chrome-catalog key for the button label or note.
    pub fn label_key(&self) -> &'static str {
        match self {
            CallToAction::CaseStudy(_) => "cta.case_study",
            CallToAction::ExternalLink(_) => "cta.external",
            CallToAction::None => "cta.offline",
        }
    }
}

/// Case study beats external link; neither gives [`CallToAction::None`].
pub fn resolve_call_to_action(project: &Project) -> CallToAction<'_> {
    if let Some(url) = non_empty(project.case_study_url.as_deref()) {
        return CallToAction::CaseStudy(url);
    }
    if let Some(url) = non_empty(project.external_url.as_deref()) {
        return CallToAction::ExternalLink(url);
    }
    CallToAction::None
}

/// First non-empty document embed source.
pub fn resolve_embed(project: &Project) -> Option<&str> {
    non_empty(project.embed_url.as_deref())
        .or_else(|| non_empty(project.embed_fallback_url.as_deref()))
}

/// What fills the media slot of the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Media<'a> {
    HostedVideo { embed_url: String },
    DirectVideo { src: &'a str },
    Placeholder { image: String },
}

pub fn is_hosted_video(url: &str) -> bool {
    HOSTED_VIDEO_HOSTS.iter().any(|host| url.contains(host))
}

/// Resolve the media slot. `placeholder_pattern` has `{id}` replaced by the
/// project id when there is no video.
pub fn resolve_media<'a>(project: &'a Project, placeholder_pattern: &str) -> Media<'a> {
    match non_empty(project.video_url.as_deref()) {
        Some(url) if is_hosted_video(url) => Media::HostedVideo {
            embed_url: url.replace("watch?v=", "embed/"),
        },
        Some(url) => Media::DirectVideo { src: url },
        None => Media::Placeholder {
            image: placeholder_pattern.replace("{id}", &project.id),
        },
    }
}

/// Leading technologies shown on a card plus the count left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPreview<'a> {
    pub shown: Vec<&'a str>,
    pub hidden: usize,
}

pub fn tag_preview(technologies: &[String], limit: usize) -> TagPreview<'_> {
    let shown: Vec<&str> = technologies.iter().take(limit).map(String::as_str).collect();
    TagPreview {
        hidden: technologies.len() - shown.len(),
        shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn bare() -> Project {
        Project {
            id: "p".to_string(),
            title: "t".to_string(),
            title_alt: None,
            summary: "s".to_string(),
            summary_alt: None,
            body: "b".to_string(),
            body_alt: None,
            start_period: "2025-01".to_string(),
            end_period: "2025-02".to_string(),
            technologies: Vec::new(),
            category: Category::Web,
            external_url: None,
            video_url: None,
            case_study_url: None,
            embed_url: None,
            embed_fallback_url: None,
        }
    }

    #[test]
    fn case_study_wins() {
        let mut p = bare();
        p.case_study_url = Some("https://notes".to_string());
        p.external_url = Some("https://site".to_string());
        assert_eq!(resolve_call_to_action(&p), CallToAction::CaseStudy("https://notes"));
    }

    #[test]
    fn empty_external_is_absent() {
        let mut p = bare();
        p.external_url = Some(String::new());
        assert_eq!(resolve_call_to_action(&p), CallToAction::None);
        assert_eq!(resolve_call_to_action(&p).url(), None);
    }

    #[test]
    fn external_when_no_case_study() {
        let mut p = bare();
        p.case_study_url = Some(" ".to_string());
        p.external_url = Some("https://site".to_string());
        assert_eq!(resolve_call_to_action(&p), CallToAction::ExternalLink("https://site"));
    }

    #[test]
    fn embed_prefers_primary_source() {
        let mut p = bare();
        assert_eq!(resolve_embed(&p), None);
        p.embed_fallback_url = Some("https://slides".to_string());
        assert_eq!(resolve_embed(&p), Some("https://slides"));
        p.embed_url = Some("https://deck".to_string());
        assert_eq!(resolve_embed(&p), Some("https://deck"));
    }

    #[test]
    fn youtube_links_become_embeds() {
        let mut p = bare();
        p.video_url = Some("https://www.youtube.com/watch?v=abc123".to_string());
        assert_eq!(
            resolve_media(&p, "/img/{id}.png"),
            Media::HostedVideo {
                embed_url: "https://www.youtube.com/embed/abc123".to_string()
            }
        );
    }

    #[test]
    fn missing_video_uses_placeholder() {
        let p = bare();
        assert_eq!(
            resolve_media(&p, "/proyectos/{id}.png"),
            Media::Placeholder {
                image: "/proyectos/p.png".to_string()
            }
        );
    }

    #[test]
    fn local_video_passes_through() {
        let mut p = bare();
        p.video_url = Some("/proyectos/demo.mp4".to_string());
        assert_eq!(
            resolve_media(&p, "/proyectos/{id}.png"),
            Media::DirectVideo {
                src: "/proyectos/demo.mp4"
            }
        );
    }

    #[test]
    fn tag_preview_counts_overflow() {
        let techs: Vec<String> = ["a", "b", "c", "d", "e", "a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let preview = tag_preview(&techs, 4);
        assert_eq!(preview.shown, ["a", "b", "c", "d"]);
        assert_eq!(preview.hidden, 2);

        let short = tag_preview(&techs[..2], 4);
        assert_eq!(short.hidden, 0);
    }
}
