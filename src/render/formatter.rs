// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering of grid and detail pages

use crate::view::{
    CallToAction, ContactSection, DetailPage, DetailView, GridCard, GridPage, Media,
    NotFoundPage,
};
use colored::*;
use std::fmt::Write;

pub struct PageFormatter;

impl PageFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn print_grid(&self, page: &GridPage<'_>) {
        print!("{}", self.render_grid(page));
    }

    pub fn print_detail(&self, view: &DetailView<'_>) {
        print!("{}", self.render_detail(view));
    }

    pub fn render_grid(&self, page: &GridPage<'_>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{}", format!("=== {} ===", page.heading).bold().cyan());
        let _ = writeln!(out, "{}", page.subtitle.dimmed());
        let _ = writeln!(out);

        let bar: Vec<String> = page
            .filters
            .iter()
            .map(|label| {
                if *label == page.active_filter {
                    format!("[{}]", label).bold().blue().to_string()
                } else {
                    label.to_string()
                }
            })
            .collect();
        let _ = writeln!(out, "  {}", bar.join("  "));
        if !page.filters.contains(&page.active_filter) {
            let _ = writeln!(out, "  ({})", page.active_filter.yellow());
        }
        let _ = writeln!(out);

        for (i, card) in page.cards.iter().enumerate() {
            self.write_card(&mut out, i + 1, card);
        }
        if let Some(message) = page.empty_message {
            let _ = writeln!(out, "  {}", message.italic().dimmed());
            let _ = writeln!(out);
        }

        self.write_contact(&mut out, &page.contact);
        out
    }

    fn write_card(&self, out: &mut String, position: usize, card: &GridCard<'_>) {
        let _ = writeln!(
            out,
            "{:>3}. {}  {} {}",
            position,
            card.title.bold(),
            format!("[{}]", card.category_label).blue(),
            card.period.dimmed()
        );
        let _ = writeln!(out, "     {}", card.summary);

        let mut tags = card.tags.shown.join(" · ");
        if card.tags.hidden > 0 {
            let _ = write!(tags, "  + {}", card.tags.hidden);
        }
        if !tags.is_empty() {
            let _ = writeln!(out, "     {}", tags.dimmed());
        }
        let _ = writeln!(out, "     {} {}", card.details_label.blue(), card.id);
        let _ = writeln!(out);
    }

    pub fn render_detail(&self, view: &DetailView<'_>) -> String {
        match view {
            DetailView::Found(page) => self.render_found(page),
            DetailView::NotFound(page) => self.render_not_found(page),
        }
    }

    fn render_found(&self, page: &DetailPage<'_>) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "\n{}", page.back_label.blue());
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}",
            page.category_label.to_uppercase().blue().bold()
        );
        let _ = writeln!(out, "{}", page.title.bold().cyan());
        let _ = writeln!(out, "{}", page.period.dimmed());
        let _ = writeln!(out);

        let _ = writeln!(out, "{}", page.about_heading.bold().yellow());
        let _ = writeln!(out, "  {}", page.body);
        let _ = writeln!(out);

        let _ = writeln!(out, "{}", page.technologies_heading.bold().yellow());
        let _ = writeln!(out, "  {}", page.technologies.join(" · "));
        let _ = writeln!(out);

        match page.call_to_action.action {
            CallToAction::CaseStudy(url) | CallToAction::ExternalLink(url) => {
                let _ = writeln!(out, "{}  {}", page.call_to_action.label.bold().green(), url);
            }
            CallToAction::None => {
                let _ = writeln!(out, "{}", page.call_to_action.label.italic().dimmed());
            }
        }
        let _ = writeln!(out);

        let media = match &page.media {
            Media::HostedVideo { embed_url } => format!("▶ {}", embed_url),
            Media::DirectVideo { src } => format!("▶ {}", src),
            Media::Placeholder { image } => format!("▣ {}", image),
        };
        let _ = writeln!(out, "  {}  {}", media, page.media_alt.dimmed());

        if let Some(embed) = &page.embed {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", embed.title.bold().yellow());
            let _ = writeln!(out, "  {}", embed.url);
        }

        self.write_contact(&mut out, &page.contact);
        out
    }

    fn render_not_found(&self, page: &NotFoundPage) -> String {
        format!(
            "\n{}\n  {}\n",
            page.message.bold().red(),
            page.requested_id.dimmed()
        )
    }

    fn write_contact(&self, out: &mut String, contact: &ContactSection<'_>) {
        let _ = writeln!(out, "\n{}", contact.title.bold());
        let _ = writeln!(out, "{}", contact.description.dimmed());
        for link in contact.links {
            let _ = writeln!(out, "  {:<10} {}", link.label, link.url);
        }
    }
}

impl Default for PageFormatter {
    fn default() -> Self {
        Self::new()
    }
}
