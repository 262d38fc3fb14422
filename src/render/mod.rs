// SPDX-License-Identifier: PMPL-1.0-or-later

//! Page output: colored terminal text or structured JSON/YAML

pub mod formatter;
pub mod output;

use crate::view::{DetailView, GridPage};
use anyhow::Result;

pub use formatter::PageFormatter;
pub use output::OutputFormat;

/// Print a grid page as text, or serialized when `format` is given.
pub fn print_grid(page: &GridPage<'_>, format: Option<OutputFormat>) -> Result<()> {
    match format {
        Some(format) => println!("{}", format.serialize(page)?),
        None => PageFormatter::new().print_grid(page),
    }
    Ok(())
}

/// Print a detail or not-found page as text, or serialized.
pub fn print_detail(view: &DetailView<'_>, format: Option<OutputFormat>) -> Result<()> {
    match format {
        Some(format) => println!("{}", format.serialize(view)?),
        None => PageFormatter::new().print_detail(view),
    }
    Ok(())
}
