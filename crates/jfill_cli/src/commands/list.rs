//! `--lt`: list the templates reachable from the search path.

use std::io;

use anyhow::{Context, Result};
use jfill_core::TemplateRenderer;

pub fn execute(renderer: &TemplateRenderer) -> Result<()> {
    renderer
        .report_templates(&mut io::stderr().lock())
        .context("Failed to list templates")
}
