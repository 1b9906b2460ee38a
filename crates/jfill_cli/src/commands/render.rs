//! Default command: load data, render the template, write or print the result.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use jfill_core::{load_data, write_output, TemplateRenderer, WriteOptions};

use super::Cli;
use crate::target::TemplateTarget;

pub fn execute(cli: &Cli, target: &TemplateTarget, renderer: &TemplateRenderer) -> Result<()> {
    let datafile = cli
        .datafile
        .as_deref()
        .context("A data file is required unless --lt is given")?;

    let data = load_data(datafile)
        .with_context(|| format!("Failed to load data file {}", datafile.display()))?;

    let rendered = renderer
        .render(&target.name, &data)
        .with_context(|| format!("Failed to render template {}", target.name))?;
    debug!("Rendered {} byte(s)", rendered.len());

    match &cli.outfile {
        Some(path) => {
            let options = WriteOptions::new()
                .append(cli.append)
                .safe_backup(cli.safe);
            write_output(path, &rendered, &options)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
        }
        None => {
            if cli.append || cli.safe {
                warn!("--append and --safe only apply together with --of; ignoring");
            }
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
