//! CLI argument definitions and dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::target::TemplateTarget;

pub mod list;
pub mod render;

/// jfill - fill a template with YAML or JSON data
#[derive(Parser, Debug)]
#[command(name = "jfill")]
#[command(version, about = "Fill a Jinja template with variables from a YAML or JSON file")]
#[command(long_about = r#"
Fill a Jinja template with variables from a YAML or JSON file.

Templates are looked up in the template's own directory (or --altdir), then in
~/templates. Rendered output goes to stdout unless --of is given; all logs and
diagnostics go to stderr.

TEMPLATE FUNCTIONS:
  random_token(n=32)  → n random characters from [a-zA-Z0-9!@#$%^]

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Data file error
  4 - Template error
  5 - Output write error
"#)]
pub struct Cli {
    /// Template file (a bare template name when --altdir is given)
    pub template: String,

    /// YAML or JSON file with the template variables
    #[arg(required_unless_present = "list_templates")]
    pub datafile: Option<PathBuf>,

    /// Template directory to use instead of the template's own directory
    #[arg(long, value_name = "DIR")]
    pub altdir: Option<PathBuf>,

    /// List available templates and exit
    #[arg(long = "lt")]
    pub list_templates: bool,

    /// Write output to FILE instead of stdout
    #[arg(long = "of", value_name = "FILE")]
    pub outfile: Option<PathBuf>,

    /// Append to FILE instead of overwriting it
    #[arg(long)]
    pub append: bool,

    /// Back up an existing FILE to FILE.<timestamp> before writing
    #[arg(long)]
    pub safe: bool,

    /// Per-user template directory searched after the template directory
    #[arg(long, env = "JFILL_USER_TEMPLATES", value_name = "DIR", hide = true)]
    pub user_templates: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the pipeline selected by the parsed arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let target = TemplateTarget::resolve(&cli.template, cli.altdir.as_deref());
    let renderer = target.renderer(cli.user_templates.as_deref());

    if cli.list_templates {
        return list::execute(&renderer);
    }

    render::execute(cli, &target, &renderer)
}
