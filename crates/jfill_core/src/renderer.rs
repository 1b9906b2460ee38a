//! Template lookup and rendering.

use std::collections::BTreeSet;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use minijinja::{Environment, Error, ErrorKind};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::RendererConfig;
use crate::data::DataMap;
use crate::error::{FillError, FillResult};
use crate::token::{random_token, DEFAULT_TOKEN_LENGTH};

/// Renders templates found on a search path against a [`DataMap`].
pub struct TemplateRenderer {
    env: Environment<'static>,
    search_path: Vec<PathBuf>,
}

impl TemplateRenderer {
    /// Create a renderer from an explicit configuration.
    pub fn new(config: RendererConfig) -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(config.trim_blocks);
        env.set_lstrip_blocks(config.lstrip_blocks);

        let loader_path = config.search_path.clone();
        env.set_loader(move |name| load_from_search_path(&loader_path, name));
        env.add_function("random_token", random_token_function);

        debug!("Template search path: {:?}", config.search_path);

        Self {
            env,
            search_path: config.search_path,
        }
    }

    /// Directories consulted, in order, when resolving a template name.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Names of all templates reachable through the search path.
    ///
    /// Names are relative to their search-path directory, use `/` as the
    /// separator, and come back sorted without duplicates.
    pub fn list_templates(&self) -> Vec<String> {
        let mut names = BTreeSet::new();

        for dir in &self.search_path {
            if !dir.is_dir() {
                debug!("Skipping missing template directory {:?}", dir);
                continue;
            }

            for entry in WalkDir::new(dir)
                .min_depth(1)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                if !entry.file_type().is_file() {
                    continue;
                }
                if let Ok(relative) = entry.path().strip_prefix(dir) {
                    names.insert(template_name(relative));
                }
            }
        }

        names.into_iter().collect()
    }

    /// Write the search path and the available template names to `out`.
    pub fn report_templates<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Template search path:")?;
        for dir in &self.search_path {
            writeln!(out, "  {}", dir.display())?;
        }

        let names = self.list_templates();
        writeln!(out, "Available templates:")?;
        if names.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for name in names {
            writeln!(out, "  {}", name)?;
        }
        out.flush()
    }

    /// Render the template `name` against `data`.
    ///
    /// When the template, or a template it includes, cannot be found, the
    /// template listing is written to stderr before the error is returned.
    pub fn render(&self, name: &str, data: &DataMap) -> FillResult<String> {
        self.render_with_diagnostics(name, data, &mut io::stderr().lock())
    }

    /// Same as [`render`](Self::render), with the diagnostic stream supplied
    /// by the caller.
    pub fn render_with_diagnostics<W: Write>(
        &self,
        name: &str,
        data: &DataMap,
        diag: &mut W,
    ) -> FillResult<String> {
        let template = match self.env.get_template(name) {
            Ok(template) => template,
            Err(err) if err.kind() == ErrorKind::TemplateNotFound => {
                self.report_missing(diag);
                return Err(FillError::TemplateNotFound(name.to_string()));
            }
            Err(err) => return Err(err.into()),
        };

        debug!("Rendering template {}", name);
        template.render(data).map_err(|err| {
            // Missing `{% include %}`/`{% extends %}`/`{% import %}` target
            if err.kind() == ErrorKind::TemplateNotFound {
                self.report_missing(diag);
            }
            FillError::Rendering(err)
        })
    }

    fn report_missing<W: Write>(&self, diag: &mut W) {
        if let Err(io_err) = self.report_templates(diag) {
            warn!("Could not write template listing: {}", io_err);
        }
    }

    /// Render an inline template source with the same environment.
    #[cfg(test)]
    fn render_str(&self, source: &str, data: &DataMap) -> FillResult<String> {
        Ok(self.env.render_str(source, data)?)
    }
}

fn random_token_function(length: Option<usize>) -> String {
    random_token(length.unwrap_or(DEFAULT_TOKEN_LENGTH))
}

fn load_from_search_path(search_path: &[PathBuf], name: &str) -> Result<Option<String>, Error> {
    for dir in search_path {
        let Some(path) = safe_join(dir, name) else {
            return Ok(None);
        };
        if !path.is_file() {
            continue;
        }

        debug!("Loading template {} from {:?}", name, path);
        return fs::read_to_string(&path).map(Some).map_err(|err| {
            Error::new(ErrorKind::InvalidOperation, "could not read template").with_source(err)
        });
    }

    Ok(None)
}

/// Join a `/`-separated template name onto `dir`, refusing names that could
/// escape it.
fn safe_join(dir: &Path, name: &str) -> Option<PathBuf> {
    let mut path = dir.to_path_buf();
    for segment in name.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." || segment.contains('\\') {
            return None;
        }
        path.push(segment);
    }
    Some(path)
}

fn template_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
