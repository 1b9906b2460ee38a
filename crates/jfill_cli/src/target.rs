//! Resolving the template argument into a directory and a template name.

use std::path::{Path, PathBuf};

use jfill_core::{RendererConfig, TemplateRenderer};
use tracing::debug;

/// Where to look for a template and what it is called there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateTarget {
    pub dir: PathBuf,
    pub name: String,
}

impl TemplateTarget {
    /// With `altdir`, `template` is a name inside it. Otherwise the directory
    /// is inferred from the template path.
    pub fn resolve(template: &str, altdir: Option<&Path>) -> Self {
        if let Some(dir) = altdir {
            return Self {
                dir: dir.to_path_buf(),
                name: template.to_string(),
            };
        }

        let path = Path::new(template);
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| template.to_string());

        debug!("Template {:?} resolved to {} in {:?}", template, name, dir);
        Self { dir, name }
    }

    /// Build a renderer searching this target's directory first.
    pub fn renderer(&self, user_templates: Option<&Path>) -> TemplateRenderer {
        let config = RendererConfig::for_template_dir(&self.dir);
        let config = match user_templates {
            Some(dir) => config.with_user_templates(dir),
            None => config,
        };
        TemplateRenderer::new(config)
    }
}
