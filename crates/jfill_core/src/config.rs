//! Renderer configuration.

use std::path::PathBuf;

/// Name of the per-user template directory under the home directory.
pub const USER_TEMPLATES_DIR: &str = "templates";

/// Configuration for a [`TemplateRenderer`](crate::TemplateRenderer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RendererConfig {
    /// Directories searched in order when resolving a template name.
    pub search_path: Vec<PathBuf>,
    /// Remove the first newline after a block tag.
    pub trim_blocks: bool,
    /// Strip whitespace from the start of a line up to a block tag.
    pub lstrip_blocks: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            search_path: Vec::new(),
            trim_blocks: true,
            lstrip_blocks: true,
        }
    }
}

impl RendererConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard search path: `dir`, then `<home>/templates` when a home
    /// directory is known.
    pub fn for_template_dir(dir: impl Into<PathBuf>) -> Self {
        let config = Self::new().with_dir(dir);
        match user_templates_dir() {
            Some(user_dir) => config.with_dir(user_dir),
            None => config,
        }
    }

    /// Append a directory to the search path.
    pub fn with_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_path.push(dir.into());
        self
    }

    /// Replace everything after the primary template directory with `dir`.
    pub fn with_user_templates(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_path.truncate(1);
        self.search_path.push(dir.into());
        self
    }

    pub fn trim_blocks(mut self, enabled: bool) -> Self {
        self.trim_blocks = enabled;
        self
    }

    pub fn lstrip_blocks(mut self, enabled: bool) -> Self {
        self.lstrip_blocks = enabled;
        self
    }
}

/// `<home>/templates`, or `None` when the home directory is unknown.
pub fn user_templates_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(USER_TEMPLATES_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_whitespace_control() {
        let config = RendererConfig::new();
        assert!(config.trim_blocks);
        assert!(config.lstrip_blocks);
        assert!(config.search_path.is_empty());
    }

    #[test]
    fn test_for_template_dir_puts_dir_first() {
        let config = RendererConfig::for_template_dir("/srv/tpl");
        assert_eq!(config.search_path[0], PathBuf::from("/srv/tpl"));
        if let Some(user_dir) = user_templates_dir() {
            assert_eq!(config.search_path, vec![PathBuf::from("/srv/tpl"), user_dir]);
        }
    }

    #[test]
    fn test_with_user_templates_replaces_fallback() {
        let config = RendererConfig::for_template_dir("/srv/tpl").with_user_templates("/opt/shared");
        assert_eq!(
            config.search_path,
            vec![PathBuf::from("/srv/tpl"), PathBuf::from("/opt/shared")]
        );
    }

    #[test]
    fn test_builder() {
        let config = RendererConfig::new()
            .with_dir("a")
            .with_dir("b")
            .trim_blocks(false)
            .lstrip_blocks(false);
        assert_eq!(config.search_path.len(), 2);
        assert!(!config.trim_blocks);
        assert!(!config.lstrip_blocks);
    }
}
