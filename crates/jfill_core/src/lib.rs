//! # jfill_core
//!
//! Data loading, template rendering and output writing for jfill.
//!
//! The crate glues three pieces together:
//!
//! - a YAML/JSON data loader producing a string-keyed mapping
//! - a Jinja-style renderer (minijinja) with an ordered template search path
//! - an output writer with append and timestamped-backup support
//!
//! ## Example
//!
//! ```rust,no_run
//! use jfill_core::{load_data, write_output, RendererConfig, TemplateRenderer, WriteOptions};
//! use std::path::Path;
//!
//! let data = load_data(Path::new("vars.yaml")).unwrap();
//!
//! let renderer = TemplateRenderer::new(RendererConfig::for_template_dir("templates"));
//! let text = renderer.render("nginx.conf.j2", &data).unwrap();
//!
//! write_output(Path::new("out/nginx.conf"), &text, &WriteOptions::new().safe_backup(true)).unwrap();
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod renderer;
pub mod token;
pub mod writer;

pub use config::RendererConfig;
pub use data::{load_data, DataMap};
pub use error::{FillError, FillResult};
pub use renderer::TemplateRenderer;
pub use token::{random_token, DEFAULT_TOKEN_LENGTH, TOKEN_ALPHABET};
pub use writer::{backup_path, write_output, WriteMode, WriteOptions, WriteReport};
