//! Output file writing with optional append and timestamped backup.

use std::ffi::OsString;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::error::FillResult;

/// Timestamp suffix used for backup copies, e.g. `20261019-142501`.
const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// How the destination was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// The file did not exist before.
    Created,
    /// An existing file was truncated and replaced.
    Overwritten,
    /// Text was added to the end of an existing file.
    Appended,
}

impl fmt::Display for WriteMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteMode::Created => write!(f, "created"),
            WriteMode::Overwritten => write!(f, "overwrote"),
            WriteMode::Appended => write!(f, "appended to"),
        }
    }
}

/// Options for [`write_output`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteOptions {
    /// Append instead of truncating.
    pub append: bool,
    /// Copy an existing destination to `<path>.<timestamp>` first.
    pub safe_backup: bool,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    pub fn safe_backup(mut self, safe_backup: bool) -> Self {
        self.safe_backup = safe_backup;
        self
    }
}

/// Outcome of a [`write_output`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub path: PathBuf,
    pub mode: WriteMode,
    /// Where the previous content was copied, if a backup was made.
    pub backup: Option<PathBuf>,
}

/// Write `text` to `path`, creating the parent directory if needed.
pub fn write_output(path: &Path, text: &str, options: &WriteOptions) -> FillResult<WriteReport> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let existed = path.exists();

    let backup = if options.safe_backup && existed {
        let target = backup_path(path, &Local::now());
        fs::copy(path, &target)?;
        Some(target)
    } else {
        None
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .append(options.append)
        .truncate(!options.append)
        .open(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()?;

    let mode = match (existed, options.append) {
        (false, _) => WriteMode::Created,
        (true, true) => WriteMode::Appended,
        (true, false) => WriteMode::Overwritten,
    };

    match &backup {
        Some(backup) => info!("Backed up {:?} to {:?}", path, backup),
        None => info!("No backup made of {:?}", path),
    }
    info!("Output {} {:?}", mode, path);

    Ok(WriteReport {
        path: path.to_path_buf(),
        mode,
        backup,
    })
}

/// `<path>.<YYYYmmdd-HHMMSS>` for the given time.
pub fn backup_path(path: &Path, at: &DateTime<Local>) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(at.format(BACKUP_TIMESTAMP_FORMAT).to_string());
    PathBuf::from(name)
}
