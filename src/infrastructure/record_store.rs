//! Deployment record file
//!
//! Written through a temp file in the target directory and renamed into
//! place, so a reader never sees a half-written record.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use crate::application::DeploymentRecord;

#[derive(Error, Debug)]
#[error("failed to write deployment record {path}: {source}")]
pub struct RecordWriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Write `record` as pretty-printed JSON to `path`, replacing any existing file.
pub fn write_record(path: &Path, record: &DeploymentRecord) -> Result<(), RecordWriteError> {
    write_atomic(path, record).map_err(|source| RecordWriteError {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), status = ?record.status, "deployment record written");
    Ok(())
}

fn write_atomic(path: &Path, record: &DeploymentRecord) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut file, record)?;
    file.write_all(b"\n")?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
