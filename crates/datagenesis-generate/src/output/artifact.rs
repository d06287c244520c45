use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::info;

use datagenesis_core::Dataset;

use crate::errors::GenerationError;
use crate::output::{ExportFormat, artifact_file_name, encode};

/// An encoded dataset ready to be saved or served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub content: String,
}

impl ExportArtifact {
    pub fn build(
        dataset: &Dataset,
        format: ExportFormat,
        at: DateTime<Utc>,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            file_name: artifact_file_name(format, at),
            content_type: format.content_type(),
            content: encode(dataset, format)?,
        })
    }

    /// Write into `dir` via a temp file and rename. Returns the final path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, GenerationError> {
        let path = dir.join(&self.file_name);
        write_bytes_atomic(&path, self.content.as_bytes())?;
        info!(
            path = %path.display(),
            bytes = self.content.len(),
            content_type = self.content_type,
            "export written"
        );
        Ok(path)
    }
}

fn write_bytes_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
    if let Some(dir) = parent {
        create_dir_all(dir)?;
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    std::fs::rename(&tmp_path, path)?;
    if let Some(dir) = parent {
        sync_dir(dir)?;
    }
    Ok(())
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "export path has no file name")
    })?;
    Ok(path.with_file_name(format!("{}.tmp", file_name.to_string_lossy())))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    OpenOptions::new().read(true).open(path)?.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
