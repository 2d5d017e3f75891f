//! Append-only log of every raw source inspected in a batch.
//!
//! One `-- <name> --` stanza per procedure, truncated at the start of each
//! run. When a verdict needs to be replayed, this file holds exactly the
//! text the checker saw.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Cannot open audit log at '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Write to audit log '{}' failed: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The audit sink for one batch run.
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
    file: File,
}

impl AuditLog {
    /// Opens the audit log for a new run, truncating any previous content.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| AuditError::Open {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, file })
    }

    /// Appends one procedure stanza: `-- <name> --`, the raw source, a blank line.
    pub fn record(&mut self, name: &str, source: &str) -> Result<(), AuditError> {
        tracing::trace!(procedure = name, bytes = source.len(), "recording audit stanza");
        write!(self.file, "-- {name} --\n{source}\n\n").map_err(|err| AuditError::Write {
            path: self.path.clone(),
            source: err,
        })
    }

    /// The path this log writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
