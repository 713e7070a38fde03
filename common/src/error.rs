use std::path::PathBuf;

use thiserror::Error;

/// Failures while patching a single playbook file.
///
/// None of these abort the run; the updater reports the failing file and
/// moves on to the next one.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither `# Change tracking` nor `# Override` was found after the
    /// version declaration, so there is nowhere to put the metadata block.
    /// Reported rather than silently skipped so a partially updated file
    /// does not go unnoticed.
    #[error("no metadata insertion anchor found in {path}")]
    AnchorMissing { path: PathBuf },
}
