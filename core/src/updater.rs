//! # Playbook Update Engine
//!
//! Implements the batch patch pass over the AIX management collection.
//!
//! Each target file is read fully, run through a fixed rule sequence
//! (version bump, metadata-block insertion, post-tasks trailer), and
//! written back in place. A failure on one file is contained and
//! reported; the remaining files are still processed.
//!
//! Writes are plain overwrites. There is no backup and no atomic rename,
//! so concurrent invocations against the same directory are unsafe.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tracing::debug;

use aapkit_common::config::UpdaterConfig;
use aapkit_common::error::UpdateError;

mod templates;

use templates::{AAP_VARIABLES, METADATA_MARKER, POST_TASKS, REASON_TOKEN};

/// Matches a playbook's version declaration line.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"playbook_version: "[0-9.]+""#).unwrap());

/// Captures the span between the version declaration and the next marker
/// comment. The metadata block replaces whatever sits in between.
static ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(playbook_version: "[0-9.]+"\s*\n)(.*?)(# Change tracking|# Override)"#)
        .unwrap()
});

/// Outcome for one listed playbook.
#[derive(Debug)]
pub enum FileStatus {
    /// File rewritten; carries which rules fired.
    Updated(UpdateSummary),
    /// Listed but absent on disk.
    Missing,
    /// Read or write failed.
    Failed(UpdateError),
}

/// Which rules fired while patching one file.
#[derive(Debug, Default)]
pub struct UpdateSummary {
    /// The version declaration was found and now carries the target version.
    pub version_updated: bool,
    pub metadata_inserted: bool,
    pub trailer_appended: bool,
    /// Non-fatal conditions observed while patching, for the caller to report.
    pub warnings: Vec<UpdateError>,
}

/// Report for one playbook, in processing order.
#[derive(Debug)]
pub struct FileReport {
    pub file: String,
    /// Filename turned human-facing: stem, underscores to spaces, title case.
    pub display_name: String,
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Patches every configured playbook, containing per-file failures.
pub fn run(cfg: &UpdaterConfig) -> Vec<FileReport> {
    cfg.playbooks
        .iter()
        .map(|file| {
            let path = cfg.playbooks_dir.join(file);
            let status = if path.exists() {
                match update_file(&path, &cfg.target_version) {
                    Ok(summary) => FileStatus::Updated(summary),
                    Err(err) => FileStatus::Failed(err),
                }
            } else {
                FileStatus::Missing
            };

            FileReport {
                file: file.clone(),
                display_name: display_name(file),
                path,
                status,
            }
        })
        .collect()
}

/// Applies the full rule sequence to one playbook and rewrites it in place.
pub fn update_file(path: &Path, target_version: &str) -> Result<UpdateSummary, UpdateError> {
    let text = fs::read_to_string(path).map_err(|source| UpdateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let reason = default_reason(&path.to_string_lossy());
    let (patched, summary) = apply(&text, path, target_version, reason);

    fs::write(path, &patched).map_err(|source| UpdateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ?summary, "playbook rewritten");
    Ok(summary)
}

/// The rule sequence itself, free of I/O.
fn apply(text: &str, path: &Path, target_version: &str, reason: &str) -> (String, UpdateSummary) {
    let mut summary = UpdateSummary::default();

    // Rule 1: version bump. Re-running substitutes the same text again.
    let replacement = format!(r#"playbook_version: "{target_version}""#);
    summary.version_updated = VERSION_RE.is_match(text);
    let mut out = VERSION_RE
        .replace_all(text, NoExpand(replacement.as_str()))
        .into_owned();

    // Rule 2: metadata block, guarded against double insertion.
    if out.contains(METADATA_MARKER) {
        debug!(path = %path.display(), "metadata block already present");
    } else if ANCHOR_RE.is_match(&out) {
        let block = AAP_VARIABLES.replace(REASON_TOKEN, reason);
        out = ANCHOR_RE
            .replace(&out, |caps: &regex::Captures<'_>| {
                format!("{}{}{}", &caps[1], block, &caps[3])
            })
            .into_owned();
        summary.metadata_inserted = true;
    } else {
        summary.warnings.push(UpdateError::AnchorMissing {
            path: path.to_path_buf(),
        });
    }

    // Rule 3: post-tasks trailer, append-if-absent.
    if !out.contains("post_tasks:") {
        out = format!("{}{}", out.trim_end(), POST_TASKS);
        summary.trailer_appended = true;
    }

    (out, summary)
}

/// Category default for the change reason, keyed on how the AIX team
/// names their playbooks.
pub fn default_reason(file: &str) -> &'static str {
    let lower = file.to_ascii_lowercase();
    if lower.contains("cpu") {
        "Automated CPU monitoring and scaling"
    } else if lower.contains("memory") {
        "Automated memory monitoring and scaling"
    } else if lower.contains("filesystem") {
        "Automated filesystem monitoring and management"
    } else if lower.contains("print") {
        "Automated print queue monitoring and management"
    } else if lower.contains("service") {
        "Automated service monitoring and management"
    } else {
        "Automated AIX system management"
    }
}

/// `aix_cpu_management.yml` becomes `Aix Cpu Management`.
pub fn display_name(file: &str) -> String {
    let stem = file.strip_suffix(".yml").unwrap_or(file);
    stem.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
