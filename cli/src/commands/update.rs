use anyhow::Result;

use aapkit_common::config::UpdaterConfig;
use aapkit_core::updater::{self, FileStatus};

use crate::commands::UpdateArgs;
use crate::terminal::print;

/// Runs the batch patch pass and reports one line per playbook.
///
/// Every failure is contained here, so the process exits 0 and partial
/// progress is never reported upstream as a job failure.
pub fn run(args: &UpdateArgs) -> Result<()> {
    let cfg = UpdaterConfig {
        playbooks_dir: args.dir.clone(),
        target_version: args.version.clone(),
        ..UpdaterConfig::default()
    };

    print::header("updating playbooks");

    for report in updater::run(&cfg) {
        match report.status {
            FileStatus::Updated(summary) => {
                print::success(&format!(
                    "Updated {} ({})",
                    report.display_name,
                    report.path.display()
                ));
                for warning in &summary.warnings {
                    print::warn(&warning.to_string());
                }
            }
            FileStatus::Missing => {
                print::warn(&format!("Playbook not found: {}", report.path.display()));
            }
            FileStatus::Failed(err) => {
                print::fail(&format!("Error updating {}: {err}", report.file));
            }
        }
    }

    Ok(())
}
