#![cfg(test)]
//! Updater scenarios against real files in a temp directory, driving the
//! library run loop directly with no CLI in between.

use std::fs;

use aapkit_common::config::UpdaterConfig;
use aapkit_core::updater::{self, FileStatus};
use tempfile::TempDir;

const FILESYSTEM_PLAYBOOK: &str = r#"---
- name: AIX Filesystem Management
  hosts: aix
  vars:
    playbook_name: "AIX Filesystem Management"
    playbook_version: "1.7"

    # Override these per job
    fs_threshold: 85
"#;

fn config_for(temp: &TempDir, files: &[&str]) -> UpdaterConfig {
    UpdaterConfig {
        playbooks_dir: temp.path().to_path_buf(),
        playbooks: files.iter().map(|f| f.to_string()).collect(),
        target_version: "2.0".to_string(),
    }
}

#[test]
fn updates_existing_files_and_skips_missing_ones() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("aix_filesystem_management.yml");
    fs::write(&target, FILESYSTEM_PLAYBOOK).unwrap();

    let cfg = config_for(
        &temp,
        &["aix_filesystem_management.yml", "aix_cpu_management.yml"],
    );
    let reports = updater::run(&cfg);

    assert_eq!(reports.len(), 2);
    assert!(matches!(reports[0].status, FileStatus::Updated(_)));
    assert!(matches!(reports[1].status, FileStatus::Missing));
    assert_eq!(reports[0].display_name, "Aix Filesystem Management");

    let patched = fs::read_to_string(&target).unwrap();
    assert!(patched.contains(r#"playbook_version: "2.0""#));
    assert!(patched.contains("# AAP Job Information"));
    assert!(patched.contains("Automated filesystem monitoring and management"));
    assert!(patched.contains("# Override these per job"));
    assert!(patched.contains("post_tasks:"));
}

#[test]
fn rerunning_the_full_pass_is_stable() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("aix_filesystem_management.yml");
    fs::write(&target, FILESYSTEM_PLAYBOOK).unwrap();

    let cfg = config_for(&temp, &["aix_filesystem_management.yml"]);

    updater::run(&cfg);
    let once = fs::read_to_string(&target).unwrap();

    let reports = updater::run(&cfg);
    let twice = fs::read_to_string(&target).unwrap();

    assert_eq!(once, twice);
    match &reports[0].status {
        FileStatus::Updated(summary) => {
            assert!(summary.version_updated);
            assert!(!summary.metadata_inserted);
            assert!(!summary.trailer_appended);
            assert!(summary.warnings.is_empty());
        }
        other => panic!("expected an update, got {other:?}"),
    }
}

#[test]
fn default_list_resolves_against_the_configured_directory() {
    let temp = TempDir::new().unwrap();
    let cfg = UpdaterConfig {
        playbooks_dir: temp.path().to_path_buf(),
        ..UpdaterConfig::default()
    };

    let reports = updater::run(&cfg);

    assert_eq!(reports.len(), 5);
    assert!(
        reports
            .iter()
            .all(|report| matches!(report.status, FileStatus::Missing))
    );
}
