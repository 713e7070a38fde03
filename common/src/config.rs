use std::path::PathBuf;

/// Settings for one run of the playbook updater.
///
/// The original tooling hardcoded the file list and target version at
/// module level; keeping them in a structure built at startup lets tests
/// point the updater at their own directory.
#[derive(Debug, Clone)]
pub struct UpdaterConfig {
    /// Directory the playbook filenames are resolved against.
    pub playbooks_dir: PathBuf,

    /// Playbooks to patch, in processing order.
    pub playbooks: Vec<String>,

    /// Version string written into each playbook's version declaration.
    pub target_version: String,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            playbooks_dir: PathBuf::from("playbooks"),
            playbooks: vec![
                "aix_cpu_management.yml".to_string(),
                "aix_memory_management.yml".to_string(),
                "aix_filesystem_management.yml".to_string(),
                "aix_print_queue_management.yml".to_string(),
                "aix_service_monitoring.yml".to_string(),
            ],
            target_version: "2.0".to_string(),
        }
    }
}
