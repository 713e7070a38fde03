pub mod inventory;
pub mod update;

use std::path::PathBuf;

use clap::Parser;

/// Arguments for the dynamic inventory binary.
///
/// The flag surface is the inventory contract expected by the
/// orchestration platform; `--list` wins when both flags are given.
#[derive(Parser)]
#[command(name = "aap-inventory")]
#[command(about = "Fortinet dynamic inventory for AAP 2.5.")]
pub struct InventoryArgs {
    /// List all groups and hosts
    #[arg(long)]
    pub list: bool,

    /// Get variables for a specific host
    #[arg(long, value_name = "NAME")]
    pub host: Option<String>,
}

impl InventoryArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Arguments for the playbook updater binary.
#[derive(Parser)]
#[command(name = "aap-playbook-update")]
#[command(about = "Patch the AIX management playbooks with AAP credential injection.")]
pub struct UpdateArgs {
    /// Directory containing the playbooks to patch
    #[arg(long, default_value = "playbooks")]
    pub dir: PathBuf,

    /// Version written into each playbook's version declaration
    #[arg(long, default_value = "2.0")]
    pub version: String,
}

impl UpdateArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
