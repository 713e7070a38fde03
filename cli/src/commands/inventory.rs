use anyhow::Result;

use aapkit_core::inventory::{self, source};

use crate::commands::InventoryArgs;

/// Prints the requested view of the inventory as indented JSON.
///
/// Stdout carries nothing but the JSON payload; diagnostics go to the
/// tracing subscriber on stderr.
pub fn run(args: &InventoryArgs) -> Result<()> {
    let records = source::device_records();
    let inv = inventory::build(&records);

    let payload = if args.list {
        serde_json::to_string_pretty(&inv)?
    } else if let Some(host) = &args.host {
        match inv.host_vars(host) {
            Some(vars) => serde_json::to_string_pretty(vars)?,
            None => "{}".to_string(),
        }
    } else {
        serde_json::to_string_pretty(&inv)?
    };

    println!("{payload}");
    Ok(())
}
