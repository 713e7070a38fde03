use aapkit_cli::commands::{InventoryArgs, inventory};
use aapkit_cli::terminal::logging;

fn main() -> anyhow::Result<()> {
    let args = InventoryArgs::parse_args();

    logging::init();

    inventory::run(&args)
}
