use aapkit_cli::commands::{UpdateArgs, update};
use aapkit_cli::terminal::logging;

fn main() -> anyhow::Result<()> {
    let args = UpdateArgs::parse_args();

    logging::init();

    update::run(&args)
}
