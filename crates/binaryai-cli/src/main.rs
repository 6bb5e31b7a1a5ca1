mod app;
mod cli;
mod commands;
mod logging;
mod types;
mod util;

use clap::Parser;

// Any error escaping `app::run` is printed as `Error: ...` and exits with 1.
fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = cli::Cli::parse();
    app::run(cli)
}
