//! Command-line interface for the `folio` portfolio manager.

use std::process::ExitCode;

use folio::cli::{CommandContext, args, commands};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = args::parse_cli();

    let mut ctx = match CommandContext::load_for(&cli.command) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    commands::run(cli.command, &mut ctx)
}
