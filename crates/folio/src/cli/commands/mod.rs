//! Command implementations and dispatch.

pub mod about;
pub mod contact;
pub mod edit;
pub mod init;
pub mod project;
pub mod settings;
mod shared;
pub mod status;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &mut CommandContext) -> ExitCode {
    match command {
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Status => status::run(ctx),
        Commands::Project { action } => project::run(ctx, action),
        Commands::About { action } => about::run(ctx, action),
        Commands::Contact { action } => contact::run(ctx, action),
        Commands::Settings { action } => settings::run(ctx, action),
        Commands::Edit { action } => edit::run(ctx, action),
    }
}
