//! Implementation of `folio status`.

use std::process::ExitCode;

use folio_config::discover_config_file;

use crate::cli::context::CommandContext;

/// Shows configuration, data file, and content statistics.
pub fn run(ctx: &mut CommandContext) -> ExitCode {
    let cwd = ctx.cwd.clone();

    match discover_config_file(&cwd) {
        Some(path) => {
            println!("Config file:");
            println!("   {}", path.display());
        }
        None => {
            println!("No configuration file found; using defaults.");
            println!("Run 'folio init' to create one.");
        }
    }
    println!();

    println!("Effective configuration:");
    for line in ctx.config.to_toml().lines() {
        println!("   {line}");
    }
    println!();

    let data_exists = ctx.config.data_path.exists();
    println!("Data file:");
    println!(
        "   {} {}",
        ctx.config.data_path.display(),
        if data_exists { "" } else { "(not created yet)" }
    );
    println!();

    if data_exists {
        let store = match ctx.store() {
            Ok(store) => store,
            Err(code) => return code,
        };
        let projects = store.projects();
        let featured = projects.iter().filter(|p| p.featured).count();
        println!("Content:");
        println!("   {} projects ({featured} featured)", projects.len());
        println!(
            "   about page: {}",
            if store.about().title.is_empty() {
                "empty"
            } else {
                "set"
            }
        );
        println!(
            "   contact: {}",
            if store.contact().email.is_empty() {
                "empty"
            } else {
                "set"
            }
        );
        println!();
    }

    let warnings = ctx.config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("   {warning}");
    }

    ExitCode::FAILURE
}
