//! Implementation of the `folio settings` subcommands.

use std::process::ExitCode;

use folio_store::{Settings, update_settings};

use crate::cli::{
    args::{OutputArgs, SettingsAction, SettingsSetCommand},
    context::CommandContext,
    output::{print_json, report_outcome},
};

/// Dispatches a settings action.
pub fn run(ctx: &mut CommandContext, action: SettingsAction) -> ExitCode {
    match action {
        SettingsAction::Show(output) => show(ctx, &output),
        SettingsAction::Set(cmd) => set(ctx, &cmd),
    }
}

/// Shows the site settings.
fn show(ctx: &mut CommandContext, output: &OutputArgs) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let settings = store.settings();

    if output.json {
        return print_json(settings);
    }

    println!("site title:  {}", settings.site_title);
    println!("page size:   {}", settings.page_size);
    println!("maintenance: {}", settings.maintenance);
    ExitCode::SUCCESS
}

/// Updates the site settings. Unset flags keep the stored values.
fn set(ctx: &mut CommandContext, cmd: &SettingsSetCommand) -> ExitCode {
    let session = ctx.session(cmd.session.as_viewer);
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };

    let current = store.settings().clone();
    let settings = Settings {
        site_title: cmd.site_title.clone().unwrap_or(current.site_title),
        page_size: cmd.page_size.unwrap_or(current.page_size),
        maintenance: cmd.maintenance.unwrap_or(current.maintenance),
    };

    let outcome = update_settings(store, &session, settings);
    report_outcome(&outcome, |settings| {
        format!(
            "Updated settings (page size {}, maintenance {})",
            settings.page_size, settings.maintenance
        )
    })
}
