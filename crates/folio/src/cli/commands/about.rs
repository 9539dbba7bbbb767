//! Implementation of the `folio about` subcommands.

use std::process::ExitCode;

use folio_document::Document;
use folio_store::{About, update_about};

use super::shared::{document_json, resolve_content};
use crate::cli::{
    args::{AboutAction, AboutSetCommand, OutputArgs},
    context::CommandContext,
    output::{print_json, report_outcome},
};

/// Dispatches an about page action.
pub fn run(ctx: &mut CommandContext, action: AboutAction) -> ExitCode {
    match action {
        AboutAction::Show(output) => show(ctx, &output),
        AboutAction::Set(cmd) => set(ctx, &cmd),
    }
}

/// Shows the about page.
fn show(ctx: &mut CommandContext, output: &OutputArgs) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let about = store.about();

    if output.json {
        return print_json(about);
    }

    if about.title.is_empty() && about.content.is_empty() {
        println!("About page is empty.");
        return ExitCode::SUCCESS;
    }

    println!("{}", about.title);
    match Document::from_json(&about.content) {
        Ok(doc) => {
            let text = doc.flatten();
            if !text.is_empty() {
                println!();
                println!("{text}");
            }
        }
        Err(e) => eprintln!("warning: stored content is not a valid document: {e}"),
    }
    ExitCode::SUCCESS
}

/// Replaces the about page.
fn set(ctx: &mut CommandContext, cmd: &AboutSetCommand) -> ExitCode {
    let content = match resolve_content(cmd.content.as_deref(), cmd.content_file.as_ref()) {
        Ok(Some(content)) => content,
        Ok(None) => match document_json(&Document::empty()) {
            Ok(content) => content,
            Err(code) => return code,
        },
        Err(code) => return code,
    };

    let session = ctx.session(cmd.session.as_viewer);
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };

    let outcome = update_about(
        store,
        &session,
        About {
            title: cmd.title.clone(),
            content,
        },
    );
    report_outcome(&outcome, |about| {
        format!("Updated about page '{}'", about.title)
    })
}
