//! Implementation of the `folio contact` subcommands.

use std::process::ExitCode;

use folio_document::Document;
use folio_store::{Contact, update_contact};

use super::shared::{document_json, resolve_content};
use crate::cli::{
    args::{ContactAction, ContactSetCommand, OutputArgs},
    context::CommandContext,
    output::{print_json, report_outcome},
};

/// Dispatches a contact record action.
pub fn run(ctx: &mut CommandContext, action: ContactAction) -> ExitCode {
    match action {
        ContactAction::Show(output) => show(ctx, &output),
        ContactAction::Set(cmd) => set(ctx, &cmd),
    }
}

/// Shows the contact record.
fn show(ctx: &mut CommandContext, output: &OutputArgs) -> ExitCode {
    let store = match ctx.store() {
        Ok(store) => store,
        Err(code) => return code,
    };
    let contact = store.contact();

    if output.json {
        return print_json(contact);
    }

    if contact.email.is_empty() {
        println!("Contact record is empty.");
        return ExitCode::SUCCESS;
    }

    println!("email:    {}", contact.email);
    if let Some(phone) = &contact.phone {
        println!("phone:    {phone}");
    }
    if let Some(url) = &contact.github {
        println!("github:   {url}");
    }
    if let Some(url) = &contact.linkedin {
        println!("linkedin: {url}");
    }
    if let Some(url) = &contact.twitter {
        println!("twitter:  {url}");
    }
    ExitCode::SUCCESS
}

/// Replaces the contact record.
fn set(ctx: &mut CommandContext, cmd: &ContactSetCommand) -> ExitCode {
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

    let outcome = update_contact(
        store,
        &session,
        Contact {
            email: cmd.email.clone(),
            phone: cmd.phone.clone(),
            github: cmd.github.clone(),
            linkedin: cmd.linkedin.clone(),
            twitter: cmd.twitter.clone(),
            content,
        },
    );
    report_outcome(&outcome, |contact| {
        format!("Updated contact record ({})", contact.email)
    })
}
