//! Implementation of the `folio edit` subcommands.

use std::{fs, process::ExitCode};

use folio_document::Document;
use folio_search::{Decoration, SearchSession};
use serde::Serialize;

use crate::cli::{
    args::{EditAction, EditSearchCommand},
    context::CommandContext,
    output::{match_line, print_json},
};

/// Dispatches an edit action.
pub fn run(_ctx: &mut CommandContext, action: EditAction) -> ExitCode {
    match action {
        EditAction::Search(cmd) => search(&cmd),
    }
}

/// JSON output for `folio edit search`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSearchOutput {
    /// The search term as given.
    term: String,
    /// Total matches in the document.
    match_count: usize,
    /// Zero-based index of the selected match, if any.
    selected: Option<usize>,
    /// Decorated matches in document order.
    decorations: Vec<Decoration>,
    /// How many matches were replaced, when a replacement ran.
    replaced: Option<usize>,
}

/// Runs find-and-replace over a document JSON file.
fn search(cmd: &EditSearchCommand) -> ExitCode {
    let raw = match fs::read_to_string(&cmd.file) {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("error: failed to read {}: {e}", cmd.file.display());
            return ExitCode::FAILURE;
        }
    };
    let mut doc = match Document::from_json(&raw) {
        Ok(doc) => doc,
        Err(e) => {
            eprintln!("error: {} is not a valid document: {e}", cmd.file.display());
            return ExitCode::FAILURE;
        }
    };

    let mut session = SearchSession::new();
    session.set_term(&cmd.term);
    session.set_literal(!cmd.regex);
    session.set_case_sensitive(cmd.case_sensitive);
    session.refresh(&doc);

    if session.match_count() == 0 {
        if cmd.output.json {
            return print_json(&JsonSearchOutput {
                term: cmd.term.clone(),
                match_count: 0,
                selected: None,
                decorations: Vec::new(),
                replaced: None,
            });
        }
        println!("No matches for '{}'.", cmd.term);
        return ExitCode::SUCCESS;
    }

    // Selection steps forward from the first match, wrapping at the end.
    if let Some(select) = cmd.select {
        for _ in 0..select {
            session.select_next(&doc);
        }
    }

    let mut replaced = None;
    if let Some(replacement) = &cmd.replace {
        session.set_replacement(replacement);
        let count = if cmd.all { session.match_count() } else { 1 };
        let ok = if cmd.all {
            session.replace_all(&mut doc)
        } else {
            session.replace_selected(&mut doc)
        };
        if !ok {
            eprintln!("error: replacement failed; file left unchanged");
            return ExitCode::FAILURE;
        }
        replaced = Some(count);

        let json = match doc.to_json() {
            Ok(json) => json,
            Err(e) => {
                eprintln!("error: failed to serialize document: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = fs::write(&cmd.file, json) {
            eprintln!("error: failed to write {}: {e}", cmd.file.display());
            return ExitCode::FAILURE;
        }
    }

    let flat = doc.flatten();
    let decorations = session.decorations();

    if cmd.output.json {
        return print_json(&JsonSearchOutput {
            term: cmd.term.clone(),
            match_count: session.match_count(),
            selected: (session.match_count() > 0).then(|| session.selected_index()),
            decorations,
            replaced,
        });
    }

    if let Some(count) = replaced {
        println!(
            "Replaced {count} match{} in {}",
            if count == 1 { "" } else { "es" },
            cmd.file.display()
        );
    }

    if decorations.is_empty() {
        if replaced.is_some() {
            println!("No matches remain.");
        }
        return ExitCode::SUCCESS;
    }

    println!(
        "{} match{} for '{}':",
        decorations.len(),
        if decorations.len() == 1 { "" } else { "es" },
        cmd.term
    );
    for (index, decoration) in decorations.iter().enumerate() {
        println!("{}", match_line(index, &flat, decoration));
    }

    ExitCode::SUCCESS
}
