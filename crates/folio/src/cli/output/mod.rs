//! Rendering and JSON serialization for CLI output.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use folio_search::{Decoration, DecorationStyle};
use folio_store::{ActionOutcome, FieldErrors, Project};
use serde::Serialize;

/// Serializes a value as pretty JSON to stdout.
pub fn print_json<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to serialize JSON: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Builds the standard project listing table.
pub fn project_table(projects: &[Project]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Title", "Slug", "Featured", "Updated"]);
    for project in projects {
        table.add_row(vec![
            Cell::new(&project.title),
            Cell::new(&project.slug),
            Cell::new(if project.featured { "yes" } else { "" }),
            Cell::new(project.updated_at.format("%Y-%m-%d").to_string()),
        ]);
    }
    table
}

/// Prints field-scoped validation errors to stderr.
pub fn print_field_errors(errors: &FieldErrors) {
    eprintln!("error: invalid input:");
    for (field, messages) in errors {
        for message in messages {
            eprintln!("  {field}: {message}");
        }
    }
}

/// Reports an action outcome, printing the success line or the failure.
pub fn report_outcome<T, F>(outcome: &ActionOutcome<T>, on_success: F) -> ExitCode
where
    F: FnOnce(&T) -> String,
{
    match outcome {
        ActionOutcome::Data(value) => {
            println!("{}", on_success(value));
            ExitCode::SUCCESS
        }
        ActionOutcome::Invalid(errors) => {
            print_field_errors(errors);
            ExitCode::FAILURE
        }
        ActionOutcome::Failed(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Width of context shown on each side of a match excerpt.
const EXCERPT_RADIUS: usize = 30;

/// Renders one decorated match as a single listing line.
///
/// The match itself is wrapped in brackets, with up to [`EXCERPT_RADIUS`]
/// characters of context on each side. The selected match gets a `>`
/// marker and double brackets.
pub fn match_line(index: usize, flat: &str, decoration: &Decoration) -> String {
    let chars: Vec<char> = flat.chars().collect();
    let start = decoration.range.start;
    let end = decoration.range.end.min(chars.len());

    let before_start = start.saturating_sub(EXCERPT_RADIUS);
    let after_end = (end + EXCERPT_RADIUS).min(chars.len());

    let before: String = chars[before_start..start].iter().collect();
    let matched: String = chars[start..end].iter().collect();
    let after: String = chars[end..after_end].iter().collect();

    let ellipsis_before = if before_start > 0 { "…" } else { "" };
    let ellipsis_after = if after_end < chars.len() { "…" } else { "" };

    match decoration.style {
        DecorationStyle::Selected => format!(
            "> {index:3}  {ellipsis_before}{before}[[{matched}]]{after}{ellipsis_after}"
        ),
        DecorationStyle::Match => {
            format!("  {index:3}  {ellipsis_before}{before}[{matched}]{after}{ellipsis_after}")
        }
    }
}
