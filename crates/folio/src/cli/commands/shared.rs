//! Helpers shared across command implementations.

use std::{fs, path::PathBuf, process::ExitCode};

use folio_document::Document;
use folio_store::Store;

/// Resolves `--content` / `--content-file` flags into stored document JSON.
///
/// A content file must hold a valid document tree; plain `--content` text
/// is converted into one, splitting paragraphs on blank lines. Returns
/// `None` when neither flag was given.
pub fn resolve_content(
    content: Option<&str>,
    content_file: Option<&PathBuf>,
) -> Result<Option<String>, ExitCode> {
    if let Some(path) = content_file {
        let raw = fs::read_to_string(path).map_err(|e| {
            eprintln!("error: failed to read {}: {e}", path.display());
            ExitCode::FAILURE
        })?;
        let doc = Document::from_json(&raw).map_err(|e| {
            eprintln!("error: {} is not a valid document: {e}", path.display());
            ExitCode::FAILURE
        })?;
        return document_json(&doc).map(Some);
    }

    if let Some(text) = content {
        let doc = Document::from_text(text);
        return document_json(&doc).map(Some);
    }

    Ok(None)
}

/// Serializes a document, mapping failure to an exit code.
pub fn document_json(doc: &Document) -> Result<String, ExitCode> {
    doc.to_json().map_err(|e| {
        eprintln!("error: failed to serialize document: {e}");
        ExitCode::FAILURE
    })
}

/// Resolves a project reference (id or slug) to its id.
pub fn resolve_project_id(store: &Store, reference: &str) -> Result<String, ExitCode> {
    if let Some(project) = store.project_by_id(reference) {
        return Ok(project.id.clone());
    }
    if let Some(project) = store.project_by_slug(reference) {
        return Ok(project.id.clone());
    }
    eprintln!("error: no project with id or slug '{reference}'");
    Err(ExitCode::FAILURE)
}
