//! folio: portfolio content manager
//!
//! folio maintains the content behind a personal portfolio site: projects,
//! an about page, contact details, and site settings, stored in a single
//! JSON data file. Rich-text content is held as a structured node tree,
//! and the `edit search` command runs find-and-replace over it the way an
//! editor would: scan, highlight, step through matches, replace.

#![warn(missing_docs)]

pub mod cli;
