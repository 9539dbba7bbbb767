//! Search and replace kernel for the folio rich-text editor.
//!
//! The kernel is a set of small, synchronous components over the
//! document tree from `folio-document`:
//!
//! - **pattern**: turns a search term plus flags into a compiled regex
//! - **scan**: finds every match as absolute character offsets
//! - **decoration**: maps matches to highlight annotations
//! - **navigator**: wraparound selection over the match list
//! - **replace**: single and bulk replacement with offset rebasing
//! - **session**: the `SearchSession` state machine tying it together
//!
//! All state lives in an explicit [`SearchState`] value owned by one
//! editor session; there is no hidden storage attached to the editor.
//!
//! # Example
//!
//! ```
//! use folio_document::Document;
//! use folio_search::SearchSession;
//!
//! let mut doc = Document::from_text("foo bar foo");
//! let mut session = SearchSession::new();
//! session.set_term("foo");
//! session.refresh(&doc);
//! assert_eq!(session.match_count(), 2);
//!
//! session.set_replacement("baz");
//! assert!(session.replace_all(&mut doc));
//! session.refresh(&doc);
//! assert_eq!(doc.flatten(), "baz bar baz");
//! ```

#![warn(missing_docs)]

mod decoration;
mod navigator;
mod pattern;
mod replace;
mod scan;
mod session;

pub use decoration::{Decoration, DecorationStyle, decorations};
pub use navigator::{clamp_index, next_index, previous_index};
pub use pattern::build_pattern;
pub use replace::{replace_all_transaction, replace_selected_transaction};
pub use scan::{MatchRange, scan_document};
pub use session::{SearchSession, SearchState, SessionPhase};
