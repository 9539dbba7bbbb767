//! The search session: explicit state and the search/replace lifecycle.
//!
//! A session moves through three phases:
//!
//! ```text
//! Idle ──set term──▶ Searching ──replace──▶ Replacing
//!   ▲                    │  ▲                   │
//!   └────clear term──────┘  └────re-scan────────┘
//! ```
//!
//! All state is held in a [`SearchState`] value owned by the session;
//! kernel operations take it explicitly rather than reaching into
//! editor-instance storage.

use folio_document::{Document, LeafPosition};

use crate::{
    decoration::{Decoration, decorations},
    navigator::{clamp_index, next_index, previous_index},
    pattern::build_pattern,
    replace::{replace_all_transaction, replace_selected_transaction},
    scan::{MatchRange, scan_document},
};

/// Where the session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No pattern set; no matches, no decorations.
    #[default]
    Idle,
    /// A pattern is set and matches are computed.
    Searching,
    /// A replace transaction is in flight; existing state is held until
    /// the next re-scan.
    Replacing,
}

/// The full search state for one editor session.
///
/// Recreated or mutated on every keystroke and document change. The
/// selected index is always clamped into `[0, matches.len())` when the
/// match list is non-empty, else `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// The raw search term.
    pub term: String,
    /// The replacement text.
    pub replacement: String,
    /// Whether matching is case sensitive.
    pub case_sensitive: bool,
    /// Whether the term is matched literally rather than as a pattern.
    pub literal: bool,
    /// Index of the selected match.
    pub selected: usize,
    /// Matches in document order.
    pub matches: Vec<MatchRange>,
}

/// Tracks the last inputs the scanner ran against, so an unchanged
/// refresh can skip recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ScanStamp {
    /// Term at the last scan.
    term: String,
    /// Case flag at the last scan.
    case_sensitive: bool,
    /// Literal flag at the last scan.
    literal: bool,
    /// Document revision at the last scan, if any scan has run.
    revision: Option<u64>,
}

/// A search/replace session over one document.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    /// The session's explicit state.
    state: SearchState,
    /// Current lifecycle phase.
    phase: SessionPhase,
    /// Inputs of the most recent scan.
    stamp: ScanStamp,
}

impl SearchSession {
    /// Creates an idle session with literal matching on and case
    /// sensitivity off, matching the editor defaults.
    pub fn new() -> Self {
        Self {
            state: SearchState {
                literal: true,
                ..SearchState::default()
            },
            phase: SessionPhase::Idle,
            stamp: ScanStamp::default(),
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Returns the session state.
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Sets the search term.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.state.term = term.into();
    }

    /// Sets the replacement text.
    pub fn set_replacement(&mut self, replacement: impl Into<String>) {
        self.state.replacement = replacement.into();
    }

    /// Toggles case-sensitive matching.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.state.case_sensitive = case_sensitive;
    }

    /// Toggles literal (non-pattern) matching.
    pub fn set_literal(&mut self, literal: bool) {
        self.state.literal = literal;
    }

    /// Number of matches from the last scan.
    pub fn match_count(&self) -> usize {
        self.state.matches.len()
    }

    /// The matches from the last scan, in document order.
    pub fn matches(&self) -> &[MatchRange] {
        &self.state.matches
    }

    /// Index of the selected match.
    pub fn selected_index(&self) -> usize {
        self.state.selected
    }

    /// One-based position of the selected match for display, or `None`
    /// when there are no matches.
    pub fn selected_ordinal(&self) -> Option<usize> {
        if self.state.matches.is_empty() {
            None
        } else {
            Some(self.state.selected + 1)
        }
    }

    /// Decorations for the current matches.
    pub fn decorations(&self) -> Vec<Decoration> {
        decorations(&self.state.matches, self.state.selected)
    }

    /// Re-runs the scanner against the document if anything changed.
    ///
    /// Called after every keystroke, parameter change, or document
    /// mutation. Returns `true` when a scan actually ran. When the term
    /// is empty or whitespace-only the session drops to `Idle` and all
    /// match state is cleared.
    pub fn refresh(&mut self, doc: &Document) -> bool {
        let unchanged = self.stamp.term == self.state.term
            && self.stamp.case_sensitive == self.state.case_sensitive
            && self.stamp.literal == self.state.literal
            && self.stamp.revision == Some(doc.revision());
        if unchanged && self.phase() != SessionPhase::Replacing {
            return false;
        }

        self.stamp = ScanStamp {
            term: self.state.term.clone(),
            case_sensitive: self.state.case_sensitive,
            literal: self.state.literal,
            revision: Some(doc.revision()),
        };

        let Some(pattern) = build_pattern(
            &self.state.term,
            self.state.literal,
            self.state.case_sensitive,
        ) else {
            self.state.matches.clear();
            self.state.selected = 0;
            self.phase = SessionPhase::Idle;
            return true;
        };

        self.state.matches = scan_document(doc, &pattern);
        self.state.selected = clamp_index(self.state.matches.len(), self.state.selected);
        self.phase = SessionPhase::Searching;
        true
    }

    /// Selects the next match, wrapping past the end.
    ///
    /// Returns the resolved position of the new selection for
    /// scroll-into-view. Resolution is best-effort: `None` means there
    /// was nothing to scroll to, never an error. No-op when the match
    /// list is empty.
    pub fn select_next(&mut self, doc: &Document) -> Option<LeafPosition> {
        let index = next_index(self.state.matches.len(), self.state.selected)?;
        self.state.selected = index;
        self.scroll_target(doc)
    }

    /// Selects the previous match, wrapping past the start.
    pub fn select_previous(&mut self, doc: &Document) -> Option<LeafPosition> {
        let index = previous_index(self.state.matches.len(), self.state.selected)?;
        self.state.selected = index;
        self.scroll_target(doc)
    }

    /// Resolves the selected match's start offset to a leaf position.
    fn scroll_target(&self, doc: &Document) -> Option<LeafPosition> {
        let range = self.state.matches.get(self.state.selected)?;
        doc.resolve(range.start)
    }

    /// Replaces the selected match with the replacement text.
    ///
    /// Returns `false` (leaving the document untouched) when there is no
    /// match to replace. On success the scanner re-runs against the
    /// mutated document before returning.
    pub fn replace_selected(&mut self, doc: &mut Document) -> bool {
        let Some(tx) =
            replace_selected_transaction(&self.state.matches, self.state.selected, &self.state.replacement)
        else {
            return false;
        };
        self.phase = SessionPhase::Replacing;
        if doc.apply(&tx).is_err() {
            // Stale ranges can only come from a scan the caller skipped.
            self.phase = SessionPhase::Searching;
            return false;
        }
        self.refresh(doc);
        true
    }

    /// Replaces every match in one atomic transaction.
    ///
    /// Returns `false` when the match list is empty. On success the
    /// scanner re-runs against the mutated document before returning.
    pub fn replace_all(&mut self, doc: &mut Document) -> bool {
        let Some(tx) = replace_all_transaction(&self.state.matches, &self.state.replacement)
        else {
            return false;
        };
        self.phase = SessionPhase::Replacing;
        if doc.apply(&tx).is_err() {
            self.phase = SessionPhase::Searching;
            return false;
        }
        self.refresh(doc);
        true
    }
}
