//! Wraparound navigation over the match list.
//!
//! The navigator is pure index arithmetic; the session owns the state
//! and asks the document for a scroll position after each move.

/// Returns the index after `current`, wrapping to `0` past the end.
///
/// Returns `None` when there are no matches (navigation is a no-op).
pub fn next_index(len: usize, current: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if current >= len - 1 {
        Some(0)
    } else {
        Some(current + 1)
    }
}

/// Returns the index before `current`, wrapping to the last index at `0`.
///
/// Returns `None` when there are no matches.
pub fn previous_index(len: usize, current: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    if current == 0 {
        Some(len - 1)
    } else {
        Some(current - 1)
    }
}

/// Clamps a selected index into `[0, len)`, or `0` when empty.
///
/// Applied whenever a document mutation shrinks the match list below
/// the current selection.
pub fn clamp_index(len: usize, current: usize) -> usize {
    if len == 0 || current >= len { 0 } else { current }
}
