//! Building replacement transactions with offset rebasing.

use folio_document::Transaction;

use crate::scan::MatchRange;

/// Builds a transaction replacing the match at `selected`.
///
/// Returns `None` when no match exists at that index; the caller treats
/// that as a failed no-op. After applying the transaction every
/// downstream offset has shifted, so the scanner must re-run.
pub fn replace_selected_transaction(
    matches: &[MatchRange],
    selected: usize,
    replacement: &str,
) -> Option<Transaction> {
    let target = matches.get(selected)?;
    let mut tx = Transaction::new();
    tx.insert_text(target.start..target.end, replacement);
    Some(tx)
}

/// Builds a single transaction replacing every match in document order.
///
/// Each replacement changes the text length by
/// `replacement.len() - (end - start)`, so every later match must be
/// shifted by the cumulative delta accrued so far. The loop keeps a
/// running `offset` and rebases match `i + 1` before the next pass,
/// exactly as a forward sequence of `insert_text` calls requires. The
/// result is numerically identical to replacing the original matches in
/// reverse document order without any offset tracking.
///
/// Returns `None` when the match list is empty.
pub fn replace_all_transaction(matches: &[MatchRange], replacement: &str) -> Option<Transaction> {
    if matches.is_empty() {
        return None;
    }

    let replacement_len = replacement.chars().count();
    let mut rebased: Vec<MatchRange> = matches.to_vec();
    let mut tx = Transaction::new();
    let mut offset: isize = 0;

    for index in 0..rebased.len() {
        let current = rebased[index];
        tx.insert_text(current.start..current.end, replacement);

        if index + 1 < rebased.len() {
            offset += current.len() as isize - replacement_len as isize;
            let next = rebased[index + 1];
            rebased[index + 1] = MatchRange {
                start: shift(next.start, offset),
                end: shift(next.end, offset),
            };
        }
    }

    Some(tx)
}

/// Applies a signed delta to an unsigned offset, saturating at zero.
///
/// The delta can never legitimately push an offset negative (matches are
/// disjoint and in order), so saturation only guards arithmetic, not
/// semantics.
fn shift(offset: usize, delta: isize) -> usize {
    if delta >= 0 {
        offset.saturating_sub(delta as usize)
    } else {
        offset + delta.unsigned_abs()
    }
}
