//! Mapping matches to highlight decorations.

use serde::{Deserialize, Serialize};

use crate::scan::MatchRange;

/// The visual style a decoration should render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecorationStyle {
    /// An ordinary search hit.
    Match,
    /// The currently selected search hit.
    Selected,
}

/// A non-destructive highlight annotation over a range of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoration {
    /// The highlighted range.
    pub range: MatchRange,
    /// How to render it.
    pub style: DecorationStyle,
}

/// Builds one decoration per match, marking the selected index distinctly.
///
/// This is a pure function: same inputs, same output, no side effects.
/// A `selected` index outside the match list simply produces no
/// selected-style decoration.
pub fn decorations(matches: &[MatchRange], selected: usize) -> Vec<Decoration> {
    matches
        .iter()
        .enumerate()
        .map(|(index, range)| Decoration {
            range: *range,
            style: if index == selected {
                DecorationStyle::Selected
            } else {
                DecorationStyle::Match
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges() -> Vec<MatchRange> {
        vec![
            MatchRange { start: 0, end: 3 },
            MatchRange { start: 5, end: 8 },
            MatchRange { start: 10, end: 13 },
        ]
    }

    #[test]
    fn one_decoration_per_match() {
        let decos = decorations(&ranges(), 1);
        assert_eq!(decos.len(), 3);
        assert_eq!(decos[0].style, DecorationStyle::Match);
        assert_eq!(decos[1].style, DecorationStyle::Selected);
        assert_eq!(decos[2].style, DecorationStyle::Match);
    }

    #[test]
    fn selected_out_of_range_marks_nothing() {
        let decos = decorations(&ranges(), 99);
        assert!(decos.iter().all(|d| d.style == DecorationStyle::Match));
    }

    #[test]
    fn empty_matches_empty_decorations() {
        assert!(decorations(&[], 0).is_empty());
    }

    #[test]
    fn pure_function_is_deterministic() {
        assert_eq!(decorations(&ranges(), 2), decorations(&ranges(), 2));
    }
}
