//! Phoneme segmentation of mapped IPA symbols.
use std::collections::HashSet;

use unic_ucd::GeneralCategory;
use unicode_segmentation::UnicodeSegmentation;

/// Splits one mapped IPA symbol into canonical phoneme units.
///
/// Implementations must preserve order and return at least one unit for a
/// non-empty symbol: segmentation only keeps or splits, it never drops.
pub trait Segmenter {
    fn segment(&self, symbol: &str) -> Vec<String>;
}

/// Passes every mapped symbol through as a single phoneme unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentitySegmenter;

impl Segmenter for IdentitySegmenter {
    fn segment(&self, symbol: &str) -> Vec<String> {
        vec![symbol.to_string()]
    }
}

/// Grapheme-cluster segmentation of IPA strings.
///
/// One phoneme unit per grapheme cluster, with two exceptions:
/// - modifier letters (length marks, aspiration and the like) attach to
///   the preceding base unit,
/// - clusters listed in `keep` (by default the affricates) stay whole.
#[derive(Debug, Clone)]
pub struct IpaSegmenter {
    keep: HashSet<String>,
}

impl IpaSegmenter {
    /// `keep` lists multi-character sequences treated as single phonemes.
    pub fn new<I, S>(keep: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keep: keep.into_iter().map(Into::into).collect(),
        }
    }

    fn is_modifier(grapheme: &str) -> bool {
        grapheme.chars().all(|c| {
            matches!(
                GeneralCategory::of(c),
                GeneralCategory::ModifierLetter
                    | GeneralCategory::ModifierSymbol
                    | GeneralCategory::NonspacingMark
            )
        })
    }
}

impl Default for IpaSegmenter {
    /// Keeps the affricates whole.
    fn default() -> Self {
        Self::new(["tʃ", "dʒ", "ts", "dz"])
    }
}

impl Segmenter for IpaSegmenter {
    fn segment(&self, symbol: &str) -> Vec<String> {
        let graphemes: Vec<&str> = symbol.graphemes(true).collect();
        let mut units: Vec<String> = Vec::new();

        let mut i = 0;
        while i < graphemes.len() {
            // longest kept cluster starting at i, if any
            let mut end = i + 1;
            for j in (i + 2..=graphemes.len()).rev() {
                if self.keep.contains(&graphemes[i..j].concat()) {
                    end = j;
                    break;
                }
            }

            let unit = graphemes[i..end].concat();
            if end == i + 1 && Self::is_modifier(&unit) {
                match units.last_mut() {
                    Some(prev) => prev.push_str(&unit),
                    // leading modifier, nothing to attach to
                    None => units.push(unit),
                }
            } else {
                units.push(unit);
            }
            i = end;
        }

        units
    }
}

#[cfg(test)]
mod tests {
    use super::{IdentitySegmenter, IpaSegmenter, Segmenter};

    #[test]
    fn identity() {
        let s = IdentitySegmenter;
        assert_eq!(s.segment("tʃ"), ["tʃ"]);
        assert_eq!(s.segment("a"), ["a"]);
    }

    #[test]
    fn single_symbols_pass_through() {
        let s = IpaSegmenter::default();
        assert_eq!(s.segment("ɾ"), ["ɾ"]);
        assert_eq!(s.segment("θ"), ["θ"]);
    }

    #[test]
    fn plain_sequences_split_per_grapheme() {
        let s = IpaSegmenter::default();
        assert_eq!(s.segment("abɛj"), ["a", "b", "ɛ", "j"]);
        assert_eq!(s.segment("ai"), ["a", "i"]);
    }

    #[test]
    fn kept_clusters_stay_whole() {
        let s = IpaSegmenter::default();
        assert_eq!(s.segment("tʃ"), ["tʃ"]);
        assert_eq!(s.segment("atʃo"), ["a", "tʃ", "o"]);

        // without the keep list, the affricate splits
        let bare = IpaSegmenter::new(Vec::<String>::new());
        assert_eq!(bare.segment("tʃ"), ["t", "ʃ"]);
    }

    #[test]
    fn modifiers_attach_to_preceding_base() {
        let s = IpaSegmenter::default();
        assert_eq!(s.segment("aː"), ["aː"]);
        assert_eq!(s.segment("pʰa"), ["pʰ", "a"]);
    }

    #[test]
    fn combining_marks_never_detach() {
        let s = IpaSegmenter::default();
        // nasal vowel: base + U+0303 combining tilde is one grapheme cluster
        assert_eq!(s.segment("ɑ\u{0303}"), ["ɑ\u{0303}"]);
    }

    #[test]
    fn empty_symbol_yields_no_units() {
        let s = IpaSegmenter::default();
        assert!(s.segment("").is_empty());
    }
}
