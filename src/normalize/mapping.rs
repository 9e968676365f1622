//! Native-symbol to IPA mapping tables.
use std::collections::HashMap;

use lazy_static::lazy_static;

/// Fixed, case-sensitive mapping from a corpus's native transcription
/// symbols to canonical IPA symbols.
///
/// Every symbol appearing in the source corpus's transcriptions must have
/// an entry; a failed lookup is surfaced as
/// [crate::error::Error::UnmappedSymbol] by the normalizer.
#[derive(Debug, Clone, Default)]
pub struct SymbolMapping {
    inner: HashMap<String, String>,
}

impl SymbolMapping {
    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.inner.get(symbol).map(String::as_str)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.inner.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for SymbolMapping
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

lazy_static! {

    /// SAMPA-style Castilian Spanish transcription alphabet to IPA.
    ///
    /// Covers the symbol inventory used by the Spanish lexical corpus,
    /// including the allophone symbols (`B`, `D`, `G`) and the
    /// tap/trill distinction (`r(` vs `r`).
    pub static ref CASTILIAN: SymbolMapping = [
        // vowels and glides
        ("a", "a"),
        ("e", "e"),
        ("i", "i"),
        ("o", "o"),
        ("u", "u"),
        ("j", "j"),
        ("w", "w"),
        // plosives
        ("p", "p"),
        ("b", "b"),
        ("t", "t"),
        ("d", "d"),
        ("k", "k"),
        ("g", "g"),
        // approximant allophones of the voiced plosives
        ("B", "β"),
        ("D", "ð"),
        ("G", "ɣ"),
        // fricatives
        ("f", "f"),
        ("T", "θ"),
        ("s", "s"),
        ("z", "z"),
        ("x", "x"),
        ("jj", "ʝ"),
        // affricate
        ("tS", "tʃ"),
        // nasals
        ("m", "m"),
        ("n", "n"),
        ("J", "ɲ"),
        ("N", "ŋ"),
        // laterals
        ("l", "l"),
        ("L", "ʎ"),
        // rhotics: tap vs trill
        ("r(", "ɾ"),
        ("r", "r"),
    ]
    .into_iter()
    .collect();
}

#[cfg(test)]
mod tests {
    use super::{SymbolMapping, CASTILIAN};

    #[test]
    fn castilian_tap_and_affricate() {
        assert_eq!(CASTILIAN.get("r("), Some("ɾ"));
        assert_eq!(CASTILIAN.get("r"), Some("r"));
        assert_eq!(CASTILIAN.get("tS"), Some("tʃ"));
        assert_eq!(CASTILIAN.get("T"), Some("θ"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        // `B` is the approximant, `b` the plosive
        assert_eq!(CASTILIAN.get("B"), Some("β"));
        assert_eq!(CASTILIAN.get("b"), Some("b"));
        assert!(!CASTILIAN.contains("A"));
    }

    #[test]
    fn from_pairs() {
        let mapping: SymbolMapping =
            [("a", "a"), ("s", "s"), ("e", "e"), ("r(", "ɾ"), ("k", "k")]
                .into_iter()
                .collect();
        assert_eq!(mapping.len(), 5);
        assert_eq!(mapping.get("r("), Some("ɾ"));
        assert_eq!(mapping.get("zz"), None);
    }
}
