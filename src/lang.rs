//! Language tags.
//!
//! Every word record carries the tag of its source corpus,
//! so that the combined table stays usable as a labeled dataset.
use std::fmt;
use std::str::FromStr;

use oxilangtag::{LanguageTag, LanguageTagParseError};

/// Validated BCP47 language tag (e.g. `fra`, `esp`).
///
/// Parsing normalizes case, so corpora declared as `FRA` and `fra`
/// end up under the same label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lang(LanguageTag<String>);

impl Lang {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for Lang {
    type Err = LanguageTagParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(LanguageTag::parse_and_normalize(s)?))
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_str())
    }
}
