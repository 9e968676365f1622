/*! Transcription normalization.

Converts a corpus's native phonetic-symbol sequences into canonical IPA
phoneme sequences usable across corpora.

Three pieces:
- [SymbolMapping]: fixed native-symbol → IPA lookup table. Lookup failure
  is a hard error, an unmapped symbol is never silently substituted.
- [Segmenter] implementations, splitting one mapped IPA symbol into one or
  more canonical phoneme units.
- [Normalizer], tying both together: a pure function from a native
  transcription string to a [crate::corpus::Phonology].
!*/
mod mapping;
mod normalizer;
mod segment;

pub use mapping::{SymbolMapping, CASTILIAN};
pub use normalizer::Normalizer;
pub use segment::{IdentitySegmenter, IpaSegmenter, Segmenter};
