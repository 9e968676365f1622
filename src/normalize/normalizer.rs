//! The transcription normalizer itself.
use crate::corpus::Phonology;
use crate::error::Error;

use super::mapping::SymbolMapping;
use super::segment::Segmenter;

/// Converts a single native transcription string (whitespace-separated
/// native symbol tokens) into an ordered canonical phoneme sequence.
///
/// Pure: same input, same output. The mapping table is built once and
/// never mutated afterwards.
pub struct Normalizer<S> {
    mapping: SymbolMapping,
    segmenter: S,
}

impl<S: Segmenter> Normalizer<S> {
    pub fn new(mapping: SymbolMapping, segmenter: S) -> Self {
        Self { mapping, segmenter }
    }

    /// Maps every token to its IPA symbol, segments each mapped symbol
    /// and flattens the result in token order.
    ///
    /// An unmapped token aborts the word with [Error::UnmappedSymbol]
    /// naming the token and the source string; it is never dropped or
    /// substituted. A transcription yielding no phonemes at all is
    /// [Error::EmptyPhonology].
    pub fn normalize(&self, transcription: &str) -> Result<Phonology, Error> {
        let mut phonemes: Vec<String> = Vec::new();

        for token in transcription.split_whitespace() {
            let ipa = self
                .mapping
                .get(token)
                .ok_or_else(|| Error::UnmappedSymbol {
                    symbol: token.to_string(),
                    transcription: transcription.to_string(),
                    record: None,
                })?;
            phonemes.extend(self.segmenter.segment(ipa));
        }

        if phonemes.is_empty() {
            return Err(Error::EmptyPhonology {
                record: transcription.to_string(),
            });
        }

        Ok(Phonology::new(phonemes))
    }
}
