/*! Corpus reading facilities.

Readers implement [Iterator] over word records.

There are two kinds of corpus readers:

- [LexiqueReader]: for corpora with built-in normalized support, whose
  phonology column already carries canonical IPA symbols and only needs
  segmentation.
- [SampaReader]: for corpora carrying an ad-hoc transcription alphabet,
  run through the full [crate::normalize::Normalizer].

Both sit on top of [DelimitedReader], a generic delimited-text reader.
!*/
mod delimited;
mod lexique;
mod sampa;

pub use delimited::DelimitedReader;
pub use lexique::LexiqueReader;
pub use sampa::SampaReader;

use crate::corpus::WordRecord;
use crate::error::Error;
use crate::lang::Lang;

/// Enables iterating over word records and lang retrieval.
pub trait CorpusReader: Iterator<Item = Result<WordRecord, Error>> {
    fn lang(&self) -> &Lang;
}
