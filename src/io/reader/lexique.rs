//! Reader for corpora with built-in normalized support (Lexique-style).
//!
//! These corpora ship a tab-separated lexicon whose phonology column is
//! already written in canonical IPA symbols; only segmentation into
//! phoneme units applies, no symbol mapping.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{CorpusReader, DelimitedReader};
use crate::corpus::{Phonology, WordRecord};
use crate::error::Error;
use crate::lang::Lang;
use crate::normalize::Segmenter;

pub const ORTHOGRAPHY_FIELD: &str = "ortho";
pub const PHONOLOGY_FIELD: &str = "phon";

pub struct LexiqueReader<T: Read, S> {
    inner: DelimitedReader<T>,
    segmenter: S,
    lang: Lang,
}

impl<S: Segmenter> LexiqueReader<File, S> {
    pub fn from_path(path: &Path, lang: Lang, segmenter: S) -> Result<Self, Error> {
        let inner = DelimitedReader::from_path(
            path,
            b'\t',
            Some(&[ORTHOGRAPHY_FIELD, PHONOLOGY_FIELD]),
        )?;
        Ok(Self {
            inner,
            segmenter,
            lang,
        })
    }
}

impl<T: Read, S: Segmenter> LexiqueReader<T, S> {
    pub fn from_reader(source: T, lang: Lang, segmenter: S) -> Result<Self, Error> {
        let inner = DelimitedReader::from_reader(
            source,
            b'\t',
            Some(&[ORTHOGRAPHY_FIELD, PHONOLOGY_FIELD]),
        )?;
        Ok(Self {
            inner,
            segmenter,
            lang,
        })
    }

    fn to_record(&self, row: Vec<String>) -> Result<WordRecord, Error> {
        let mut fields = row.into_iter();
        let (orthography, phon) = match (fields.next(), fields.next()) {
            (Some(orthography), Some(phon)) => (orthography, phon),
            // unreachable through DelimitedReader, which validates row width
            _ => {
                return Err(Error::MalformedRecord {
                    field: PHONOLOGY_FIELD.to_string(),
                    record: String::new(),
                    path: self.inner.path().cloned(),
                })
            }
        };

        let units = self.segmenter.segment(phon.trim());
        if units.is_empty() {
            return Err(Error::EmptyPhonology {
                record: orthography,
            });
        }

        Ok(WordRecord {
            orthography,
            phonology: Phonology::new(units),
            language: self.lang.clone(),
        })
    }
}

impl<T: Read, S: Segmenter> Iterator for LexiqueReader<T, S> {
    type Item = Result<WordRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            Ok(row) => Some(self.to_record(row)),
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T: Read, S: Segmenter> CorpusReader for LexiqueReader<T, S> {
    fn lang(&self) -> &Lang {
        &self.lang
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::LexiqueReader;
    use crate::error::Error;
    use crate::io::reader::CorpusReader;
    use crate::normalize::IpaSegmenter;

    #[test]
    fn reads_and_segments() {
        let data = Cursor::new("ortho\tphon\tfreq\nabbaye\tabei\t1.9\nabeille\tabɛj\t2.7\n");
        let reader =
            LexiqueReader::from_reader(data, "fra".parse().unwrap(), IpaSegmenter::default())
                .unwrap();
        assert_eq!(reader.lang().as_str(), "fra");

        let records: Vec<_> = reader.collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].orthography, "abbaye");
        assert_eq!(records[0].phonology.as_slice(), ["a", "b", "e", "i"]);
        assert_eq!(records[1].phonology.as_slice(), ["a", "b", "ɛ", "j"]);
        assert_eq!(records[1].language.as_str(), "fra");
    }

    #[test]
    fn empty_phonology_is_an_error() {
        let data = Cursor::new("ortho\tphon\nabbaye\t\n");
        let mut reader =
            LexiqueReader::from_reader(data, "fra".parse().unwrap(), IpaSegmenter::default())
                .unwrap();

        match reader.next() {
            Some(Err(Error::EmptyPhonology { record })) => assert_eq!(record, "abbaye"),
            other => panic!("expected empty phonology error, got {:?}", other),
        }
    }
}
