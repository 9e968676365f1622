//! Reader for corpora carrying an ad-hoc transcription alphabet.
//!
//! Rows hold a `word` column and a `transcription` column of
//! whitespace-separated native symbols. Orthography is lowercased to the
//! convention of the corpora with built-in support, and the transcription
//! goes through the full [Normalizer].
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{CorpusReader, DelimitedReader};
use crate::corpus::WordRecord;
use crate::error::Error;
use crate::lang::Lang;
use crate::normalize::{Normalizer, Segmenter};

pub const ORTHOGRAPHY_FIELD: &str = "word";
pub const TRANSCRIPTION_FIELD: &str = "transcription";

pub struct SampaReader<T: Read, S> {
    inner: DelimitedReader<T>,
    normalizer: Normalizer<S>,
    lang: Lang,
}

impl<S: Segmenter> SampaReader<File, S> {
    pub fn from_path(
        path: &Path,
        lang: Lang,
        normalizer: Normalizer<S>,
        delimiter: u8,
    ) -> Result<Self, Error> {
        let inner = DelimitedReader::from_path(
            path,
            delimiter,
            Some(&[ORTHOGRAPHY_FIELD, TRANSCRIPTION_FIELD]),
        )?;
        Ok(Self {
            inner,
            normalizer,
            lang,
        })
    }
}

impl<T: Read, S: Segmenter> SampaReader<T, S> {
    pub fn from_reader(
        source: T,
        lang: Lang,
        normalizer: Normalizer<S>,
        delimiter: u8,
    ) -> Result<Self, Error> {
        let inner = DelimitedReader::from_reader(
            source,
            delimiter,
            Some(&[ORTHOGRAPHY_FIELD, TRANSCRIPTION_FIELD]),
        )?;
        Ok(Self {
            inner,
            normalizer,
            lang,
        })
    }

    fn to_record(&self, row: Vec<String>) -> Result<WordRecord, Error> {
        let mut fields = row.into_iter();
        let (word, transcription) = match (fields.next(), fields.next()) {
            (Some(word), Some(transcription)) => (word, transcription),
            // unreachable through DelimitedReader, which validates row width
            _ => {
                return Err(Error::MalformedRecord {
                    field: TRANSCRIPTION_FIELD.to_string(),
                    record: String::new(),
                    path: self.inner.path().cloned(),
                })
            }
        };

        let orthography = word.to_lowercase();
        let phonology = self
            .normalizer
            .normalize(&transcription)
            .map_err(|e| e.with_record(&orthography))?;

        Ok(WordRecord {
            orthography,
            phonology,
            language: self.lang.clone(),
        })
    }
}

impl<T: Read, S: Segmenter> Iterator for SampaReader<T, S> {
    type Item = Result<WordRecord, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            Ok(row) => Some(self.to_record(row)),
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T: Read, S: Segmenter> CorpusReader for SampaReader<T, S> {
    fn lang(&self) -> &Lang {
        &self.lang
    }
}
