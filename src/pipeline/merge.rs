//! Corpus assembly and merge pipeline.
//!
//! Each corpus is read, normalized and tagged independently; the per-corpus
//! tables only meet at the final union. There is no cross-corpus data
//! dependency before that point, so corpora load in parallel.
//!
//! Failure handling is fail-fast *per corpus* (a bad record aborts that
//! corpus under [ErrorPolicy::Abort]) with partial success *across* corpora:
//! one corpus failing to load does not prevent the others from being
//! assembled and unioned.
use std::path::PathBuf;
use std::str::FromStr;

use log::{error, info, warn};
use rayon::prelude::*;

use crate::corpus::CorpusTable;
use crate::error::Error;
use crate::io::reader::{CorpusReader, LexiqueReader, SampaReader};
use crate::lang::Lang;
use crate::normalize::{IpaSegmenter, Normalizer, CASTILIAN};
use crate::pipeline::Pipeline;

/// Which reader understands a corpus file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Tab-separated, phonology already in canonical IPA symbols.
    Lexique,
    /// Comma-separated, SAMPA-style transcriptions run through the
    /// symbol mapping table.
    Sampa,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "lexique" => Ok(Self::Lexique),
            "sampa" => Ok(Self::Sampa),
            other => Err(Error::Custom(format!(
                "unknown corpus format '{other}' (expected lexique or sampa)"
            ))),
        }
    }
}

/// Where a corpus lives, its language tag and its format.
///
/// Parseable from `format:lang:path` for the command line.
#[derive(Debug, Clone)]
pub struct CorpusSpec {
    pub format: Format,
    pub lang: Lang,
    pub path: PathBuf,
}

impl FromStr for CorpusSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut parts = s.splitn(3, ':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(format), Some(lang), Some(path)) if !path.is_empty() => Ok(Self {
                format: format.parse()?,
                lang: lang.parse()?,
                path: PathBuf::from(path),
            }),
            _ => Err(Error::Custom(format!(
                "invalid corpus spec '{s}', expected format:lang:path"
            ))),
        }
    }
}

/// What to do with a record that fails normalization.
///
/// The reference behavior is not specified, so the policy is explicit and
/// caller-chosen rather than a guessed default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort loading the whole corpus on the first bad record.
    #[default]
    Abort,
    /// Log and drop the offending record, keep the rest of the corpus.
    Skip,
}

/// Merges corpora into a single labeled table, written as csv at `dst`.
pub struct MergePipeline {
    specs: Vec<CorpusSpec>,
    dst: PathBuf,
    policy: ErrorPolicy,
}

impl MergePipeline {
    pub fn new(specs: Vec<CorpusSpec>, dst: PathBuf, policy: ErrorPolicy) -> Self {
        Self { specs, dst, policy }
    }

    /// Loads one corpus into a table, honoring the error policy.
    pub fn load_corpus(spec: &CorpusSpec, policy: ErrorPolicy) -> Result<CorpusTable, Error> {
        match spec.format {
            Format::Lexique => {
                let reader =
                    LexiqueReader::from_path(&spec.path, spec.lang.clone(), IpaSegmenter::default())?;
                Self::collect(reader, policy)
            }
            Format::Sampa => {
                let normalizer = Normalizer::new(CASTILIAN.clone(), IpaSegmenter::default());
                let reader =
                    SampaReader::from_path(&spec.path, spec.lang.clone(), normalizer, b',')?;
                Self::collect(reader, policy)
            }
        }
    }

    fn collect<R: CorpusReader>(reader: R, policy: ErrorPolicy) -> Result<CorpusTable, Error> {
        let mut records = Vec::new();
        for record in reader {
            match record {
                Ok(record) => records.push(record),
                Err(e) => match policy {
                    ErrorPolicy::Abort => return Err(e),
                    ErrorPolicy::Skip => warn!("skipping record: {e}"),
                },
            }
        }
        Ok(CorpusTable::new(records))
    }

    /// Loads every corpus and unions the tables, without writing anything.
    ///
    /// A corpus that fails to load is reported and left out; the others
    /// still make it into the union, in spec order.
    pub fn assemble(&self) -> Result<CorpusTable, Error> {
        let results: Vec<(&CorpusSpec, Result<CorpusTable, Error>)> = self
            .specs
            .par_iter()
            .map(|spec| (spec, Self::load_corpus(spec, self.policy)))
            .collect();

        let mut tables = Vec::with_capacity(results.len());
        for (spec, result) in results {
            match result {
                Ok(table) => {
                    info!(
                        "loaded {} records from {} ({})",
                        table.len(),
                        spec.path.display(),
                        spec.lang
                    );
                    tables.push(table);
                }
                Err(e) => error!("could not load corpus {}: {e}", spec.path.display()),
            }
        }

        if tables.is_empty() {
            return Err(Error::Custom("no corpus could be loaded".to_string()));
        }

        CorpusTable::union(tables)
    }
}

impl Pipeline<CorpusTable> for MergePipeline {
    /// Assembles the combined table and writes it at `dst`.
    fn run(&self) -> Result<CorpusTable, Error> {
        let combined = self.assemble()?;
        combined.write_csv(&self.dst)?;
        info!(
            "wrote combined table ({} records) to {}",
            combined.len(),
            self.dst.display()
        );
        Ok(combined)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{CorpusSpec, ErrorPolicy, Format, MergePipeline};
    use crate::error::Error;
    use crate::io::reader::SampaReader;
    use crate::normalize::{IpaSegmenter, Normalizer, CASTILIAN};

    fn sampa_reader(data: &'static str) -> SampaReader<Cursor<&'static str>, IpaSegmenter> {
        SampaReader::from_reader(
            Cursor::new(data),
            "esp".parse().unwrap(),
            Normalizer::new(CASTILIAN.clone(), IpaSegmenter::default()),
            b',',
        )
        .unwrap()
    }

    #[test]
    fn corpus_spec_from_str() {
        let spec: CorpusSpec = "lexique:fra:data/lexique.tsv".parse().unwrap();
        assert_eq!(spec.format, Format::Lexique);
        assert_eq!(spec.lang.as_str(), "fra");
        assert_eq!(spec.path.to_str(), Some("data/lexique.tsv"));

        // paths may contain colons past the first two separators
        let spec: CorpusSpec = "sampa:esp:C:/corpora/esp.csv".parse().unwrap();
        assert_eq!(spec.path.to_str(), Some("C:/corpora/esp.csv"));
    }

    #[test]
    fn corpus_spec_rejects_garbage() {
        assert!("lexique:fra".parse::<CorpusSpec>().is_err());
        assert!("parquet:fra:x.pq".parse::<CorpusSpec>().is_err());
        assert!("lexique:???:x.tsv".parse::<CorpusSpec>().is_err());
    }

    #[test]
    fn abort_policy_surfaces_first_error() {
        let reader = sampa_reader("word,transcription\nasa,a s a\nzanja,zz a n x a\n");
        match MergePipeline::collect(reader, ErrorPolicy::Abort) {
            Err(Error::UnmappedSymbol { symbol, .. }) => assert_eq!(symbol, "zz"),
            other => panic!("expected unmapped symbol error, got {:?}", other.map(|t| t.len())),
        }
    }

    #[test]
    fn skip_policy_drops_only_bad_records() {
        let reader = sampa_reader(
            "word,transcription\nasa,a s a\nzanja,zz a n x a\nbeso,b e s o\n",
        );
        let table = MergePipeline::collect(reader, ErrorPolicy::Skip).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].orthography, "asa");
        assert_eq!(table.records()[1].orthography, "beso");
    }
}
