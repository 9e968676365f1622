/*! Word records and corpus tables.

A [CorpusTable] is built once per corpus and is immutable afterwards,
except for [CorpusTable::union] which concatenates tables row-wise.
Union performs no deduplication: identical orthography/phonology pairs
coming from different corpora are a valid signal for downstream
classification and are kept as distinct rows.
!*/
use std::fmt;
use std::path::Path;

use itertools::Itertools;
use serde::Serialize;

use crate::error::Error;
use crate::lang::Lang;

/// Canonical column names shared by every corpus table.
pub const CANONICAL_COLUMNS: [&str; 3] = ["orthography", "phonology", "language"];

/// Ordered sequence of canonical phoneme symbols.
///
/// Order is phonetically significant and preserved as-is;
/// equality is element-wise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phonology(Vec<String>);

impl Phonology {
    /// Valid entries never have an empty sequence,
    /// constructors upstream reject those before building one.
    pub fn new(phonemes: Vec<String>) -> Self {
        Self(phonemes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl FromIterator<String> for Phonology {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Phonology {
    /// Phonemes joined by single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// One lexical entry: corpus-native spelling, canonical phoneme sequence
/// and the tag of the source corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct WordRecord {
    pub orthography: String,
    pub phonology: Phonology,
    pub language: Lang,
}

/// Serializable row for csv export. Phonology is space-joined.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    orthography: &'a str,
    phonology: String,
    language: &'a str,
}

impl<'a> From<&'a WordRecord> for CsvRow<'a> {
    fn from(record: &'a WordRecord) -> Self {
        Self {
            orthography: &record.orthography,
            phonology: record.phonology.to_string(),
            language: record.language.as_str(),
        }
    }
}

/// Ordered collection of word records drawn from one corpus
/// (or, after [CorpusTable::union], from several).
#[derive(Debug, Clone)]
pub struct CorpusTable {
    columns: Vec<String>,
    records: Vec<WordRecord>,
}

impl CorpusTable {
    /// Table with the canonical column set.
    pub fn new(records: Vec<WordRecord>) -> Self {
        Self {
            columns: CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
            records,
        }
    }

    /// Table whose upstream source exposes a non-canonical column set.
    /// Unioning it with canonical tables fails with [Error::SchemaMismatch].
    pub fn with_columns(records: Vec<WordRecord>, columns: Vec<String>) -> Self {
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row-wise concatenation of tables.
    ///
    /// Column alignment is validated on every table *before* any
    /// concatenation happens. Result order is the argument order,
    /// record order within a table is preserved.
    pub fn union<I>(tables: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = CorpusTable>,
    {
        let tables: Vec<CorpusTable> = tables.into_iter().collect();
        let mut iter = tables.iter();
        let first_columns = match iter.next() {
            Some(table) => table.columns.clone(),
            None => return Ok(CorpusTable::new(Vec::new())),
        };

        for table in iter {
            if table.columns != first_columns {
                return Err(Error::SchemaMismatch {
                    expected: first_columns,
                    found: table.columns.clone(),
                });
            }
        }

        let records = tables
            .into_iter()
            .flat_map(|table| table.records)
            .collect();

        Ok(Self {
            columns: first_columns,
            records,
        })
    }

    /// Writes the table as csv at `dst`, canonical columns as header.
    pub fn write_csv(&self, dst: &Path) -> Result<(), Error> {
        let mut out = csv::WriterBuilder::new().from_path(dst)?;
        for record in &self.records {
            out.serialize(CsvRow::from(record))?;
        }
        out.flush()?;
        Ok(())
    }
}
