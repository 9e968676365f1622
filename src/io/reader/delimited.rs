//! Generic delimited-text reading (comma- or tab-separated).
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder, StringRecordsIntoIter};
use itertools::Itertools;

use crate::error::Error;

/// Reads a delimited file into rows, optionally projected on a list of
/// named fields.
///
/// With a field list, rows come out in field-list order; without one, all
/// native fields are kept in file order. A row shorter than the requested
/// fields is a [Error::MalformedRecord], never a silently partial record.
pub struct DelimitedReader<T: Read> {
    records: StringRecordsIntoIter<T>,
    headers: Vec<String>,
    // indices of the requested fields into each raw row
    indices: Vec<usize>,
    path: Option<PathBuf>,
}

impl DelimitedReader<File> {
    pub fn from_path(
        path: &Path,
        delimiter: u8,
        fields: Option<&[&str]>,
    ) -> Result<Self, Error> {
        let rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_path(path)?;
        Self::with_reader(rdr, fields, Some(path.to_path_buf()))
    }
}

impl<T: Read> DelimitedReader<T> {
    pub fn from_reader(source: T, delimiter: u8, fields: Option<&[&str]>) -> Result<Self, Error> {
        let rdr = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(source);
        Self::with_reader(rdr, fields, None)
    }

    fn with_reader(
        mut rdr: Reader<T>,
        fields: Option<&[&str]>,
        path: Option<PathBuf>,
    ) -> Result<Self, Error> {
        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let indices = match fields {
            Some(fields) => {
                let mut indices = Vec::with_capacity(fields.len());
                for field in fields {
                    match headers.iter().position(|h| h == field) {
                        Some(idx) => indices.push(idx),
                        None => {
                            return Err(Error::MalformedRecord {
                                field: (*field).to_string(),
                                record: headers.iter().join(","),
                                path,
                            })
                        }
                    }
                }
                indices
            }
            None => (0..headers.len()).collect(),
        };

        Ok(Self {
            records: rdr.into_records(),
            headers,
            indices,
            path,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

impl<T: Read> Iterator for DelimitedReader<T> {
    type Item = Result<Vec<String>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(e) => return Some(Err(e.into())),
        };

        let mut row = Vec::with_capacity(self.indices.len());
        for &idx in &self.indices {
            match record.get(idx) {
                Some(value) => row.push(value.to_string()),
                None => {
                    return Some(Err(Error::MalformedRecord {
                        field: self.headers[idx].clone(),
                        record: record.iter().join(","),
                        path: self.path.clone(),
                    }))
                }
            }
        }
        Some(Ok(row))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::DelimitedReader;
    use crate::error::Error;

    #[test]
    fn comma_all_fields() {
        let data = Cursor::new("word,transcription\ncasa,k a s a\nasa,a s a\n");
        let rows: Vec<Vec<String>> = DelimitedReader::from_reader(data, b',', None)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["casa", "k a s a"]);
    }

    #[test]
    fn tab_with_projection() {
        let data = Cursor::new("ortho\tphon\tfreq\nabbaye\tabei\t3.2\n");
        let reader = DelimitedReader::from_reader(data, b'\t', Some(&["phon", "ortho"])).unwrap();
        assert_eq!(reader.headers(), ["ortho", "phon", "freq"]);

        let rows: Vec<Vec<String>> = reader.collect::<Result<_, _>>().unwrap();
        // projected in requested order
        assert_eq!(rows[0], ["abei", "abbaye"]);
    }

    #[test]
    fn missing_header_field() {
        let data = Cursor::new("word,transcription\ncasa,k a s a\n");
        match DelimitedReader::from_reader(data, b',', Some(&["phon"])) {
            Err(Error::MalformedRecord { field, .. }) => assert_eq!(field, "phon"),
            other => panic!("expected malformed record, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn short_row_is_malformed() {
        let data = Cursor::new("word,transcription\ncasa\n");
        let mut reader =
            DelimitedReader::from_reader(data, b',', Some(&["word", "transcription"])).unwrap();

        match reader.next() {
            Some(Err(Error::MalformedRecord { field, record, .. })) => {
                assert_eq!(field, "transcription");
                assert_eq!(record, "casa");
            }
            other => panic!("expected malformed record, got {:?}", other.map(|r| r.map(|_| ()))),
        }
    }
}
