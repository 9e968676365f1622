//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    Lang(oxilangtag::LanguageTagParseError),
    /// A native transcription token has no entry in the symbol mapping table.
    UnmappedSymbol {
        symbol: String,
        transcription: String,
        record: Option<String>,
    },
    /// A raw row is missing an expected field.
    MalformedRecord {
        field: String,
        record: String,
        path: Option<PathBuf>,
    },
    /// Tables with differing canonical column sets cannot be unioned.
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    /// A valid entry never has an empty phoneme sequence.
    EmptyPhonology { record: String },
    Custom(String),
}

impl Error {
    /// Attaches a record identifier to an [Error::UnmappedSymbol],
    /// so that callers know which entry to fix or exclude.
    pub fn with_record(self, record: &str) -> Self {
        match self {
            Self::UnmappedSymbol {
                symbol,
                transcription,
                ..
            } => Self::UnmappedSymbol {
                symbol,
                transcription,
                record: Some(record.to_string()),
            },
            other => other,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Csv(e) => write!(f, "{e}"),
            Self::Lang(e) => write!(f, "{e}"),
            Self::UnmappedSymbol {
                symbol,
                transcription,
                record,
            } => {
                write!(f, "unmapped symbol {symbol:?} in transcription {transcription:?}")?;
                if let Some(record) = record {
                    write!(f, " (record {record:?})")?;
                }
                Ok(())
            }
            Self::MalformedRecord {
                field,
                record,
                path,
            } => {
                write!(f, "missing field {field:?} in record {record:?}")?;
                if let Some(path) = path {
                    write!(f, " ({})", path.display())?;
                }
                Ok(())
            }
            Self::SchemaMismatch { expected, found } => write!(
                f,
                "schema mismatch: expected columns {expected:?}, found {found:?}"
            ),
            Self::EmptyPhonology { record } => {
                write!(f, "empty phoneme sequence for record {record:?}")
            }
            Self::Custom(s) => write!(f, "{s}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<oxilangtag::LanguageTagParseError> for Error {
    fn from(e: oxilangtag::LanguageTagParseError) -> Error {
        Error::Lang(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
