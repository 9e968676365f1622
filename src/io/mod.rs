/*! I/O utilities.

Holds the corpus readers. Writing of the combined table lives on
[crate::corpus::CorpusTable] itself.
!*/
pub mod reader;

pub use reader::{CorpusReader, DelimitedReader, LexiqueReader, SampaReader};
