/*! # lexmerge

Pipeline for merging phonologically annotated lexical corpora into a
single labeled dataset.

Corpus-native phonetic transcriptions are normalized into canonical IPA
phoneme sequences, every record gets the language tag of its source
corpus, and the per-corpus tables are unioned into one combined table
ready for downstream n-gram featurization.

This project can be used as a tool (`lexmerge merge`) or as a lib to
integrate corpus normalization into other projects.
!*/
pub mod corpus;
pub mod error;
pub mod io;
pub mod lang;
pub mod normalize;
pub mod pipeline;
