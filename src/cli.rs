//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use lexmerge::pipeline::CorpusSpec;

#[derive(Debug, StructOpt)]
#[structopt(name = "lexmerge", about = "lexical corpus merging tool.")]
/// Holds every command that is callable by the `lexmerge` command.
pub enum Lexmerge {
    #[structopt(about = "Merge corpora into a single labeled dataset")]
    Merge(Merge),
}

#[derive(Debug, StructOpt)]
/// Merge command and parameters.
pub struct Merge {
    #[structopt(parse(from_os_str), help = "destination of the combined table (csv)")]
    pub dst: PathBuf,
    #[structopt(
        short = "c",
        long = "corpus",
        help = "corpus to merge, as format:lang:path (formats: lexique, sampa)"
    )]
    pub corpora: Vec<CorpusSpec>,
    #[structopt(
        long = "skip-bad-records",
        help = "skip records that fail normalization instead of aborting their corpus"
    )]
    pub skip_bad_records: bool,
}
