//! # lexmerge
//!
//! Merges phonologically annotated lexical corpora into a single labeled
//! dataset.
//!
//! ```sh
//! lexmerge merge combined.csv \
//!     --corpus lexique:fra:data/lexique.tsv \
//!     --corpus sampa:esp:data/esp.csv
//! ```
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use lexmerge::error::Error;
use lexmerge::pipeline::{ErrorPolicy, MergePipeline, Pipeline};

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Lexmerge::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Lexmerge::Merge(m) => {
            let policy = if m.skip_bad_records {
                ErrorPolicy::Skip
            } else {
                ErrorPolicy::Abort
            };
            let pipeline = MergePipeline::new(m.corpora, m.dst, policy);
            let combined = pipeline.run()?;
            info!("combined table holds {} records", combined.len());
        }
    };
    Ok(())
}
