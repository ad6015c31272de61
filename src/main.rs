//! # Mapprep
//!
//! Mapprep prepares a corpus of geotagged social media records for map
//! rendering: it filters records to one continent's countries, joins
//! reference attributes, aggregates per-country counts for a choropleth
//! and draws a seeded sample for an interactive point map.
//!
//! This project can be used as a command line tool,
//! or as a lib to integrate the preparation stages into other projects.
//!
//! ## Getting started
//!
//! ```sh
//! mapprep 0.1.0
//! map preparation for geotagged records.
//!
//! USAGE:
//!     mapprep <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     check       Verify a produced preparation directory
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Run the preparation pipeline
//!     sample      Re-sample a persisted enriched table
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

use mapprep::cli;
use mapprep::enrich;
use mapprep::error;
use mapprep::pipeline::{
    ChoroplethPrep, AGGREGATES_FILE, ENRICHED_FILE, PALETTE_FILE, SAMPLE_FILE,
};
use mapprep::pipeline::pipeline::Pipeline;
use mapprep::processing;
use mapprep::sampling;
use mapprep::writing;

fn main() -> Result<(), error::Error> {
    env_logger::init();

    let opt = cli::Mapprep::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Mapprep::Pipeline(p) => {
            let p = ChoroplethPrep::new(
                p.reference,
                p.records,
                p.dst,
                p.continent,
                p.sample_size,
                p.seed,
            );
            p.run()?;
        }

        cli::Mapprep::Sample(s) => {
            let enriched = enrich::read_enriched(&s.src)?;
            let sampled = sampling::sample(&enriched, s.sample_size, s.seed)?;
            let palette = writing::lang_palette(&sampled);

            std::fs::create_dir_all(&s.dst)?;
            writing::write_records(&s.dst.join(SAMPLE_FILE), &sampled)?;
            writing::write_palette(&s.dst.join(PALETTE_FILE), &palette)?;
            info!("{} points sampled from {:?}", sampled.len(), s.src);
        }

        cli::Mapprep::Check(c) => {
            let nb_records = processing::check::check(
                &c.src.join(ENRICHED_FILE),
                &c.src.join(AGGREGATES_FILE),
            )?;
            println!("check ok: {} records conserved", nb_records);
        }
    };
    Ok(())
}
