//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "mapprep", about = "map preparation for geotagged records.")]
/// Holds every command that is callable by the `mapprep` command.
pub enum Mapprep {
    #[structopt(about = "Run the preparation pipeline")]
    Pipeline(Pipeline),
    #[structopt(about = "Re-sample a persisted enriched table")]
    Sample(Sample),
    #[structopt(about = "Verify a produced preparation directory")]
    Check(Check),
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "country reference csv")]
    pub reference: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "records location (jsonl file or directory of jsonl shards)"
    )]
    pub records: PathBuf,
    #[structopt(parse(from_os_str), help = "destination directory")]
    pub dst: PathBuf,
    #[structopt(
        help = "continent to keep (exact match on the reference data)",
        long = "continent",
        default_value = "Africa"
    )]
    pub continent: String,
    #[structopt(
        help = "number of records sampled for the point map",
        long = "sample-size",
        short = "n",
        default_value = "1000"
    )]
    pub sample_size: i64,
    #[structopt(help = "sampling seed", long = "seed", default_value = "42")]
    pub seed: u64,
}

#[derive(Debug, StructOpt)]
/// Sample command and parameters.
pub struct Sample {
    #[structopt(parse(from_os_str), help = "enriched table location (jsonl)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination directory")]
    pub dst: PathBuf,
    #[structopt(
        help = "number of records sampled for the point map",
        long = "sample-size",
        short = "n",
        default_value = "1000"
    )]
    pub sample_size: i64,
    #[structopt(help = "sampling seed", long = "seed", default_value = "42")]
    pub seed: u64,
}

#[derive(Debug, StructOpt)]
/// Check command and parameters.
pub struct Check {
    #[structopt(parse(from_os_str), help = "preparation directory to verify")]
    pub src: PathBuf,
}
