/*! Raw geotagged records.

Records come from the external collector, persisted as JSON-Lines:
either a single file or a directory of `*.jsonl` shards.
Everything here is read-only decoding; malformed lines are fatal since
the upstream source is trusted.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One collected social media post.
///
/// `country_code` is nullable: the collector could not always resolve
/// a place to a country. Coordinates may be absent for records with a
/// coarse place granularity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub country_code: Option<String>,
    pub lang: String,
    pub place_lat: Option<f64>,
    pub place_lon: Option<f64>,
    pub screen_name: String,
    pub text: String,
}

/// Read records from a single JSON-Lines file.
pub fn read_records_file(src: &Path) -> Result<Vec<Record>, Error> {
    let reader = BufReader::new(File::open(src)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    debug!("read {} records from {:?}", records.len(), src);
    Ok(records)
}

/// Read records from `src`: a JSON-Lines file, or a directory of
/// `*.jsonl` shards (read in lexicographic path order so repeated runs
/// see the same record order).
pub fn read_records(src: &Path) -> Result<Vec<Record>, Error> {
    if !src.is_dir() {
        return read_records_file(src);
    }

    let pattern = format!("{}/*.jsonl", src.display());
    let mut shards: Vec<_> = glob::glob(&pattern)?.collect::<Result<_, _>>()?;
    shards.sort();

    let mut records = Vec::new();
    for shard in &shards {
        records.extend(read_records_file(shard)?);
    }
    debug!("read {} records from {} shards", records.len(), shards.len());
    Ok(records)
}
