//! Map preparation pipeline.
use std::fs;
use std::path::PathBuf;

use log::info;

use crate::aggregate;
use crate::enrich;
use crate::error::Error;
use crate::records;
use crate::reference::{self, ReferenceSet};
use crate::sampling;
use crate::writing;

use super::pipeline::Pipeline;

pub const ENRICHED_FILE: &str = "enriched.jsonl";
pub const AGGREGATES_FILE: &str = "aggregates.csv";
pub const SAMPLE_FILE: &str = "sample.jsonl";
pub const PALETTE_FILE: &str = "palette.json";

/// Full preparation run: reference + raw records in, renderer tables out.
///
/// Writes into `dst`:
/// - `enriched.jsonl`: the filtered and joined record table (kept so
///   sampling can be re-run without re-joining),
/// - `aggregates.csv`: per-country counts in display order (choropleth),
/// - `sample.jsonl` and `palette.json`: the seeded point sample and its
///   language color mapping (interactive map).
pub struct ChoroplethPrep {
    reference: PathBuf,
    records: PathBuf,
    dst: PathBuf,
    continent: String,
    sample_size: i64,
    seed: u64,
}

impl ChoroplethPrep {
    pub fn new(
        reference: PathBuf,
        records: PathBuf,
        dst: PathBuf,
        continent: String,
        sample_size: i64,
        seed: u64,
    ) -> Self {
        Self {
            reference,
            records,
            dst,
            continent,
            sample_size,
            seed,
        }
    }
}

impl Pipeline<()> for ChoroplethPrep {
    fn run(&self) -> Result<(), Error> {
        let entries = reference::load_reference(&self.reference)?;
        let entries = reference::filter_by_continent(entries, &self.continent);
        if entries.is_empty() {
            return Err(Error::Custom(format!(
                "no reference entries for continent {:?}",
                self.continent
            )));
        }
        let reference = ReferenceSet::new(entries);
        info!("{} reference countries in {}", reference.len(), self.continent);

        let raw = records::read_records(&self.records)?;
        let enriched = enrich::filter_and_enrich(raw, &reference);
        info!("{} enriched records", enriched.len());

        let rows = aggregate::normalize_and_order(aggregate::aggregate(&enriched));
        let sampled = sampling::sample(&enriched, self.sample_size, self.seed)?;
        let palette = writing::lang_palette(&sampled);
        info!(
            "{} aggregate rows, {} sampled points, {} languages",
            rows.len(),
            sampled.len(),
            palette.len()
        );

        fs::create_dir_all(&self.dst)?;
        writing::write_records(&self.dst.join(ENRICHED_FILE), &enriched)?;
        writing::write_aggregates(&self.dst.join(AGGREGATES_FILE), rows)?;
        writing::write_records(&self.dst.join(SAMPLE_FILE), &sampled)?;
        writing::write_palette(&self.dst.join(PALETTE_FILE), &palette)?;

        Ok(())
    }
}
