/*! Record enrichment.

Joins kept records with their reference entry, attaching the country
display name and sub-region. Filtering happens first, so the join is
an exact match by construction.
!*/
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::filtering::{Filter, RegionFilter};
use crate::records::Record;
use crate::reference::ReferenceSet;

/// A record joined with its reference attributes.
///
/// Serializes flat (record fields alongside the joined ones) so the
/// enriched table reads like the upstream schema plus two columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    record: Record,
    country_name: String,
    sub_region: String,
}

impl EnrichedRecord {
    /// Country code, guaranteed resolved post-filter.
    pub fn country_code(&self) -> &str {
        self.record.country_code.as_deref().unwrap_or_default()
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Get a reference to the joined country name.
    pub fn country_name(&self) -> &str {
        &self.country_name
    }

    /// Get a reference to the joined sub-region.
    pub fn sub_region(&self) -> &str {
        &self.sub_region
    }
}

/// Filter records to the reference set and attach reference attributes.
///
/// Out-of-region records are dropped silently, relative order of kept
/// records is preserved. Every returned record carries a country name
/// and sub-region from the reference.
pub fn filter_and_enrich(records: Vec<Record>, reference: &ReferenceSet) -> Vec<EnrichedRecord> {
    let filter = RegionFilter::new(reference);
    let total = records.len();

    let enriched: Vec<EnrichedRecord> = records
        .into_iter()
        .filter(|record| filter.detect(record))
        .filter_map(|record| {
            let entry = reference.get(record.country_code.as_deref()?)?;
            Some(EnrichedRecord {
                country_name: entry.country_name.clone(),
                sub_region: entry.sub_region.clone(),
                record,
            })
        })
        .collect();

    debug!(
        "kept {} of {} records ({} out of region)",
        enriched.len(),
        total,
        total - enriched.len()
    );
    enriched
}

/// Read a persisted enriched table back from JSON-Lines.
pub fn read_enriched(src: &Path) -> Result<Vec<EnrichedRecord>, Error> {
    let reader = BufReader::new(File::open(src)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line)?);
    }
    debug!("read {} enriched records from {:?}", records.len(), src);
    Ok(records)
}
