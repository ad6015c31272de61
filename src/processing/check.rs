//! This module verifies a produced preparation directory.
//!
//! It re-reads the enriched table and the aggregate csv and checks that
//! counts are conserved: every record is counted exactly once, and no
//! aggregate row refers to a country absent from the enriched table.
use std::collections::HashSet;
use std::path::Path;

use crate::aggregate::AggregateRow;
use crate::enrich;
use crate::error::Error;

/// Verify an aggregate table against the enriched table it came from.
///
/// Returns the number of verified records, or a [Error::Custom]
/// describing the first violated invariant.
pub fn check(enriched_src: &Path, aggregates_src: &Path) -> Result<u64, Error> {
    let enriched = enrich::read_enriched(enriched_src)?;

    let mut reader = csv::ReaderBuilder::new().from_path(aggregates_src)?;
    let rows: Vec<AggregateRow> = reader.deserialize().collect::<Result<_, _>>()?;

    let total: u64 = rows.iter().map(|row| row.count).sum();
    if total != enriched.len() as u64 {
        return Err(Error::Custom(format!(
            "count mismatch: {} aggregated vs {} enriched records",
            total,
            enriched.len()
        )));
    }

    let enriched_codes: HashSet<&str> = enriched.iter().map(|r| r.country_code()).collect();
    let aggregated_codes: HashSet<&str> =
        rows.iter().map(|row| row.country_code.as_str()).collect();

    for code in &aggregated_codes {
        if !enriched_codes.contains(code) {
            return Err(Error::Custom(format!(
                "aggregate row for {} has no enriched records",
                code
            )));
        }
    }
    for code in &enriched_codes {
        if !aggregated_codes.contains(code) {
            return Err(Error::Custom(format!(
                "enriched records for {} missing from aggregates",
                code
            )));
        }
    }

    Ok(total)
}
