//! Aggregate table writer.
use std::cmp::Reverse;
use std::path::Path;

use itertools::Itertools;

use crate::aggregate::AggregateRow;
use crate::error::Error;

/// Display order: sub-region categorical rank first (unmapped
/// sub-regions sink to the end), then count descending within each
/// sub-region, country code as final tiebreak.
pub fn sort_for_display(rows: Vec<AggregateRow>) -> Vec<AggregateRow> {
    rows.into_iter()
        .sorted_by_key(|row| {
            (
                row.region_rank.is_none(),
                row.region_rank,
                Reverse(row.count),
                row.country_code.clone(),
            )
        })
        .collect()
}

/// Write the aggregate table as csv, in display order.
pub fn write_aggregates(dst: &Path, rows: Vec<AggregateRow>) -> Result<(), Error> {
    let mut out = csv::WriterBuilder::new().from_path(dst)?;
    for row in sort_for_display(rows) {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(())
}
