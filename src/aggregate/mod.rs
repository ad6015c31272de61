/*! Per-country aggregation.

Groups enriched records by country and sub-region, counts them, then
applies display-name normalization and attaches the categorical
sub-region order consumed by the choropleth renderer.
!*/
mod counts;
pub mod names;
pub mod region;

use log::warn;
use serde::{Deserialize, Serialize};

pub use counts::aggregate;
pub use counts::CountryCounts;
pub use region::SubRegion;

/// One aggregated group: a `(country_code, country_name, sub_region)`
/// triple observed in the data, with its record count.
///
/// `region_rank` is the sub-region's position in the fixed categorical
/// order, attached by [normalize_and_order]; absent when the sub-region
/// falls outside the known domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    pub country_code: String,
    pub country_name: String,
    pub sub_region: String,
    pub count: u64,
    pub region_rank: Option<u8>,
}

/// Rewrite country names to their display forms and attach the
/// sub-region categorical rank.
///
/// A sub-region outside the fixed domain points at a reference-data
/// mismatch: the row is kept, rank-less, and reported loudly.
pub fn normalize_and_order(rows: Vec<AggregateRow>) -> Vec<AggregateRow> {
    rows.into_iter()
        .map(|mut row| {
            row.country_name = names::display_name(&row.country_name).to_string();
            row.region_rank = match SubRegion::from_name(&row.sub_region) {
                Some(region) => Some(region.rank()),
                None => {
                    warn!(
                        "unmapped sub-region {:?} for {} ({})",
                        row.sub_region, row.country_name, row.country_code
                    );
                    None
                }
            };
            row
        })
        .collect()
}
