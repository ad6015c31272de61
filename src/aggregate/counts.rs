//! Group-and-count over enriched records.
use std::collections::HashMap;

use itertools::Itertools;

use crate::enrich::EnrichedRecord;

use super::AggregateRow;

/// Grouping key: the triple actually observed in the data.
type GroupKey = (String, String, String);

/// Record counter over `(country_code, country_name, sub_region)` groups.
///
/// Countries without any record never appear: groups are derived from
/// the data, not from the full reference domain.
#[derive(Default)]
pub struct CountryCounts {
    counts: HashMap<GroupKey, u64>,
    nb_records: u64,
}

impl CountryCounts {
    /// Count one enriched record in its group.
    pub fn add(&mut self, record: &EnrichedRecord) {
        let key = (
            record.country_code().to_string(),
            record.country_name().to_string(),
            record.sub_region().to_string(),
        );
        self.counts
            .entry(key)
            .and_modify(|count| *count += 1)
            .or_insert(1);

        self.nb_records += 1;
    }

    /// Total number of counted records (equals the sum of group counts).
    pub fn nb_records(&self) -> u64 {
        self.nb_records
    }

    /// One row per observed group, largest groups first (ties broken by
    /// country code so repeated runs emit identical tables).
    pub fn rows(&self) -> Vec<AggregateRow> {
        self.counts
            .iter()
            .sorted_by(|a, b| b.1.cmp(a.1).then_with(|| a.0 .0.cmp(&b.0 .0)))
            .map(|((code, name, sub_region), count)| AggregateRow {
                country_code: code.clone(),
                country_name: name.clone(),
                sub_region: sub_region.clone(),
                count: *count,
                region_rank: None,
            })
            .collect()
    }
}

/// Aggregate enriched records into per-country rows.
pub fn aggregate(records: &[EnrichedRecord]) -> Vec<AggregateRow> {
    let mut counts = CountryCounts::default();
    for record in records {
        counts.add(record);
    }
    counts.rows()
}
