/*! Country reference table.

Loading and filtering of the static country reference data
(ISO codes, English names, continent and sub-region), along with
[ReferenceSet], the keyed form used for joining records.
!*/
use std::collections::HashMap;
use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Missing-value marker used by the reference table.
const NA: &str = "NA";

/// One row of the country reference table.
///
/// `name_pattern` is a regex-friendly variant of the country name,
/// carried through untouched for the renderer's geometry lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    #[serde(rename = "iso2c")]
    pub country_code: String,
    #[serde(rename = "country.name.en")]
    pub country_name: String,
    pub continent: String,
    #[serde(rename = "region")]
    pub sub_region: String,
    #[serde(rename = "country.name.en.regex")]
    pub name_pattern: Option<String>,
}

/// Load the reference table from a csv file.
///
/// Rows missing a country code (empty or `NA`) are skipped with a warning.
/// An unreadable source is fatal: there is no fallback reference data.
pub fn load_reference(src: &Path) -> Result<Vec<ReferenceEntry>, Error> {
    let mut reader = csv::ReaderBuilder::new().from_path(src)?;
    let mut entries = Vec::new();
    for row in reader.deserialize() {
        let entry: ReferenceEntry = row?;
        if entry.country_code.is_empty() || entry.country_code == NA {
            warn!("skipping reference row without country code: {:?}", entry.country_name);
            continue;
        }
        entries.push(entry);
    }
    debug!("loaded {} reference entries from {:?}", entries.len(), src);
    Ok(entries)
}

/// Keep the entries of a single continent (case-sensitive exact match).
pub fn filter_by_continent(entries: Vec<ReferenceEntry>, continent: &str) -> Vec<ReferenceEntry> {
    entries
        .into_iter()
        .filter(|entry| entry.continent == continent)
        .collect()
}

/// Reference entries keyed by country code.
///
/// Country codes are unique, so lookups yield at most one entry.
pub struct ReferenceSet {
    entries: HashMap<String, ReferenceEntry>,
}

impl ReferenceSet {
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            if let Some(previous) = map.insert(entry.country_code.clone(), entry) {
                warn!("duplicate reference entry for {}", previous.country_code);
            }
        }
        Self { entries: map }
    }

    /// `true` if `code` belongs to the reference set.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&ReferenceEntry> {
        self.entries.get(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
