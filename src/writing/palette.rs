//! Language color palette.
//!
//! The interactive renderer colors points by language; it expects a
//! mapping from each distinct language tag to a color.
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::warn;
use oxilangtag::LanguageTag;

use crate::enrich::EnrichedRecord;
use crate::error::Error;

/// Point colors, cycled when there are more languages than colors.
pub const COLORS: [&str; 12] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#aec7e8", "#ffbb78",
];

/// Normalize a record's language tag to its bcp47 form.
/// Tags the parser rejects are kept verbatim so they still get a color.
fn normalize_tag(lang: &str) -> String {
    match LanguageTag::parse_and_normalize(lang) {
        Ok(tag) => tag.to_string(),
        Err(e) => {
            warn!("unparseable language tag {:?}: {}", lang, e);
            lang.to_string()
        }
    }
}

/// Assign a color to each distinct language tag of `records`.
///
/// Tags are normalized and assigned in sorted order, so the mapping is
/// deterministic for a given record set.
pub fn lang_palette(records: &[EnrichedRecord]) -> BTreeMap<String, String> {
    let tags: std::collections::BTreeSet<String> = records
        .iter()
        .map(|record| normalize_tag(&record.record().lang))
        .collect();

    tags.into_iter()
        .enumerate()
        .map(|(i, tag)| (tag, COLORS[i % COLORS.len()].to_string()))
        .collect()
}

/// Write the palette as a json object keyed by language tag.
pub fn write_palette(dst: &Path, palette: &BTreeMap<String, String>) -> Result<(), Error> {
    let out = BufWriter::new(File::create(dst)?);
    serde_json::to_writer_pretty(out, palette)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::filter_and_enrich;
    use crate::records::Record;
    use crate::reference::{ReferenceEntry, ReferenceSet};

    fn enriched(langs: &[&str]) -> Vec<EnrichedRecord> {
        let reference = ReferenceSet::new(vec![ReferenceEntry {
            country_code: "KE".to_string(),
            country_name: "Kenya".to_string(),
            continent: "Africa".to_string(),
            sub_region: "Eastern Africa".to_string(),
            name_pattern: None,
        }]);
        let raw = langs
            .iter()
            .map(|lang| Record {
                country_code: Some("KE".to_string()),
                lang: lang.to_string(),
                place_lat: None,
                place_lon: None,
                screen_name: "someone".to_string(),
                text: "hello".to_string(),
            })
            .collect();
        filter_and_enrich(raw, &reference)
    }

    #[test]
    fn test_one_color_per_distinct_tag() {
        let palette = lang_palette(&enriched(&["en", "sw", "en", "fr"]));
        assert_eq!(palette.len(), 3);
        assert!(palette.contains_key("en"));
        assert!(palette.contains_key("sw"));
        assert!(palette.contains_key("fr"));
    }

    #[test]
    fn test_tags_normalized() {
        let palette = lang_palette(&enriched(&["EN", "en"]));
        assert_eq!(palette.len(), 1);
        assert!(palette.contains_key("en"));
    }

    #[test]
    fn test_deterministic_assignment() {
        let records = enriched(&["sw", "ar", "fr"]);
        assert_eq!(lang_palette(&records), lang_palette(&records));
        // sorted assignment: ar gets the first color
        assert_eq!(lang_palette(&records)["ar"], COLORS[0]);
    }
}
