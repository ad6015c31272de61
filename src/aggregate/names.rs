//! Country display names.
//!
//! A few official names are too long to label a choropleth; they get a
//! short display form, everything else passes through unchanged.
use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {

    /// Rewrites from official reference names to display names.
    /// No display form appears as a key, so the rewrite is idempotent.
    pub static ref DISPLAY_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Democratic Republic of the Congo", "DRC");
        m.insert("Central African Republic", "CAR");
        m.insert("United Republic of Tanzania", "Tanzania");
        m.insert("Republic of the Congo", "Congo");
        m.insert("Côte d'Ivoire", "Ivory Coast");
        m.insert("São Tomé and Príncipe", "São Tomé");

        m
    };
}

/// Display form of a country name (identity for unmapped names).
pub fn display_name(name: &str) -> &str {
    DISPLAY_NAMES.get(name).copied().unwrap_or(name)
}
