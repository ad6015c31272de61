//! Sub-region categorical order.
use serde::{Deserialize, Serialize};

/// The five canonical African sub-regions of the reference data, in
/// display priority order (north to south).
///
/// The order is carried explicitly as a rank on aggregate rows rather
/// than as ambient sort configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SubRegion {
    NorthernAfrica,
    WesternAfrica,
    MiddleAfrica,
    EasternAfrica,
    SouthernAfrica,
}

impl SubRegion {
    /// Display priority order.
    pub const ORDER: [SubRegion; 5] = [
        SubRegion::NorthernAfrica,
        SubRegion::WesternAfrica,
        SubRegion::MiddleAfrica,
        SubRegion::EasternAfrica,
        SubRegion::SouthernAfrica,
    ];

    /// Parse a reference-data sub-region name. `None` for anything
    /// outside the five-value domain.
    pub fn from_name(name: &str) -> Option<SubRegion> {
        match name {
            "Northern Africa" => Some(SubRegion::NorthernAfrica),
            "Western Africa" => Some(SubRegion::WesternAfrica),
            "Middle Africa" => Some(SubRegion::MiddleAfrica),
            "Eastern Africa" => Some(SubRegion::EasternAfrica),
            "Southern Africa" => Some(SubRegion::SouthernAfrica),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubRegion::NorthernAfrica => "Northern Africa",
            SubRegion::WesternAfrica => "Western Africa",
            SubRegion::MiddleAfrica => "Middle Africa",
            SubRegion::EasternAfrica => "Eastern Africa",
            SubRegion::SouthernAfrica => "Southern Africa",
        }
    }

    /// Position in [SubRegion::ORDER].
    pub fn rank(&self) -> u8 {
        match self {
            SubRegion::NorthernAfrica => 0,
            SubRegion::WesternAfrica => 1,
            SubRegion::MiddleAfrica => 2,
            SubRegion::EasternAfrica => 3,
            SubRegion::SouthernAfrica => 4,
        }
    }
}
