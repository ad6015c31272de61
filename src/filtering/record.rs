//! Record-level filtering.
use super::Filter;
use crate::records::Record;
use crate::reference::ReferenceSet;

/// Keeps records whose country code belongs to the reference set.
///
/// Records with no resolved country code, or with a code outside the
/// filtered reference (out-of-region noise from the bounding box
/// collection), are dropped.
pub struct RegionFilter<'a> {
    reference: &'a ReferenceSet,
}

impl<'a> RegionFilter<'a> {
    pub fn new(reference: &'a ReferenceSet) -> Self {
        RegionFilter { reference }
    }
}

impl Filter<&Record> for RegionFilter<'_> {
    fn detect(&self, record: &Record) -> bool {
        match record.country_code.as_deref() {
            Some(code) => self.reference.contains(code),
            None => false,
        }
    }
}
