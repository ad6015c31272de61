/*! Filtering utilities

Filters operate at record level and implement [filter::Filter]:
a pure detection (two successive equal inputs give two equal outputs)
that decides whether a record is kept.
!*/
mod filter;
mod record;

pub use filter::Filter;
pub use record::RegionFilter;
