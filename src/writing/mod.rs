/*! Output writers.

Writers for everything the pipeline hands to the renderers: the
display-sorted aggregate csv (choropleth), JSON-Lines record tables
(enriched intermediate and point sample) and the language color
palette (interactive map).
!*/
mod aggregates;
mod palette;
mod records;

pub use aggregates::sort_for_display;
pub use aggregates::write_aggregates;
pub use palette::lang_palette;
pub use palette::write_palette;
pub use records::write_records;
