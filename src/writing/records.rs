//! JSON-Lines record writer.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::enrich::EnrichedRecord;
use crate::error::Error;

/// Write enriched records as JSON-Lines, one record per line.
///
/// Used both for the enriched intermediate (kept around so sampling can
/// be re-run without re-joining) and for the point sample itself.
pub fn write_records(dst: &Path, records: &[EnrichedRecord]) -> Result<(), Error> {
    let mut out = BufWriter::new(File::create(dst)?);
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
