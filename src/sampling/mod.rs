/*! Seeded record sampling.

Draws the fixed-size uniform subsample of enriched records shown on the
interactive point map. A single seeded [StdRng] makes repeated runs
reproducible.
!*/
use log::debug;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::enrich::EnrichedRecord;
use crate::error::Error;

/// Default number of points shown on the interactive map.
pub const DEFAULT_SAMPLE_SIZE: i64 = 1000;

/// Draw `min(n, len)` records uniformly without replacement.
///
/// Deterministic for identical `(records, n, seed)`. Negative `n` is
/// rejected, never clamped. Records with coarse place granularity (no
/// coordinates) stay in the candidate pool, matching the collector's
/// uniform passthrough.
pub fn sample(records: &[EnrichedRecord], n: i64, seed: u64) -> Result<Vec<EnrichedRecord>, Error> {
    if n < 0 {
        return Err(Error::InvalidSampleSize(n));
    }
    let amount = usize::try_from(n).unwrap_or(usize::MAX).min(records.len());

    let mut rng = StdRng::seed_from_u64(seed);
    let chosen = index::sample(&mut rng, records.len(), amount);

    debug!("sampled {} of {} records (seed {})", amount, records.len(), seed);
    Ok(chosen.into_iter().map(|i| records[i].clone()).collect())
}
