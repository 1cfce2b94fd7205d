//! Legend tick generation.
//!
//! A legend renders `n` evenly spaced color swatches; each swatch is labelled
//! with the data value that maps to its position, read back through the
//! normalizer's inverse.

use colornorm_core::{ColornormError, Result};
use colornorm_scale::Normalizer;
use tracing::debug;

/// Number of legend rows the map UI renders by default.
pub const DEFAULT_TICK_COUNT: usize = 11;

/// One legend row: a colormap position and the data value labelled there.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendTick {
    /// Position in `[0, 1]`, fed to the colormap lookup.
    pub position: f64,
    /// Data value at this position, via the normalizer's inverse.
    pub value: f64,
    /// Display label: the value rounded to the nearest integer.
    pub label: String,
}

/// Generate `n` evenly spaced legend ticks from a normalizer.
///
/// Positions run `0, 1/(n-1), .., 1`. The inverse is the unclipped one, so
/// the end labels are always the configured bounds even under clipping.
pub fn legend_ticks(norm: &Normalizer, n: usize) -> Result<Vec<LegendTick>> {
    if n < 2 {
        return Err(ColornormError::InvalidInput(format!(
            "need at least 2 legend ticks, got {n}"
        )));
    }

    let ticks = (0..n)
        .map(|i| {
            let position = i as f64 / (n - 1) as f64;
            let value = norm.denormalize(position);
            LegendTick {
                position,
                value,
                label: value.round().to_string(),
            }
        })
        .collect();

    debug!(count = n, "Generated legend ticks");
    Ok(ticks)
}
