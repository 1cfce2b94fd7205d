mod centered;
mod linear;
mod log;
mod symlog;

pub use centered::CenteredNorm;
pub use linear::LinearNorm;
pub use log::LogNorm;
pub use symlog::SymLogNorm;

use colornorm_core::{ScaleKind, StyleConfig};
use tracing::info;

/// The closed set of scaling policies behind one contract.
///
/// `normalize` returns `None` only for the `Log` variant's negative-input
/// case; every other variant maps every input to `Some` value (possibly
/// outside `[0, 1]` when clipping is off, possibly non-finite for degenerate
/// configurations).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalizer {
    Linear(LinearNorm),
    Log(LogNorm),
    Centered(CenteredNorm),
    SymLog(SymLogNorm),
}

impl Normalizer {
    /// Build the normalizer selected by a style configuration.
    pub fn from_config(config: &StyleConfig) -> Self {
        info!(
            scale = ?config.scale,
            vmin = config.vmin,
            vmax = config.vmax,
            clip = config.clip,
            "Building normalizer"
        );
        match config.scale {
            ScaleKind::Normal => {
                Normalizer::Linear(LinearNorm::new(config.vmin, config.vmax, config.clip))
            }
            ScaleKind::Log => Normalizer::Log(LogNorm::new(config.vmin, config.vmax, config.clip)),
            ScaleKind::Centered { vcenter, halfrange } => {
                Normalizer::Centered(CenteredNorm::new(vcenter, halfrange, config.clip))
            }
            ScaleKind::SymLog {
                linthresh,
                linscale,
                vcenter,
            } => Normalizer::SymLog(SymLogNorm::new(
                linthresh,
                config.vmin,
                config.vmax,
                linscale,
                vcenter,
                config.clip,
            )),
        }
    }

    /// Map a data value to its colormap position.
    pub fn normalize(&self, x: f64) -> Option<f64> {
        match self {
            Normalizer::Linear(norm) => Some(norm.normalize(x)),
            Normalizer::Log(norm) => norm.normalize(x),
            Normalizer::Centered(norm) => Some(norm.normalize(x)),
            Normalizer::SymLog(norm) => Some(norm.normalize(x)),
        }
    }

    /// Map a colormap position back to a data value.
    pub fn denormalize(&self, t: f64) -> f64 {
        match self {
            Normalizer::Linear(norm) => norm.denormalize(t),
            Normalizer::Log(norm) => norm.denormalize(t),
            Normalizer::Centered(norm) => norm.denormalize(t),
            Normalizer::SymLog(norm) => norm.denormalize(t),
        }
    }
}
