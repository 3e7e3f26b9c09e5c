//! Moving-average computation and crossover detection.
//!
//! The batch half of the pipeline: compute both SMAs over the closing
//! column, drop the warm-up bars where either is undefined, then derive the
//! regime and crossover events. `rolling` carries the time-bounded variant
//! used by streaming hosts.

pub mod crossover;
pub mod error;
pub mod rolling;
pub mod sma;
pub mod types;

pub use crossover::detect_crossovers;
pub use error::{Error, Result};
pub use rolling::TrailingWindow;
pub use types::MaCrossSettings;

use core_types::{MaBar, Series};

/// Computes fast and slow moving averages over the series' closes and drops
/// the leading bars where either is still undefined.
///
/// Retained bars keep their original date and prices. Settings are validated
/// up front: a bad window combination fails here, before any arithmetic.
pub fn compute_moving_averages(series: &Series, settings: &MaCrossSettings) -> Result<Vec<MaBar>> {
    settings.validate()?;

    let closes = series.closes();
    let fast = sma::rolling_mean(&closes, settings.fast_window);
    let slow = sma::rolling_mean(&closes, settings.slow_window);

    let bars = series
        .bars()
        .iter()
        .zip(fast.into_iter().zip(slow))
        .filter_map(|(bar, averages)| match averages {
            (Some(fast_ma), Some(slow_ma)) => Some(MaBar {
                bar: bar.clone(),
                fast_ma,
                slow_ma,
            }),
            _ => None,
        })
        .collect();

    Ok(bars)
}
