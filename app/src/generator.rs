use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Writes a synthetic random-walk OHLCV CSV in the exact shape the loader
/// expects, one daily bar per row.
///
/// The walk is deterministic for a given seed, so generated fixtures can be
/// reproduced byte for byte.
pub fn write_random_walk(path: &Path, rows: usize, start_price: Decimal, seed: u64) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("could not create {}", path.display()))?;
    writer.write_record(["Date", "Open", "High", "Low", "Close", "Volume"])?;

    let mut rng = StdRng::seed_from_u64(seed);
    let start_date = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid fixed start date");
    let mut close = decimal_price(as_f64(start_price))?;

    for i in 0..rows {
        let date = start_date + chrono::Days::new(i as u64);
        let open = close;

        // Daily move within ±2%, floored so the walk never goes non-positive.
        let drift: f64 = rng.gen_range(-0.02..0.02);
        close = decimal_price((as_f64(open) * (1.0 + drift)).max(1.0))?;

        let spread: f64 = rng.gen_range(0.0..0.01);
        let high = decimal_price(as_f64(open.max(close)) * (1.0 + spread))?;
        let low = decimal_price((as_f64(open.min(close)) * (1.0 - spread)).max(0.5))?;
        let volume: u64 = rng.gen_range(100_000..5_000_000);

        writer.write_record([
            date.to_string(),
            open.to_string(),
            high.to_string(),
            low.to_string(),
            close.to_string(),
            volume.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

fn as_f64(price: Decimal) -> f64 {
    use rust_decimal::prelude::ToPrimitive;
    price.to_f64().unwrap_or(100.0)
}

fn decimal_price(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value)
        .map(|price| price.round_dp(2))
        .context("generated price was not a finite number")
}
