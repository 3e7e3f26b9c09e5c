use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar of the input series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
}

/// A validated, date-ascending price series.
///
/// Constructed by the loader after schema validation and sorting; immutable
/// for the rest of the pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    bars: Vec<PriceBar>,
}

impl Series {
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The closing-price column, in series order.
    pub fn closes(&self) -> Vec<Decimal> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

/// The market regime derived from comparing the fast and slow moving average.
///
/// Equality of the two averages counts as `Bearish`: an exact tie does not
/// produce a new long signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Regime {
    Bullish,
    Bearish,
}

/// A crossover event at a single bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverEvent {
    None,
    /// Fast MA crossed from at/below to above the slow MA.
    GoldenCross,
    /// Fast MA crossed from above to at/below the slow MA.
    DeathCross,
}

/// A bar with both moving averages defined.
///
/// Bars from the warm-up period, where either average is still undefined,
/// never appear as `MaBar`s; they are dropped before crossover detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaBar {
    pub bar: PriceBar,
    pub fast_ma: Decimal,
    pub slow_ma: Decimal,
}

/// A fully annotated bar: moving averages, regime and crossover event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedBar {
    pub bar: PriceBar,
    pub fast_ma: Decimal,
    pub slow_ma: Decimal,
    pub regime: Regime,
    pub event: CrossoverEvent,
}
