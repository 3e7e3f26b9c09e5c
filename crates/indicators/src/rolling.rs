use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

/// A time-bounded trailing window over timestamped price observations.
///
/// The batch pipeline windows by a fixed count of daily bars; a streaming
/// host windows by wall-clock horizon instead ("everything seen in the last
/// five minutes"). One instance per instrument, owned by the caller — there
/// is no global registry.
#[derive(Debug)]
pub struct TrailingWindow {
    horizon: Duration,
    observations: VecDeque<(DateTime<Utc>, Decimal)>,
}

impl TrailingWindow {
    pub fn new(horizon: Duration) -> Self {
        Self {
            horizon,
            observations: VecDeque::new(),
        }
    }

    /// Records an observation and evicts everything older than the horizon,
    /// measured from the new observation's timestamp. Observations exactly
    /// at the cutoff are retained.
    pub fn push(&mut self, at: DateTime<Utc>, price: Decimal) {
        self.observations.push_back((at, price));
        let cutoff = at - self.horizon;
        while let Some((ts, _)) = self.observations.front() {
            if *ts < cutoff {
                self.observations.pop_front();
            } else {
                break;
            }
        }
    }

    /// Mean of the observations still inside the horizon, if any.
    pub fn mean(&self) -> Option<Decimal> {
        if self.observations.is_empty() {
            return None;
        }
        let sum: Decimal = self.observations.iter().map(|(_, price)| *price).sum();
        Some(sum / Decimal::from(self.observations.len()))
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
