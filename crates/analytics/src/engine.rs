use rust_decimal::Decimal;

use crate::types::{Report, Trade};

/// The engine responsible for aggregating a trade list into a report.
#[derive(Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sums and partitions the trade list.
    ///
    /// The open trade, if present, contributes its marked-to-market profit
    /// to the total alongside the realized trades. Break-even trades count
    /// toward neither wins nor losses.
    pub fn summarize(&self, trades: &[Trade]) -> Report {
        Report {
            total_profit: trades.iter().map(|t| t.profit).sum(),
            trade_count: trades.len() as u32,
            win_count: trades.iter().filter(|t| t.profit > Decimal::ZERO).count() as u32,
            loss_count: trades.iter().filter(|t| t.profit < Decimal::ZERO).count() as u32,
        }
    }
}
