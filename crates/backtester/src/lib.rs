//! The trade simulator and the pipeline that drives it.
//!
//! [`simulate`] is a pure fold over the annotated bar stream; [`Backtester`]
//! wires indicators, simulator and analytics together for a full historical
//! run over a loaded series.

pub mod error;

pub use error::{Error, Result};

use analytics::{AnalyticsEngine, Report, Trade};
use chrono::NaiveDate;
use core_types::{AnnotatedBar, CrossoverEvent, Series};
use indicators::MaCrossSettings;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// The simulator's position between bars. One unit, long only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Position {
    #[default]
    Flat,
    Long {
        buy_date: NaiveDate,
        buy_price: Decimal,
    },
}

/// Folds the annotated bar stream into an ordered trade list.
///
/// A golden cross while flat opens a position at that bar's close; a death
/// cross while long closes it, snapshotting both averages from the sell bar.
/// A golden cross while already long is ignored (no pyramiding), as is a
/// death cross while flat (no shorting). A position still open after the
/// last bar becomes one final trade marked to the last close, with no sell
/// date. Zero crossovers produce an empty list, which is a valid outcome.
pub fn simulate(bars: &[AnnotatedBar]) -> Vec<Trade> {
    let mut trades = Vec::new();
    let mut position = Position::Flat;

    for annotated in bars {
        match (position, annotated.event) {
            (Position::Flat, CrossoverEvent::GoldenCross) => {
                debug!(
                    date = %annotated.bar.date,
                    price = %annotated.bar.close,
                    "golden cross, opening long position"
                );
                position = Position::Long {
                    buy_date: annotated.bar.date,
                    buy_price: annotated.bar.close,
                };
            }
            (Position::Long { buy_date, buy_price }, CrossoverEvent::DeathCross) => {
                debug!(
                    date = %annotated.bar.date,
                    price = %annotated.bar.close,
                    "death cross, closing long position"
                );
                trades.push(Trade::new(
                    buy_date,
                    buy_price,
                    Some(annotated.bar.date),
                    annotated.bar.close,
                    annotated.fast_ma,
                    annotated.slow_ma,
                ));
                position = Position::Flat;
            }
            // A second golden cross while long and a death cross while flat
            // are both ignored.
            _ => {}
        }
    }

    if let (Position::Long { buy_date, buy_price }, Some(last)) = (position, bars.last()) {
        debug!(date = %last.bar.date, "series ended long, marking open position to last close");
        trades.push(Trade::new(
            buy_date,
            buy_price,
            None,
            last.bar.close,
            last.fast_ma,
            last.slow_ma,
        ));
    }

    trades
}

/// The engine for running a full historical simulation over a loaded series.
pub struct Backtester {
    settings: MaCrossSettings,
}

impl Backtester {
    pub fn new(settings: MaCrossSettings) -> Self {
        Self { settings }
    }

    /// Runs indicators → simulator → analytics over the series.
    ///
    /// Every stage is a pure function of its predecessor's output, so two
    /// runs over the same series return identical trades and report.
    pub fn run(&self, series: &Series) -> Result<(Report, Vec<Trade>)> {
        info!(
            rows = series.len(),
            fast_window = self.settings.fast_window,
            slow_window = self.settings.slow_window,
            "starting simulation"
        );

        let ma_bars = indicators::compute_moving_averages(series, &self.settings)?;
        let annotated = indicators::detect_crossovers(ma_bars);
        debug!(retained_bars = annotated.len(), "moving averages and crossovers ready");

        let trades = simulate(&annotated);
        let report = AnalyticsEngine::new().summarize(&trades);
        info!(
            trades = trades.len(),
            total_profit = %report.total_profit,
            "simulation finished"
        );

        Ok((report, trades))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{PriceBar, Regime};
    use rust_decimal_macros::dec;

    fn day(offset: u64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(offset)
    }

    fn annotated(offset: u64, close: Decimal, regime: Regime, event: CrossoverEvent) -> AnnotatedBar {
        AnnotatedBar {
            bar: PriceBar {
                date: day(offset),
                open: close,
                high: close,
                low: close,
                close,
                volume: 100,
            },
            fast_ma: close,
            slow_ma: close,
            regime,
            event,
        }
    }

    #[test]
    fn a_round_trip_emits_one_closed_trade() {
        let bars = vec![
            annotated(0, dec!(10), Regime::Bearish, CrossoverEvent::None),
            annotated(1, dec!(12), Regime::Bullish, CrossoverEvent::GoldenCross),
            annotated(2, dec!(13), Regime::Bullish, CrossoverEvent::None),
            annotated(3, dec!(11), Regime::Bearish, CrossoverEvent::DeathCross),
            annotated(4, dec!(9), Regime::Bearish, CrossoverEvent::None),
        ];

        let trades = simulate(&bars);

        assert_eq!(trades.len(), 1);
        let trade = &trades[0];
        assert_eq!(trade.buy_date, day(1));
        assert_eq!(trade.buy_price, dec!(12));
        assert_eq!(trade.sell_date, Some(day(3)));
        assert_eq!(trade.sell_price, dec!(11));
        assert_eq!(trade.profit, dec!(-1));
    }

    #[test]
    fn an_unclosed_position_is_marked_to_the_last_close() {
        let bars = vec![
            annotated(0, dec!(10), Regime::Bearish, CrossoverEvent::None),
            annotated(1, dec!(12), Regime::Bullish, CrossoverEvent::GoldenCross),
            annotated(2, dec!(15), Regime::Bullish, CrossoverEvent::None),
        ];

        let trades = simulate(&bars);

        assert_eq!(trades.len(), 1);
        let trade = &trades[0];
        assert!(trade.is_open());
        assert_eq!(trade.sell_date, None);
        assert_eq!(trade.sell_price, dec!(15));
        assert_eq!(trade.profit, dec!(3));
    }

    #[test]
    fn a_death_cross_while_flat_is_ignored() {
        let bars = vec![
            annotated(0, dec!(12), Regime::Bullish, CrossoverEvent::None),
            annotated(1, dec!(10), Regime::Bearish, CrossoverEvent::DeathCross),
        ];
        assert!(simulate(&bars).is_empty());
    }

    #[test]
    fn a_second_golden_cross_does_not_pyramid() {
        // Golden → (spurious) golden → death must yield a single trade
        // opened at the first cross.
        let bars = vec![
            annotated(0, dec!(10), Regime::Bearish, CrossoverEvent::None),
            annotated(1, dec!(12), Regime::Bullish, CrossoverEvent::GoldenCross),
            annotated(2, dec!(14), Regime::Bullish, CrossoverEvent::GoldenCross),
            annotated(3, dec!(11), Regime::Bearish, CrossoverEvent::DeathCross),
        ];

        let trades = simulate(&bars);

        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].buy_price, dec!(12));
    }

    #[test]
    fn no_crossovers_yield_no_trades() {
        let bars: Vec<AnnotatedBar> = (0..5)
            .map(|i| annotated(i, dec!(10), Regime::Bearish, CrossoverEvent::None))
            .collect();
        assert!(simulate(&bars).is_empty());
    }

    #[test]
    fn an_empty_stream_yields_no_trades() {
        assert!(simulate(&[]).is_empty());
    }

    #[test]
    fn the_open_trade_is_always_last() {
        let bars = vec![
            annotated(0, dec!(10), Regime::Bearish, CrossoverEvent::None),
            annotated(1, dec!(12), Regime::Bullish, CrossoverEvent::GoldenCross),
            annotated(2, dec!(11), Regime::Bearish, CrossoverEvent::DeathCross),
            annotated(3, dec!(13), Regime::Bullish, CrossoverEvent::GoldenCross),
            annotated(4, dec!(14), Regime::Bullish, CrossoverEvent::None),
        ];

        let trades = simulate(&bars);

        assert_eq!(trades.len(), 2);
        assert!(!trades[0].is_open());
        assert!(trades[1].is_open());
    }

    #[test]
    fn ma_snapshot_comes_from_the_sell_bar() {
        let mut sell_bar = annotated(2, dec!(11), Regime::Bearish, CrossoverEvent::DeathCross);
        sell_bar.fast_ma = dec!(11.25);
        sell_bar.slow_ma = dec!(11.75);
        let bars = vec![
            annotated(0, dec!(10), Regime::Bearish, CrossoverEvent::None),
            annotated(1, dec!(12), Regime::Bullish, CrossoverEvent::GoldenCross),
            sell_bar,
        ];

        let trades = simulate(&bars);

        assert_eq!(trades[0].fast_ma_at_sell, dec!(11.25));
        assert_eq!(trades[0].slow_ma_at_sell, dec!(11.75));
    }
}
