use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single simulated trade: one buy and, unless the position was still open
/// at series end, one sell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub buy_date: NaiveDate,
    pub buy_price: Decimal,
    /// `None` while the position is still open at series end.
    pub sell_date: Option<NaiveDate>,
    /// For an open trade this is the last bar's close, so `profit` is the
    /// marked-to-market value.
    pub sell_price: Decimal,
    pub profit: Decimal,
    pub profit_percent: Decimal,
    pub fast_ma_at_sell: Decimal,
    pub slow_ma_at_sell: Decimal,
}

impl Trade {
    /// Builds a trade record, deriving profit and profit percentage from the
    /// buy and sell prices. Nothing is rounded here.
    pub fn new(
        buy_date: NaiveDate,
        buy_price: Decimal,
        sell_date: Option<NaiveDate>,
        sell_price: Decimal,
        fast_ma_at_sell: Decimal,
        slow_ma_at_sell: Decimal,
    ) -> Self {
        let profit = sell_price - buy_price;
        Self {
            buy_date,
            buy_price,
            sell_date,
            sell_price,
            profit,
            profit_percent: profit / buy_price * Decimal::ONE_HUNDRED,
            fast_ma_at_sell,
            slow_ma_at_sell,
        }
    }

    pub fn is_open(&self) -> bool {
        self.sell_date.is_none()
    }
}

/// Aggregate performance over a trade list. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Report {
    /// Sum of every trade's profit, the open trade's unrealized profit
    /// included.
    pub total_profit: Decimal,
    pub trade_count: u32,
    /// Trades with profit strictly above zero.
    pub win_count: u32,
    /// Trades with profit strictly below zero. Break-even trades count
    /// toward neither side.
    pub loss_count: u32,
}

impl Report {
    /// Winning share of all trades, as a percentage. `None` with no trades.
    pub fn win_rate(&self) -> Option<f64> {
        if self.trade_count == 0 {
            return None;
        }
        Some(f64::from(self.win_count) / f64::from(self.trade_count) * 100.0)
    }
}
