use crate::types::{Report, Trade};

/// Rendered in the sell-date column of a trade that is still open.
pub const OPEN_POSITION_MARKER: &str = "Open Position";

/// Renders the downloadable CSV report: one row per trade, a blank separator
/// line, then four summary rows.
///
/// Values are rounded to two decimal places here and nowhere earlier, so the
/// rolling computation never accumulates rounding error.
pub fn render_csv(trades: &[Trade], report: &Report) -> String {
    let mut out =
        String::from("Buy Date,Buy Price,Sell Date,Sell Price,Profit,Profit %,Fast MA,Slow MA\n");

    for trade in trades {
        let sell_date = trade
            .sell_date
            .map(|date| date.to_string())
            .unwrap_or_else(|| OPEN_POSITION_MARKER.to_string());
        out.push_str(&format!(
            "{},{:.2},{},{:.2},{:.2},{:.2},{:.2},{:.2}\n",
            trade.buy_date,
            trade.buy_price,
            sell_date,
            trade.sell_price,
            trade.profit,
            trade.profit_percent,
            trade.fast_ma_at_sell,
            trade.slow_ma_at_sell,
        ));
    }

    out.push('\n');
    out.push_str(&format!("Total Profit/Loss,{:.2}\n", report.total_profit));
    out.push_str(&format!("Total Trades,{}\n", report.trade_count));
    out.push_str(&format!("Winning Trades,{}\n", report.win_count));
    out.push_str(&format!("Losing Trades,{}\n", report.loss_count));

    out
}
