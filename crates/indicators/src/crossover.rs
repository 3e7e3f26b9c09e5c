use core_types::{AnnotatedBar, CrossoverEvent, MaBar, Regime};

/// Fills regime and crossover event for each bar.
///
/// The regime is `Bullish` only when the fast MA is strictly above the slow
/// MA; an exact tie is `Bearish`, so a touch without a true cross never opens
/// a position. A golden cross fires on the first bullish bar after a bearish
/// or undefined regime — a series that is already bullish on its first bar
/// with both averages defined opens long immediately. A death cross needs a
/// prior bullish bar, so an opening bearish bar carries no event.
pub fn detect_crossovers(bars: Vec<MaBar>) -> Vec<AnnotatedBar> {
    let mut annotated = Vec::with_capacity(bars.len());
    let mut previous: Option<Regime> = None;

    for MaBar { bar, fast_ma, slow_ma } in bars {
        let regime = if fast_ma > slow_ma {
            Regime::Bullish
        } else {
            Regime::Bearish
        };
        let event = match (previous, regime) {
            (None | Some(Regime::Bearish), Regime::Bullish) => CrossoverEvent::GoldenCross,
            (Some(Regime::Bullish), Regime::Bearish) => CrossoverEvent::DeathCross,
            _ => CrossoverEvent::None,
        };
        previous = Some(regime);

        annotated.push(AnnotatedBar {
            bar,
            fast_ma,
            slow_ma,
            regime,
            event,
        });
    }

    annotated
}
