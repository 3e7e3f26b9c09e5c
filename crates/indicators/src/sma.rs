use rust_decimal::Decimal;

/// Simple moving average over the trailing `window` values.
///
/// The output is aligned with the input: entry `i` is the mean of
/// `values[i - window + 1 ..= i]`, so the first `window - 1` entries are
/// `None`. Sums stay in exact `Decimal` arithmetic; nothing is rounded here.
pub fn rolling_mean(values: &[Decimal], window: usize) -> Vec<Option<Decimal>> {
    if window == 0 || window > values.len() {
        return vec![None; values.len()];
    }

    let mut out = Vec::with_capacity(values.len());
    for _ in 0..window - 1 {
        out.push(None);
    }

    let divisor = Decimal::from(window);
    let mut sum: Decimal = values.iter().take(window).sum();
    out.push(Some(sum / divisor));

    for i in window..values.len() {
        sum = sum - values[i - window] + values[i];
        out.push(Some(sum / divisor));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn means_over_a_short_ramp() {
        let values = vec![dec!(1), dec!(2), dec!(3), dec!(4), dec!(5)];
        let sma = rolling_mean(&values, 3);

        assert_eq!(sma.len(), 5);
        assert_eq!(sma[0], None);
        assert_eq!(sma[1], None);
        assert_eq!(sma[2], Some(dec!(2))); // (1+2+3)/3
        assert_eq!(sma[3], Some(dec!(3))); // (2+3+4)/3
        assert_eq!(sma[4], Some(dec!(4))); // (3+4+5)/3
    }

    #[test]
    fn window_of_one_is_the_series_itself() {
        let values = vec![dec!(7.5), dec!(8.25)];
        let sma = rolling_mean(&values, 1);
        assert_eq!(sma, vec![Some(dec!(7.5)), Some(dec!(8.25))]);
    }

    #[test]
    fn window_longer_than_the_series_is_all_undefined() {
        let values = vec![dec!(1), dec!(2)];
        assert_eq!(rolling_mean(&values, 3), vec![None, None]);
    }

    #[test]
    fn constant_series_stays_constant() {
        let values = vec![dec!(100); 10];
        let sma = rolling_mean(&values, 4);
        for entry in sma.iter().skip(3) {
            assert_eq!(*entry, Some(dec!(100)));
        }
    }

    #[test]
    fn fractional_means_are_exact() {
        let values = vec![dec!(1), dec!(2)];
        let sma = rolling_mean(&values, 2);
        assert_eq!(sma[1], Some(dec!(1.5)));
    }
}
