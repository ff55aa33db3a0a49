//! Indicator properties: alignment, undefined prefixes, fixed points,
//! rolling-vs-reference conformance, and look-ahead contamination.
//!
//! Look-ahead method: compute on a truncated prefix and on the full series;
//! the prefix values must be identical. Any difference means an indicator is
//! leaking future prices into past values.

use proptest::prelude::*;
use quantlab_core::indicators::*;
use quantlab_core::numeric::undefined_prefix;

/// Deterministic pseudo-random walk, floored at 10.
fn make_prices(n: usize) -> Vec<f64> {
    let mut price = 100.0;
    (0..n)
        .map(|i| {
            let seed = (i as u64)
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let change = ((seed >> 33) % 200) as f64 * 0.05 - 5.0;
            price = (price + change).max(10.0);
            price
        })
        .collect()
}

fn all_indicators() -> Vec<Box<dyn Indicator>> {
    vec![
        Box::new(Sma::new(20).unwrap()),
        Box::new(Ema::new(12).unwrap()),
        Box::new(Bollinger::upper(20, 2.0).unwrap()),
        Box::new(Bollinger::middle(20, 2.0).unwrap()),
        Box::new(Bollinger::lower(20, 2.0).unwrap()),
        Box::new(Rsi::new(14).unwrap()),
        Box::new(Momentum::new(10).unwrap()),
        Box::new(Roc::new(10).unwrap()),
        Box::new(Macd::new(12, 26, 9, MacdLine::Macd).unwrap()),
        Box::new(Macd::new(12, 26, 9, MacdLine::Signal).unwrap()),
    ]
}

fn assert_no_lookahead(indicator: &dyn Indicator, full: &[f64], truncated_len: usize) {
    let full_result = indicator.compute(full);
    let truncated_result = indicator.compute(&full[..truncated_len]);

    assert_eq!(full_result.len(), full.len(), "{}: full length", indicator.name());
    assert_eq!(
        truncated_result.len(),
        truncated_len,
        "{}: truncated length",
        indicator.name()
    );
    assert_eq!(
        &full_result[..truncated_len],
        &truncated_result[..],
        "{}: values differ between truncated and full series",
        indicator.name()
    );
}

#[test]
fn no_indicator_looks_ahead() {
    let prices = make_prices(200);
    for indicator in all_indicators() {
        assert_no_lookahead(indicator.as_ref(), &prices, 100);
        assert_no_lookahead(indicator.as_ref(), &prices, 37);
    }
}

#[test]
fn undefined_prefix_matches_lookback() {
    let prices = make_prices(120);
    for indicator in all_indicators() {
        let series = indicator.compute(&prices);
        assert_eq!(
            undefined_prefix(&series),
            indicator.lookback(),
            "{}: prefix",
            indicator.name()
        );
        assert!(
            series[indicator.lookback()..].iter().all(Option::is_some),
            "{}: gap after warmup",
            indicator.name()
        );
    }
}

#[test]
fn constant_input_fixed_points() {
    let prices = vec![42.5; 60];

    for v in simple_moving_average(&prices, 7).unwrap().into_iter().flatten() {
        assert!((v - 42.5).abs() < 1e-9);
    }
    for v in exponential_moving_average(&prices, 7).unwrap().into_iter().flatten() {
        assert!((v - 42.5).abs() < 1e-9);
    }

    let (lower, upper) = bollinger_bands(&prices, 7, 2.0).unwrap();
    for (lo, up) in lower.iter().zip(&upper).skip(6) {
        let (lo, up) = (lo.unwrap(), up.unwrap());
        assert!((up - lo).abs() < 1e-9, "bandwidth must be zero");
        assert!((lo - 42.5).abs() < 1e-9);
    }

    let rsi = relative_strength_index(&prices, 5).unwrap();
    assert!(rsi.iter().flatten().all(|&v| v == 100.0));
}

#[test]
fn rsi_on_rising_sequence() {
    let rsi = relative_strength_index(&[0.0, 1.0, 2.0, 3.0, 4.0], 3).unwrap();
    assert_eq!(rsi, vec![None, None, None, Some(100.0), Some(100.0)]);
}

#[test]
fn roc_with_zero_base_is_undefined() {
    let roc = rate_of_change(&[0.0, 0.0, 1.0], 1).unwrap();
    assert_eq!(roc, vec![None, None, None]);
}

#[test]
fn macd_steady_state_is_exactly_zero() {
    let (macd_line, signal_line) = macd(&[50.0; 35], 12, 26, 9).unwrap();
    assert_eq!(macd_line[34], Some(0.0));
    assert_eq!(signal_line[34], Some(0.0));
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(simple_moving_average(&[1.0], 0).is_err());
    assert!(sma_rolling(&[1.0], 0).is_err());
    assert!(exponential_moving_average(&[1.0], 0).is_err());
    assert!(bollinger_bands(&[1.0], 2, -1.0).is_err());
    assert!(bollinger_bands(&[1.0], 2, f64::NAN).is_err());
    assert!(relative_strength_index(&[1.0], 0).is_err());
    assert!(momentum(&[1.0], 0).is_err());
    assert!(rate_of_change(&[1.0], 0).is_err());
    assert!(macd(&[1.0], 26, 12, 9).is_err());
    assert!(macd(&[1.0], 12, 12, 9).is_err());
    assert!(macd(&[1.0], 12, 26, 0).is_err());
}

#[test]
fn short_input_is_all_undefined() {
    let prices = [1.0, 2.0];
    assert_eq!(simple_moving_average(&prices, 5).unwrap(), vec![None, None]);
    assert_eq!(momentum(&prices, 2).unwrap(), vec![None, None]);
    assert!(simple_moving_average(&[], 3).unwrap().is_empty());
}

fn arb_prices() -> impl proptest::strategy::Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, 0..120)
}

proptest! {
    /// Every indicator output is aligned 1:1 with its input.
    #[test]
    fn outputs_are_aligned(prices in arb_prices(), window in 1usize..30) {
        let n = prices.len();
        prop_assert_eq!(simple_moving_average(&prices, window).unwrap().len(), n);
        prop_assert_eq!(exponential_moving_average(&prices, window).unwrap().len(), n);
        prop_assert_eq!(relative_strength_index(&prices, window).unwrap().len(), n);
        prop_assert_eq!(momentum(&prices, window).unwrap().len(), n);
        prop_assert_eq!(rate_of_change(&prices, window).unwrap().len(), n);
        let (lower, upper) = bollinger_bands(&prices, window, 2.0).unwrap();
        prop_assert_eq!(lower.len(), n);
        prop_assert_eq!(upper.len(), n);
        let (m, s) = macd(&prices, window, window + 1, window).unwrap();
        prop_assert_eq!(m.len(), n);
        prop_assert_eq!(s.len(), n);
    }

    /// Undefined prefixes have the documented lengths.
    #[test]
    fn undefined_prefix_lengths(prices in arb_prices(), window in 1usize..30) {
        let n = prices.len();
        let sma_prefix = (window - 1).min(n);
        let diff_prefix = window.min(n);

        prop_assert_eq!(undefined_prefix(&simple_moving_average(&prices, window).unwrap()), sma_prefix);
        prop_assert_eq!(undefined_prefix(&exponential_moving_average(&prices, window).unwrap()), sma_prefix);
        prop_assert_eq!(undefined_prefix(&bollinger_bands(&prices, window, 1.5).unwrap().0), sma_prefix);
        prop_assert_eq!(undefined_prefix(&relative_strength_index(&prices, window).unwrap()), diff_prefix);
        prop_assert_eq!(undefined_prefix(&momentum(&prices, window).unwrap()), diff_prefix);
        prop_assert_eq!(undefined_prefix(&rate_of_change(&prices, window).unwrap()), diff_prefix);
    }

    /// The running-sum SMA agrees with the per-window reference.
    #[test]
    fn rolling_sma_conforms_to_reference(prices in arb_prices(), window in 1usize..30) {
        let reference = simple_moving_average(&prices, window).unwrap();
        let rolling = sma_rolling(&prices, window).unwrap();
        prop_assert_eq!(reference.len(), rolling.len());
        for (r, f) in reference.iter().zip(&rolling) {
            match (r, f) {
                (Some(r), Some(f)) => {
                    let tolerance = 1e-9 * r.abs().max(1.0);
                    prop_assert!((r - f).abs() <= tolerance, "reference={} rolling={}", r, f);
                }
                (None, None) => {}
                _ => prop_assert!(false, "definedness differs: {:?} vs {:?}", r, f),
            }
        }
    }

    /// RSI stays inside [0, 100]; Bollinger lower <= upper.
    #[test]
    fn bounded_outputs(prices in arb_prices(), window in 1usize..30, num_std in 0.0..4.0_f64) {
        for v in relative_strength_index(&prices, window).unwrap().into_iter().flatten() {
            prop_assert!((0.0..=100.0).contains(&v));
        }
        let (lower, upper) = bollinger_bands(&prices, window, num_std).unwrap();
        for (lo, up) in lower.into_iter().flatten().zip(upper.into_iter().flatten()) {
            prop_assert!(lo <= up);
        }
    }
}
