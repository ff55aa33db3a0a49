//! Shared numeric helpers for indicators and strategies.

use crate::error::{CoreError, CoreResult};

/// An indicator output aligned 1:1 with its input. `None` marks an index
/// without enough trailing history.
pub type Series = Vec<Option<f64>>;

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divides by N, not N-1).
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - m;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

/// Reject a zero window.
pub fn validate_window(name: &'static str, window: usize) -> CoreResult<()> {
    if window == 0 {
        return Err(CoreError::invalid(name, "must be >= 1, got 0"));
    }
    Ok(())
}

/// Reject negative or non-finite values.
pub fn validate_non_negative(name: &'static str, value: f64) -> CoreResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::invalid(
            name,
            format!("must be a finite value >= 0, got {value}"),
        ));
    }
    Ok(())
}

/// Reject non-finite values.
pub fn validate_finite(name: &'static str, value: f64) -> CoreResult<()> {
    if !value.is_finite() {
        return Err(CoreError::invalid(
            name,
            format!("must be finite, got {value}"),
        ));
    }
    Ok(())
}

/// Seeded exponential recurrence over `values`.
///
/// Index `window - 1` holds the mean of the first `window` values; every later
/// index folds `(x - prev) * 2/(window+1) + prev` over the previous output.
/// Earlier indices are `None`. The recurrence is strictly sequential.
pub fn ema_fold(values: &[f64], window: usize) -> Series {
    let n = values.len();
    if window == 0 || n < window {
        return vec![None; n];
    }

    let multiplier = 2.0 / (window as f64 + 1.0);
    let seed = mean(&values[..window]);

    let mut out: Series = Vec::with_capacity(n);
    out.extend(std::iter::repeat(None).take(window - 1));
    out.push(Some(seed));
    out.extend(values[window..].iter().scan(seed, |prev, &x| {
        *prev = (x - *prev) * multiplier + *prev;
        Some(Some(*prev))
    }));
    out
}

/// Number of leading `None` entries.
pub fn undefined_prefix(series: &[Option<f64>]) -> usize {
    series.iter().take_while(|v| v.is_none()).count()
}
