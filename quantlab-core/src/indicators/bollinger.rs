//! Bollinger Bands: moving average +/- standard deviation multiplier.
//!
//! - Middle: SMA(price, window)
//! - Upper: middle + num_std * stddev(price, window)
//! - Lower: middle - num_std * stddev(price, window)
//!
//! Uses population stddev (divide by N).
//! Lookback: window - 1.

use super::Indicator;
use crate::error::CoreResult;
use crate::numeric::{mean, population_std_dev, validate_non_negative, validate_window, Series};

/// Which band of the Bollinger Bands to expose as a single series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BollingerBand {
    Upper,
    Middle,
    Lower,
}

impl BollingerBand {
    fn label(&self) -> &'static str {
        match self {
            BollingerBand::Upper => "upper",
            BollingerBand::Middle => "middle",
            BollingerBand::Lower => "lower",
        }
    }
}

/// All three bands, each aligned with the input.
#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub lower: Series,
    pub middle: Series,
    pub upper: Series,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    window: usize,
    num_std: f64,
    band: BollingerBand,
    name: String,
}

impl Bollinger {
    pub fn new(window: usize, num_std: f64, band: BollingerBand) -> CoreResult<Self> {
        validate_window("window", window)?;
        validate_non_negative("num_std", num_std)?;
        Ok(Self {
            window,
            num_std,
            band,
            name: format!("bollinger_{}_{window}_{num_std}", band.label()),
        })
    }

    pub fn upper(window: usize, num_std: f64) -> CoreResult<Self> {
        Self::new(window, num_std, BollingerBand::Upper)
    }

    pub fn middle(window: usize, num_std: f64) -> CoreResult<Self> {
        Self::new(window, num_std, BollingerBand::Middle)
    }

    pub fn lower(window: usize, num_std: f64) -> CoreResult<Self> {
        Self::new(window, num_std, BollingerBand::Lower)
    }

    /// Compute all three bands in one pass.
    pub fn bands(&self, prices: &[f64]) -> BollingerBands {
        let n = prices.len();
        let mut bands = BollingerBands {
            lower: vec![None; n],
            middle: vec![None; n],
            upper: vec![None; n],
        };

        for i in (self.window - 1)..n {
            let window = &prices[i + 1 - self.window..=i];
            let m = mean(window);
            let half_width = self.num_std * population_std_dev(window);
            bands.lower[i] = Some(m - half_width);
            bands.middle[i] = Some(m);
            bands.upper[i] = Some(m + half_width);
        }

        bands
    }
}

impl Indicator for Bollinger {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.window - 1
    }

    fn compute(&self, prices: &[f64]) -> Series {
        let bands = self.bands(prices);
        match self.band {
            BollingerBand::Upper => bands.upper,
            BollingerBand::Middle => bands.middle,
            BollingerBand::Lower => bands.lower,
        }
    }
}

/// Lower and upper Bollinger bands over `prices`.
pub fn bollinger_bands(prices: &[f64], window: usize, num_std: f64) -> CoreResult<(Series, Series)> {
    let bands = Bollinger::middle(window, num_std)?.bands(prices);
    Ok((bands.lower, bands.upper))
}
