//! Moving average smoothing of F-I curves.
//!
//! The average uses "valid" convolution semantics, a series of length `n` smoothed with
//! a window of `w` values has `n - w + 1` values and no padding is applied at the edges.
//! The matching input currents are trimmed by `w / 2` values on each end, which keeps both
//! sequences the same length only when `w` is odd. For an even window the trimmed currents
//! are one value shorter than the averaged rates, so [`SmoothedSeries`] only accepts odd windows.

use ndarray::{s, Array1};
use crate::error::ConfigurationError;
use crate::fi_curve::FICurve;


fn check_window(window_size: usize, length: usize) -> Result<(), ConfigurationError> {
    if window_size == 0 {
        return Err(ConfigurationError::ZeroSmoothingWindow);
    }
    if window_size > length {
        return Err(ConfigurationError::WindowExceedsSeries { window_size, length });
    }

    Ok(())
}

/// Checks that a smoothing window can be applied to a series of the given length,
/// the window must be odd, non zero and no longer than the series
pub fn validate_window(window_size: usize, length: usize) -> Result<(), ConfigurationError> {
    check_window(window_size, length)?;

    if window_size % 2 == 0 {
        return Err(ConfigurationError::EvenSmoothingWindow(window_size));
    }

    Ok(())
}

/// Averages every run of `window_size` consecutive values, returns `len - window_size + 1` values
pub fn moving_average_valid(data: &Array1<f32>, window_size: usize) -> Result<Array1<f32>, ConfigurationError> {
    check_window(window_size, data.len())?;

    Ok(
        data.windows(window_size)
            .into_iter()
            .map(|window| window.sum() / window_size as f32)
            .collect::<Array1<f32>>()
    )
}

/// Drops `window_size / 2` values from each end of the data, returns
/// `len - 2 * (window_size / 2)` values
pub fn trim_symmetric(data: &Array1<f32>, window_size: usize) -> Result<Array1<f32>, ConfigurationError> {
    check_window(window_size, data.len())?;

    let trim = window_size / 2;

    Ok(data.slice(s![trim..data.len() - trim]).to_owned())
}

/// Smoothed firing rates paired with the input currents at the center of each window
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSeries {
    /// Model name
    pub label: &'static str,
    /// Trimmed input current densities (uA/cm2)
    pub input_currents: Array1<f32>,
    /// Averaged firing rates (spikes/s)
    pub firing_rates: Array1<f32>,
    /// Number of values averaged together
    pub window_size: usize,
}

impl SmoothedSeries {
    /// Smooths the firing rates of a curve with an odd window and trims
    /// the input currents to match
    pub fn from_curve(curve: &FICurve, window_size: usize) -> Result<Self, ConfigurationError> {
        validate_window(window_size, curve.len())?;

        let firing_rates = moving_average_valid(&curve.firing_rates, window_size)?;
        let input_currents = trim_symmetric(&curve.input_currents, window_size)?;

        Ok(
            SmoothedSeries {
                label: curve.label,
                input_currents,
                firing_rates,
                window_size,
            }
        )
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.firing_rates.len()
    }

    /// Returns `true` if the series has no samples
    pub fn is_empty(&self) -> bool {
        self.firing_rates.is_empty()
    }

    /// Returns the `(input current, firing rate)` samples
    pub fn samples(&self) -> Vec<(f32, f32)> {
        self.input_currents.iter()
            .copied()
            .zip(self.firing_rates.iter().copied())
            .collect()
    }
}
