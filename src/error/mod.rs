use std::fmt::{Display, Debug, Formatter, Result};
use crate::units::Dimension;


/// Error set for invalid simulation, model, smoothing or unit configuration,
/// these are all raised before a simulation starts
pub enum ConfigurationError {
    /// Population must have at least two neurons to build a current ramp
    PopulationTooSmall(usize),
    /// Simulation duration must be positive and finite
    NonPositiveDuration(f32),
    /// Upper current limit must be positive and finite
    NonPositiveCurrentLimit(f32),
    /// Integration timestep must be positive and finite
    NonPositiveTimestep(f32),
    /// Integration timestep cannot be longer than the simulation
    TimestepExceedsDuration { dt: f32, duration: f32 },
    /// Timestep is too coarse for the membrane time constant (`dt * g / c >= 1`)
    UnstableTimestep { dt: f32, tau_m: f32 },
    /// A model parameter is out of range
    InvalidParameter { name: &'static str, value: f32 },
    /// Exact integration is only defined for linear models
    ExactMethodRequiresLinearModel(&'static str),
    /// Smoothing window must contain at least one value
    ZeroSmoothingWindow,
    /// Smoothing window must be odd so the trimmed currents line up with the averaged rates
    EvenSmoothingWindow(usize),
    /// Smoothing window is longer than the series being smoothed
    WindowExceedsSeries { window_size: usize, length: usize },
    /// Quantity has a different physical dimension than expected
    UnitMismatch { name: String, expected: Dimension, found: Dimension },
    /// Unit string is not recognized
    UnknownUnit(String),
    /// Quantity string could not be parsed as `<value> <unit>`
    MalformedQuantity(String),
    /// Configuration file could not be parsed
    MalformedConfig(String),
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ConfigurationError::PopulationTooSmall(size) => write!(
                f, "Population must contain at least 2 neurons, got {}", size
            ),
            ConfigurationError::NonPositiveDuration(duration) => write!(
                f, "Simulation duration must be positive, got {} ms", duration
            ),
            ConfigurationError::NonPositiveCurrentLimit(limit) => write!(
                f, "Upper current limit must be positive, got {} uA/cm2", limit
            ),
            ConfigurationError::NonPositiveTimestep(dt) => write!(
                f, "Timestep must be positive, got {} ms", dt
            ),
            ConfigurationError::TimestepExceedsDuration { dt, duration } => write!(
                f, "Timestep ({} ms) cannot exceed simulation duration ({} ms)", dt, duration
            ),
            ConfigurationError::UnstableTimestep { dt, tau_m } => write!(
                f, "Timestep ({} ms) is too large for membrane time constant ({} ms)", dt, tau_m
            ),
            ConfigurationError::InvalidParameter { name, value } => write!(
                f, "Invalid value for parameter `{}`: {}", name, value
            ),
            ConfigurationError::ExactMethodRequiresLinearModel(model) => write!(
                f, "Exact integration is only available for linear models, {} is not linear", model
            ),
            ConfigurationError::ZeroSmoothingWindow => write!(
                f, "Smoothing window must contain at least one value"
            ),
            ConfigurationError::EvenSmoothingWindow(window_size) => write!(
                f, "Smoothing window must be odd, got {}", window_size
            ),
            ConfigurationError::WindowExceedsSeries { window_size, length } => write!(
                f, "Smoothing window ({}) is longer than the series ({})", window_size, length
            ),
            ConfigurationError::UnitMismatch { name, expected, found } => write!(
                f, "Quantity `{}` must be a {}, got a {}", name, expected, found
            ),
            ConfigurationError::UnknownUnit(unit) => write!(f, "Unknown unit `{}`", unit),
            ConfigurationError::MalformedQuantity(quantity) => write!(
                f, "Could not parse quantity `{}`, expected `<value> <unit>`", quantity
            ),
            ConfigurationError::MalformedConfig(msg) => write!(
                f, "Could not parse configuration: {}", msg
            ),
        }
    }
}

impl Debug for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for failures during integration
pub enum NumericalError {
    /// Membrane potential became infinite or NaN after an update
    NonFiniteVoltage(f32),
    /// Membrane potential diverged for a given neuron of a population (time in ms)
    Divergence { model: &'static str, neuron: usize, time: f32, voltage: f32 },
}

impl Display for NumericalError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            NumericalError::NonFiniteVoltage(voltage) => write!(
                f, "Membrane potential is no longer finite ({})", voltage
            ),
            NumericalError::Divergence { model, neuron, time, voltage } => write!(
                f, "{} neuron {} diverged at {} ms (membrane potential {})", model, neuron, time, voltage
            ),
        }
    }
}

impl Debug for NumericalError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for figure rendering
pub enum PlottingError {
    /// Drawing backend failed
    Backend(String),
    /// No curve was given to draw
    NothingToPlot,
}

impl Display for PlottingError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PlottingError::Backend(msg) => write!(f, "Drawing backend error: {}", msg),
            PlottingError::NothingToPlot => write!(f, "No curves to plot"),
        }
    }
}

impl Debug for PlottingError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// A set of errors that may occur when using the library
pub enum GainFunctionError {
    /// Errors related to configuration
    ConfigurationRelatedError(ConfigurationError),
    /// Errors related to integration
    NumericalRelatedError(NumericalError),
    /// Errors related to plotting
    PlottingRelatedError(PlottingError),
    /// Errors related to reading configuration or writing figures
    IoRelatedError(std::io::Error),
}

impl Display for GainFunctionError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            GainFunctionError::ConfigurationRelatedError(err) => write!(f, "{}", err),
            GainFunctionError::NumericalRelatedError(err) => write!(f, "{}", err),
            GainFunctionError::PlottingRelatedError(err) => write!(f, "{}", err),
            GainFunctionError::IoRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for GainFunctionError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for GainFunctionError {}

impl From<ConfigurationError> for GainFunctionError {
    fn from(err: ConfigurationError) -> GainFunctionError {
        GainFunctionError::ConfigurationRelatedError(err)
    }
}

impl From<NumericalError> for GainFunctionError {
    fn from(err: NumericalError) -> GainFunctionError {
        GainFunctionError::NumericalRelatedError(err)
    }
}

impl From<PlottingError> for GainFunctionError {
    fn from(err: PlottingError) -> GainFunctionError {
        GainFunctionError::PlottingRelatedError(err)
    }
}

impl From<std::io::Error> for GainFunctionError {
    fn from(err: std::io::Error) -> GainFunctionError {
        GainFunctionError::IoRelatedError(err)
    }
}
