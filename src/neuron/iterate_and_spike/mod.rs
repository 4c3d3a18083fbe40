//! The [`IterateAndSpike`] trait for encapsulating single compartment spiking dynamics,
//! along with the accessor traits it builds on and the [`RefractoryState`] of a neuron.

use crate::error::{ConfigurationError, NumericalError};


/// Whether a neuron is integrating its membrane potential or is held at its
/// reset value after a spike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefractoryState {
    /// Membrane potential is updated and checked against the threshold
    #[default]
    Active,
    /// Membrane potential is held at reset for the remaining number of timesteps
    Refractory { remaining_steps: usize },
}

impl RefractoryState {
    /// Returns `true` if the neuron is in its refractory period
    pub fn is_refractory(&self) -> bool {
        matches!(self, RefractoryState::Refractory { .. })
    }

    /// Starts a refractory period of the given number of timesteps,
    /// a period of `0` steps leaves the neuron active
    pub fn start(steps: usize) -> Self {
        match steps {
            0 => RefractoryState::Active,
            remaining_steps => RefractoryState::Refractory { remaining_steps },
        }
    }

    /// Starts the refractory period of a neuron that just spiked, the spiking step
    /// is the first step of the period so `steps - 1` further steps are held
    pub fn after_spike(steps: usize) -> Self {
        RefractoryState::start(steps.saturating_sub(1))
    }

    /// Advances the refractory period by one timestep
    pub fn advance(self) -> Self {
        match self {
            RefractoryState::Active => RefractoryState::Active,
            RefractoryState::Refractory { remaining_steps } => RefractoryState::start(
                remaining_steps.saturating_sub(1)
            ),
        }
    }
}

/// Numerical scheme used to advance the membrane potential by one timestep
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrationMethod {
    /// Analytic solution over the timestep, only valid for linear equations
    Exact,
    /// Forward Euler step
    Euler,
}

impl std::str::FromStr for IntegrationMethod {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(IntegrationMethod::Exact),
            "euler" => Ok(IntegrationMethod::Euler),
            _ => Err(ConfigurationError::MalformedConfig(
                format!("Unknown integration method `{}`", s)
            )),
        }
    }
}

/// Gets the current voltage of the neuron (mV)
pub trait CurrentVoltage {
    fn get_current_voltage(&self) -> f32;
}

/// Gets whether the neuron is spiking
pub trait IsSpiking {
    fn is_spiking(&self) -> bool;
}

/// Handles the firing times of the neuron
pub trait LastFiringTime {
    /// Gets the last firing time of the neuron, (`None` if the neuron has not fired yet)
    fn get_last_firing_time(&self) -> Option<usize>;
    /// Sets the last firing time of the neuron, (use `None` to reset)
    fn set_last_firing_time(&mut self, timestep: Option<usize>);
}

/// Handles changes in simulation timestep information
pub trait Timestep {
    /// Retrieves timestep value (ms)
    fn get_dt(&self) -> f32;
    /// Updates instance with new timestep information (ms)
    fn set_dt(&mut self, dt: f32);
}

/// Gets refractory information of the neuron
pub trait Refractoriness {
    /// Gets the current refractory state
    fn get_refractory_state(&self) -> RefractoryState;
    /// Gets the length of the refractory period in timesteps, including the step
    /// the neuron spiked on
    fn get_refractory_steps(&self) -> usize;
}

/// Handles dynamics of a neuron that takes in a constant input current density
/// to update its membrane potential
///
/// Example implementation:
///
/// ```rust
/// use gain_functions::neuron::iterate_and_spike_traits::IterateAndSpikeBase;
/// use gain_functions::neuron::iterate_and_spike::{
///     CurrentVoltage, IsSpiking, IterateAndSpike, LastFiringTime, Refractoriness,
///     RefractoryState, Timestep,
/// };
/// use gain_functions::error::{ConfigurationError, NumericalError};
///
/// /// A perfect integrator without leak
/// #[derive(Debug, Clone, IterateAndSpikeBase)]
/// pub struct PerfectIntegrator {
///     /// Membrane potential (mV)
///     pub current_voltage: f32,
///     /// Voltage threshold (mV)
///     pub v_th: f32,
///     /// Voltage reset value (mV)
///     pub v_reset: f32,
///     /// Voltage initialization value (mV)
///     pub v_init: f32,
///     /// Membrane capacitance (uF/cm2)
///     pub c_m: f32,
///     /// Total refractory period (ms)
///     pub tref: f32,
///     /// Time step (ms)
///     pub dt: f32,
///     /// Active or refractory
///     pub refractory_state: RefractoryState,
///     /// Whether the neuron is spiking
///     pub is_spiking: bool,
///     /// Last timestep the neuron has spiked
///     pub last_firing_time: Option<usize>,
/// }
///
/// impl IterateAndSpike for PerfectIntegrator {
///     fn get_label(&self) -> &'static str {
///         "PIF"
///     }
///
///     fn validate(&self) -> Result<(), ConfigurationError> {
///         Ok(())
///     }
///
///     fn initialize(&mut self) {
///         self.current_voltage = self.v_init;
///         self.refractory_state = RefractoryState::Active;
///         self.is_spiking = false;
///         self.last_firing_time = None;
///     }
///
///     fn iterate_and_spike(&mut self, input_current: f32) -> Result<bool, NumericalError> {
///         if self.refractory_state.is_refractory() {
///             self.current_voltage = self.v_reset;
///             self.refractory_state = self.refractory_state.advance();
///             self.is_spiking = false;
///
///             return Ok(false);
///         }
///
///         self.current_voltage += input_current / self.c_m * self.dt;
///
///         self.is_spiking = self.current_voltage >= self.v_th;
///         if self.is_spiking {
///             self.current_voltage = self.v_reset;
///             self.refractory_state = RefractoryState::after_spike(self.get_refractory_steps());
///         }
///
///         Ok(self.is_spiking)
///     }
/// }
///
/// let mut neuron = PerfectIntegrator {
///     current_voltage: -65., v_th: -55., v_reset: -65., v_init: -65., c_m: 1.,
///     tref: 1., dt: 0.1, refractory_state: RefractoryState::Active,
///     is_spiking: false, last_firing_time: None,
/// };
///
/// let spikes = (0..1000)
///     .map(|_| neuron.iterate_and_spike(1.))
///     .collect::<Result<Vec<bool>, NumericalError>>()
///     .unwrap();
///
/// assert!(spikes.iter().any(|i| *i));
/// ```
pub trait IterateAndSpike:
    CurrentVoltage + Timestep + IsSpiking + LastFiringTime + Refractoriness + Clone
{
    /// Short name of the model used in logs and figures
    fn get_label(&self) -> &'static str;
    /// Checks that the parameters describe a well posed model
    fn validate(&self) -> Result<(), ConfigurationError>;
    /// Sets the membrane potential to its initial value and clears
    /// refractory and firing state
    fn initialize(&mut self);
    /// Takes in an input current and returns whether the model is spiking
    /// after the membrane potential is updated, a membrane potential that
    /// is no longer finite is returned as an error
    fn iterate_and_spike(&mut self, input_current: f32) -> Result<bool, NumericalError>;
}
