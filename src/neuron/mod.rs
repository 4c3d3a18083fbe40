//! Integrate and fire neuron models along with a [`Population`] of independent neurons
//! driven by a ramp of constant input currents, and recorders for the spikes and
//! membrane potentials of the population over time.
//!
//! Each neuron in a population receives its own input current density and is not
//! coupled to any other neuron, the whole population is advanced in lock-step one
//! timestep at a time.

use ndarray::Array1;
pub mod integrate_and_fire;
pub mod iterate_and_spike;
use iterate_and_spike::IterateAndSpike;
/// A set of macros to automatically derive traits necessary for the `IterateAndSpike` trait.
pub mod iterate_and_spike_traits {
    pub use iterate_and_spike_traits::*;
}
use crate::config::SimulationParameters;
use crate::error::{ConfigurationError, GainFunctionError, NumericalError};


/// Generates `size` input currents evenly spaced from `0` to `upper_current_limit`
/// where the `i`th current is `upper_current_limit * i / (size - 1)`, the first
/// current is exactly `0.` and the last is exactly `upper_current_limit`
pub fn linear_current_ramp(upper_current_limit: f32, size: usize) -> Result<Array1<f32>, ConfigurationError> {
    if size < 2 {
        return Err(ConfigurationError::PopulationTooSmall(size));
    }
    if !upper_current_limit.is_finite() || upper_current_limit <= 0. {
        return Err(ConfigurationError::NonPositiveCurrentLimit(upper_current_limit));
    }

    let last = (size - 1) as f32;

    Ok(
        (0..size)
            .map(|i| upper_current_limit * i as f32 / last)
            .collect::<Array1<f32>>()
    )
}

/// Handles history of a population
pub trait PopulationHistory: Default {
    /// Stores the current state of the population at the given time (ms)
    fn update<T: IterateAndSpike>(&mut self, time: f32, state: &[T]);
    /// Resets history
    fn reset(&mut self);
}

/// Stores the spike times (ms) of every neuron in a population
#[derive(Debug, Clone, Default)]
pub struct SpikeRecord {
    /// Spike times for each neuron in ascending order
    pub spike_times: Vec<Vec<f32>>,
}

impl SpikeRecord {
    /// Number of spikes of a given neuron, `0` if the neuron has no record
    pub fn count(&self, neuron: usize) -> usize {
        self.spike_times.get(neuron).map_or(0, |i| i.len())
    }

    /// Number of spikes of every neuron
    pub fn counts(&self) -> Vec<usize> {
        self.spike_times.iter().map(|i| i.len()).collect()
    }

    /// Total number of spikes across the population
    pub fn total(&self) -> usize {
        self.spike_times.iter().map(|i| i.len()).sum()
    }
}

impl PopulationHistory for SpikeRecord {
    fn update<T: IterateAndSpike>(&mut self, time: f32, state: &[T]) {
        if self.spike_times.len() < state.len() {
            self.spike_times.resize(state.len(), Vec::new());
        }

        for (times, neuron) in self.spike_times.iter_mut().zip(state) {
            if neuron.is_spiking() {
                times.push(time);
            }
        }
    }

    fn reset(&mut self) {
        self.spike_times.clear();
    }
}

/// Stores the membrane potential (mV) of every neuron in a population
/// at every sampled time (ms)
#[derive(Debug, Clone, Default)]
pub struct VoltageTrace {
    /// Sample times
    pub times: Vec<f32>,
    /// Voltages for each neuron, one value per sample time
    pub voltages: Vec<Vec<f32>>,
}

impl VoltageTrace {
    /// Returns the `(time, voltage)` samples of a given neuron
    pub fn get_neuron_trace(&self, neuron: usize) -> Option<Vec<(f32, f32)>> {
        self.voltages.get(neuron)
            .map(|voltages| {
                self.times.iter()
                    .copied()
                    .zip(voltages.iter().copied())
                    .collect()
            })
    }
}

impl PopulationHistory for VoltageTrace {
    fn update<T: IterateAndSpike>(&mut self, time: f32, state: &[T]) {
        if self.voltages.len() < state.len() {
            self.voltages.resize(state.len(), Vec::new());
        }

        self.times.push(time);
        for (voltages, neuron) in self.voltages.iter_mut().zip(state) {
            voltages.push(neuron.get_current_voltage());
        }
    }

    fn reset(&mut self) {
        self.times.clear();
        self.voltages.clear();
    }
}

/// A population of uncoupled [`IterateAndSpike`] neurons sharing the parameters of a
/// base neuron, each driven by a constant input current density from a linear ramp,
/// use `build` to generate the population and `run` to simulate it for a duration
///
/// ```rust
/// # use gain_functions::{
/// #     neuron::{integrate_and_fire::LeakyIntegrateAndFireNeuron, Population},
/// #     error::GainFunctionError,
/// # };
/// #
/// fn main() -> Result<(), GainFunctionError> {
///     let base_neuron = LeakyIntegrateAndFireNeuron::default();
///
///     // 20 neurons receiving 0 to 10 uA/cm2
///     let mut population = Population::build(&base_neuron, 20, 10.)?;
///
///     // simulate 100 ms
///     population.run(100.)?;
///
///     assert_eq!(population.spike_record.count(0), 0);
///     assert!(population.spike_record.count(19) > 0);
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Population<T: IterateAndSpike> {
    /// Neurons of the population
    pub neurons: Vec<T>,
    /// Constant input current density of each neuron (uA/cm2)
    pub input_currents: Array1<f32>,
    /// Spike times of each neuron
    pub spike_record: SpikeRecord,
    /// Membrane potential of each neuron over time
    pub voltage_trace: VoltageTrace,
    /// Whether to store membrane potentials in `voltage_trace` as the population runs
    pub record_voltages: bool,
    /// Internal clock keeping track of what timestep the population is at
    pub internal_clock: usize,
}

impl<T: IterateAndSpike> Population<T> {
    /// Validates the base neuron and clones it once per input current of the ramp
    /// from `0.` to `upper_current_limit`, each neuron starts at its resting potential
    pub fn build(base_neuron: &T, size: usize, upper_current_limit: f32) -> Result<Self, ConfigurationError> {
        base_neuron.validate()?;
        let input_currents = linear_current_ramp(upper_current_limit, size)?;

        let neurons = (0..size)
            .map(|_| {
                let mut neuron = base_neuron.clone();
                neuron.initialize();

                neuron
            })
            .collect::<Vec<T>>();

        Ok(
            Population {
                neurons,
                input_currents,
                spike_record: SpikeRecord::default(),
                voltage_trace: VoltageTrace::default(),
                record_voltages: true,
                internal_clock: 0,
            }
        )
    }

    /// Builds a population of `n_neurons` copies of the base neuron integrated at the
    /// timestep of the simulation parameters, the base neuron's own timestep is ignored
    pub fn from_parameters(base_neuron: &T, parameters: &SimulationParameters) -> Result<Self, ConfigurationError> {
        let mut base_neuron = base_neuron.clone();
        base_neuron.set_dt(parameters.dt);

        let mut population = Population::build(
            &base_neuron,
            parameters.n_neurons,
            parameters.upper_current_limit,
        )?;
        population.record_voltages = parameters.record_voltages;

        Ok(population)
    }

    /// Number of neurons in the population
    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    /// Returns `true` if the population has no neurons
    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Model name of the neurons
    pub fn get_label(&self) -> &'static str {
        self.neurons.first().map_or("", |i| i.get_label())
    }

    /// Timestep of the neurons (ms)
    pub fn get_dt(&self) -> f32 {
        self.neurons.first().map_or(0., |i| i.get_dt())
    }

    /// Current simulation time (ms)
    pub fn get_time(&self) -> f32 {
        self.internal_clock as f32 * self.get_dt()
    }

    /// Resets every neuron to its initial state, clears the recorders
    /// and resets the `internal_clock` to `0`
    pub fn reset(&mut self) {
        self.internal_clock = 0;
        self.neurons.iter_mut().for_each(|i| i.initialize());
        self.spike_record.reset();
        self.voltage_trace.reset();
    }

    /// Iterates every neuron by one timestep, voltages are sampled before the update
    /// and spikes are stored with the time at the start of the step
    pub fn iterate(&mut self) -> Result<(), NumericalError> {
        let time = self.get_time();

        if self.record_voltages {
            self.voltage_trace.update(time, &self.neurons);
        }

        for (n, (neuron, input)) in self.neurons.iter_mut().zip(self.input_currents.iter()).enumerate() {
            let model = neuron.get_label();
            let is_spiking = neuron.iterate_and_spike(*input)
                .map_err(|err| match err {
                    NumericalError::NonFiniteVoltage(voltage) => NumericalError::Divergence {
                        model, neuron: n, time, voltage,
                    },
                    err => err,
                })?;

            if is_spiking {
                neuron.set_last_firing_time(Some(self.internal_clock));
            }
        }

        self.spike_record.update(time, &self.neurons);
        self.internal_clock += 1;

        Ok(())
    }

    /// Number of timesteps needed to simulate the given duration (ms)
    pub fn get_steps(&self, duration: f32) -> Result<usize, ConfigurationError> {
        if !duration.is_finite() || duration <= 0. {
            return Err(ConfigurationError::NonPositiveDuration(duration));
        }

        let dt = self.get_dt();
        if dt > duration {
            return Err(ConfigurationError::TimestepExceedsDuration { dt, duration });
        }

        Ok((duration / dt).round() as usize)
    }

    /// Simulates the population for the given duration (ms), continuing from
    /// the current state
    pub fn run(&mut self, duration: f32) -> Result<(), GainFunctionError> {
        let steps = self.get_steps(duration)?;

        for _ in 0..steps {
            self.iterate()?;
        }

        Ok(())
    }
}
