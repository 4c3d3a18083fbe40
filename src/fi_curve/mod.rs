//! Frequency-current (F-I) curves extracted from the spike counts of a simulated [`Population`].

use ndarray::Array1;
use log::{debug, info, warn};
use crate::config::SimulationParameters;
use crate::neuron::{iterate_and_spike::IterateAndSpike, Population};
use crate::error::{ConfigurationError, GainFunctionError};
use crate::smoothing::SmoothedSeries;


/// Builds a population from the base neuron, runs it for the configured duration
/// and returns the raw and smoothed F-I curves of the model
pub fn simulate_fi_curve<T: IterateAndSpike>(
    base_neuron: &T,
    parameters: &SimulationParameters,
) -> Result<(FICurve, SmoothedSeries), GainFunctionError> {
    let mut population = Population::from_parameters(base_neuron, parameters)?;

    info!(
        "Simulating {} {} neurons for {} ms (dt = {} ms)",
        population.len(), population.get_label(), parameters.duration, population.get_dt(),
    );

    population.run(parameters.duration)?;

    let curve = FICurve::from_population(&population)?;

    for (i, (current, rate)) in curve.samples().into_iter().enumerate() {
        debug!(
            "{} neuron {}: {:.3} uA/cm2, {} spikes, {:.1} spikes/s",
            curve.label, i, current, population.spike_record.count(i), rate,
        );
    }

    match curve.rheobase() {
        Some(rheobase) => info!(
            "{}: {} spikes in total, rheobase {:.3} uA/cm2, max rate {:.1} spikes/s",
            curve.label, population.spike_record.total(), rheobase, curve.max_firing_rate(),
        ),
        None => warn!("{}: no neuron spiked", curve.label),
    }

    let smoothed = SmoothedSeries::from_curve(&curve, parameters.window_size)?;

    Ok((curve, smoothed))
}


/// Firing rate (spikes/s) of each neuron of a population paired with
/// its input current density (uA/cm2), in neuron index order
#[derive(Debug, Clone, PartialEq)]
pub struct FICurve {
    /// Model name
    pub label: &'static str,
    /// Input current densities (uA/cm2)
    pub input_currents: Array1<f32>,
    /// Firing rates (spikes/s)
    pub firing_rates: Array1<f32>,
}

impl FICurve {
    /// Converts the spike counts of a population into firing rates over the time
    /// the population has been simulated, one sample per neuron
    pub fn from_population<T: IterateAndSpike>(population: &Population<T>) -> Result<Self, ConfigurationError> {
        let duration = population.get_time();
        if !duration.is_finite() || duration <= 0. {
            return Err(ConfigurationError::NonPositiveDuration(duration));
        }

        let seconds = duration / 1000.;
        let firing_rates = (0..population.len())
            .map(|i| population.spike_record.count(i) as f32 / seconds)
            .collect::<Array1<f32>>();

        Ok(
            FICurve {
                label: population.get_label(),
                input_currents: population.input_currents.clone(),
                firing_rates,
            }
        )
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.firing_rates.len()
    }

    /// Returns `true` if the curve has no samples
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

    /// Smallest input current that produces at least one spike,
    /// `None` if no neuron fires
    pub fn rheobase(&self) -> Option<f32> {
        self.samples()
            .into_iter()
            .find(|(_, rate)| *rate > 0.)
            .map(|(current, _)| current)
    }

    /// Highest firing rate of the curve
    pub fn max_firing_rate(&self) -> f32 {
        self.firing_rates.iter().copied().fold(0., f32::max)
    }
}
