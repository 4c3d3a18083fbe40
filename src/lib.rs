//! # Gain Functions
//!
//! `gain_functions` simulates populations of single compartment spiking neurons,
//! leaky integrate and fire (LIF), quadratic integrate and fire (QIF) and exponential
//! integrate and fire (EIF), where each neuron of a population is driven by a constant
//! input current density taken from a linear ramp. The spike counts of each population
//! are converted to frequency-current (F-I) curves, smoothed with a moving average
//! and plotted.
//!
//! Neuron models implement [`neuron::iterate_and_spike::IterateAndSpike`], the accessor
//! traits it depends on can be derived with
//! [`neuron::iterate_and_spike_traits::IterateAndSpikeBase`].
//!
//! Units used throughout are mV, ms, uF/cm2, mS/cm2 and uA/cm2, firing rates are in spikes/s.
//!
//! ## Example Code
//!
//! ### F-I curve of a leaky integrate and fire population
//!
//! ```rust
//! use gain_functions::{
//!     error::GainFunctionError,
//!     fi_curve::FICurve,
//!     neuron::{integrate_and_fire::LeakyIntegrateAndFireNeuron, Population},
//!     smoothing::SmoothedSeries,
//! };
//!
//! fn main() -> Result<(), GainFunctionError> {
//!     let base_neuron = LeakyIntegrateAndFireNeuron::default();
//!     let duration = 500.; // ms
//!
//!     let mut population = Population::build(&base_neuron, 20, 10.)?;
//!     population.record_voltages = false;
//!     population.run(duration)?;
//!
//!     let curve = FICurve::from_population(&population)?;
//!     let smoothed = SmoothedSeries::from_curve(&curve, 9)?;
//!
//!     assert_eq!(curve.len(), 20);
//!     assert_eq!(smoothed.len(), 12);
//!     assert_eq!(smoothed.input_currents.len(), 12);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Changing model parameters
//!
//! ```rust
//! use gain_functions::neuron::{
//!     integrate_and_fire::ExponentialIntegrateAndFireNeuron,
//!     iterate_and_spike::IterateAndSpike,
//! };
//!
//! let sharper = ExponentialIntegrateAndFireNeuron {
//!     delta_t: 0.5,
//!     ..ExponentialIntegrateAndFireNeuron::default()
//! };
//!
//! assert!(sharper.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod fi_curve;
pub mod neuron;
pub mod plotting;
pub mod smoothing;
pub mod units;
