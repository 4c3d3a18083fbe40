//! Simulation and model parameters, either the built in defaults or read from a TOML file
//! where every key is optional and quantities carry their unit, for example:
//!
//! ```toml
//! [simulation]
//! n_neurons = 20
//! duration = "2 s"
//! upper_current_limit = "10 uA/cm2"
//! dt = "0.1 ms"
//! window_size = 9
//! output_directory = "fi_curves"
//!
//! [lif]
//! v_th = "-59 mV"
//! tau_ref = "1.6 ms"
//! method = "exact"
//!
//! [eif]
//! delta_t = "2 mV"
//! ```

use std::{fs::read_to_string, path::{Path, PathBuf}};
use serde::Deserialize;
use crate::error::{ConfigurationError, GainFunctionError};
use crate::neuron::{
    integrate_and_fire::{
        ExponentialIntegrateAndFireNeuron, LeakyIntegrateAndFireNeuron,
        QuadraticIntegrateAndFireNeuron,
    },
    iterate_and_spike::{IterateAndSpike, Timestep},
};
use crate::smoothing::validate_window;
use crate::units::{Dimension, Quantity};


/// Parameters shared by the simulations of every model
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    /// Number of neurons per population
    pub n_neurons: usize,
    /// Simulated time (ms)
    pub duration: f32,
    /// Input current of the last neuron of each population (uA/cm2)
    pub upper_current_limit: f32,
    /// Integration timestep (ms)
    pub dt: f32,
    /// Number of firing rates averaged together when smoothing
    pub window_size: usize,
    /// Directory figures are written to
    pub output_directory: PathBuf,
    /// Whether to keep the membrane potential of every neuron at every timestep
    pub record_voltages: bool,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            n_neurons: 20,
            duration: 2000., // 2 s
            upper_current_limit: 10., // uA/cm2
            dt: 0.1, // ms
            window_size: 9,
            output_directory: PathBuf::from("fi_curves"),
            record_voltages: true,
        }
    }
}

impl SimulationParameters {
    /// Checks population size, duration, current limit, timestep and smoothing window
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.n_neurons < 2 {
            return Err(ConfigurationError::PopulationTooSmall(self.n_neurons));
        }
        if !self.duration.is_finite() || self.duration <= 0. {
            return Err(ConfigurationError::NonPositiveDuration(self.duration));
        }
        if !self.upper_current_limit.is_finite() || self.upper_current_limit <= 0. {
            return Err(ConfigurationError::NonPositiveCurrentLimit(self.upper_current_limit));
        }
        if !self.dt.is_finite() || self.dt <= 0. {
            return Err(ConfigurationError::NonPositiveTimestep(self.dt));
        }
        if self.dt > self.duration {
            return Err(ConfigurationError::TimestepExceedsDuration { dt: self.dt, duration: self.duration });
        }

        validate_window(self.window_size, self.n_neurons)
    }
}

/// Simulation parameters along with the base neuron of each model
#[derive(Debug, Clone)]
pub struct Config {
    pub simulation: SimulationParameters,
    pub lif: LeakyIntegrateAndFireNeuron,
    pub qif: QuadraticIntegrateAndFireNeuron,
    pub eif: ExponentialIntegrateAndFireNeuron,
}

impl Default for Config {
    fn default() -> Self {
        let simulation = SimulationParameters::default();

        let mut lif = LeakyIntegrateAndFireNeuron::default();
        let mut qif = QuadraticIntegrateAndFireNeuron::default();
        let mut eif = ExponentialIntegrateAndFireNeuron::default();
        lif.set_dt(simulation.dt);
        qif.set_dt(simulation.dt);
        eif.set_dt(simulation.dt);

        Config { simulation, lif, qif, eif }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SimulationSection {
    n_neurons: Option<usize>,
    duration: Option<Quantity>,
    upper_current_limit: Option<Quantity>,
    dt: Option<Quantity>,
    window_size: Option<usize>,
    output_directory: Option<PathBuf>,
    record_voltages: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelSection {
    c: Option<Quantity>,
    g: Option<Quantity>,
    v_rest: Option<Quantity>,
    v_th: Option<Quantity>,
    v_reset: Option<Quantity>,
    tau_ref: Option<Quantity>,
    delta_t: Option<Quantity>,
    i_th: Option<Quantity>,
    method: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    simulation: SimulationSection,
    #[serde(default)]
    lif: ModelSection,
    #[serde(default)]
    qif: ModelSection,
    #[serde(default)]
    eif: ModelSection,
}

fn set_quantity(
    target: &mut f32,
    quantity: &Option<Quantity>,
    name: &str,
    dimension: Dimension,
) -> Result<(), ConfigurationError> {
    if let Some(quantity) = quantity {
        *target = quantity.to(name, dimension)?;
    }

    Ok(())
}

fn reject_quantity(quantity: &Option<Quantity>, name: &str) -> Result<(), ConfigurationError> {
    match quantity {
        Some(_) => Err(ConfigurationError::MalformedConfig(format!("`{}` is not a parameter of this model", name))),
        None => Ok(()),
    }
}

macro_rules! apply_membrane_section {
    ($neuron:expr, $section:expr, $model:literal) => {
        set_quantity(&mut $neuron.c_m, &$section.c, concat!($model, ".c"), Dimension::CapacitanceDensity)?;
        set_quantity(&mut $neuron.g_l, &$section.g, concat!($model, ".g"), Dimension::ConductanceDensity)?;
        set_quantity(&mut $neuron.v_rest, &$section.v_rest, concat!($model, ".v_rest"), Dimension::Voltage)?;
        set_quantity(&mut $neuron.v_th, &$section.v_th, concat!($model, ".v_th"), Dimension::Voltage)?;
        set_quantity(&mut $neuron.v_reset, &$section.v_reset, concat!($model, ".v_reset"), Dimension::Voltage)?;
        set_quantity(&mut $neuron.tref, &$section.tau_ref, concat!($model, ".tau_ref"), Dimension::Time)?;
        if let Some(method) = &$section.method {
            $neuron.method = method.parse()?;
        }
        $neuron.current_voltage = $neuron.v_rest;
    };
}

impl Config {
    /// Parses a TOML configuration, keys that are not present keep their default value
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigurationError> {
        let file: ConfigFile = toml::from_str(contents)
            .map_err(|err| ConfigurationError::MalformedConfig(err.to_string()))?;

        let mut config = Config::default();

        let simulation = &mut config.simulation;
        let section = &file.simulation;
        if let Some(n_neurons) = section.n_neurons {
            simulation.n_neurons = n_neurons;
        }
        set_quantity(&mut simulation.duration, &section.duration, "simulation.duration", Dimension::Time)?;
        set_quantity(
            &mut simulation.upper_current_limit,
            &section.upper_current_limit,
            "simulation.upper_current_limit",
            Dimension::CurrentDensity,
        )?;
        set_quantity(&mut simulation.dt, &section.dt, "simulation.dt", Dimension::Time)?;
        if let Some(window_size) = section.window_size {
            simulation.window_size = window_size;
        }
        if let Some(output_directory) = &section.output_directory {
            simulation.output_directory = output_directory.clone();
        }
        if let Some(record_voltages) = section.record_voltages {
            simulation.record_voltages = record_voltages;
        }

        apply_membrane_section!(config.lif, file.lif, "lif");
        reject_quantity(&file.lif.delta_t, "lif.delta_t")?;
        reject_quantity(&file.lif.i_th, "lif.i_th")?;

        apply_membrane_section!(config.qif, file.qif, "qif");
        set_quantity(&mut config.qif.delta_t, &file.qif.delta_t, "qif.delta_t", Dimension::Voltage)?;
        set_quantity(&mut config.qif.i_th, &file.qif.i_th, "qif.i_th", Dimension::CurrentDensity)?;

        apply_membrane_section!(config.eif, file.eif, "eif");
        set_quantity(&mut config.eif.delta_t, &file.eif.delta_t, "eif.delta_t", Dimension::Voltage)?;
        reject_quantity(&file.eif.i_th, "eif.i_th")?;

        let dt = config.simulation.dt;
        config.lif.set_dt(dt);
        config.qif.set_dt(dt);
        config.eif.set_dt(dt);

        Ok(config)
    }

    /// Reads and parses a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self, GainFunctionError> {
        let contents = read_to_string(path)?;

        Ok(Config::from_toml_str(&contents)?)
    }

    /// Checks the simulation parameters and every base neuron
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.simulation.validate()?;
        self.lif.validate()?;
        self.qif.validate()?;
        self.eif.validate()?;

        Ok(())
    }
}
