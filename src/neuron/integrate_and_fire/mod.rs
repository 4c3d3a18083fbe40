//! Leaky, quadratic and exponential integrate and fire models that implement
//! [`IterateAndSpike`], membrane potential is in mV, time in ms, capacitance in uF/cm2,
//! conductance in mS/cm2 and input current density in uA/cm2.
//!
//! The [`Default`] implementation of each model is its reference parameter set, every
//! model starts at `v_rest = -65` mV with `c_m = 1` uF/cm2 and `g_l = 0.1` mS/cm2.

use iterate_and_spike_traits::IterateAndSpikeBase;
use super::iterate_and_spike::{
    CurrentVoltage, IntegrationMethod, IsSpiking, IterateAndSpike, LastFiringTime,
    Refractoriness, RefractoryState, Timestep,
};
use crate::error::{ConfigurationError, NumericalError};


fn ensure(condition: bool, name: &'static str, value: f32) -> Result<(), ConfigurationError> {
    if condition {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidParameter { name, value })
    }
}

macro_rules! impl_default_validate_membrane {
    () => {
        /// Checks the parameters shared by every integrate and fire model
        pub fn validate_membrane(&self) -> Result<(), ConfigurationError> {
            ensure(self.c_m.is_finite() && self.c_m > 0., "c_m", self.c_m)?;
            ensure(self.g_l.is_finite() && self.g_l > 0., "g_l", self.g_l)?;
            ensure(self.v_rest.is_finite(), "v_rest", self.v_rest)?;
            ensure(self.v_th.is_finite(), "v_th", self.v_th)?;
            ensure(self.v_reset.is_finite() && self.v_reset < self.v_th, "v_reset", self.v_reset)?;
            ensure(self.tref.is_finite() && self.tref >= 0., "tref", self.tref)?;

            if !self.dt.is_finite() || self.dt <= 0. {
                return Err(ConfigurationError::NonPositiveTimestep(self.dt));
            }

            let tau_m = self.c_m / self.g_l;
            if self.dt >= tau_m {
                return Err(ConfigurationError::UnstableTimestep { dt: self.dt, tau_m });
            }

            Ok(())
        }
    }
}

macro_rules! impl_default_handle_spiking {
    () => {
        /// Determines whether the neuron is spiking and resets the voltage
        /// if so, also starts the refractory period
        pub fn handle_spiking(&mut self) -> bool {
            let is_spiking = self.current_voltage >= self.v_th;

            if is_spiking {
                self.current_voltage = self.v_reset;
                self.refractory_state = RefractoryState::after_spike(self.get_refractory_steps());
            }

            self.is_spiking = is_spiking;

            is_spiking
        }
    }
}

macro_rules! impl_iterate_and_spike {
    ($name:ident, $label:literal, $update_method:ident, $validate_method:ident) => {
        impl IterateAndSpike for $name {
            fn get_label(&self) -> &'static str {
                $label
            }

            fn validate(&self) -> Result<(), ConfigurationError> {
                self.$validate_method()
            }

            fn initialize(&mut self) {
                self.current_voltage = self.v_rest;
                self.refractory_state = RefractoryState::Active;
                self.is_spiking = false;
                self.last_firing_time = None;
            }

            fn iterate_and_spike(&mut self, input_current: f32) -> Result<bool, NumericalError> {
                // voltage is clamped to reset and not integrated while refractory
                if self.refractory_state.is_refractory() {
                    self.current_voltage = self.v_reset;
                    self.refractory_state = self.refractory_state.advance();
                    self.is_spiking = false;

                    return Ok(false);
                }

                let voltage = self.$update_method(input_current);
                if !voltage.is_finite() {
                    return Err(NumericalError::NonFiniteVoltage(voltage));
                }
                self.current_voltage = voltage;

                Ok(self.handle_spiking())
            }
        }
    };
}

/// A leaky integrate and fire neuron
#[derive(Debug, Clone, IterateAndSpikeBase)]
pub struct LeakyIntegrateAndFireNeuron {
    /// Membrane potential (mV)
    pub current_voltage: f32,
    /// Resting potential, also the initial potential (mV)
    pub v_rest: f32,
    /// Voltage threshold (mV)
    pub v_th: f32,
    /// Voltage reset value (mV)
    pub v_reset: f32,
    /// Membrane capacitance (uF/cm2)
    pub c_m: f32,
    /// Leak conductance (mS/cm2)
    pub g_l: f32,
    /// Total refractory period (ms)
    pub tref: f32,
    /// Time step (ms)
    pub dt: f32,
    /// Integration scheme
    pub method: IntegrationMethod,
    /// Active or refractory
    pub refractory_state: RefractoryState,
    /// Whether the neuron is spiking
    pub is_spiking: bool,
    /// Last timestep the neuron has spiked
    pub last_firing_time: Option<usize>,
}

impl Default for LeakyIntegrateAndFireNeuron {
    fn default() -> Self {
        LeakyIntegrateAndFireNeuron {
            current_voltage: -65.,
            v_rest: -65., // resting potential (mV)
            v_th: -59., // spike threshold (mV)
            v_reset: -68., // reset potential (mV)
            c_m: 1., // membrane capacitance (uF/cm2)
            g_l: 0.1, // leak conductance (mS/cm2)
            tref: 1.6, // refractory time (ms)
            dt: 0.1, // simulation time step (ms)
            method: IntegrationMethod::Exact,
            refractory_state: RefractoryState::Active,
            is_spiking: false,
            last_firing_time: None,
        }
    }
}

impl LeakyIntegrateAndFireNeuron {
    /// Calculates the rate of change of the membrane potential (mV/ms) given an input current
    pub fn leaky_get_dv_change(&self, i: f32) -> f32 {
        (-self.g_l * (self.current_voltage - self.v_rest) + i) / self.c_m
    }

    /// Calculates the membrane potential after one timestep, the exact method relaxes
    /// the voltage exponentially towards `v_rest + i / g_l`
    pub fn leaky_get_next_voltage(&self, i: f32) -> f32 {
        match self.method {
            IntegrationMethod::Exact => {
                let v_inf = self.v_rest + i / self.g_l;
                v_inf + (self.current_voltage - v_inf) * (-self.dt * self.g_l / self.c_m).exp()
            },
            IntegrationMethod::Euler => {
                self.current_voltage + self.leaky_get_dv_change(i) * self.dt
            },
        }
    }

    impl_default_validate_membrane!();

    impl_default_handle_spiking!();
}

impl_iterate_and_spike!(
    LeakyIntegrateAndFireNeuron,
    "LIF",
    leaky_get_next_voltage,
    validate_membrane
);

/// A quadratic integrate and fire neuron, `v_th` is both the minimum of the
/// quadratic term and the spike threshold
#[derive(Debug, Clone, IterateAndSpikeBase)]
pub struct QuadraticIntegrateAndFireNeuron {
    /// Membrane potential (mV)
    pub current_voltage: f32,
    /// Resting potential, also the initial potential (mV)
    pub v_rest: f32,
    /// Voltage threshold (mV)
    pub v_th: f32,
    /// Voltage reset value (mV)
    pub v_reset: f32,
    /// Scaling of the quadratic term (mV)
    pub delta_t: f32,
    /// Threshold current subtracted from the input (uA/cm2)
    pub i_th: f32,
    /// Membrane capacitance (uF/cm2)
    pub c_m: f32,
    /// Leak conductance (mS/cm2)
    pub g_l: f32,
    /// Total refractory period (ms)
    pub tref: f32,
    /// Time step (ms)
    pub dt: f32,
    /// Integration scheme, must be [`IntegrationMethod::Euler`]
    pub method: IntegrationMethod,
    /// Active or refractory
    pub refractory_state: RefractoryState,
    /// Whether the neuron is spiking
    pub is_spiking: bool,
    /// Last timestep the neuron has spiked
    pub last_firing_time: Option<usize>,
}

impl Default for QuadraticIntegrateAndFireNeuron {
    fn default() -> Self {
        QuadraticIntegrateAndFireNeuron {
            current_voltage: -65.,
            v_rest: -65., // resting potential (mV)
            v_th: -50., // spike threshold (mV)
            v_reset: -68., // reset potential (mV)
            delta_t: 5., // quadratic scaling (mV)
            i_th: 0.16, // threshold current (uA/cm2)
            c_m: 1., // membrane capacitance (uF/cm2)
            g_l: 0.1, // leak conductance (mS/cm2)
            tref: 1.7, // refractory time (ms)
            dt: 0.1, // simulation time step (ms)
            method: IntegrationMethod::Euler,
            refractory_state: RefractoryState::Active,
            is_spiking: false,
            last_firing_time: None,
        }
    }
}

impl QuadraticIntegrateAndFireNeuron {
    /// Calculates the rate of change of the membrane potential (mV/ms) given an input current
    pub fn quadratic_get_dv_change(&self, i: f32) -> f32 {
        (
            (self.g_l / (2. * self.delta_t)) * (self.current_voltage - self.v_th).powi(2) -
            self.i_th + i
        ) / self.c_m
    }

    /// Calculates the membrane potential after one Euler step
    pub fn quadratic_get_next_voltage(&self, i: f32) -> f32 {
        self.current_voltage + self.quadratic_get_dv_change(i) * self.dt
    }

    /// Checks membrane parameters as well as the quadratic term
    pub fn quadratic_validate(&self) -> Result<(), ConfigurationError> {
        self.validate_membrane()?;
        ensure(self.delta_t.is_finite() && self.delta_t > 0., "delta_t", self.delta_t)?;
        ensure(self.i_th.is_finite(), "i_th", self.i_th)?;

        if self.method == IntegrationMethod::Exact {
            return Err(ConfigurationError::ExactMethodRequiresLinearModel("QIF"));
        }

        Ok(())
    }

    impl_default_validate_membrane!();

    impl_default_handle_spiking!();
}

impl_iterate_and_spike!(
    QuadraticIntegrateAndFireNeuron,
    "QIF",
    quadratic_get_next_voltage,
    quadratic_validate
);

/// An exponential integrate and fire neuron
#[derive(Debug, Clone, IterateAndSpikeBase)]
pub struct ExponentialIntegrateAndFireNeuron {
    /// Membrane potential (mV)
    pub current_voltage: f32,
    /// Resting potential, also the initial potential (mV)
    pub v_rest: f32,
    /// Voltage threshold, also the center of the exponential term (mV)
    pub v_th: f32,
    /// Voltage reset value (mV)
    pub v_reset: f32,
    /// Sharpness of the exponential term (mV)
    pub delta_t: f32,
    /// Membrane capacitance (uF/cm2)
    pub c_m: f32,
    /// Leak conductance (mS/cm2)
    pub g_l: f32,
    /// Total refractory period (ms)
    pub tref: f32,
    /// Time step (ms)
    pub dt: f32,
    /// Integration scheme, must be [`IntegrationMethod::Euler`]
    pub method: IntegrationMethod,
    /// Active or refractory
    pub refractory_state: RefractoryState,
    /// Whether the neuron is spiking
    pub is_spiking: bool,
    /// Last timestep the neuron has spiked
    pub last_firing_time: Option<usize>,
}

impl Default for ExponentialIntegrateAndFireNeuron {
    fn default() -> Self {
        ExponentialIntegrateAndFireNeuron {
            current_voltage: -65.,
            v_rest: -65., // resting potential (mV)
            v_th: -59., // spike threshold (mV)
            v_reset: -70., // reset potential (mV)
            delta_t: 2., // sharpness (mV)
            c_m: 1., // membrane capacitance (uF/cm2)
            g_l: 0.1, // leak conductance (mS/cm2)
            tref: 1.3, // refractory time (ms)
            dt: 0.1, // simulation time step (ms)
            method: IntegrationMethod::Euler,
            refractory_state: RefractoryState::Active,
            is_spiking: false,
            last_firing_time: None,
        }
    }
}

impl ExponentialIntegrateAndFireNeuron {
    /// Calculates the rate of change of the membrane potential (mV/ms) given an input current
    pub fn exponential_get_dv_change(&self, i: f32) -> f32 {
        (
            -self.g_l * (self.current_voltage - self.v_rest) +
            self.g_l * self.delta_t * ((self.current_voltage - self.v_th) / self.delta_t).exp() +
            i
        ) / self.c_m
    }

    /// Calculates the membrane potential after one Euler step
    pub fn exponential_get_next_voltage(&self, i: f32) -> f32 {
        self.current_voltage + self.exponential_get_dv_change(i) * self.dt
    }

    /// Checks membrane parameters as well as the exponential term
    pub fn exponential_validate(&self) -> Result<(), ConfigurationError> {
        self.validate_membrane()?;
        ensure(self.delta_t.is_finite() && self.delta_t > 0., "delta_t", self.delta_t)?;

        if self.method == IntegrationMethod::Exact {
            return Err(ConfigurationError::ExactMethodRequiresLinearModel("EIF"));
        }

        Ok(())
    }

    impl_default_validate_membrane!();

    impl_default_handle_spiking!();
}

impl_iterate_and_spike!(
    ExponentialIntegrateAndFireNeuron,
    "EIF",
    exponential_get_next_voltage,
    exponential_validate
);
