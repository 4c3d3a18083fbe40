#[cfg(test)]
mod tests {
    use gain_functions::{
        error::{ConfigurationError, GainFunctionError},
        neuron::{
            integrate_and_fire::{
                ExponentialIntegrateAndFireNeuron, LeakyIntegrateAndFireNeuron,
                QuadraticIntegrateAndFireNeuron,
            },
            iterate_and_spike::{CurrentVoltage, IterateAndSpike, LastFiringTime, Refractoriness},
            linear_current_ramp, Population,
        },
    };

    #[test]
    pub fn test_ramp_endpoints() -> Result<(), GainFunctionError> {
        let ramp = linear_current_ramp(10., 20)?;

        assert_eq!(ramp.len(), 20);
        assert_eq!(ramp[0], 0.);
        assert_eq!(ramp[19], 10.);

        let short_ramp = linear_current_ramp(3., 2)?;
        assert_eq!(short_ramp.to_vec(), vec![0., 3.]);

        Ok(())
    }

    #[test]
    pub fn test_ramp_is_evenly_spaced() -> Result<(), GainFunctionError> {
        let ramp = linear_current_ramp(10., 20)?;
        let spacing = 10. / 19.;

        for (i, pair) in ramp.windows(2).into_iter().enumerate() {
            assert!(pair[1] > pair[0], "ramp not increasing at {}", i);
            assert!(
                ((pair[1] - pair[0]) - spacing).abs() < 1e-5,
                "uneven spacing at {}: {}", i, pair[1] - pair[0],
            );
        }

        Ok(())
    }

    #[test]
    pub fn test_ramp_rejects_invalid_arguments() {
        assert!(matches!(
            linear_current_ramp(10., 1),
            Err(ConfigurationError::PopulationTooSmall(1)),
        ));
        assert!(matches!(
            linear_current_ramp(10., 0),
            Err(ConfigurationError::PopulationTooSmall(0)),
        ));
        assert!(matches!(
            linear_current_ramp(0., 20),
            Err(ConfigurationError::NonPositiveCurrentLimit(_)),
        ));
        assert!(matches!(
            linear_current_ramp(-1., 20),
            Err(ConfigurationError::NonPositiveCurrentLimit(_)),
        ));
        assert!(matches!(
            linear_current_ramp(f32::NAN, 20),
            Err(ConfigurationError::NonPositiveCurrentLimit(_)),
        ));
    }

    fn check_initial_population<T: IterateAndSpike>(
        base_neuron: &T,
        v_rest: f32,
    ) -> Result<(), GainFunctionError> {
        let population = Population::build(base_neuron, 20, 10.)?;

        assert_eq!(population.len(), 20);
        assert_eq!(population.input_currents, linear_current_ramp(10., 20)?);
        assert_eq!(population.internal_clock, 0);
        assert_eq!(population.spike_record.total(), 0);

        for neuron in population.neurons.iter() {
            assert_eq!(neuron.get_current_voltage(), v_rest);
            assert_eq!(neuron.get_last_firing_time(), None);
            assert!(!neuron.get_refractory_state().is_refractory());
        }

        Ok(())
    }

    #[test]
    pub fn test_population_starts_at_rest() -> Result<(), GainFunctionError> {
        let mut lif = LeakyIntegrateAndFireNeuron::default();
        // base neuron state should not carry over into the population
        lif.current_voltage = -60.;
        check_initial_population(&lif, -65.)?;

        check_initial_population(&QuadraticIntegrateAndFireNeuron::default(), -65.)?;

        let eif = ExponentialIntegrateAndFireNeuron {
            v_rest: -67.,
            ..ExponentialIntegrateAndFireNeuron::default()
        };
        check_initial_population(&eif, -67.)?;

        Ok(())
    }

    #[test]
    pub fn test_population_build_rejects_small_size() {
        let lif = LeakyIntegrateAndFireNeuron::default();

        assert!(matches!(
            Population::build(&lif, 1, 10.),
            Err(ConfigurationError::PopulationTooSmall(1)),
        ));
    }

    #[test]
    pub fn test_population_build_validates_base_neuron() {
        let lif = LeakyIntegrateAndFireNeuron {
            c_m: 0.,
            ..LeakyIntegrateAndFireNeuron::default()
        };

        assert!(matches!(
            Population::build(&lif, 20, 10.),
            Err(ConfigurationError::InvalidParameter { name: "c_m", .. }),
        ));
    }

    #[test]
    pub fn test_reset_restores_initial_state() -> Result<(), GainFunctionError> {
        let mut population = Population::build(&LeakyIntegrateAndFireNeuron::default(), 20, 10.)?;
        population.run(50.)?;

        assert!(population.spike_record.total() > 0);
        assert!(population.internal_clock > 0);

        population.reset();

        assert_eq!(population.internal_clock, 0);
        assert_eq!(population.get_time(), 0.);
        assert_eq!(population.spike_record.total(), 0);
        assert!(population.voltage_trace.times.is_empty());
        assert!(population.neurons.iter().all(|i| i.get_current_voltage() == -65.));
        assert!(population.neurons.iter().all(|i| i.get_last_firing_time().is_none()));

        Ok(())
    }
}
