#[cfg(test)]
mod tests {
    use gain_functions::{
        error::GainFunctionError,
        neuron::{
            integrate_and_fire::{
                ExponentialIntegrateAndFireNeuron, LeakyIntegrateAndFireNeuron,
                QuadraticIntegrateAndFireNeuron,
            },
            iterate_and_spike::{IterateAndSpike, Refractoriness, RefractoryState},
            Population,
        },
    };

    #[test]
    pub fn test_refractory_state_transitions() {
        assert_eq!(RefractoryState::default(), RefractoryState::Active);
        assert_eq!(RefractoryState::start(0), RefractoryState::Active);

        let mut state = RefractoryState::start(2);
        assert!(state.is_refractory());
        assert_eq!(state, RefractoryState::Refractory { remaining_steps: 2 });

        state = state.advance();
        assert_eq!(state, RefractoryState::Refractory { remaining_steps: 1 });

        state = state.advance();
        assert_eq!(state, RefractoryState::Active);

        state = state.advance();
        assert_eq!(state, RefractoryState::Active);
    }

    #[test]
    pub fn test_refractory_state_after_spike() {
        // the spiking step is the first step of the refractory period
        assert_eq!(RefractoryState::after_spike(16), RefractoryState::Refractory { remaining_steps: 15 });
        assert_eq!(RefractoryState::after_spike(2), RefractoryState::Refractory { remaining_steps: 1 });
        assert_eq!(RefractoryState::after_spike(1), RefractoryState::Active);
        assert_eq!(RefractoryState::after_spike(0), RefractoryState::Active);
    }

    #[test]
    pub fn test_refractory_steps() {
        assert_eq!(LeakyIntegrateAndFireNeuron::default().get_refractory_steps(), 16);
        assert_eq!(QuadraticIntegrateAndFireNeuron::default().get_refractory_steps(), 17);
        assert_eq!(ExponentialIntegrateAndFireNeuron::default().get_refractory_steps(), 13);

        let no_refractory_period = LeakyIntegrateAndFireNeuron {
            tref: 0.,
            ..LeakyIntegrateAndFireNeuron::default()
        };
        assert_eq!(no_refractory_period.get_refractory_steps(), 0);
    }

    fn check_interspike_intervals<T: IterateAndSpike>(base_neuron: &T, tref: f32) -> Result<(), GainFunctionError> {
        let mut population = Population::build(base_neuron, 20, 10.)?;
        population.record_voltages = false;
        population.run(300.)?;

        for (n, spike_times) in population.spike_record.spike_times.iter().enumerate() {
            for pair in spike_times.windows(2) {
                let interval = pair[1] - pair[0];
                assert!(
                    interval >= tref - 1e-3,
                    "{} neuron {} fired twice within {} ms", population.get_label(), n, interval,
                );
            }
        }

        // the strongest input has to fire repeatedly for the check to mean anything
        assert!(population.spike_record.count(19) > 10);

        Ok(())
    }

    #[test]
    pub fn test_interspike_intervals_exceed_refractory_period() -> Result<(), GainFunctionError> {
        check_interspike_intervals(&LeakyIntegrateAndFireNeuron::default(), 1.6)?;
        check_interspike_intervals(&QuadraticIntegrateAndFireNeuron::default(), 1.7)?;
        check_interspike_intervals(&ExponentialIntegrateAndFireNeuron::default(), 1.3)?;

        Ok(())
    }

    fn check_voltage_held_at_reset<T: IterateAndSpike>(base_neuron: &T, v_reset: f32) -> Result<(), GainFunctionError> {
        let mut population = Population::build(base_neuron, 20, 10.)?;
        population.run(100.)?;

        let dt = population.get_dt();
        let steps = base_neuron.get_refractory_steps();
        let trace = &population.voltage_trace;

        let mut checked_spikes = 0;
        for (spike_times, voltages) in population.spike_record.spike_times.iter().zip(trace.voltages.iter()) {
            for spike_time in spike_times {
                let spike_step = (spike_time / dt).round() as usize;

                // voltage is sampled at reset from the step after the spike until the end
                // of the refractory period
                for step in spike_step + 1..=spike_step + steps {
                    if let Some(voltage) = voltages.get(step) {
                        assert_eq!(*voltage, v_reset, "voltage not held at step {}", step);
                    }
                }

                checked_spikes += 1;
            }
        }

        assert!(checked_spikes > 0);

        Ok(())
    }

    #[test]
    pub fn test_voltage_held_at_reset() -> Result<(), GainFunctionError> {
        check_voltage_held_at_reset(&LeakyIntegrateAndFireNeuron::default(), -68.)?;
        check_voltage_held_at_reset(&QuadraticIntegrateAndFireNeuron::default(), -68.)?;
        check_voltage_held_at_reset(&ExponentialIntegrateAndFireNeuron::default(), -70.)?;

        Ok(())
    }

    #[test]
    pub fn test_single_neuron_refractory_period() {
        let mut neuron = LeakyIntegrateAndFireNeuron::default();
        neuron.initialize();

        let mut first_spike = None;
        for step in 0..1000 {
            if neuron.iterate_and_spike(10.).unwrap() {
                first_spike = Some(step);
                break;
            }
        }
        assert!(first_spike.is_some());
        assert_eq!(neuron.get_refractory_state(), RefractoryState::Refractory { remaining_steps: 15 });

        for _ in 0..15 {
            assert!(!neuron.iterate_and_spike(10.).unwrap());
            assert_eq!(neuron.current_voltage, -68.);
        }
        assert_eq!(neuron.get_refractory_state(), RefractoryState::Active);

        assert!(!neuron.iterate_and_spike(10.).unwrap());
        assert!(neuron.current_voltage > -68.);
    }

    #[test]
    pub fn test_strong_input_fires_once_per_refractory_period() {
        let mut neuron = LeakyIntegrateAndFireNeuron {
            tref: 0.2,
            ..LeakyIntegrateAndFireNeuron::default()
        };
        neuron.initialize();
        assert_eq!(neuron.get_refractory_steps(), 2);

        let spike_steps = (0..10)
            .filter(|_| neuron.iterate_and_spike(1000.).unwrap())
            .collect::<Vec<usize>>();

        assert_eq!(spike_steps, vec![0, 2, 4, 6, 8]);
    }

    #[test]
    pub fn test_minimum_interspike_interval_is_refractory_period() -> Result<(), GainFunctionError> {
        let mut population = Population::build(&LeakyIntegrateAndFireNeuron::default(), 2, 1000.)?;
        population.record_voltages = false;
        population.run(20.)?;

        // input strong enough to cross threshold on the first step after the refractory period
        let spike_times = &population.spike_record.spike_times[1];
        assert_eq!(spike_times.len(), 13);
        for pair in spike_times.windows(2) {
            assert!((pair[1] - pair[0] - 1.6).abs() < 1e-3);
        }

        Ok(())
    }

    #[test]
    pub fn test_default_leaky_high_current_rate() -> Result<(), GainFunctionError> {
        let mut population = Population::build(&LeakyIntegrateAndFireNeuron::default(), 20, 10.)?;
        population.record_voltages = false;
        population.run(2000.)?;

        assert_eq!(population.spike_record.count(19), 800);

        Ok(())
    }
}
