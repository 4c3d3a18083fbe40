#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::tempdir;
    use gain_functions::{
        config::SimulationParameters,
        error::{GainFunctionError, PlottingError},
        fi_curve::{simulate_fi_curve, FICurve},
        neuron::integrate_and_fire::{
            ExponentialIntegrateAndFireNeuron, LeakyIntegrateAndFireNeuron,
            QuadraticIntegrateAndFireNeuron,
        },
        plotting::{get_curve_file_name, plot_curves, render_figures},
        smoothing::SmoothedSeries,
    };

    #[test]
    pub fn test_curve_file_names() {
        assert_eq!(get_curve_file_name("LIF"), "fi_curve_lif.svg");
        assert_eq!(get_curve_file_name("QIF"), "fi_curve_qif.svg");
        assert_eq!(get_curve_file_name("EIF"), "fi_curve_eif.svg");
    }

    #[test]
    pub fn test_render_figures() -> Result<(), GainFunctionError> {
        let parameters = SimulationParameters {
            duration: 200.,
            record_voltages: false,
            ..SimulationParameters::default()
        };

        let mut curves = Vec::new();
        let mut smoothed = Vec::new();

        let (curve, smoothed_curve) = simulate_fi_curve(&LeakyIntegrateAndFireNeuron::default(), &parameters)?;
        curves.push(curve);
        smoothed.push(smoothed_curve);
        let (curve, smoothed_curve) = simulate_fi_curve(&QuadraticIntegrateAndFireNeuron::default(), &parameters)?;
        curves.push(curve);
        smoothed.push(smoothed_curve);
        let (curve, smoothed_curve) = simulate_fi_curve(&ExponentialIntegrateAndFireNeuron::default(), &parameters)?;
        curves.push(curve);
        smoothed.push(smoothed_curve);

        let temp_directory = tempdir()?;
        let output_directory = temp_directory.path().join("fi_curves");
        let written = render_figures(&output_directory, &curves, &smoothed)?;

        let expected = [
            "fi_curve_lif.svg",
            "fi_curve_qif.svg",
            "fi_curve_eif.svg",
            "fi_curve_comparison.svg",
            "fi_curve_smoothed.svg",
        ];
        assert_eq!(written.len(), expected.len());

        for (path, name) in written.iter().zip(expected) {
            assert_eq!(path, &output_directory.join(name));

            let contents = fs::read_to_string(path)?;
            assert!(contents.contains("<svg"));
        }

        let comparison = fs::read_to_string(output_directory.join("fi_curve_comparison.svg"))?;
        assert!(comparison.contains("F-I curve (comparison)"));
        assert!(comparison.contains("QIF"));

        Ok(())
    }

    #[test]
    pub fn test_skipped_model_is_left_out() -> Result<(), GainFunctionError> {
        let parameters = SimulationParameters {
            duration: 100.,
            record_voltages: false,
            ..SimulationParameters::default()
        };

        let (curve, smoothed_curve) = simulate_fi_curve(&LeakyIntegrateAndFireNeuron::default(), &parameters)?;

        let temp_directory = tempdir()?;
        let output_directory = temp_directory.path();
        let written = render_figures(output_directory, &[curve], &[smoothed_curve])?;

        assert_eq!(written.len(), 3);
        assert!(output_directory.join("fi_curve_lif.svg").exists());
        assert!(!output_directory.join("fi_curve_qif.svg").exists());

        Ok(())
    }

    #[test]
    pub fn test_nothing_to_plot() -> Result<(), GainFunctionError> {
        let temp_directory = tempdir()?;
        let output_directory = temp_directory.path();

        let written = render_figures(output_directory, &[], &[])?;
        assert!(written.is_empty());

        let empty: [SmoothedSeries; 0] = [];
        assert!(matches!(
            plot_curves(&output_directory.join("empty.svg"), "empty", &empty, true),
            Err(PlottingError::NothingToPlot),
        ));
        let empty: [FICurve; 0] = [];
        assert!(matches!(
            plot_curves(&output_directory.join("empty.svg"), "empty", &empty, false),
            Err(PlottingError::NothingToPlot),
        ));

        Ok(())
    }
}
