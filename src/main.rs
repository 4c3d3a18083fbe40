use std::{env, path::Path};
use log::{error, info, warn};
use gain_functions::{
    config::Config,
    error::GainFunctionError,
    fi_curve::{simulate_fi_curve, FICurve},
    neuron::iterate_and_spike::IterateAndSpike,
    plotting::render_figures,
    smoothing::SmoothedSeries,
};


// Simulates populations of leaky, quadratic and exponential integrate and fire
// neurons over a ramp of input currents and writes their F-I curves as figures,
// takes an optional path to a TOML configuration file, otherwise uses the defaults
fn main() -> Result<(), GainFunctionError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => {
            info!("Reading configuration from {}", path);
            Config::from_file(Path::new(path))?
        },
        None => Config::default(),
    };
    if args.len() > 2 {
        warn!("Ignoring extra arguments: {:?}", &args[2..]);
    }

    config.validate()?;

    let parameters = &config.simulation;

    let results = [
        (config.lif.get_label(), simulate_fi_curve(&config.lif, parameters)),
        (config.qif.get_label(), simulate_fi_curve(&config.qif, parameters)),
        (config.eif.get_label(), simulate_fi_curve(&config.eif, parameters)),
    ];

    let mut curves: Vec<FICurve> = Vec::new();
    let mut smoothed: Vec<SmoothedSeries> = Vec::new();

    for (label, result) in results {
        match result {
            Ok((curve, smoothed_curve)) => {
                curves.push(curve);
                smoothed.push(smoothed_curve);
            },
            Err(err) => error!("{} simulation failed, skipping its figures: {}", label, err),
        }
    }

    if curves.is_empty() {
        warn!("No simulation completed, nothing to plot");
        return Ok(());
    }

    let written = render_figures(&parameters.output_directory, &curves, &smoothed)?;
    for path in written {
        info!("Wrote {}", path.display());
    }

    Ok(())
}
