//! Renders F-I curves as SVG figures: one figure per model, an overlay of the raw
//! curves and an overlay of the smoothed curves.

use std::{fs::create_dir_all, path::{Path, PathBuf}};
use plotters::prelude::*;
use crate::error::{GainFunctionError, PlottingError};
use crate::fi_curve::FICurve;
use crate::smoothing::SmoothedSeries;


pub const X_DESCRIPTION: &str = "Input current density [µA/cm²]";
pub const Y_DESCRIPTION: &str = "Firing Rate [spikes/s]";

const COLORS: [RGBColor; 3] = [BLUE, RED, GREEN];

/// A labeled set of `(input current, firing rate)` samples that can be drawn
pub trait CurveSamples {
    fn get_label(&self) -> &'static str;
    fn get_samples(&self) -> Vec<(f32, f32)>;
}

impl CurveSamples for FICurve {
    fn get_label(&self) -> &'static str {
        self.label
    }

    fn get_samples(&self) -> Vec<(f32, f32)> {
        self.samples()
    }
}

impl CurveSamples for SmoothedSeries {
    fn get_label(&self) -> &'static str {
        self.label
    }

    fn get_samples(&self) -> Vec<(f32, f32)> {
        self.samples()
    }
}

fn backend_error<E: std::fmt::Display>(err: E) -> PlottingError {
    PlottingError::Backend(err.to_string())
}

fn get_ranges<C: CurveSamples>(curves: &[C]) -> ((f32, f32), f32) {
    let samples = curves.iter()
        .flat_map(|i| i.get_samples())
        .collect::<Vec<(f32, f32)>>();

    let x_min = samples.iter().map(|(x, _)| *x).fold(f32::INFINITY, f32::min);
    let mut x_max = samples.iter().map(|(x, _)| *x).fold(f32::NEG_INFINITY, f32::max);
    if x_max <= x_min {
        x_max = x_min + 1.;
    }

    let y_max = samples.iter().map(|(_, y)| *y).fold(0., f32::max).max(1.) * 1.1;

    ((x_min, x_max), y_max)
}

/// Draws the given curves on one set of axes, a legend is added when `legend` is `true`
pub fn plot_curves<C: CurveSamples>(
    path: &Path,
    title: &str,
    curves: &[C],
    legend: bool,
) -> Result<(), PlottingError> {
    if curves.is_empty() {
        return Err(PlottingError::NothingToPlot);
    }

    let ((x_min, x_max), y_max) = get_ranges(curves);

    let root = SVGBackend::new(path, (1000, 700)).into_drawing_area();
    root.fill(&WHITE).map_err(backend_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f32..y_max)
        .map_err(backend_error)?;

    chart
        .configure_mesh()
        .x_desc(X_DESCRIPTION)
        .y_desc(Y_DESCRIPTION)
        .draw()
        .map_err(backend_error)?;

    for (i, curve) in curves.iter().enumerate() {
        let color = COLORS[i % COLORS.len()];

        chart
            .draw_series(LineSeries::new(curve.get_samples(), &color))
            .map_err(backend_error)?
            .label(curve.get_label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if legend {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(backend_error)?;
    }

    root.present().map_err(backend_error)?;

    Ok(())
}

/// Draws the F-I curve of a single model, titled `F-I curve (<label>)`
pub fn plot_fi_curve(path: &Path, curve: &FICurve) -> Result<(), PlottingError> {
    plot_curves(
        path,
        &format!("F-I curve ({})", curve.label),
        std::slice::from_ref(curve),
        false,
    )
}

/// File name of the figure of a single model
pub fn get_curve_file_name(label: &str) -> String {
    format!("fi_curve_{}.svg", label.to_lowercase())
}

/// Writes one figure per curve, an overlay of the raw curves and an overlay of the smoothed
/// series into `output_directory` (created if missing), overlays are skipped when there is
/// nothing to draw, returns the paths of the written figures
pub fn render_figures(
    output_directory: &Path,
    curves: &[FICurve],
    smoothed: &[SmoothedSeries],
) -> Result<Vec<PathBuf>, GainFunctionError> {
    create_dir_all(output_directory)?;

    let mut written = Vec::new();

    for curve in curves {
        let path = output_directory.join(get_curve_file_name(curve.label));
        plot_fi_curve(&path, curve)?;
        written.push(path);
    }

    if !curves.is_empty() {
        let path = output_directory.join("fi_curve_comparison.svg");
        plot_curves(&path, "F-I curve (comparison)", curves, true)?;
        written.push(path);
    }

    if !smoothed.is_empty() {
        let path = output_directory.join("fi_curve_smoothed.svg");
        plot_curves(&path, "F-I curve (smoothed)", smoothed, true)?;
        written.push(path);
    }

    Ok(written)
}
