//! Plotting utilities for visualizing functions and their roots.
//!
//! [`PlotApp`] is a builder for a blocking egui window: add line series,
//! sampled function curves, and root markers, then call
//! [`run`](PlotApp::run). It consumes only a function, a display
//! interval, and the root estimates a solver produced; nothing here
//! feeds back into solving.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

/// A runnable egui application for plotting functions and roots.
#[derive(Default)]
pub struct PlotApp {
    series: Vec<Series>,
    markers: Vec<Series>,
}

struct Series {
    name: String,
    points: Vec<[f64; 2]>,
}

impl PlotApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named line series from raw points.
    #[must_use]
    pub fn add_series(mut self, name: &str, points: &[[f64; 2]]) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            points: points.to_vec(),
        });

        self
    }

    /// Samples `f` at `samples` evenly spaced points across `interval`
    /// and adds the curve as a named line series.
    ///
    /// Non-finite samples are skipped so poles do not distort the plot.
    #[must_use]
    pub fn add_function<F>(mut self, name: &str, f: F, interval: [f64; 2], samples: usize) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let [left, right] = interval;
        let spacing = if samples > 1 {
            (right - left) / (samples - 1) as f64
        } else {
            0.0
        };

        let points = (0..samples)
            .map(|i| {
                let x = if i == samples - 1 {
                    right
                } else {
                    left + spacing * i as f64
                };
                [x, f(x)]
            })
            .filter(|point| point[1].is_finite())
            .collect();

        self.series.push(Series {
            name: name.to_string(),
            points,
        });

        self
    }

    /// Adds point markers at `(root, f(root))` for each root estimate.
    #[must_use]
    pub fn add_roots<F>(mut self, name: &str, roots: &[f64], f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        let points = roots.iter().map(|&root| [root, f(root)]).collect();

        self.markers.push(Series {
            name: name.to_string(),
            points,
        });

        self
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("plot-id")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for series in &self.series {
                        let points: PlotPoints = series.points.iter().copied().collect();
                        plot_ui.line(Line::new(points).name(&series.name));
                    }

                    for markers in &self.markers {
                        let points: PlotPoints = markers.points.iter().copied().collect();
                        plot_ui.points(Points::new(points).radius(4.0).name(&markers.name));
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_sampling_includes_both_endpoints() {
        let app = PlotApp::new().add_function("line", |x| x, [0.0, 2.0], 5);

        let points = &app.series[0].points;
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], [0.0, 0.0]);
        assert_eq!(points[4], [2.0, 2.0]);
    }

    #[test]
    fn function_sampling_skips_non_finite_values() {
        let app = PlotApp::new().add_function("pole", |x| 1.0 / x, [-1.0, 1.0], 3);

        // The midpoint x = 0 evaluates to infinity and is dropped.
        let points = &app.series[0].points;
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|point| point[1].is_finite()));
    }

    #[test]
    fn root_markers_pair_roots_with_their_residuals() {
        let app = PlotApp::new().add_roots("roots", &[-2.0, 2.0], |x| x * x - 4.0);

        let points = &app.markers[0].points;
        assert_eq!(points, &vec![[-2.0, 0.0], [2.0, 0.0]]);
    }

    #[test]
    fn raw_series_are_stored_as_given() {
        let data = [[0.0, 1.0], [1.0, 3.0], [2.0, 1.0]];
        let app = PlotApp::new().add_series("raw", &data);

        assert_eq!(app.series[0].name, "raw");
        assert_eq!(app.series[0].points, data.to_vec());
    }
}
