//! Interactive plots of recorded traces.
//!
//! See [`Plot`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, PlotPoints};

/// Window settings for [`Plot::show`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    x_label: Option<String>,
}

impl ShowConfig {
    /// Creates a config with no title, no legend, and no axis label.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Labels the x-axis.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }
}

/// Collects `N` named traces over a shared x-axis and displays them via egui.
///
/// # Example
///
/// ```ignore
/// let mut plot = Plot::new(["Prey", "Predator"]);
/// for point in simulator.trajectory(parameters) {
///     plot.record(point.time, [Some(point.prey), Some(point.predator)]);
/// }
/// plot.show(ShowConfig::new().title("Lotka-Volterra").legend())?;
/// ```
pub struct Plot<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> Plot<N> {
    /// Creates an empty plot with the given trace names.
    #[must_use]
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records one x value across all traces.
    ///
    /// A `None` slot, or a non-finite value, skips that trace for this x.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (points, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y.filter(|y| y.is_finite()) {
                points.push([x, y]);
            }
        }
    }

    /// Returns the number of points recorded for each trace.
    #[must_use]
    pub fn counts(&self) -> [usize; N] {
        std::array::from_fn(|i| self.data[i].len())
    }

    /// Opens a blocking egui window displaying all recorded traces.
    ///
    /// Returns once the user closes the window.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

/// The egui [`eframe::App`] that renders recorded traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = egui_plot::Plot::new("predprey_plot");
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.config.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    let points: PlotPoints = points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(name));
                }
            });
        });
    }
}
