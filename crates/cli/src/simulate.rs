use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use predprey_observers::TableWriter;

use crate::config::SimulateConfig;

/// Writes the trajectory for the configured parameters to a table file.
pub fn run(config: &SimulateConfig, output: Option<PathBuf>, plot: bool) -> Result<()> {
    #[cfg(not(feature = "plot"))]
    if plot {
        anyhow::bail!("--plot requires predprey to be built with the `plot` feature");
    }

    let simulator = config.simulator()?;
    let path = output.unwrap_or_else(|| config.output.clone());

    let file =
        File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut table = TableWriter::new(BufWriter::new(file), ["Time", "Prey", "Predator"])
        .with_context(|| format!("failed to write {}", path.display()))?;

    #[cfg(feature = "plot")]
    let mut chart = plot.then(|| predprey_observers::Plot::new(["Prey", "Predator"]));

    tracing::info!(
        parameters = ?config.parameters,
        step_size = config.step_size,
        horizon = config.horizon,
        "simulating"
    );

    for point in simulator.trajectory(config.parameters) {
        table
            .row([point.time, point.prey, point.predator])
            .with_context(|| format!("failed to write {}", path.display()))?;

        #[cfg(feature = "plot")]
        if let Some(chart) = chart.as_mut() {
            chart.record(point.time, [Some(point.prey), Some(point.predator)]);
        }
    }

    let rows = table.rows();
    table
        .finish()
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(rows, "trajectory written");

    println!("The data has been saved to {}", path.display());

    #[cfg(feature = "plot")]
    if let Some(chart) = chart {
        let show = predprey_observers::ShowConfig::new()
            .title("Lotka-Volterra")
            .legend()
            .x_label("Time");
        chart
            .show(show)
            .map_err(|error| anyhow::anyhow!("failed to open the plot window: {error}"))?;
    }

    Ok(())
}
