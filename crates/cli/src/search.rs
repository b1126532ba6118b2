use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use predprey_core::Observer;
use predprey_models::{FitnessModel, OscillationProblem, Parameters};
use predprey_observers::{EvaluationLimit, ProgressLog};
use predprey_solvers::optimization::grid_search::{self, Action, Event, Status};

use crate::config::SearchConfig;

type SearchEvent<'a> = Event<'a, FitnessModel, OscillationProblem, 4>;

/// Runs the grid search and prints the calmest parameters found.
pub fn run(config: &SearchConfig, max_evaluations: Option<NonZeroUsize>) -> Result<()> {
    let model = FitnessModel::new(config.simulator()?);
    let ranges = config.ranges()?;

    tracing::info!(points = grid_search::grid_size(&ranges), "starting grid search");

    let mut progress = ProgressLog::new();
    let mut limit = max_evaluations.map(|n| EvaluationLimit::new(n.get()));

    let solution = grid_search::minimize(
        &model,
        &OscillationProblem,
        &ranges,
        |event: &SearchEvent<'_>| -> Option<Action> {
            let _: Option<Action> = progress.observe(event);
            limit.as_mut().and_then(|limit| limit.observe(event))
        },
    )
    .context("grid search failed")?;

    progress.finish();
    if solution.status == Status::StoppedByObserver {
        tracing::warn!(
            evaluations = solution.evaluations,
            kept = solution.evaluations.saturating_sub(1),
            "evaluation limit reached before the grid was covered; the last point was discarded"
        );
    }

    let Parameters {
        alpha,
        beta,
        delta,
        eta,
    } = solution.snapshot.input;

    println!("Optimal Parameters:");
    println!("Alpha: {alpha:.6} Beta: {beta:.6} Delta: {delta:.6} Eta: {eta:.6}");
    println!("Fitness: {:.6e}", solution.objective);

    Ok(())
}
