use std::iter::FusedIterator;

use predprey_core::Snapshot;
use predprey_solvers::transient::rk4::{self, Steps};

use crate::{
    FitnessRecord, Input, LotkaVolterra, Parameters, Population, PopulationDynamics, Rates, rates,
};

const MODEL: &LotkaVolterra = &LotkaVolterra;
const PROBLEM: &PopulationDynamics = &PopulationDynamics;

/// Integrates the Lotka-Volterra model from a fixed initial population.
///
/// A simulator holds everything except the coefficients, so one simulator can
/// score many parameter sets. Every run starts from the same initial
/// population with the clock at zero, which makes runs with equal parameters
/// bit-identical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simulator {
    initial: Population,
    config: rk4::Config,
}

impl Simulator {
    /// Creates a simulator from an initial population and a validated
    /// step size and horizon.
    #[must_use]
    pub fn new(initial: Population, config: rk4::Config) -> Self {
        Self { initial, config }
    }

    /// Returns the population every run starts from.
    #[must_use]
    pub fn initial(&self) -> Population {
        self.initial
    }

    /// Returns the step size and horizon.
    #[must_use]
    pub fn config(&self) -> &rk4::Config {
        &self.config
    }

    /// Returns a lazy iterator over the trajectory for `parameters`.
    ///
    /// The initial population is not part of the trajectory. Each point holds
    /// the population after one step, labeled with the clock value that step
    /// began at. Non-finite populations are yielded like any other.
    #[must_use]
    pub fn trajectory(&self, parameters: Parameters) -> Trajectory {
        Trajectory {
            steps: Steps::new(MODEL, PROBLEM, self.start(parameters), &self.config),
        }
    }

    /// Runs a simulation and records the extremes of both populations.
    ///
    /// The run stops at the first non-finite population and the record is
    /// marked as diverged.
    #[must_use]
    pub fn record(&self, parameters: Parameters) -> FitnessRecord {
        let mut record = FitnessRecord::default();

        let observer = |event: &rk4::Event<Input, Rates>| {
            let population = event.snapshot.input.population;
            if population.is_finite() {
                record.update(&population);
                None
            } else {
                tracing::trace!(?parameters, step = event.step, "population diverged");
                record.mark_diverged();
                Some(rk4::Action::StopEarly)
            }
        };

        let Snapshot { input, .. } = self.start(parameters);
        if let Err(error) = rk4::solve(MODEL, PROBLEM, input, &self.config, observer) {
            tracing::debug!(?parameters, %error, "integration failed");
            record.mark_diverged();
        }

        record
    }

    /// Returns the oscillation score for `parameters`.
    ///
    /// Shorthand for `self.record(parameters).score()`.
    #[must_use]
    pub fn fitness(&self, parameters: Parameters) -> f64 {
        self.record(parameters).score()
    }

    fn start(&self, parameters: Parameters) -> Snapshot<Input, Rates> {
        let input = Input {
            population: self.initial,
            parameters,
        };
        Snapshot::new(input, rates(&input.population, &input.parameters))
    }
}

/// One row of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryPoint {
    /// Clock value at the start of the step that produced this point.
    pub time: f64,
    pub prey: f64,
    pub predator: f64,
}

impl From<&rk4::Event<Input, Rates>> for TrajectoryPoint {
    fn from(event: &rk4::Event<Input, Rates>) -> Self {
        let Population { prey, predator } = event.snapshot.input.population;
        Self {
            time: event.time,
            prey,
            predator,
        }
    }
}

/// Lazy iterator over the points of a simulation.
///
/// Created by [`Simulator::trajectory`]. Single pass: rerun the simulation by
/// asking the simulator for a new trajectory.
pub struct Trajectory {
    steps: Steps<'static, LotkaVolterra, PopulationDynamics>,
}

impl Trajectory {
    /// Returns the population after the last point yielded.
    #[must_use]
    pub fn population(&self) -> Population {
        self.steps.current().input.population
    }
}

impl Iterator for Trajectory {
    type Item = TrajectoryPoint;

    fn next(&mut self) -> Option<TrajectoryPoint> {
        match self.steps.next()? {
            Ok(event) => Some(TrajectoryPoint::from(&event)),
            Err(error) => {
                tracing::warn!(%error, "trajectory ended early");
                None
            }
        }
    }
}

impl FusedIterator for Trajectory {}
