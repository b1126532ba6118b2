use std::convert::Infallible;

use predprey_core::{Model, OptimizationProblem};

use crate::{Parameters, Population, Simulator};

/// Population extremes observed over a simulation.
///
/// Starts empty, with minimums at `+inf` and maximums at `-inf`, and widens as
/// populations are added with [`update`](Self::update).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessRecord {
    prey_min: f64,
    prey_max: f64,
    predator_min: f64,
    predator_max: f64,
    steps: usize,
    diverged: bool,
}

impl Default for FitnessRecord {
    fn default() -> Self {
        Self {
            prey_min: f64::INFINITY,
            prey_max: f64::NEG_INFINITY,
            predator_min: f64::INFINITY,
            predator_max: f64::NEG_INFINITY,
            steps: 0,
            diverged: false,
        }
    }
}

impl FitnessRecord {
    /// Widens the extremes to include `population`.
    pub fn update(&mut self, population: &Population) {
        self.prey_min = self.prey_min.min(population.prey);
        self.prey_max = self.prey_max.max(population.prey);
        self.predator_min = self.predator_min.min(population.predator);
        self.predator_max = self.predator_max.max(population.predator);
        self.steps += 1;
    }

    /// Marks the simulation as having left the finite range.
    pub fn mark_diverged(&mut self) {
        self.diverged = true;
    }

    #[must_use]
    pub fn prey_min(&self) -> f64 {
        self.prey_min
    }

    #[must_use]
    pub fn prey_max(&self) -> f64 {
        self.prey_max
    }

    #[must_use]
    pub fn predator_min(&self) -> f64 {
        self.predator_min
    }

    #[must_use]
    pub fn predator_max(&self) -> f64 {
        self.predator_max
    }

    /// Number of populations recorded.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[must_use]
    pub fn diverged(&self) -> bool {
        self.diverged
    }

    /// Returns the oscillation score: prey amplitude plus predator amplitude.
    ///
    /// Lower is better. A diverged or empty record, or one whose sum overflows,
    /// scores `+inf` so that it never beats a finite score.
    #[must_use]
    pub fn score(&self) -> f64 {
        if self.diverged || self.steps == 0 {
            return f64::INFINITY;
        }

        let score = (self.prey_max - self.prey_min) + (self.predator_max - self.predator_min);
        if score.is_finite() {
            score
        } else {
            tracing::trace!(record = ?self, "non-finite score");
            f64::INFINITY
        }
    }
}

/// Simulates a parameter set and reports its [`FitnessRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessModel {
    simulator: Simulator,
}

impl FitnessModel {
    #[must_use]
    pub fn new(simulator: Simulator) -> Self {
        Self { simulator }
    }

    #[must_use]
    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }
}

impl Model for FitnessModel {
    type Input = Parameters;
    type Output = FitnessRecord;
    type Error = Infallible;

    fn call(&self, input: &Parameters) -> Result<FitnessRecord, Infallible> {
        Ok(self.simulator.record(*input))
    }
}

/// Minimizes the oscillation score over `[alpha, beta, delta, eta]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OscillationProblem;

impl OptimizationProblem<4> for OscillationProblem {
    type Input = Parameters;
    type Output = FitnessRecord;
    type Error = Infallible;

    fn input(&self, x: &[f64; 4]) -> Result<Parameters, Infallible> {
        Ok(Parameters::from(*x))
    }

    fn objective(&self, _input: &Parameters, output: &FitnessRecord) -> Result<f64, Infallible> {
        Ok(output.score())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use predprey_solvers::transient::rk4;

    #[test]
    fn empty_record_scores_infinite() {
        assert_eq!(FitnessRecord::default().score(), f64::INFINITY);
    }

    #[test]
    fn constant_populations_score_zero() {
        let mut record = FitnessRecord::default();
        for _ in 0..3 {
            record.update(&Population::new(100.0, 10.0));
        }

        assert_eq!(record.score(), 0.0);
    }

    #[test]
    fn score_sums_both_amplitudes() {
        let mut record = FitnessRecord::default();
        record.update(&Population::new(100.0, 10.0));
        record.update(&Population::new(80.0, 14.0));
        record.update(&Population::new(95.0, 9.0));

        assert_relative_eq!(record.score(), 20.0 + 5.0);
        assert_eq!(record.steps(), 3);
    }

    #[test]
    fn diverged_record_scores_infinite() {
        let mut record = FitnessRecord::default();
        record.update(&Population::new(100.0, 10.0));
        record.update(&Population::new(101.0, 10.0));
        record.mark_diverged();

        assert_eq!(record.score(), f64::INFINITY);
    }

    #[test]
    fn overflowing_amplitude_scores_infinite() {
        let mut record = FitnessRecord::default();
        record.update(&Population::new(-f64::MAX, 0.0));
        record.update(&Population::new(f64::MAX, 0.0));

        assert_eq!(record.score(), f64::INFINITY);
    }

    #[test]
    fn problem_reads_coordinates_as_parameters() {
        let parameters = OscillationProblem.input(&[0.1, 0.2, 0.3, 0.4]).unwrap();

        assert_eq!(parameters, Parameters::new(0.1, 0.2, 0.3, 0.4));
    }

    #[test]
    fn model_scores_through_the_simulator() {
        let config = rk4::Config::new(0.1, 5.0).unwrap();
        let simulator = Simulator::new(Population::new(100.0, 10.0), config);
        let model = FitnessModel::new(simulator);
        let parameters = Parameters::new(0.3, 0.02, 0.01, 0.4);

        let record = model.call(&parameters).unwrap();
        let score = OscillationProblem.objective(&parameters, &record).unwrap();

        assert_eq!(score, simulator.fitness(parameters));
    }
}
