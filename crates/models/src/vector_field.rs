use std::convert::Infallible;

use predprey_core::{Model, OdeProblem};

use crate::{Parameters, Population, Rates};

/// Evaluates the Lotka-Volterra vector field.
///
/// The products are formed in a fixed order so that repeated runs, and runs
/// compared against reference output, agree to the last bit.
#[must_use]
pub fn rates(population: &Population, parameters: &Parameters) -> Rates {
    let Population { prey, predator } = *population;
    let Parameters {
        alpha,
        beta,
        delta,
        eta,
    } = *parameters;

    Rates {
        prey: prey * alpha - prey * predator * beta,
        predator: predator * delta * prey - eta * predator,
    }
}

/// Input to the [`LotkaVolterra`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub population: Population,
    pub parameters: Parameters,
}

/// The Lotka-Volterra equations as a [`Model`].
///
/// The model is autonomous: its output depends only on the population and
/// the coefficients, never on time.
#[derive(Debug, Clone, Copy, Default)]
pub struct LotkaVolterra;

impl Model for LotkaVolterra {
    type Input = Input;
    type Output = Rates;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Rates, Infallible> {
        Ok(rates(&input.population, &input.parameters))
    }
}

/// Integrates the [`Population`] of a [`LotkaVolterra`] model over time.
///
/// The coefficients are carried through every step unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationDynamics;

impl OdeProblem for PopulationDynamics {
    type Input = Input;
    type Output = Rates;
    type Delta = f64;
    type State = Population;
    type Error = Infallible;

    fn state(&self, input: &Input) -> Result<Population, Infallible> {
        Ok(input.population)
    }

    fn derivative(&self, _input: &Input, output: &Rates) -> Result<Rates, Infallible> {
        Ok(*output)
    }

    fn build_input(
        &self,
        base: &Input,
        state: &Population,
        _delta: &f64,
    ) -> Result<Input, Infallible> {
        Ok(Input {
            population: *state,
            parameters: base.parameters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn matches_the_textbook_equations() {
        let population = Population::new(110.0, 12.0);
        let parameters = Parameters::new(0.1, 0.01, 0.001, 0.1);

        let rates = rates(&population, &parameters);

        // 11 - 13.2 and 1.32 - 1.2
        assert_relative_eq!(rates.prey, -2.2, epsilon = 1e-12);
        assert_relative_eq!(rates.predator, 0.12, epsilon = 1e-12);
    }

    #[test]
    fn zero_parameters_give_zero_rates() {
        let rates = rates(
            &Population::new(100.0, 10.0),
            &Parameters::new(0.0, 0.0, 0.0, 0.0),
        );

        assert_eq!(rates.prey, 0.0);
        assert_eq!(rates.predator, 0.0);
    }

    #[test]
    fn extinct_populations_stay_extinct() {
        let parameters = Parameters::new(0.5, 0.02, 0.01, 0.3);

        assert_eq!(rates(&Population::new(0.0, 0.0), &parameters).prey, 0.0);
        assert_eq!(rates(&Population::new(0.0, 0.0), &parameters).predator, 0.0);
        assert_eq!(rates(&Population::new(0.0, 5.0), &parameters).prey, 0.0);
        assert_eq!(rates(&Population::new(5.0, 0.0), &parameters).predator, 0.0);
    }

    #[test]
    fn problem_replaces_only_the_population() {
        let input = Input {
            population: Population::new(100.0, 10.0),
            parameters: Parameters::new(0.1, 0.2, 0.3, 0.4),
        };

        let next = PopulationDynamics
            .build_input(&input, &Population::new(90.0, 11.0), &0.1)
            .unwrap();

        assert_eq!(next.population, Population::new(90.0, 11.0));
        assert_eq!(next.parameters, input.parameters);
    }
}
