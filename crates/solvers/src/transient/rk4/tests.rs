use std::{
    convert::Infallible,
    ops::{Add, Div, Mul},
};

use approx::assert_relative_eq;
use thiserror::Error as ThisError;

use predprey_core::{DerivativeOf, Model, OdeProblem, Snapshot, StepIntegrable};

use super::{Action, Config, Error, Event, Status, solve, solve_unobserved, step, steps};

// --- Test fixtures ---

/// State: a single quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Amount(f64);

/// Derivative: rate of change of the quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rate(f64);

impl Add for Rate {
    type Output = Rate;

    fn add(self, rhs: Rate) -> Rate {
        Rate(self.0 + rhs.0)
    }
}

impl Mul<f64> for Rate {
    type Output = Rate;

    fn mul(self, rhs: f64) -> Rate {
        Rate(self.0 * rhs)
    }
}

impl Div<f64> for Rate {
    type Output = Rate;

    fn div(self, rhs: f64) -> Rate {
        Rate(self.0 / rhs)
    }
}

impl StepIntegrable<f64> for Amount {
    type Derivative = Rate;

    fn step(&self, derivative: Rate, dt: f64) -> Self {
        Amount(self.0 + derivative.0 * dt)
    }
}

#[derive(Debug, Clone, Copy)]
struct Input {
    amount: Amount,
    time: f64,
}

impl Input {
    fn at_zero(amount: f64) -> Self {
        Self {
            amount: Amount(amount),
            time: 0.0,
        }
    }
}

/// dy/dt = k * y
struct Exponential {
    k: f64,
}

impl Model for Exponential {
    type Input = Input;
    type Output = Rate;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Rate, Self::Error> {
        Ok(Rate(self.k * input.amount.0))
    }
}

/// dy/dt = t
struct Ramp;

impl Model for Ramp {
    type Input = Input;
    type Output = Rate;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Rate, Self::Error> {
        Ok(Rate(input.time))
    }
}

#[derive(Debug, ThisError)]
#[error("amount {0} exceeds capacity")]
struct OverCapacity(f64);

/// dy/dt = y, failing once y exceeds a capacity.
struct Bounded {
    capacity: f64,
}

impl Model for Bounded {
    type Input = Input;
    type Output = Rate;
    type Error = OverCapacity;

    fn call(&self, input: &Input) -> Result<Rate, Self::Error> {
        if input.amount.0 > self.capacity {
            Err(OverCapacity(input.amount.0))
        } else {
            Ok(Rate(input.amount.0))
        }
    }
}

struct Integrate;

impl OdeProblem for Integrate {
    type Input = Input;
    type Output = Rate;
    type Delta = f64;
    type State = Amount;
    type Error = Infallible;

    fn state(&self, input: &Input) -> Result<Amount, Self::Error> {
        Ok(input.amount)
    }

    fn derivative(
        &self,
        _input: &Input,
        output: &Rate,
    ) -> Result<DerivativeOf<Amount, f64>, Self::Error> {
        Ok(*output)
    }

    fn build_input(&self, base: &Input, state: &Amount, delta: &f64) -> Result<Input, Self::Error> {
        Ok(Input {
            amount: *state,
            time: base.time + delta,
        })
    }
}

fn snapshot<M: Model<Input = Input>>(model: &M, amount: f64) -> Snapshot<Input, M::Output> {
    let input = Input::at_zero(amount);
    let output = model.call(&input).expect("fixture accepts its initial input");
    Snapshot::new(input, output)
}

// --- Single step ---

#[test]
fn single_step_matches_taylor_polynomial() {
    // For a linear ODE, one RK4 step reproduces the fourth-order Taylor polynomial.
    let model = Exponential { k: 1.0 };
    let h = 0.1;

    let next = step(&model, &Integrate, &snapshot(&model, 1.0), h).expect("should step");

    let expected = 1.0 + h + h.powi(2) / 2.0 + h.powi(3) / 6.0 + h.powi(4) / 24.0;
    assert_relative_eq!(next.input.amount.0, expected, epsilon = 1e-15);
    assert_relative_eq!(next.input.time, h);
}

#[test]
fn repeated_steps_are_bit_identical() {
    let model = Exponential { k: -0.37 };
    let start = snapshot(&model, 42.0);

    let first = step(&model, &Integrate, &start, 1e-3).expect("should step");
    let second = step(&model, &Integrate, &start, 1e-3).expect("should step");

    assert_eq!(
        first.input.amount.0.to_bits(),
        second.input.amount.0.to_bits()
    );
    assert_eq!(first.output.0.to_bits(), second.output.0.to_bits());
}

#[test]
fn stage_times_are_offset_for_non_autonomous_problems() {
    // With dy/dt = t, RK4 integrates exactly only if stages see t + h/2 and t + h.
    let config = Config::new(0.25, 0.75).unwrap();

    let solution = solve_unobserved(&Ramp, &Integrate, Input::at_zero(0.0), &config)
        .expect("should solve");

    assert_eq!(solution.steps, 4);
    assert_relative_eq!(solution.snapshot.input.time, 1.0);
    assert_relative_eq!(solution.snapshot.input.amount.0, 0.5, epsilon = 1e-12);
}

// --- Stepping loop ---

#[test]
fn exponential_decay_matches_analytic_solution() {
    let model = Exponential { k: -0.5 };
    let dt = 0.01;
    let config = Config::new(dt, 1.0).unwrap();

    let solution =
        solve_unobserved(&model, &Integrate, Input::at_zero(3.0), &config).expect("should solve");

    #[allow(clippy::cast_precision_loss)]
    let elapsed = solution.steps as f64 * dt;
    assert_eq!(solution.status, Status::Complete);
    assert_relative_eq!(
        solution.snapshot.input.amount.0,
        3.0 * (-0.5 * elapsed).exp(),
        epsilon = 1e-9
    );
}

#[test]
fn clock_rounding_can_add_a_step() {
    // 0.1 accumulated ten times is just under 1.0, so an eleventh step starts.
    let config = Config::new(0.1, 1.0).unwrap();

    let solution = solve_unobserved(&Exponential { k: 0.0 }, &Integrate, Input::at_zero(1.0), &config)
        .expect("should solve");

    assert_eq!(solution.steps, 11);
}

#[test]
fn exact_clock_includes_the_end_time() {
    let config = Config::new(0.25, 1.0).unwrap();

    let solution = solve_unobserved(&Exponential { k: 0.0 }, &Integrate, Input::at_zero(1.0), &config)
        .expect("should solve");

    assert_eq!(solution.steps, 5);
    assert_relative_eq!(solution.time, 1.25);
}

#[test]
fn events_are_labeled_with_the_time_each_step_began() {
    let model = Exponential { k: 1.0 };
    let config = Config::new(0.25, 0.5).unwrap();

    let events: Vec<Event<Input, Rate>> = steps(&model, &Integrate, Input::at_zero(1.0), &config)
        .expect("initial input is valid")
        .collect::<Result<_, _>>()
        .expect("should step");

    let labels: Vec<(usize, f64)> = events.iter().map(|e| (e.step, e.time)).collect();
    assert_eq!(labels, vec![(1, 0.0), (2, 0.25), (3, 0.5)]);

    // The first event already holds the stepped state.
    assert!(events[0].snapshot.input.amount.0 > 1.0);
    assert_relative_eq!(events[0].snapshot.input.time, 0.25);
}

#[test]
fn negative_end_takes_no_steps() {
    let config = Config::new(0.1, -1.0).unwrap();

    let solution = solve_unobserved(&Exponential { k: 1.0 }, &Integrate, Input::at_zero(7.0), &config)
        .expect("should solve");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.steps, 0);
    assert_relative_eq!(solution.snapshot.input.amount.0, 7.0);
}

// --- Observers and errors ---

#[test]
fn observer_can_stop_early() {
    let config = Config::new(0.1, 100.0).unwrap();

    let observer = |event: &Event<Input, Rate>| (event.step >= 3).then_some(Action::StopEarly);

    let solution = solve(
        &Exponential { k: 1.0 },
        &Integrate,
        Input::at_zero(1.0),
        &config,
        observer,
    )
    .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.steps, 3);
}

#[test]
fn observer_sees_every_step() {
    let config = Config::new(0.25, 1.0).unwrap();
    let mut seen = Vec::new();

    solve(
        &Exponential { k: 1.0 },
        &Integrate,
        Input::at_zero(1.0),
        &config,
        |event: &Event<Input, Rate>| {
            seen.push(event.snapshot.input.amount.0);
            None
        },
    )
    .expect("should solve");

    assert_eq!(seen.len(), 5);
    assert!(seen.windows(2).all(|pair| pair[1] > pair[0]));
}

#[test]
fn model_error_propagates() {
    let model = Bounded { capacity: 2.0 };
    let config = Config::new(0.1, 10.0).unwrap();

    let result = solve_unobserved(&model, &Integrate, Input::at_zero(1.0), &config);

    assert!(matches!(result, Err(Error::Model(_))));
}

#[test]
fn model_error_at_initial_input_propagates() {
    let model = Bounded { capacity: 2.0 };
    let config = Config::new(0.1, 10.0).unwrap();

    assert!(matches!(
        steps(&model, &Integrate, Input::at_zero(5.0), &config),
        Err(Error::Model(_))
    ));
}

#[test]
fn steps_are_exhausted_after_an_error() {
    let model = Bounded { capacity: 2.0 };
    let config = Config::new(0.1, 10.0).unwrap();

    let mut iter = steps(&model, &Integrate, Input::at_zero(1.0), &config).expect("valid start");
    let failure = iter.by_ref().find(Result::is_err);

    assert!(failure.is_some());
    assert!(iter.next().is_none());
}
