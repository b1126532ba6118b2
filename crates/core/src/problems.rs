pub mod ode;
pub mod optimization;

pub use ode::OdeProblem;
pub use optimization::OptimizationProblem;
