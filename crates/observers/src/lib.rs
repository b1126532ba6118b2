//! Reusable observers and recorders for predprey solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits shared across solvers
//!   ([`HasPoint`], [`HasObjective`], [`CanStopEarly`], [`CanAssumeWorse`])
//! - [`ProgressLog`]: logs search progress through `tracing`
//! - [`EvaluationLimit`]: stops a solver after a fixed number of events
//! - [`TableWriter`]: writes fixed-width scientific tables
//!
//! # Features
//!
//! - `plot`: enables [`Plot`] for viewing recorded traces in an egui window.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasPoint`]: traits::HasPoint
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

pub mod traits;

mod limit;
mod progress;
mod table;

#[cfg(feature = "plot")]
mod plot;

pub use limit::EvaluationLimit;
pub use progress::ProgressLog;
pub use table::{TableWriter, scientific};

#[cfg(feature = "plot")]
pub use plot::{Plot, ShowConfig};
