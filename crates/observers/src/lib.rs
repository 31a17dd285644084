//! Reusable observers for the Optima solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `optima-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasObjective`], [`HasIterate`], [`CanStopEarly`],
//!   [`CanAssumeWorse`])
//! - [`LogObserver`] — emits every solver event through `tracing`
//! - [`Deadline`] — stops a solver once a wall-clock budget is spent
//! - [`Recorder`] — collects the iterates a solver visits, for display
//!
//! [`Observer`]: optima_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasObjective`]: traits::HasObjective
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`CanAssumeWorse`]: traits::CanAssumeWorse

mod deadline;
mod log;
mod record;
pub mod traits;

pub use deadline::Deadline;
pub use log::LogObserver;
pub use record::Recorder;
pub use traits::Iterate;
