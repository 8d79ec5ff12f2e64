//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate mask logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod run;

pub use run::handle_command;
