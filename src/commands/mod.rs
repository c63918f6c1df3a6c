//! Command handler layer.
//!
//! Wires config, record source, aggregation and report output together.
//! Business logic lives in `services/*`.

pub mod run;

pub use run::handle_run;
