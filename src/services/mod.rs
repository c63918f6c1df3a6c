//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — Hjson configuration loading.
//! - `eis.rs` — the single GET against the EIS risks endpoint.
//! - `storage.rs` — raw response persistence + offline reload.
//! - `stats.rs` — record predicates, aggregation and percentages.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod eis;
pub mod output;
pub mod stats;
pub mod storage;
