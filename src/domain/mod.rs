//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep the EIS document tree, config and report structs in one place.
//! - Make `--json` output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — config, risk record tree, stat counters and result.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.

pub mod models;
