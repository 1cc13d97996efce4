//! Decision support for forest-rights scheme planning.
//!
//! The [`dss`] module holds the pure scoring and recommendation pipeline. Loading,
//! validation, and action plan bookkeeping live beside it so the engine itself never
//! touches I/O.

pub mod config;
pub mod dss;
pub mod error;
pub mod ingest;
pub mod plans;
pub mod telemetry;
