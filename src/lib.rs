//! Employee roster and leave calendar with weekend rotation scheduling.
//!
//! The [`roster`] module holds the in-memory store, the leave membership
//! and rotation rules, and the read models built on top of them. CSV
//! loading lives in [`roster::import`]; [`config`] and [`telemetry`] wire
//! the binary up.

pub mod config;
pub mod error;
pub mod roster;
pub mod telemetry;
