//! Shared test fixtures for Rivercross crates.
//!
//! This crate provides puzzle instances and reference checks for testing.
//! It does NOT depend on `rivercross-solver`, so the reference checks stay
//! independent of the engine they verify.
//!
//! - [`scenarios`] - Canonical puzzle configurations
//! - [`brute`] - Unpruned enumeration of crossing schedules
//! - [`replay`] - Checked replay of a crossing path
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! rivercross-test = { workspace = true }
//! ```

pub mod brute;
pub mod replay;
pub mod scenarios;

pub use brute::{brute_force, BruteForce, PathMembers};
pub use replay::{replay, Replay};
pub use scenarios::{
    classic_bridge, equal_trio, exhausted_herd, five_horse_trio_boat, two_horses,
};
