//! Rivercross Core - domain types for the river crossing puzzle
//!
//! This crate provides the fundamental abstractions shared by the solver:
//! - Horses and the immutable herd they belong to
//! - Bank partitions and boat position
//! - Per-horse accumulated crossing time
//! - Crossings (a group of horses moving together in one direction)

pub mod bank;
pub mod crossing;
pub mod error;
pub mod horse;
pub mod time;

pub use bank::{Bank, BankState, HorseSet, MAX_HORSES};
pub use crossing::{Crossing, CrossingMembers, CrossingPath, Direction};
pub use error::{Result, RiverCrossingError};
pub use horse::{Herd, Horse, HorseId};
pub use time::AccumulatedTime;
