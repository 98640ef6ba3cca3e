#![deny(unsafe_code)]
//! # xornet-fitness
//!
//! The board a network plays on and the scoring rule for one move.
//!
//! A network's output is read as one byte per cell: `1` selects the cell,
//! `0` leaves it alone, anything else is noise and is penalised. A move is
//! committed only when exactly one cell is selected, every other byte is
//! zero, and the selected cell was empty.

pub mod environment;
pub mod error;
pub mod scoring;

pub use environment::{Environment, CLAIMED, EMPTY, OCCUPIED};
pub use error::{FitnessError, FitnessResult};
pub use scoring::{FitnessVariant, Scorer, ScoringWeights, StepOutcome};
