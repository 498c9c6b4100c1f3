//! Core data models for the premium table engine.
//!
//! This module contains all the domain models used throughout the engine.

mod interval;
mod premium_row;
mod revision;
mod table;

pub use interval::{ValidityInterval, Versioned};
pub use premium_row::PremiumRow;
pub use revision::{Organization, RateRevision};
pub use table::{RemunerationGrade, TableVersion};
