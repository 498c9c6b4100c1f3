//! Calculation logic for the premium table engine.
//!
//! This module contains the pure functions that turn a remuneration grade
//! and a rate revision into the premium figures of one report row: the
//! exact-decimal premium computation and the round-half-down rounding rule
//! applied to deduction amounts.

mod premium;
mod rounding;

pub use premium::compute_premium_row;
pub use rounding::round_half_down;
