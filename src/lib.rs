//! Premium table engine for Japanese employees' health insurance.
//!
//! This crate resolves the standard-monthly-remuneration table and the
//! insurance-rate revision in force on a reference date, computes per-grade
//! premiums in exact decimal arithmetic, and emits the premium table as a
//! CSV report.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;
pub mod report;
pub mod resolve;
pub mod source;
