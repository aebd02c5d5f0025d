//! Core business logic for flipcalc.
//!
//! This crate contains pure business logic with ZERO terminal or I/O
//! dependencies. All domain types and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - The ordered expense ledger and its update contract
//! - `derivation` - Percentages, amounts in favor and the surplus/deficit verdict
//! - `state` - The financial state and the edits that mutate it
//! - `input` - Coercion of raw text into amounts
//! - `report` - Formatted view model for display

pub mod derivation;
pub mod input;
pub mod ledger;
pub mod report;
pub mod state;

pub use derivation::{DerivedFigures, Verdict, derive};
pub use report::Report;
pub use state::{Edit, FinancialState};
