//! Derivation of percentages and the surplus/deficit verdict.

pub mod engine;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::derive;
pub use types::{DerivedFigures, ExpenseFigure, Verdict};
