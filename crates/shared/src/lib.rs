//! Shared types, errors, and configuration for flipcalc.
//!
//! This crate provides common types used across all other crates:
//! - Money and percentage display types with decimal precision
//! - Typed expense identifiers
//! - Application-wide error types
//! - Configuration management, including the seed ledger

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, DisplayConfig, OutputFormat, SeedConfig, SeedExpense};
pub use error::{AppError, AppResult};
