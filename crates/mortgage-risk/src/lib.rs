//! Mortgage loan intake with rule-based risk scoring and RMBS-style credit ratings.

pub mod config;
pub mod error;
pub mod loans;
pub mod telemetry;
