//! # Forum Shared
//! 
//! Shared configuration, constants, identifier types, and telemetry for the forum.

pub mod constants;
pub mod types;
pub mod utils;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
