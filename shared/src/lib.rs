//! Shared types and the voice command engine for the Pharmacy Assistant
//!
//! This crate contains the domain models, the drug-name normalizer and
//! matcher, and the intent handlers shared between the backend and the
//! browser (via WASM).

pub mod assistant;
pub mod error;
pub mod matcher;
pub mod models;
pub mod normalizer;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
