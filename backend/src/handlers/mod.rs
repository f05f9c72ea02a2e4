//! HTTP handlers for the Pharmacy Assistant

pub mod assistant;
pub mod health;

pub use assistant::{dispatch_intent, list_intents, normalize_name};
pub use health::health_check;
