//! Business logic services for the Pharmacy Assistant

pub mod assistant;

pub use assistant::AssistantService;
