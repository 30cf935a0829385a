//! Shared types and models for the Crop Recommendation Service
//!
//! This crate contains the request/response models and the feature-assembly
//! validation used by the backend. It performs no I/O.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
