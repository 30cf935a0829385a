//! HTTP handlers for the Crop Recommendation Service

pub mod health;
pub mod predict;

pub use health::{health_check, root};
pub use predict::predict;
