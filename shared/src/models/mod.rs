//! Domain models for the Crop Recommendation Service

mod features;
mod prediction;
mod request;
mod weather;

pub use features::*;
pub use prediction::*;
pub use request::*;
pub use weather::*;
