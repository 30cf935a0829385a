//! Business logic services for the Crop Recommendation Service

pub mod keepalive;
pub mod pipeline;
pub mod ranking;
pub mod weather;

pub use pipeline::RequestPipeline;
pub use weather::WeatherResolver;
