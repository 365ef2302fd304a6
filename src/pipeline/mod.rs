mod client;
mod types;

pub use client::{HttpPipeline, PredictPipeline};
pub use types::{PredictRequest, PredictResponse};

#[cfg(test)]
pub use client::MockPredictPipeline;
