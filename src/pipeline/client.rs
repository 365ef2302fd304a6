use super::types::*;
use crate::{Error, Result, config::PipelineConfig, prediction::StudentRecord};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// The prediction pipeline: rows in, one predicted score per row out, in order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictPipeline: Send + Sync {
    async fn predict(&self, rows: &[StudentRecord]) -> Result<Vec<f64>>;
}

/// Talks to a model service over HTTP.
pub struct HttpPipeline {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpPipeline {
    pub fn new(config: PipelineConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PredictPipeline for HttpPipeline {
    async fn predict(&self, rows: &[StudentRecord]) -> Result<Vec<f64>> {
        debug!("Sending {} row(s) to pipeline at {}", rows.len(), self.endpoint);

        let request = PredictRequest {
            instances: rows.to_vec(),
        };

        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::pipeline(format!(
                "pipeline returned {}: {}",
                status,
                body.trim()
            )));
        }

        let response: PredictResponse = response.json().await?;

        debug!(
            "Received {} prediction(s) from pipeline",
            response.predictions.len()
        );
        Ok(response.predictions)
    }
}
