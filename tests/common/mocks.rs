use async_trait::async_trait;
use score_predictor::{Error, Result, pipeline::PredictPipeline, prediction::StudentRecord};
use std::sync::{Arc, Mutex};

/// Mock pipeline for testing
#[derive(Debug, Clone)]
pub struct MockPipeline {
    pub predictions: Vec<f64>,
    pub requests: Arc<Mutex<Vec<Vec<StudentRecord>>>>,
    pub error: Option<String>,
}

impl MockPipeline {
    pub fn new() -> Self {
        Self {
            predictions: Vec::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_predictions(mut self, predictions: Vec<f64>) -> Self {
        self.predictions = predictions;
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_requests(&self) -> Vec<Vec<StudentRecord>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictPipeline for MockPipeline {
    async fn predict(&self, rows: &[StudentRecord]) -> Result<Vec<f64>> {
        self.requests.lock().unwrap().push(rows.to_vec());

        if let Some(ref error) = self.error {
            return Err(Error::pipeline(error.clone()));
        }

        Ok(self.predictions.clone())
    }
}

impl Default for MockPipeline {
    fn default() -> Self {
        Self::new()
    }
}
