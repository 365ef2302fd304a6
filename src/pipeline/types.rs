use crate::prediction::StudentRecord;
use serde::{Deserialize, Serialize};

/// Body posted to the model service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub instances: Vec<StudentRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub predictions: Vec<f64>,
}
