use super::templates::Templates;
use crate::{
    Error, Result,
    pipeline::PredictPipeline,
    prediction::{PredictForm, StudentRecord},
};
use axum::{
    extract::{RawForm, State, rejection::RawFormRejection},
    http::StatusCode,
    response::Html,
};
use std::sync::Arc;
use tracing::{Instrument, debug, error, info, info_span, warn};
use uuid::Uuid;

pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter valid numbers for scores.";

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<dyn PredictPipeline>,
    pub templates: Arc<Templates>,
}

type PageResult = std::result::Result<Html<String>, (StatusCode, String)>;

pub async fn index(State(state): State<AppState>) -> PageResult {
    into_page(state.templates.render_index())
}

pub async fn predict_form(State(state): State<AppState>) -> PageResult {
    into_page(state.templates.render_home(None, None))
}

/// A body that isn't a readable form counts as an empty form, so it ends up
/// on the generic error page like any other failure.
pub async fn predict_datapoint(
    State(state): State<AppState>,
    body: std::result::Result<RawForm, RawFormRejection>,
) -> PageResult {
    let span = info_span!("predict_datapoint", request_id = %Uuid::new_v4());

    async move {
        let form = match body {
            Ok(RawForm(bytes)) => PredictForm::from_urlencoded(&bytes),
            Err(rejection) => {
                warn!("Unreadable form body: {}", rejection);
                PredictForm::default()
            }
        };

        let page = match run_prediction(state.pipeline.as_ref(), form).await {
            Ok(prediction) => state.templates.render_home(Some(prediction), None),
            Err(e) if e.is_input_error() => {
                error!("Invalid score input: {}", e);
                state.templates.render_home(None, Some(INVALID_INPUT_MESSAGE))
            }
            Err(e) => {
                error!("Prediction failed: {}", e);
                let message = format!("An error occurred: {}", e);
                state.templates.render_home(None, Some(&message))
            }
        };
        into_page(page)
    }
    .instrument(span)
    .await
}

/// Builds the row, calls the pipeline and keeps the first prediction.
pub async fn run_prediction(pipeline: &dyn PredictPipeline, form: PredictForm) -> Result<f64> {
    let record = StudentRecord::try_from(form)?;
    debug!("Prediction row: {:?}", record);

    let results = pipeline.predict(std::slice::from_ref(&record)).await?;
    info!("Prediction results: {:?}", results);

    if results.len() > 1 {
        warn!(
            "Pipeline returned {} predictions for one row, using the first",
            results.len()
        );
    }

    results
        .first()
        .copied()
        .ok_or_else(|| Error::pipeline("pipeline returned no predictions"))
}

fn into_page(rendered: Result<String>) -> PageResult {
    rendered.map(Html).map_err(|e| {
        error!("Failed to render template: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Rendering error: {}", e),
        )
    })
}
