use axum::{extract::State, Json};
use claims::AnalysisResult;
use tracing::error;

use crate::error::ApiError;
use crate::pipeline::{run_analysis, AnalysisRequest};
use crate::state::SharedState;

pub async fn analyze_content(
    State(state): State<SharedState>,
    Json(req): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    match run_analysis(&state, req).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            error!("Analysis error: {e}");
            Err(e)
        }
    }
}
