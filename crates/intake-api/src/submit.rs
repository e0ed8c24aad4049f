use axum::Json;
use axum::extract::State;
use tracing::info;

use intake_types::api::{SubmitRequest, SubmitResponse};
use intake_validation::Submission;

use crate::AppState;
use crate::error::ApiError;

/// POST /submit — validate the payload, then persist it.
///
/// The browser controller runs the same rules before sending, but it
/// is a separate trust domain; the full rule set runs again here
/// unconditionally.
pub async fn submit(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>, ApiError> {
    let submission = Submission::from_raw(
        &req.first_name,
        &req.last_name,
        &req.email,
        &req.phone_number,
        &req.eircode,
    );

    let errors = submission.validate();
    if !errors.is_empty() {
        return Err(ApiError::Rejected(errors));
    }

    // Run the blocking DB insert off the async runtime
    let db = state.db.clone();
    let id = tokio::task::spawn_blocking(move || {
        db.insert_submission(
            &submission.first_name,
            &submission.last_name,
            &submission.email,
            &submission.phone_number,
            &submission.eircode,
        )
    })
    .await
    .map_err(anyhow::Error::from)??;

    info!(id, "stored submission");

    Ok(Json(SubmitResponse {
        success: true,
        message: "Submission saved.".to_owned(),
        id,
    }))
}
