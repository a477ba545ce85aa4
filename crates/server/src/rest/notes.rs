use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

use shared_types::{AppError, NoteResponse, SaveNoteRequest, SaveNoteResponse};

use crate::dataset::DatasetCache;
use crate::error_convert::ValidateRequest;
use crate::filter::filter_by_lawyer;
use crate::notes::NoteStore;

#[derive(Debug, Clone, Deserialize, utoipa::IntoParams)]
pub struct NoteListParams {
    pub lawyer: String,
    /// Only the note on this case.
    pub case_id: Option<String>,
}

// ── Note handlers ───────────────────────────────────────────────────

/// POST /api/notes
#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = SaveNoteRequest,
    responses(
        (status = 201, description = "Note created", body = SaveNoteResponse),
        (status = 200, description = "Existing note replaced", body = SaveNoteResponse),
        (status = 422, description = "Invalid note or case not among the lawyer's cases", body = AppError),
        (status = 503, description = "Dataset unavailable", body = AppError)
    ),
    tag = "notes"
)]
pub async fn save_note(
    State(datasets): State<Arc<DatasetCache>>,
    State(notes): State<Arc<dyn NoteStore>>,
    Json(body): Json<SaveNoteRequest>,
) -> Result<(StatusCode, Json<SaveNoteResponse>), AppError> {
    body.validate_request()?;

    let lawyer = body.lawyer.trim();
    let case_id = body.case_id.trim();
    if body.content.trim().is_empty() {
        return Err(field_error("content", "Note must not be blank"));
    }

    let ctx = datasets.get().await?;
    let owns_case = filter_by_lawyer(ctx.hearings(), lawyer)
        .iter()
        .any(|h| h.case_id.as_deref() == Some(case_id));
    if !owns_case {
        return Err(field_error(
            "case_id",
            format!("Case {case_id} is not among the cases of {lawyer}"),
        ));
    }

    let (note, created) = notes.save(lawyer, case_id, &body.content)?;
    let durable = notes.is_durable();
    tracing::info!(lawyer, case_id, created, durable, "Note saved");

    let message = if durable {
        "Note saved".to_string()
    } else {
        "Note saved for this session only; it will be lost when the server restarts".to_string()
    };
    let status = if created { StatusCode::CREATED } else { StatusCode::OK };

    Ok((
        status,
        Json(SaveNoteResponse {
            note: NoteResponse::from(note),
            created,
            durable,
            message,
        }),
    ))
}

/// GET /api/notes
#[utoipa::path(
    get,
    path = "/api/notes",
    params(NoteListParams),
    responses(
        (status = 200, description = "The lawyer's notes", body = Vec<NoteResponse>),
        (status = 400, description = "Missing lawyer", body = AppError)
    ),
    tag = "notes"
)]
pub async fn list_notes(
    State(notes): State<Arc<dyn NoteStore>>,
    Query(params): Query<NoteListParams>,
) -> Result<Json<Vec<NoteResponse>>, AppError> {
    let lawyer = params.lawyer.trim();
    if lawyer.is_empty() {
        return Err(AppError::bad_request("lawyer must not be empty"));
    }

    let case_id = params.case_id.as_deref().map(str::trim).filter(|id| !id.is_empty());
    let found = notes.list(lawyer, case_id)?;
    Ok(Json(found.into_iter().map(NoteResponse::from).collect()))
}

fn field_error(field: &str, message: impl Into<String>) -> AppError {
    let message = message.into();
    let mut field_errors = HashMap::new();
    field_errors.insert(field.to_string(), message.clone());
    AppError::validation(message, field_errors)
}
