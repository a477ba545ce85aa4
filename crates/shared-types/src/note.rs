use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "validation")]
use validator::Validate;

/// A lawyer's personal note on one of their cases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub lawyer: String,
    pub case_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// API response shape for a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NoteResponse {
    pub id: String,
    pub lawyer: String,
    pub case_id: String,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id.to_string(),
            lawyer: n.lawyer,
            case_id: n.case_id,
            content: n.content,
            created_at: n.created_at.to_rfc3339(),
            updated_at: n.updated_at.to_rfc3339(),
        }
    }
}

/// Request to add or replace the note a lawyer keeps on a case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SaveNoteRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Lawyer name is required"))
    )]
    pub lawyer: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Case identifier is required"))
    )]
    pub case_id: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(
            min = 1,
            max = 10000,
            message = "Note must be between 1 and 10000 characters"
        ))
    )]
    pub content: String,
}

/// Result of saving a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SaveNoteResponse {
    pub note: NoteResponse,
    /// `true` when no note existed for this lawyer and case before.
    pub created: bool,
    /// Whether the note survives a process restart.
    pub durable: bool,
    pub message: String,
}
