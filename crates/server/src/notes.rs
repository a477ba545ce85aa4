//! Lawyer notes.
//!
//! Notes sit behind [`NoteStore`] so a durable backend can replace the
//! in-memory one without touching the handlers.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::Utc;
use shared_types::{AppError, Note};
use uuid::Uuid;

pub trait NoteStore: Send + Sync {
    /// Create or replace the note `lawyer` keeps on `case_id`.
    /// Returns the stored note and whether it was newly created.
    fn save(&self, lawyer: &str, case_id: &str, content: &str) -> Result<(Note, bool), AppError>;

    /// A lawyer's notes, optionally narrowed to one case, oldest first.
    fn list(&self, lawyer: &str, case_id: Option<&str>) -> Result<Vec<Note>, AppError>;

    /// Whether saved notes survive a restart.
    fn is_durable(&self) -> bool;
}

/// Process-scoped note store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    notes: Mutex<HashMap<(String, String), Note>>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> AppError {
    AppError::internal("Note store lock poisoned")
}

impl NoteStore for InMemoryNoteStore {
    fn save(&self, lawyer: &str, case_id: &str, content: &str) -> Result<(Note, bool), AppError> {
        let mut notes = self.notes.lock().map_err(poisoned)?;
        let now = Utc::now();
        let key = (lawyer.to_string(), case_id.to_string());

        match notes.get_mut(&key) {
            Some(existing) => {
                existing.content = content.to_string();
                existing.updated_at = now;
                Ok((existing.clone(), false))
            }
            None => {
                let note = Note {
                    id: Uuid::new_v4(),
                    lawyer: lawyer.to_string(),
                    case_id: case_id.to_string(),
                    content: content.to_string(),
                    created_at: now,
                    updated_at: now,
                };
                notes.insert(key, note.clone());
                Ok((note, true))
            }
        }
    }

    fn list(&self, lawyer: &str, case_id: Option<&str>) -> Result<Vec<Note>, AppError> {
        let notes = self.notes.lock().map_err(poisoned)?;
        let mut found: Vec<Note> = notes
            .values()
            .filter(|n| n.lawyer == lawyer)
            .filter(|n| case_id.map_or(true, |id| n.case_id == id))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.case_id.cmp(&b.case_id)));
        Ok(found)
    }

    fn is_durable(&self) -> bool {
        false
    }
}
