use crate::domain::entities::journal_entry::{JournalEntry, JournalEntryDraft};
use crate::domain::error::DomainError;
use std::sync::Mutex;
use tracing::debug;

/// Daily reflections for the current session. Entries are not persisted.
#[derive(Default)]
pub struct JournalUseCase {
    entries: Mutex<Vec<JournalEntry>>,
}

impl JournalUseCase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and records a draft. On rejection the draft is untouched so
    /// the caller can correct it and resubmit.
    pub fn submit(&self, draft: &JournalEntryDraft) -> Result<JournalEntry, DomainError> {
        let entry = JournalEntry::from_draft(draft)?;
        self.entries
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?
            .push(entry.clone());
        debug!(id = %entry.id, date = %entry.date, "journal entry recorded");
        Ok(entry)
    }

    /// Newest date first.
    pub fn entries(&self) -> Result<Vec<JournalEntry>, DomainError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?
            .clone();
        entries.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(entries)
    }
}
