//! Journal entries.
//!
//! The demo journal validates and acknowledges a submission (toast + XP)
//! without persisting it anywhere; the entry value lives only as long as the
//! caller keeps it. Empty submissions are rejected client-side before any
//! state mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// XP awarded for saving a journal entry.
pub const JOURNAL_ENTRY_XP: u32 = 20;

/// How an entry was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Text,
    Voice,
    Photo,
}

/// Display sentiment tag for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub content: String,
    pub mood: String,
    pub sentiment: Sentiment,
}

impl JournalEntry {
    /// Create a text entry after trim-and-check validation.
    pub fn new_text(content: &str, mood: &str) -> Result<Self, ValidationError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyContent("journal entry".to_string()));
        }
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: Utc::now(),
            entry_type: EntryType::Text,
            content: trimmed.to_string(),
            mood: mood.to_string(),
            sentiment: Sentiment::Neutral,
        })
    }
}

/// The fresh-start entry list (empty).
pub fn sample_entries() -> Vec<JournalEntry> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_trims_content() {
        let entry = JournalEntry::new_text("  today was alright  ", "okay").unwrap();
        assert_eq!(entry.content, "today was alright");
        assert_eq!(entry.entry_type, EntryType::Text);
        assert_eq!(entry.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_empty_entry_rejected() {
        assert_eq!(
            JournalEntry::new_text("   \n  ", "okay").unwrap_err(),
            ValidationError::EmptyContent("journal entry".to_string())
        );
    }

    #[test]
    fn test_fresh_start_has_no_entries() {
        assert!(sample_entries().is_empty());
    }
}
