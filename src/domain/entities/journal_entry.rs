use crate::domain::error::DomainError;
use crate::domain::values::market_condition::MarketCondition;
use crate::domain::values::mood::Mood;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Form state of a daily reflection before submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalEntryDraft {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub mood: Option<Mood>,
    #[serde(default)]
    pub market_conditions: Option<MarketCondition>,
    #[serde(default)]
    pub what_went_well: String,
    #[serde(default)]
    pub what_went_wrong: String,
    #[serde(default)]
    pub lessons_learned: String,
    #[serde(default)]
    pub tomorrow_focus: String,
    #[serde(default)]
    pub overall_reflection: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub mood: Mood,
    pub market_conditions: Option<MarketCondition>,
    pub what_went_well: String,
    pub what_went_wrong: String,
    pub lessons_learned: String,
    pub tomorrow_focus: String,
    pub overall_reflection: String,
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Builds an entry from a draft. Mood and overall reflection are required;
    /// a missing date means today.
    pub fn from_draft(draft: &JournalEntryDraft) -> Result<Self, DomainError> {
        let mood = draft
            .mood
            .ok_or_else(|| DomainError::Validation("Please select your mood".into()))?;
        if draft.overall_reflection.trim().is_empty() {
            return Err(DomainError::Validation(
                "Overall reflection is required".into(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            date: draft.date.unwrap_or_else(|| now.date_naive()),
            mood,
            market_conditions: draft.market_conditions,
            what_went_well: draft.what_went_well.clone(),
            what_went_wrong: draft.what_went_wrong.clone(),
            lessons_learned: draft.lessons_learned.clone(),
            tomorrow_focus: draft.tomorrow_focus.clone(),
            overall_reflection: draft.overall_reflection.clone(),
            created_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mood_rejected() {
        let draft = JournalEntryDraft {
            overall_reflection: "Good day".into(),
            ..Default::default()
        };
        match JournalEntry::from_draft(&draft) {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("mood")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_reflection_rejected() {
        let draft = JournalEntryDraft {
            mood: Some(Mood::Calm),
            overall_reflection: "   ".into(),
            ..Default::default()
        };
        assert!(matches!(
            JournalEntry::from_draft(&draft),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_date_defaults_to_today() {
        let draft = JournalEntryDraft {
            mood: Some(Mood::Focused),
            overall_reflection: "Stuck to the plan".into(),
            ..Default::default()
        };
        let entry = JournalEntry::from_draft(&draft).unwrap();
        assert_eq!(entry.date, entry.created_at.date_naive());
        assert_eq!(entry.mood, Mood::Focused);
    }
}
