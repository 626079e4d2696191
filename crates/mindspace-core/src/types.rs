//! Fundamental types for the MindSpace portal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signed-in user identity as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// The five-point mood scale offered by the check-in picker.
///
/// Serialized lowercase on the wire (`"great"`, `"good"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Low,
    Struggling,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Great,
        Mood::Good,
        Mood::Okay,
        Mood::Low,
        Mood::Struggling,
    ];

    /// Wire value sent to the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Okay => "okay",
            Mood::Low => "low",
            Mood::Struggling => "struggling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Great => "Great",
            Mood::Good => "Good",
            Mood::Okay => "Okay",
            Mood::Low => "Low",
            Mood::Struggling => "Struggling",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Great => "\u{1F60A}",
            Mood::Good => "\u{1F642}",
            Mood::Okay => "\u{1F610}",
            Mood::Low => "\u{1F614}",
            Mood::Struggling => "\u{1F622}",
        }
    }

    /// 0-100 score used by the mood timeline and insights.
    pub fn score(&self) -> u32 {
        match self {
            Mood::Great => 100,
            Mood::Good => 75,
            Mood::Okay => 50,
            Mood::Low => 25,
            Mood::Struggling => 0,
        }
    }
}

/// A single user-submitted emotional-state record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: Mood,
    #[serde(default)]
    pub note: String,
    pub timestamp: DateTime<Utc>,
}

/// In-progress mood check-in before it is saved.
///
/// The save action is only available once a mood has been selected; the note
/// is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoodDraft {
    pub mood: Option<Mood>,
    pub note: String,
}

impl MoodDraft {
    pub fn can_save(&self) -> bool {
        self.mood.is_some()
    }

    pub fn reset(&mut self) {
        self.mood = None;
        self.note.clear();
    }
}

/// Aggregates shown on the "Your Mood Insights" card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoodInsights {
    pub days_tracked: usize,
    /// Average 0-100 mood score, 0.0 when no entries exist.
    pub average_score: f64,
}

impl MoodInsights {
    pub fn from_entries(entries: &[MoodEntry]) -> Self {
        if entries.is_empty() {
            return Self {
                days_tracked: 0,
                average_score: 0.0,
            };
        }
        let total: u32 = entries.iter().map(|e| e.mood.score()).sum();
        Self {
            days_tracked: entries.len(),
            average_score: f64::from(total) / entries.len() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(mood: Mood) -> MoodEntry {
        MoodEntry {
            mood,
            note: String::new(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn mood_wire_format_is_lowercase() {
        let json = serde_json::to_string(&Mood::Struggling).unwrap();
        assert_eq!(json, "\"struggling\"");
        let back: Mood = serde_json::from_str("\"okay\"").unwrap();
        assert_eq!(back, Mood::Okay);
    }

    #[test]
    fn mood_entry_parses_backend_shape() {
        let json = r#"{"mood":"good","note":"slept well","timestamp":"2025-06-01T08:30:00Z"}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.mood, Mood::Good);
        assert_eq!(entry.note, "slept well");
    }

    #[test]
    fn mood_entry_note_defaults_to_empty() {
        let json = r#"{"mood":"low","timestamp":"2025-06-01T08:30:00Z"}"#;
        let entry: MoodEntry = serde_json::from_str(json).unwrap();
        assert!(entry.note.is_empty());
    }

    #[test]
    fn draft_requires_mood_selection() {
        let mut draft = MoodDraft::default();
        assert!(!draft.can_save());
        draft.note = "a note alone is not enough".to_string();
        assert!(!draft.can_save());
        draft.mood = Some(Mood::Okay);
        assert!(draft.can_save());
        draft.reset();
        assert!(!draft.can_save());
        assert!(draft.note.is_empty());
    }

    #[test]
    fn insights_average_over_entries() {
        let insights =
            MoodInsights::from_entries(&[entry(Mood::Great), entry(Mood::Okay), entry(Mood::Low)]);
        assert_eq!(insights.days_tracked, 3);
        assert!((insights.average_score - 175.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn insights_empty_history() {
        let insights = MoodInsights::from_entries(&[]);
        assert_eq!(insights.days_tracked, 0);
        assert_eq!(insights.average_score, 0.0);
    }
}
