//! Session-scoped client state.

use mindspace_core::{
    AssessmentKind, LatestResults, MoodEntry, ScoreHistory, ScorePoint, User,
};

/// Everything the portal holds for the signed-in session. All of it is
/// cleared on sign-out; the backend remains the source of truth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub mood_history: Vec<MoodEntry>,
    pub score_history: ScoreHistory,
    pub latest_results: LatestResults,
    /// Session progress bar: +33 per completed assessment, capped at 100.
    pub assessment_progress: u32,
}

impl SessionState {
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Clears the user and every locally held history series.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }

    /// Records a completed assessment: at most one score entry, the latest
    /// textual result, and the session progress bump.
    pub fn record_outcome(
        &mut self,
        kind: AssessmentKind,
        result: Option<String>,
        score: Option<ScorePoint>,
    ) {
        if let Some(result) = result {
            self.latest_results.set(kind, result);
        }
        if let Some(point) = score {
            self.score_history.record(kind, point);
        }
        self.assessment_progress = (self.assessment_progress + 33).min(100);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mindspace_core::Mood;

    fn signed_in() -> SessionState {
        let mut state = SessionState::default();
        state.sign_in(User {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        });
        state.mood_history.push(MoodEntry {
            mood: Mood::Good,
            note: String::new(),
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
        });
        state.record_outcome(
            AssessmentKind::Anxiety,
            Some("Mild anxiety".to_string()),
            Some(ScorePoint {
                date: "2025-06-01".to_string(),
                score: 6,
            }),
        );
        state
    }

    #[test]
    fn sign_out_clears_all_local_history() {
        let mut state = signed_in();
        assert!(!state.mood_history.is_empty());
        state.sign_out();
        assert_eq!(state, SessionState::default());
        assert!(state.user.is_none());
        assert!(state.mood_history.is_empty());
        assert!(state.score_history.anxiety.is_empty());
        assert_eq!(state.assessment_progress, 0);
    }

    #[test]
    fn outcome_records_exactly_one_score_entry() {
        let state = signed_in();
        assert_eq!(state.score_history.anxiety.len(), 1);
        assert!(state.score_history.depression.is_empty());
        assert_eq!(
            state.latest_results.get(AssessmentKind::Anxiety),
            Some("Mild anxiety")
        );
    }

    #[test]
    fn progress_caps_at_one_hundred() {
        let mut state = SessionState::default();
        for _ in 0..4 {
            state.record_outcome(AssessmentKind::Stress, None, None);
        }
        assert_eq!(state.assessment_progress, 100);
    }

    #[test]
    fn outcome_without_score_adds_no_point() {
        let mut state = SessionState::default();
        state.record_outcome(AssessmentKind::Depression, Some("Done".to_string()), None);
        assert!(state.score_history.depression.is_empty());
        assert_eq!(state.assessment_progress, 33);
    }
}
