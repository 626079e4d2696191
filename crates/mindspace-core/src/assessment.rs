//! Self-assessment questionnaires and the linear flow that walks through one.
//!
//! Question sets and scoring both live on the backend; the client only tracks
//! which question is on screen and the answers picked so far.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The three screening questionnaires offered by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentKind {
    Anxiety,
    Depression,
    Stress,
}

impl AssessmentKind {
    pub const ALL: [AssessmentKind; 3] = [
        AssessmentKind::Anxiety,
        AssessmentKind::Depression,
        AssessmentKind::Stress,
    ];

    /// URL path segment understood by the backend.
    pub fn slug(&self) -> &'static str {
        match self {
            AssessmentKind::Anxiety => "anxiety",
            AssessmentKind::Depression => "depression",
            AssessmentKind::Stress => "stress",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            AssessmentKind::Anxiety => "Anxiety Screening (GAD-7)",
            AssessmentKind::Depression => "Depression Screening (PHQ-9)",
            AssessmentKind::Stress => "Stress Assessment",
        }
    }

    pub fn question_count(&self) -> usize {
        match self {
            AssessmentKind::Anxiety => 7,
            AssessmentKind::Depression => 9,
            AssessmentKind::Stress => 10,
        }
    }

    /// Upper bound of the score range, used as the chart y-axis ceiling.
    pub fn score_ceiling(&self) -> u32 {
        match self {
            AssessmentKind::Anxiety => 21,
            AssessmentKind::Depression => 27,
            AssessmentKind::Stress => 40,
        }
    }

    pub fn duration_hint(&self) -> &'static str {
        match self {
            AssessmentKind::Anxiety => "7 questions \u{2022} 3-5 minutes",
            AssessmentKind::Depression => "9 questions \u{2022} 5-7 minutes",
            AssessmentKind::Stress => "10 questions \u{2022} 5 minutes",
        }
    }
}

/// One step of the fixed four-point answer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOption {
    pub label: &'static str,
    pub value: u8,
}

/// "Over the last 2 weeks, how often have you been bothered by..."
pub const ANSWER_SCALE: [AnswerOption; 4] = [
    AnswerOption {
        label: "Not at all",
        value: 0,
    },
    AnswerOption {
        label: "Several days",
        value: 1,
    },
    AnswerOption {
        label: "More than half the days",
        value: 2,
    },
    AnswerOption {
        label: "Nearly every day",
        value: 3,
    },
];

/// Builds the `{"q0": "2", ...}` answer map the backend expects.
pub fn wire_answers(answers: &[u8]) -> Map<String, Value> {
    answers
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("q{i}"), Value::String(v.to_string())))
        .collect()
}

/// A single scored completion of an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePoint {
    pub date: String,
    pub score: u32,
}

/// Per-kind score series refreshed from the backend on login and extended
/// locally after each completed assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistory {
    #[serde(default)]
    pub anxiety: Vec<ScorePoint>,
    #[serde(default)]
    pub depression: Vec<ScorePoint>,
    #[serde(default)]
    pub stress: Vec<ScorePoint>,
}

impl ScoreHistory {
    pub fn series(&self, kind: AssessmentKind) -> &[ScorePoint] {
        match kind {
            AssessmentKind::Anxiety => &self.anxiety,
            AssessmentKind::Depression => &self.depression,
            AssessmentKind::Stress => &self.stress,
        }
    }

    pub fn record(&mut self, kind: AssessmentKind, point: ScorePoint) {
        match kind {
            AssessmentKind::Anxiety => self.anxiety.push(point),
            AssessmentKind::Depression => self.depression.push(point),
            AssessmentKind::Stress => self.stress.push(point),
        }
    }
}

/// Latest textual result per assessment kind, session-local.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatestResults {
    pub anxiety: Option<String>,
    pub depression: Option<String>,
    pub stress: Option<String>,
}

impl LatestResults {
    pub fn get(&self, kind: AssessmentKind) -> Option<&str> {
        match kind {
            AssessmentKind::Anxiety => self.anxiety.as_deref(),
            AssessmentKind::Depression => self.depression.as_deref(),
            AssessmentKind::Stress => self.stress.as_deref(),
        }
    }

    pub fn set(&mut self, kind: AssessmentKind, result: String) {
        match kind {
            AssessmentKind::Anxiety => self.anxiety = Some(result),
            AssessmentKind::Depression => self.depression = Some(result),
            AssessmentKind::Stress => self.stress = Some(result),
        }
    }
}

/// Linear walk through a single assessment. One assessment can be open at a
/// time; there is no backtracking and no persistence of partial progress.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentFlow {
    Closed,
    /// Question set is being fetched.
    Loading { kind: AssessmentKind },
    /// Walking the questions, one on screen at a time.
    InProgress {
        kind: AssessmentKind,
        questions: Vec<String>,
        current: usize,
        answers: Vec<u8>,
    },
    /// Final answer recorded, submission in flight.
    Submitting {
        kind: AssessmentKind,
        questions: Vec<String>,
        answers: Vec<u8>,
    },
    /// Backend accepted the submission and returned a result.
    Complete {
        kind: AssessmentKind,
        result: String,
        score: Option<u32>,
    },
}

impl AssessmentFlow {
    pub fn open(kind: AssessmentKind) -> Self {
        AssessmentFlow::Loading { kind }
    }

    pub fn kind(&self) -> Option<AssessmentKind> {
        match self {
            AssessmentFlow::Closed => None,
            AssessmentFlow::Loading { kind }
            | AssessmentFlow::InProgress { kind, .. }
            | AssessmentFlow::Submitting { kind, .. }
            | AssessmentFlow::Complete { kind, .. } => Some(*kind),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, AssessmentFlow::Closed)
    }

    /// Moves `Loading` into `InProgress` once the question set arrives.
    /// Ignored for an empty set or in any other state.
    pub fn questions_loaded(&mut self, questions: Vec<String>) {
        if questions.is_empty() {
            return;
        }
        if let AssessmentFlow::Loading { kind } = self {
            *self = AssessmentFlow::InProgress {
                kind: *kind,
                questions,
                current: 0,
                answers: Vec::new(),
            };
        }
    }

    /// Records an answer for the question on screen. Advances to the next
    /// question, or on the final question moves to `Submitting` and returns
    /// `true` so the caller fires the submission.
    pub fn answer(&mut self, value: u8) -> bool {
        if let AssessmentFlow::InProgress {
            kind,
            questions,
            current,
            answers,
        } = self
        {
            answers.push(value);
            if *current + 1 < questions.len() {
                *current += 1;
                return false;
            }
            *self = AssessmentFlow::Submitting {
                kind: *kind,
                questions: std::mem::take(questions),
                answers: std::mem::take(answers),
            };
            return true;
        }
        false
    }

    /// Completes a successful submission.
    pub fn submitted(&mut self, result: String, score: Option<u32>) {
        if let AssessmentFlow::Submitting { kind, .. } = self {
            *self = AssessmentFlow::Complete {
                kind: *kind,
                result,
                score,
            };
        }
    }

    /// Returns to the final question after a failed submission so the same
    /// answer can be picked again to retry. The failed answer is dropped.
    pub fn submit_failed(&mut self) {
        if let AssessmentFlow::Submitting {
            kind,
            questions,
            answers,
        } = self
        {
            let mut answers = std::mem::take(answers);
            answers.pop();
            *self = AssessmentFlow::InProgress {
                kind: *kind,
                questions: std::mem::take(questions),
                current: answers.len(),
                answers,
            };
        }
    }

    pub fn close(&mut self) {
        *self = AssessmentFlow::Closed;
    }
}

impl Default for AssessmentFlow {
    fn default() -> Self {
        AssessmentFlow::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Question {i}")).collect()
    }

    #[test]
    fn linear_walk_reaches_submitting() {
        let mut flow = AssessmentFlow::open(AssessmentKind::Anxiety);
        flow.questions_loaded(questions(7));
        for i in 0..6 {
            assert!(!flow.answer(2), "question {i} should not trigger submit");
        }
        assert!(flow.answer(1), "final answer triggers submission");
        match &flow {
            AssessmentFlow::Submitting { kind, answers, .. } => {
                assert_eq!(*kind, AssessmentKind::Anxiety);
                assert_eq!(answers.len(), 7);
            }
            other => panic!("expected Submitting, got {other:?}"),
        }
    }

    #[test]
    fn submitted_records_result() {
        let mut flow = AssessmentFlow::open(AssessmentKind::Stress);
        flow.questions_loaded(questions(2));
        flow.answer(0);
        assert!(flow.answer(3));
        flow.submitted("Low stress".to_string(), Some(3));
        assert_eq!(
            flow,
            AssessmentFlow::Complete {
                kind: AssessmentKind::Stress,
                result: "Low stress".to_string(),
                score: Some(3),
            }
        );
    }

    #[test]
    fn failed_submission_returns_to_final_question() {
        let mut flow = AssessmentFlow::open(AssessmentKind::Depression);
        flow.questions_loaded(questions(3));
        flow.answer(1);
        flow.answer(1);
        assert!(flow.answer(2));
        flow.submit_failed();
        match &flow {
            AssessmentFlow::InProgress {
                current, answers, ..
            } => {
                assert_eq!(*current, 2);
                assert_eq!(answers.len(), 2);
            }
            other => panic!("expected InProgress, got {other:?}"),
        }
        // Re-answering the final question retries the submission.
        assert!(flow.answer(2));
    }

    #[test]
    fn fetch_failure_leaves_flow_loading_and_retryable() {
        // A failed fetch never touches the flow; it stays in Loading so a
        // retried fetch can still deliver the questions.
        let mut flow = AssessmentFlow::open(AssessmentKind::Anxiety);
        assert_eq!(
            flow,
            AssessmentFlow::Loading {
                kind: AssessmentKind::Anxiety
            }
        );
        flow.questions_loaded(questions(7));
        assert!(matches!(flow, AssessmentFlow::InProgress { current: 0, .. }));
    }

    #[test]
    fn empty_question_set_stays_loading() {
        let mut flow = AssessmentFlow::open(AssessmentKind::Anxiety);
        flow.questions_loaded(Vec::new());
        assert_eq!(
            flow,
            AssessmentFlow::Loading {
                kind: AssessmentKind::Anxiety
            }
        );
    }

    #[test]
    fn answer_outside_progress_is_ignored() {
        let mut flow = AssessmentFlow::Closed;
        assert!(!flow.answer(3));
        assert_eq!(flow, AssessmentFlow::Closed);
    }

    #[test]
    fn close_resets_from_any_state() {
        let mut flow = AssessmentFlow::open(AssessmentKind::Stress);
        flow.questions_loaded(questions(1));
        flow.close();
        assert_eq!(flow, AssessmentFlow::Closed);
    }

    #[test]
    fn wire_answers_uses_q_keys_and_string_values() {
        let map = wire_answers(&[0, 2, 3]);
        assert_eq!(map.len(), 3);
        assert_eq!(map["q0"], "0");
        assert_eq!(map["q1"], "2");
        assert_eq!(map["q2"], "3");
    }

    #[test]
    fn score_history_parses_backend_shape() {
        let json = r#"{"anxiety":[{"date":"2025-06-01","score":8}],"depression":[],"stress":[]}"#;
        let history: ScoreHistory = serde_json::from_str(json).unwrap();
        assert_eq!(history.series(AssessmentKind::Anxiety).len(), 1);
        assert_eq!(history.anxiety[0].score, 8);
        assert!(history.series(AssessmentKind::Stress).is_empty());
    }

    #[test]
    fn score_history_tolerates_missing_series() {
        let history: ScoreHistory = serde_json::from_str(r#"{"anxiety":[]}"#).unwrap();
        assert!(history.depression.is_empty());
    }

    #[test]
    fn record_appends_exactly_one_point() {
        let mut history = ScoreHistory::default();
        history.record(
            AssessmentKind::Depression,
            ScorePoint {
                date: "2025-06-02".to_string(),
                score: 11,
            },
        );
        assert_eq!(history.depression.len(), 1);
        assert!(history.anxiety.is_empty());
        assert!(history.stress.is_empty());
    }
}
