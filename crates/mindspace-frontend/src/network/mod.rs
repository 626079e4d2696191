//! HTTP client for the MindSpace backend.
//!
//! JSON in and out against a fixed local origin. Failures are returned to the
//! call site, where they surface as a transient toast; nothing is retried.

use gloo_net::http::{Request, Response};
use mindspace_core::{
    wire_answers, AssessmentKind, ChatMessage, Error, Mood, MoodEntry, Result, ScoreHistory, User,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
}

#[derive(Serialize)]
struct RegisterPayload<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct MoodPayload<'a> {
    email: &'a str,
    mood: &'a str,
    note: &'a str,
    entry_date: String,
}

#[derive(Serialize)]
struct AssessmentPayload<'a> {
    email: &'a str,
    answers: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct ActivityPayload<'a> {
    email: &'a str,
    activity: &'a str,
}

#[derive(Serialize)]
struct ChatPayload<'a> {
    email: &'a str,
    messages: &'a [ChatMessage],
}

#[derive(Deserialize)]
struct AuthResponse {
    user: User,
}

#[derive(Deserialize)]
struct QuestionsResponse {
    questions: Vec<String>,
}

/// Ack body for endpoints that only confirm receipt.
#[derive(Deserialize)]
struct Ack {
    #[serde(default)]
    #[allow(dead_code)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Result of a submitted assessment; both fields come from the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentOutcome {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
}

/// Chatbot reply. Older backend builds used `reply` instead of `response`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    reply: Option<String>,
    #[serde(default)]
    pub widget_type: Option<String>,
}

impl ChatReply {
    pub fn text(&self) -> &str {
        self.response
            .as_deref()
            .or(self.reply.as_deref())
            .unwrap_or("")
    }
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Self::decode(resp).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let resp = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| Error::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(Error::Backend {
                status,
                message: backend_error_message(status, &text),
            });
        }
        serde_json::from_str(&text).map_err(Error::from)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        let payload = RegisterPayload {
            name,
            email,
            password,
        };
        let resp: AuthResponse = self.post_json("/register", &payload).await?;
        Ok(resp.user)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let payload = LoginPayload { email, password };
        let resp: AuthResponse = self.post_json("/login", &payload).await?;
        Ok(resp.user)
    }

    pub async fn save_mood(&self, email: &str, mood: Mood, note: &str) -> Result<()> {
        let payload = MoodPayload {
            email,
            mood: mood.as_str(),
            note,
            entry_date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        };
        let _: Ack = self.post_json("/mood", &payload).await?;
        Ok(())
    }

    pub async fn mood_history(&self, email: &str) -> Result<Vec<MoodEntry>> {
        self.get_json(&format!("/moods/{email}")).await
    }

    pub async fn assessment_questions(&self, kind: AssessmentKind) -> Result<Vec<String>> {
        let resp: QuestionsResponse = self
            .get_json(&format!("/assessment/questions/{}", kind.slug()))
            .await?;
        Ok(resp.questions)
    }

    pub async fn submit_assessment(
        &self,
        kind: AssessmentKind,
        email: &str,
        answers: &[u8],
    ) -> Result<AssessmentOutcome> {
        let payload = AssessmentPayload {
            email,
            answers: wire_answers(answers),
        };
        self.post_json(&format!("/assessment/{}", kind.slug()), &payload)
            .await
    }

    pub async fn assessment_history(&self, email: &str) -> Result<ScoreHistory> {
        self.get_json(&format!("/assessments/{email}")).await
    }

    pub async fn log_activity(&self, email: &str, activity: &str) -> Result<()> {
        let payload = ActivityPayload { email, activity };
        let _: Ack = self.post_json("/activity", &payload).await?;
        Ok(())
    }

    pub async fn chat(&self, email: &str, messages: &[ChatMessage]) -> Result<ChatReply> {
        let payload = ChatPayload { email, messages };
        self.post_json("/chat", &payload).await
    }
}

/// Pulls the `{"error": "..."}` message out of a failure body, falling back
/// to a generic line when the body is not in that shape.
fn backend_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joining_normalizes_slashes() {
        let api = ApiClient::new("http://localhost:5000/");
        assert_eq!(api.url("/mood"), "http://localhost:5000/mood");
        assert_eq!(api.url("moods/a@b.c"), "http://localhost:5000/moods/a@b.c");
    }

    #[test]
    fn chat_reply_prefers_response_over_reply() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"response":"hello","reply":"old","widget_type":"general_chat"}"#)
                .unwrap();
        assert_eq!(reply.text(), "hello");
    }

    #[test]
    fn chat_reply_falls_back_to_reply_field() {
        let reply: ChatReply = serde_json::from_str(r#"{"reply":"hi"}"#).unwrap();
        assert_eq!(reply.text(), "hi");
        assert!(reply.widget_type.is_none());
    }

    #[test]
    fn assessment_outcome_tolerates_missing_score() {
        let outcome: AssessmentOutcome =
            serde_json::from_str(r#"{"result":"Mild anxiety"}"#).unwrap();
        assert_eq!(outcome.result.as_deref(), Some("Mild anxiety"));
        assert!(outcome.score.is_none());
    }

    #[test]
    fn backend_error_message_extraction() {
        assert_eq!(
            backend_error_message(409, r#"{"error":"User with this email already exists"}"#),
            "User with this email already exists"
        );
        assert_eq!(
            backend_error_message(500, "<html>oops</html>"),
            "request failed with status 500"
        );
    }
}
