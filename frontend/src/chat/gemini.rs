use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chat::message::{ChatMessage, Role};
use crate::config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChatError {
    #[error("no Gemini API key configured")]
    MissingCredential,
    #[error("request failed: {0}")]
    Request(String),
    #[error("Gemini returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode Gemini response: {0}")]
    Decode(String),
    #[error("Gemini reply contained no text")]
    EmptyReply,
}

impl From<gloo_net::Error> for ChatError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ChatError::Decode(e.to_string()),
            other => ChatError::Request(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Builds a request from prior turns plus the new user message.
    /// Fallback replies are not real model output and are left out.
    pub fn new(system_instruction: &str, history: &[ChatMessage], message: &str) -> Self {
        let mut contents: Vec<Content> = history
            .iter()
            .filter(|m| !m.is_error)
            .map(|m| Content::text(m.role, m.text.clone()))
            .collect();
        contents.push(Content::text(Role::User, message));

        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: system_instruction.to_string(),
                }],
            },
            contents,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` if there is none or it is blank.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

pub fn endpoint(base: &str, model: &str) -> String {
    format!("{}/models/{}:generateContent", base.trim_end_matches('/'), model)
}

/// The one network hop of a chat turn.
#[async_trait(?Send)]
pub trait GeminiTransport {
    async fn generate(
        &self,
        api_key: &str,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ChatError>;
}

/// Calls the public REST endpoint from the browser with gloo-net.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(config::GEMINI_API_BASE)
    }
}

#[async_trait(?Send)]
impl GeminiTransport for HttpTransport {
    async fn generate(
        &self,
        api_key: &str,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ChatError> {
        let response = Request::post(&endpoint(&self.base_url, model))
            .header("x-goog-api-key", api_key)
            .json(request)?
            .send()
            .await?;

        if !response.ok() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Status { status, body });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_serializes_to_gemini_shape() {
        let history = vec![
            ChatMessage::model("Welcome."),
            ChatMessage::user("Hi"),
            ChatMessage {
                is_error: true,
                ..ChatMessage::model("Signal lost.")
            },
        ];
        let request = GenerateContentRequest::new("Be brief.", &history, "Prices?");

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "systemInstruction": { "parts": [{ "text": "Be brief." }] },
                "contents": [
                    { "role": "model", "parts": [{ "text": "Welcome." }] },
                    { "role": "user", "parts": [{ "text": "Hi" }] },
                    { "role": "user", "parts": [{ "text": "Prices?" }] }
                ]
            })
        );
    }

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "role": "model", "parts": [{ "text": "Hello " }, { "text": "there" }] } },
                { "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("Hello there"));
    }

    #[test]
    fn missing_or_blank_text_is_none() {
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), None);

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap();
        assert_eq!(blocked.text(), None);

        let blank: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "  " }] } }]
        }))
        .unwrap();
        assert_eq!(blank.text(), None);
    }

    #[test]
    fn endpoint_joins_model_path() {
        assert_eq!(
            endpoint("https://example.test/v1beta/", "gemini-x"),
            "https://example.test/v1beta/models/gemini-x:generateContent"
        );
    }
}
