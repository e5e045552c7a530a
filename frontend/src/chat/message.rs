use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    /// Set on fixed fallback replies (offline, failure, empty response).
    pub is_error: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
            is_error: false,
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
            is_error: false,
        }
    }
}

/// What the advisor session hands back for one user message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub is_error: bool,
}

impl Reply {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: true,
        }
    }
}

impl From<Reply> for ChatMessage {
    fn from(reply: Reply) -> Self {
        Self {
            role: Role::Model,
            text: reply.text,
            is_error: reply.is_error,
        }
    }
}
