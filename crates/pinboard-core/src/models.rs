//! Client Models
//!
//! Data structures matching the backend's JSON payloads.

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub type UserId = u64;
pub type BoardId = u64;
pub type PinId = u64;

/// Identity returned by `/login`.
///
/// Kept as the raw JSON object so consumers receive exactly what the server sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserIdentity(Value);

impl UserIdentity {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    /// `/login` answers with `id`, other endpoints with `user_id`
    pub fn id(&self) -> Option<UserId> {
        self.0
            .get("id")
            .or_else(|| self.0.get("user_id"))
            .and_then(Value::as_u64)
    }

    pub fn username(&self) -> Option<&str> {
        self.0.get("username").and_then(Value::as_str)
    }

    #[cfg(test)]
    pub(crate) fn raw(&self) -> &Value {
        &self.0
    }
}

/// `/me` payload, only the id is used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(alias = "user_id")]
    pub id: UserId,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub board_id: BoardId,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Pin as listed by feed, board and search endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub pin_id: PinId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_id: Option<BoardId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_name: Option<String>,
    /// Comma-separated tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: u64,
    #[serde(default)]
    pub comment_text: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub username: Option<String>,
}

impl Comment {
    /// Backend timestamps are RFC 2822; anything else is shown as sent
    pub fn display_time(&self) -> String {
        DateTime::parse_from_rfc2822(&self.created_at)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// Body of `POST /pins/:id/comments` responses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedComment {
    pub comment_id: u64,
    #[serde(default)]
    pub created_at: String,
}

/// Body of `POST /pins/:id/repin` responses
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct CreatedPin {
    pub pin_id: PinId,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FollowStatus {
    pub following: bool,
}

// ========================
// Form Records
// ========================

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SignupFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardFields {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CommentFields {
    pub text: String,
}

/// Target board for a repin; `None` until one is picked
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepinFields {
    pub board_id: Option<BoardId>,
}
