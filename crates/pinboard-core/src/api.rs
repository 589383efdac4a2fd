//! Backend API
//!
//! The HTTP contract the client consumes. `PinClient` owns paths, verbs and
//! payload shapes; a `Transport` only moves JSON over the wire.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::models::{
    Board, BoardFields, BoardId, Comment, CommentFields, CreatedComment, CreatedPin, CurrentUser,
    FollowStatus, LoginFields, Pin, PinId, RepinFields, SignupFields, UserId, UserIdentity,
};
use crate::search::encode_component;
use crate::toggle::ToggleRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// One request, relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    fn with_body<B: Serialize>(mut self, body: &B) -> ApiResult<Self> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(body);
        Ok(self)
    }
}

/// Sends requests with the ambient session cookie attached.
///
/// Non-2xx answers come back as `ApiError::Status`.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> ApiResult<Value>;
}

/// Parse a response body; an empty body is `null`
pub fn decode_body(text: &str) -> ApiResult<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Typed client for the pinboard backend
#[derive(Debug, Clone)]
pub struct PinClient<T> {
    transport: T,
}

impl<T: Transport> PinClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<R> {
        let value = self.transport.send(request).await?;
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn call_unit(&self, request: ApiRequest) -> ApiResult<()> {
        self.transport.send(request).await.map(|_| ())
    }

    // ========================
    // Auth
    // ========================

    /// Response body is ignored; signing up does not log in
    pub async fn signup(&self, fields: &SignupFields) -> ApiResult<()> {
        self.call_unit(ApiRequest::new(Method::Post, "/signup").with_body(fields)?)
            .await
    }

    pub async fn login(&self, fields: &LoginFields) -> ApiResult<UserIdentity> {
        self.call(ApiRequest::new(Method::Post, "/login").with_body(fields)?)
            .await
    }

    pub async fn me(&self) -> ApiResult<CurrentUser> {
        self.call(ApiRequest::new(Method::Get, "/me")).await
    }

    // ========================
    // Pins
    // ========================

    pub async fn feed(&self) -> ApiResult<Vec<Pin>> {
        self.call(ApiRequest::new(Method::Get, "/feed")).await
    }

    pub async fn board_pins(&self, board_id: BoardId) -> ApiResult<Vec<Pin>> {
        self.call(ApiRequest::new(Method::Get, format!("/boards/{}/pins", board_id)))
            .await
    }

    pub async fn search(&self, query: &str) -> ApiResult<Vec<Pin>> {
        let path = format!("/search?q={}", encode_component(query));
        self.call(ApiRequest::new(Method::Get, path)).await
    }

    pub async fn set_pin_like(&self, pin_id: PinId, request: ToggleRequest) -> ApiResult<()> {
        self.call_unit(ApiRequest::new(request.method(), format!("/pins/{}/like", pin_id)))
            .await
    }

    /// Copy a pin onto one of the caller's boards; returns the new pin's id
    pub async fn repin(&self, pin_id: PinId, board_id: BoardId) -> ApiResult<PinId> {
        let fields = RepinFields { board_id: Some(board_id) };
        let request =
            ApiRequest::new(Method::Post, format!("/pins/{}/repin", pin_id)).with_body(&fields)?;
        let created: CreatedPin = self.call(request).await?;
        Ok(created.pin_id)
    }

    pub async fn pin_comments(&self, pin_id: PinId) -> ApiResult<Vec<Comment>> {
        self.call(ApiRequest::new(Method::Get, format!("/pins/{}/comments", pin_id)))
            .await
    }

    /// The server only echoes id and timestamp; the rest is filled in locally
    pub async fn add_comment(
        &self,
        pin_id: PinId,
        fields: &CommentFields,
        author: Option<&UserIdentity>,
    ) -> ApiResult<Comment> {
        let request =
            ApiRequest::new(Method::Post, format!("/pins/{}/comments", pin_id)).with_body(fields)?;
        let created: CreatedComment = self.call(request).await?;
        Ok(Comment {
            comment_id: created.comment_id,
            comment_text: fields.text.clone(),
            created_at: created.created_at,
            user_id: author.and_then(UserIdentity::id),
            username: author.and_then(UserIdentity::username).map(str::to_string),
        })
    }

    // ========================
    // Boards
    // ========================

    pub async fn user_boards(&self, user_id: UserId) -> ApiResult<Vec<Board>> {
        self.call(ApiRequest::new(Method::Get, format!("/users/{}/boards", user_id)))
            .await
    }

    /// Boards of whoever the session cookie belongs to: `/me` first, then the list
    pub async fn own_boards(&self) -> ApiResult<Vec<Board>> {
        let me = self.me().await?;
        self.user_boards(me.id).await
    }

    pub async fn create_board(&self, fields: &BoardFields) -> ApiResult<Board> {
        self.call(ApiRequest::new(Method::Post, "/boards").with_body(fields)?)
            .await
    }

    pub async fn is_following(&self, board_id: BoardId) -> ApiResult<bool> {
        let status: FollowStatus = self
            .call(ApiRequest::new(Method::Get, format!("/boards/{}/is_following", board_id)))
            .await?;
        Ok(status.following)
    }

    pub async fn set_board_follow(
        &self,
        board_id: BoardId,
        request: ToggleRequest,
    ) -> ApiResult<()> {
        self.call_unit(ApiRequest::new(request.method(), format!("/boards/{}/follow", board_id)))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use serde_json::json;
    use std::rc::Rc;

    fn client() -> (Rc<MockTransport>, PinClient<Rc<MockTransport>>) {
        let mock = Rc::new(MockTransport::new());
        (mock.clone(), PinClient::new(mock))
    }

    #[test]
    fn test_decode_body() {
        assert_eq!(decode_body("").unwrap(), Value::Null);
        assert_eq!(decode_body("  \n").unwrap(), Value::Null);
        assert_eq!(decode_body(r#"{"a":1}"#).unwrap(), json!({"a": 1}));
        assert!(matches!(decode_body("<html>"), Err(ApiError::Decode(_))));
    }

    #[tokio::test]
    async fn test_login_posts_credentials_and_returns_identity() {
        let (mock, client) = client();
        mock.respond(Method::Post, "/login", Ok(json!({"id": 4, "username": "ada"})));

        let fields = LoginFields {
            email: "ada@example.com".to_string(),
            password: "pw".to_string(),
        };
        let identity = client.login(&fields).await.unwrap();

        assert_eq!(identity.id(), Some(4));
        let sent = mock.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body, Some(json!({"email": "ada@example.com", "password": "pw"})));
    }

    #[tokio::test]
    async fn test_own_boards_resolves_identity_first() {
        let (mock, client) = client();
        mock.respond(Method::Get, "/me", Ok(json!({"user_id": 9, "username": "bo"})));
        mock.respond(
            Method::Get,
            "/users/9/boards",
            Ok(json!([{"board_id": 1, "name": "Travel", "description": "Trips"}])),
        );

        let boards = client.own_boards().await.unwrap();

        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].name, "Travel");
        assert_eq!(mock.calls(), vec!["GET /me", "GET /users/9/boards"]);
    }

    #[tokio::test]
    async fn test_own_boards_stops_when_identity_lookup_fails() {
        let (mock, client) = client();
        mock.respond(
            Method::Get,
            "/me",
            Err(ApiError::Status { status: 401, error: Some("unauth".to_string()) }),
        );

        assert!(client.own_boards().await.is_err());
        assert_eq!(mock.calls(), vec!["GET /me"]);
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let (mock, client) = client();
        mock.respond(Method::Get, "/search?q=red%20barn%26co", Ok(json!([])));

        let pins = client.search("red barn&co").await.unwrap();

        assert!(pins.is_empty());
        assert_eq!(mock.calls(), vec!["GET /search?q=red%20barn%26co"]);
    }

    #[tokio::test]
    async fn test_toggle_requests_pick_verb() {
        let (mock, client) = client();
        mock.respond(Method::Post, "/pins/3/like", Ok(json!({"message": "ok"})));
        mock.respond(Method::Delete, "/pins/3/like", Ok(Value::Null));
        mock.respond(Method::Post, "/boards/8/follow", Ok(json!({"message": "followed"})));

        client.set_pin_like(3, ToggleRequest::Activate).await.unwrap();
        client.set_pin_like(3, ToggleRequest::Deactivate).await.unwrap();
        client.set_board_follow(8, ToggleRequest::Activate).await.unwrap();

        assert_eq!(
            mock.calls(),
            vec!["POST /pins/3/like", "DELETE /pins/3/like", "POST /boards/8/follow"]
        );
    }

    #[tokio::test]
    async fn test_add_comment_merges_local_fields() {
        let (mock, client) = client();
        mock.respond(
            Method::Post,
            "/pins/5/comments",
            Ok(json!({"comment_id": 11, "created_at": "Tue, 15 Oct 2024 10:04:00 GMT"})),
        );
        let author = UserIdentity::new(json!({"id": 2, "username": "cy"}));

        let fields = CommentFields { text: "lovely".to_string() };
        let comment = client.add_comment(5, &fields, Some(&author)).await.unwrap();

        assert_eq!(comment.comment_id, 11);
        assert_eq!(comment.comment_text, "lovely");
        assert_eq!(comment.user_id, Some(2));
        assert_eq!(comment.username.as_deref(), Some("cy"));
        assert_eq!(mock.requests()[0].body, Some(json!({"text": "lovely"})));
    }

    #[tokio::test]
    async fn test_repin_posts_target_board() {
        let (mock, client) = client();
        mock.respond(Method::Post, "/pins/5/repin", Ok(json!({"pin_id": 42})));

        assert_eq!(client.repin(5, 3).await.unwrap(), 42);

        let sent = mock.requests();
        assert_eq!(mock.calls(), vec!["POST /pins/5/repin"]);
        assert_eq!(sent[0].body, Some(json!({"board_id": 3})));
    }

    #[tokio::test]
    async fn test_repin_of_missing_pin_carries_server_message() {
        let (mock, client) = client();
        mock.respond(
            Method::Post,
            "/pins/99/repin",
            Err(ApiError::from_response(404, r#"{"error":"not found"}"#)),
        );

        let err = client.repin(99, 3).await.unwrap_err();

        assert_eq!(err, ApiError::Status { status: 404, error: Some("not found".to_string()) });
        assert_eq!(err.user_message("could not repin"), "not found");
    }

    #[tokio::test]
    async fn test_is_following() {
        let (mock, client) = client();
        mock.respond(Method::Get, "/boards/2/is_following", Ok(json!({"following": true})));

        assert!(client.is_following(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_decode_error() {
        let (mock, client) = client();
        mock.respond(Method::Get, "/feed", Ok(json!({"pins": []})));

        assert!(matches!(client.feed().await, Err(ApiError::Decode(_))));
    }
}
