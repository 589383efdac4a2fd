//! Pinboard Client Core
//!
//! Framework-independent rules behind the pinboard UI:
//! - models / api: entities and the HTTP contract consumed from the backend
//! - session: who is logged in, and nothing else
//! - fetcher / toggle / form: view-state machines for loads, likes and submissions
//! - search / routes / config: navigation glue and client configuration

mod api;
mod config;
mod error;
mod fetcher;
mod form;
mod models;
mod routes;
mod search;
mod session;
mod toggle;

#[cfg(test)]
mod testing;

pub use api::{decode_body, ApiRequest, Method, PinClient, Transport};
pub use config::{AnonymousHome, ClientConfig};
pub use error::{ApiError, ApiResult, ConfigError};
pub use fetcher::{
    CollectionFetcher, FetchPolicy, ReadFailurePolicy, Resolution, StalePolicy, Ticket,
};
pub use form::{
    FormSubmitter, BOARD_FAILED, COMMENT_FAILED, LOGIN_FAILED, REPIN_FAILED, SIGNUP_FAILED,
};
pub use models::{
    Board, BoardFields, BoardId, Comment, CommentFields, CurrentUser, FollowStatus, LoginFields,
    Pin, PinId, RepinFields, SignupFields, UserId, UserIdentity,
};
pub use routes::{
    guard, home_view, Access, Guard, HomeView, Route, AFTER_LOGIN, AFTER_LOGOUT, AFTER_SIGNUP,
};
pub use search::{query_from_search, search_path};
pub use session::SessionStore;
pub use toggle::{OptimisticToggle, Phase, Settlement, ToggleIntent, TogglePolicy, ToggleRequest};
