//! Application Context
//!
//! Session and API handles provided via Leptos Context API.

use leptos::prelude::*;
use pinboard_core::{ClientConfig, PinClient, SessionStore, UserIdentity};

use crate::http::HttpTransport;

pub type Client = PinClient<HttpTransport>;

/// Current session, threaded through the view tree
#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<SessionStore>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(SessionStore::new()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(SessionStore::is_authenticated)
    }

    pub fn identity(&self) -> Option<UserIdentity> {
        self.session.with(|s| s.identity().cloned())
    }

    /// Only successful logins call this
    pub fn set_identity(&self, identity: UserIdentity) {
        self.session.update(|s| s.set_identity(identity));
    }

    pub fn logout(&self) {
        self.session.update(|s| {
            s.clear();
        });
    }
}

/// API client and configuration
#[derive(Clone)]
pub struct Services {
    pub client: Client,
    pub config: ClientConfig,
}

impl Services {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: PinClient::new(HttpTransport::new(config.clone())),
            config,
        }
    }
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

pub fn use_services() -> Services {
    expect_context::<Services>()
}
