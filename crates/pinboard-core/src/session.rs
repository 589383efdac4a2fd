//! Session Store
//!
//! The client's belief about who is logged in. Lives in memory for the page
//! lifetime only; nothing is restored on reload.

use crate::models::UserIdentity;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionStore {
    identity: Option<UserIdentity>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Single update entry point, called with a successful login's identity
    pub fn set_identity(&mut self, identity: UserIdentity) {
        log::info!("session started for user {:?}", identity.id());
        self.identity = Some(identity);
    }

    /// Logout
    pub fn clear(&mut self) -> Option<UserIdentity> {
        let previous = self.identity.take();
        if previous.is_some() {
            log::info!("session cleared");
        }
        previous
    }
}
