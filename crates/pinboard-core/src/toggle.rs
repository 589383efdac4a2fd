//! Optimistic Toggle
//!
//! Boolean view state (liked, following) that flips on click, before the
//! server has answered. A click's request is decided by the state it saw.

use crate::api::Method;
use crate::error::ApiResult;

/// What to do when the server rejects a toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TogglePolicy {
    /// Leave the optimistic state in place; it may diverge from the server
    #[default]
    KeepOptimistic,
    /// Revert to the pre-click state unless a newer click superseded it
    RollbackOnFailure,
}

/// Request a click must send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRequest {
    Activate,
    Deactivate,
}

impl ToggleRequest {
    pub fn method(self) -> Method {
        match self {
            ToggleRequest::Activate => Method::Post,
            ToggleRequest::Deactivate => Method::Delete,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// At least one request is still outstanding
    Tentative,
    Confirmed,
}

/// Handle for one click, handed back to `settle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleIntent {
    seq: u64,
    previous: bool,
    pub request: ToggleRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    Confirmed,
    /// Failed and reverted to the pre-click state
    RolledBack,
    /// Failed and left as displayed
    Diverged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptimisticToggle {
    active: bool,
    policy: TogglePolicy,
    clicks: u64,
    pending: usize,
}

impl OptimisticToggle {
    pub fn new(initial: bool, policy: TogglePolicy) -> Self {
        Self {
            active: initial,
            policy,
            clicks: 0,
            pending: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn phase(&self) -> Phase {
        if self.pending > 0 {
            Phase::Tentative
        } else {
            Phase::Confirmed
        }
    }

    /// Flip now and return the request that has to follow
    pub fn click(&mut self) -> ToggleIntent {
        let previous = self.active;
        self.active = !previous;
        self.clicks += 1;
        self.pending += 1;
        ToggleIntent {
            seq: self.clicks,
            previous,
            request: if previous {
                ToggleRequest::Deactivate
            } else {
                ToggleRequest::Activate
            },
        }
    }

    pub fn settle(&mut self, intent: ToggleIntent, result: ApiResult<()>) -> Settlement {
        self.pending = self.pending.saturating_sub(1);
        let err = match result {
            Ok(()) => return Settlement::Confirmed,
            Err(err) => err,
        };

        match self.policy {
            TogglePolicy::RollbackOnFailure if intent.seq == self.clicks => {
                log::warn!("toggle request {:?} failed, rolling back: {}", intent.request, err);
                self.active = intent.previous;
                Settlement::RolledBack
            }
            _ => {
                log::warn!(
                    "toggle request {:?} failed, keeping displayed state: {}",
                    intent.request,
                    err
                );
                Settlement::Diverged
            }
        }
    }

    /// Adopt a server-reported state; ignored while a click is outstanding
    pub fn load_confirmed(&mut self, active: bool) -> bool {
        if self.pending > 0 {
            return false;
        }
        self.active = active;
        true
    }
}
