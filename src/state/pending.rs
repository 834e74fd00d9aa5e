//! Broadcast mode tracker
//!
//! Correlates an inline button press with the next message the same user
//! sends: pressing a target button stores a pending audience selection,
//! which the message router consumes exactly once.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use teloxide::types::UserId;
use tracing::debug;

/// Target audience of a broadcast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Users,
    Groups,
    All,
}

impl Audience {
    /// Parse the target part of a `broadcast:<target>` callback
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "users" => Some(Audience::Users),
            "groups" => Some(Audience::Groups),
            "all" => Some(Audience::All),
            _ => None,
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Audience::Users => write!(f, "users"),
            Audience::Groups => write!(f, "groups"),
            Audience::All => write!(f, "all"),
        }
    }
}

/// Pending broadcast target selections, at most one per user
///
/// Cloning is cheap and all clones share the same underlying map. `set` and
/// `take` are individually atomic; a message handler that loses the race for
/// a selection sees `None` from `take` and drops out.
#[derive(Debug, Clone, Default)]
pub struct PendingBroadcasts {
    inner: Arc<Mutex<HashMap<UserId, Audience>>>,
}

impl PendingBroadcasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a selection, overwriting any previous one for this user
    pub fn set(&self, user_id: UserId, audience: Audience) {
        self.inner
            .lock()
            .expect("pending broadcasts lock poisoned")
            .insert(user_id, audience);
        debug!(user_id = user_id.0, audience = %audience, "Pending broadcast target set");
    }

    /// Atomically read and clear the selection for this user
    pub fn take(&self, user_id: UserId) -> Option<Audience> {
        self.inner
            .lock()
            .expect("pending broadcasts lock poisoned")
            .remove(&user_id)
    }

    /// Read-only probe used before committing to the broadcast-content path
    pub fn has_pending(&self, user_id: UserId) -> bool {
        self.inner
            .lock()
            .expect("pending broadcasts lock poisoned")
            .contains_key(&user_id)
    }

    /// Discard any selection for this user
    pub fn clear(&self, user_id: UserId) {
        self.inner
            .lock()
            .expect("pending broadcasts lock poisoned")
            .remove(&user_id);
    }
}
