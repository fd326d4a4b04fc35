use serde::{Deserialize, Serialize};

use crate::messages::WireUser;

/// The authenticated-identity record mirrored from the server's
/// cookie-backed session. A logged-out client holds no `Session` at all;
/// there is no "present but logged out" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub uid: String,
    pub score: i64,
}

impl Session {
    /// Builds a session from a server user record. Returns `None` when the
    /// record is missing its identity fields, so a malformed response can
    /// never produce a logged-in state with an empty username or UID.
    pub fn from_wire(user: WireUser) -> Option<Self> {
        if user.username.is_empty() || user.uid.is_empty() {
            return None;
        }
        Some(Self {
            username: user.username,
            uid: user.uid,
            score: user.score,
        })
    }
}

/// Outcome of the startup session re-validation. `Indeterminate` means the
/// check itself failed and nothing can be said about the server-side
/// session; callers keep whatever state they already had.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionProbe {
    Active(Session),
    Inactive,
    Indeterminate,
}
