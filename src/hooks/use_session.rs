// ============================================================================
// SESSION HANDLE - the one owner of token/user persistence
// ============================================================================
// Screens never touch localStorage themselves; the session is an explicit
// object threaded through the tree with read/write accessors and an
// invalidation hook.
// ============================================================================

use yew::prelude::*;

use crate::models::{Session, User};
use crate::utils::storage;
use crate::utils::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};

#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub(crate) state: UseStateHandle<Option<Session>>,
}

impl SessionHandle {
    /// Read accessor. None means unauthenticated.
    pub fn current(&self) -> Option<Session> {
        (*self.state).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_some()
    }

    /// Write accessor: persist immediately, then update the tree.
    pub fn establish(&self, session: Session) {
        persist_session(&session);
        self.state.set(Some(session));
    }

    /// Invalidation hook: clear storage and the tree unconditionally.
    pub fn clear(&self) {
        clear_persisted();
        log::info!("👋 Logged out");
        self.state.set(None);
    }
}

/// Grab the session from context. Panics only if the provider is missing,
/// which is a wiring bug, not a runtime condition.
#[hook]
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>().expect("SessionProvider not mounted")
}

/// Restore a session persisted by a previous visit. Token presence alone is
/// sufficient; there is no expiry check.
pub fn load_persisted_session() -> Option<Session> {
    let token = storage::get_string(STORAGE_KEY_TOKEN)?;
    let user: User = storage::get_json(STORAGE_KEY_USER)?;
    Some(Session { token, user })
}

fn persist_session(session: &Session) {
    if let Err(e) = storage::set_string(STORAGE_KEY_TOKEN, &session.token) {
        log::error!("❌ Could not persist token: {}", e);
    }
    if let Err(e) = storage::set_json(STORAGE_KEY_USER, &session.user) {
        log::error!("❌ Could not persist user: {}", e);
    }
}

fn clear_persisted() {
    let _ = storage::remove(STORAGE_KEY_TOKEN);
    let _ = storage::remove(STORAGE_KEY_USER);
}
