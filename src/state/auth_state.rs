// ============================================================================
// AUTH STATE - bearer token + current user
// ============================================================================

use std::rc::Rc;

use crate::models::User;
use crate::state::ReactiveState;
use crate::utils::storage::KeyValueStorage;

/// Read-only view of the session used by the API client and the resource stores.
pub trait AuthProvider {
    /// Token snapshot at call time
    fn token(&self) -> Option<String>;

    /// Drop the session after the server rejected the token
    fn force_logout(&self);
}

/// Authentication state shared by every store. Clones share the same state.
///
/// `is_authenticated` is derived from the token and has no storage of its own,
/// so it can never disagree with it.
#[derive(Clone)]
pub struct AuthState {
    token: ReactiveState<Option<String>>,
    user: ReactiveState<Option<User>>,
    storage: Rc<dyn KeyValueStorage>,
    storage_key: String,
}

impl AuthState {
    /// Build the state from durable storage. A persisted token means the session
    /// starts authenticated; its validity is unknown until the first user fetch.
    pub fn restore(storage: Rc<dyn KeyValueStorage>, storage_key: &str) -> Self {
        let token = storage
            .get_item(storage_key)
            .filter(|token| !token.is_empty());

        if token.is_some() {
            log::info!("🔑 Restored persisted session token");
        }

        Self {
            token: ReactiveState::new(token),
            user: ReactiveState::new(None),
            storage,
            storage_key: storage_key.to_string(),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(|token| token.is_some())
    }

    pub fn user(&self) -> Option<User> {
        self.user.get()
    }

    /// Store a fresh token in memory and in durable storage.
    /// An empty token is treated as no token. A different token starts a new
    /// session, so the previous user is dropped.
    pub fn set_token(&self, token: String) {
        if token.is_empty() {
            log::warn!("⚠️ Server returned an empty token, session left anonymous");
            self.logout();
            return;
        }

        if let Err(e) = self.storage.set_item(&self.storage_key, &token) {
            // Session still works for this page load
            log::warn!("⚠️ Could not persist token: {}", e);
        }
        if self.token.with(|current| current.as_deref() != Some(token.as_str())) {
            self.user.set(None);
        }
        self.token.set(Some(token));
    }

    pub fn set_user(&self, user: User) {
        self.user.set(Some(user));
    }

    /// Clear token and user, remove the persisted token. Nothing else is touched.
    pub fn logout(&self) {
        self.user.set(None);
        self.token.set(None);
        if let Err(e) = self.storage.remove_item(&self.storage_key) {
            log::warn!("⚠️ Could not remove persisted token: {}", e);
        }
    }

    /// Called whenever the token or the user changes
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback: Rc<dyn Fn()> = Rc::new(callback);
        let on_token = callback.clone();
        self.token.subscribe(move || on_token());
        self.user.subscribe(move || callback());
    }
}

impl AuthProvider for AuthState {
    fn token(&self) -> Option<String> {
        AuthState::token(self)
    }

    fn force_logout(&self) {
        log::warn!("🔒 Token rejected by the server, logging out");
        self.logout();
    }
}
