// ============================================================================
// SESSION STORE - login / register / current user / logout
// ============================================================================

use crate::error::ApiError;
use crate::models::{Credentials, User};
use crate::services::ApiClient;
use crate::state::AuthState;

/// Outcome of a current-user fetch
#[derive(Debug, Clone, PartialEq)]
pub enum UserFetch {
    /// No token, nothing was sent
    Skipped,
    Loaded(User),
    /// The server rejected the token and the session was cleared
    LoggedOut,
    /// Any other failure; session left as it was
    Failed(String),
    /// The session changed while the request was in flight; response ignored
    Discarded,
}

/// Owns the session. The only component that creates a token.
#[derive(Clone)]
pub struct SessionStore {
    auth: AuthState,
    api: ApiClient,
    lang: String,
}

impl SessionStore {
    pub fn new(auth: AuthState, api: ApiClient, lang: &str) -> Self {
        Self {
            auth,
            api,
            lang: lang.to_string(),
        }
    }

    /// Startup step: check a restored token against the server.
    /// Without a persisted token this does nothing.
    pub async fn initialize(&self) -> UserFetch {
        if !self.auth.is_authenticated() {
            log::info!("👤 No persisted session");
            return UserFetch::Skipped;
        }
        log::info!("🔄 Verifying restored session...");
        self.fetch_current_user().await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), String> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("🔐 Logging in...");
        let response = match self.api.login(&credentials).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ Login failed: {}", e);
                return Err(e.user_message("login_failed", false, &self.lang));
            }
        };

        self.auth.set_token(response.access_token);
        if !self.auth.is_authenticated() {
            return Err(ApiError::Decode("empty access_token".into()).user_message(
                "login_failed",
                false,
                &self.lang,
            ));
        }
        log::info!("✅ Logged in");

        // Profile load does not decide the login result
        if let UserFetch::Failed(e) = self.fetch_current_user().await {
            log::warn!("⚠️ Logged in but the profile did not load: {}", e);
        }
        Ok(())
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), String> {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        log::info!("📝 Registering a new account");
        self.api.register(&credentials).await.map_err(|e| {
            log::error!("❌ Registration failed: {}", e);
            e.user_message("register_failed", true, &self.lang)
        })
    }

    pub async fn fetch_current_user(&self) -> UserFetch {
        let Some(token) = self.auth.token() else {
            return UserFetch::Skipped;
        };

        match self.api.current_user().await {
            Ok(user) => {
                if self.auth.token().as_deref() != Some(token.as_str()) {
                    log::debug!("Session changed during user fetch, response dropped");
                    return UserFetch::Discarded;
                }
                log::info!("👤 Current user #{}", user.id);
                self.auth.set_user(user.clone());
                UserFetch::Loaded(user)
            }
            // The API client already cleared the session
            Err(e) if e.is_unauthorized() => UserFetch::LoggedOut,
            Err(ApiError::NotAuthenticated) => UserFetch::Skipped,
            Err(e) => {
                log::error!("❌ Could not load current user: {}", e);
                UserFetch::Failed(e.user_message("user_fetch_failed", false, &self.lang))
            }
        }
    }

    /// Local only: no request is sent
    pub fn logout(&self) {
        log::info!("👋 Logout");
        self.auth.logout();
    }

    pub fn token(&self) -> Option<String> {
        self.auth.token()
    }

    pub fn user(&self) -> Option<User> {
        self.auth.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.auth.subscribe(callback);
    }
}
