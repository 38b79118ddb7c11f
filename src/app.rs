// ============================================================================
// APP - one instance per page, owns every store
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::services::{ApiClient, HttpTransport};
use crate::state::AuthState;
use crate::stores::{DeviceStore, SessionStore, TripStore, UserFetch};
use crate::utils::storage::KeyValueStorage;

/// Application context handed to views. Cloning is cheap and every clone
/// shares the same state.
#[derive(Clone)]
pub struct App {
    pub session: SessionStore,
    pub devices: DeviceStore,
    pub trips: TripStore,
}

impl App {
    pub fn new(
        config: &AppConfig,
        transport: Rc<dyn HttpTransport>,
        storage: Rc<dyn KeyValueStorage>,
    ) -> Self {
        let auth = AuthState::restore(storage, &config.token_storage_key);
        let api = ApiClient::new(&config.api_base_url, transport, Rc::new(auth.clone()));

        Self {
            session: SessionStore::new(auth, api.clone(), &config.language),
            devices: DeviceStore::new(api.clone(), &config.language),
            trips: TripStore::new(api, &config.language),
        }
    }

    /// Browser wiring: `fetch` transport + `localStorage`
    #[cfg(target_arch = "wasm32")]
    pub fn browser(config: &AppConfig) -> Self {
        use crate::services::GlooTransport;
        use crate::utils::storage::LocalStorage;

        Self::new(config, Rc::new(GlooTransport), Rc::new(LocalStorage))
    }

    /// Must be called once after construction: validates a restored session.
    pub async fn initialize(&self) -> UserFetch {
        self.session.initialize().await
    }

    /// Data shown on the dashboard
    pub async fn load_dashboard(&self) {
        self.devices.fetch_devices().await;
        self.trips.fetch_trips().await;
    }
}
