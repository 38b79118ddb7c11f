// ============================================================================
// TRIP STORE - trips of the current session
// ============================================================================

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Trip;
use crate::services::ApiClient;
use crate::state::ResourceState;
use crate::utils::i18n::t;

#[derive(Clone)]
pub struct TripStore {
    api: ApiClient,
    state: ResourceState<Trip>,
    lang: String,
}

impl TripStore {
    pub fn new(api: ApiClient, lang: &str) -> Self {
        Self {
            api,
            state: ResourceState::new(),
            lang: lang.to_string(),
        }
    }

    /// Reload the whole list. Without a session this does nothing.
    pub async fn fetch_trips(&self) {
        if !self.api.is_authenticated() {
            log::debug!("fetch_trips skipped: not authenticated");
            return;
        }

        self.state.begin_load();
        match self.api.list_trips().await {
            Ok(trips) => {
                log::info!("🚗 Loaded {} trips", trips.len());
                self.state.replace(trips);
            }
            Err(e) => {
                log::error!("❌ Could not load trips: {}", e);
                self.state
                    .fail(e.user_message("trips_fetch_failed", false, &self.lang));
            }
        }
        self.state.end_load();
    }

    /// Submit a trip as-is and append the server's record to the list.
    pub async fn create_trip<P>(&self, payload: &P) -> Result<Trip, String>
    where
        P: Serialize + ?Sized,
    {
        if !self.api.is_authenticated() {
            return Err(t("not_authenticated", &self.lang));
        }

        let payload = serde_json::to_value(payload).map_err(|e| {
            log::error!("❌ Trip payload is not serializable: {}", e);
            t("trip_create_failed", &self.lang)
        })?;

        let trip = self.api.create_trip(payload).await.map_err(|e| {
            log::error!("❌ Could not create trip: {}", e);
            e.user_message("trip_create_failed", true, &self.lang)
        })?;

        log::info!("🚗 Trip {} created", trip.id);
        self.state.push(trip.clone());
        Ok(trip)
    }

    pub fn trips(&self) -> Vec<Trip> {
        self.state.items.get()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading.get()
    }

    pub fn error(&self) -> Option<String> {
        self.state.error.get()
    }

    pub fn last_loaded(&self) -> Option<DateTime<Utc>> {
        self.state.last_loaded.get()
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.state.subscribe(callback);
    }
}
