// ============================================================================
// DEVICE STORE - devices of the current session + active device
// ============================================================================

use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::models::{Device, RecordId};
use crate::services::ApiClient;
use crate::state::{ReactiveState, ResourceState};
use crate::utils::i18n::t;

#[derive(Clone)]
pub struct DeviceStore {
    api: ApiClient,
    state: ResourceState<Device>,
    /// Device as it was when selected; need not be part of `state.items`
    active_device: ReactiveState<Option<Device>>,
    lang: String,
}

impl DeviceStore {
    pub fn new(api: ApiClient, lang: &str) -> Self {
        Self {
            api,
            state: ResourceState::new(),
            active_device: ReactiveState::new(None),
            lang: lang.to_string(),
        }
    }

    /// Reload the whole list. Without a session this does nothing.
    pub async fn fetch_devices(&self) {
        if !self.api.is_authenticated() {
            log::debug!("fetch_devices skipped: not authenticated");
            return;
        }

        self.state.begin_load();
        match self.api.list_devices().await {
            Ok(devices) => {
                log::info!("📟 Loaded {} devices", devices.len());
                let first = devices.first().cloned();
                self.state.replace(devices);

                if self.active_device.with(Option::is_none) {
                    if let Some(device) = first {
                        self.active_device.set(Some(device));
                    }
                }
            }
            Err(e) => {
                log::error!("❌ Could not load devices: {}", e);
                self.state
                    .fail(e.user_message("devices_fetch_failed", false, &self.lang));
            }
        }
        self.state.end_load();
    }

    /// Register a device and append it to the list (no refetch).
    pub async fn create_device(&self, name: &str) -> Result<Device, String> {
        if !self.api.is_authenticated() {
            return Err(t("not_authenticated", &self.lang));
        }

        log::info!("📟 Creating device '{}'", name);
        let device = self.api.create_device(name).await.map_err(|e| {
            log::error!("❌ Could not create device: {}", e);
            e.user_message("device_create_failed", true, &self.lang)
        })?;

        self.state.push(device.clone());
        if self.state.len() == 1 {
            self.active_device.set(Some(device.clone()));
        }
        Ok(device)
    }

    /// Select a device. Membership in the list is not checked.
    pub fn set_active_device(&self, device: &Device) {
        log::debug!("Active device set to {}", device.id);
        self.active_device.set(Some(device.clone()));
    }

    /// Active device. A listed record with the same id wins over the snapshot
    /// taken at selection time, so refetched fields show up.
    pub fn active_device(&self) -> Option<Device> {
        let selected = self.active_device.get()?;
        let listed = self.state.items.with(|devices| {
            devices
                .iter()
                .find(|device| device.id == selected.id)
                .cloned()
        });
        Some(listed.unwrap_or(selected))
    }

    pub fn active_device_id(&self) -> Option<RecordId> {
        self.active_device.with(|device| device.as_ref().map(|device| device.id.clone()))
    }

    pub fn devices(&self) -> Vec<Device> {
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
        let callback: Rc<dyn Fn()> = Rc::new(callback);
        let on_active = callback.clone();
        self.state.subscribe(move || callback());
        self.active_device.subscribe(move || on_active());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Method;
    use crate::test_support::Harness;
    use futures::executor::block_on;
    use serde_json::json;

    fn store(h: &Harness) -> DeviceStore {
        DeviceStore::new(h.api.clone(), "EN")
    }

    #[test]
    fn fetch_replaces_list_and_activates_first() {
        let h = Harness::with_token("tok");
        let devices = store(&h);
        h.transport
            .respond(200, json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]));

        block_on(devices.fetch_devices());

        assert_eq!(devices.devices().len(), 2);
        assert_eq!(devices.active_device().unwrap().id, RecordId::Int(1));
        assert_eq!(devices.active_device().unwrap().name, "A");
        assert!(!devices.is_loading());
        assert_eq!(devices.error(), None);
        assert!(devices.last_loaded().is_some());
    }

    #[test]
    fn fetch_keeps_existing_selection() {
        let h = Harness::with_token("tok");
        let devices = store(&h);
        h.transport
            .respond(200, json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]));
        h.transport
            .respond(200, json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B"}, {"id": 3, "name": "C"}]));

        block_on(devices.fetch_devices());
        let second = devices.devices()[1].clone();
        devices.set_active_device(&second);
        block_on(devices.fetch_devices());

        assert_eq!(devices.devices().len(), 3);
        assert_eq!(devices.active_device_id(), Some(RecordId::Int(2)));
    }

    #[test]
    fn empty_list_selects_nothing() {
        let h = Harness::with_token("tok");
        let devices = store(&h);
        h.transport.respond(200, json!([]));

        block_on(devices.fetch_devices());
        assert!(devices.devices().is_empty());
        assert_eq!(devices.active_device(), None);
    }

    #[test]
    fn fetch_failure_records_generic_error_and_keeps_list() {
        let h = Harness::with_token("tok");
        let devices = store(&h);
        h.transport.respond(200, json!([{"id": 1, "name": "A"}]));
        h.transport.respond(500, json!({"detail": "db down"}));

        block_on(devices.fetch_devices());
        block_on(devices.fetch_devices());

        assert_eq!(devices.error(), Some(t("devices_fetch_failed", "EN")));
        assert_eq!(devices.devices().len(), 1);
        assert!(!devices.is_loading());
    }

    #[test]
    fn anonymous_fetch_is_a_no_op() {
        let h = Harness::anonymous();
        let devices = store(&h);

        block_on(devices.fetch_devices());

        assert_eq!(h.transport.request_count(), 0);
        assert!(devices.devices().is_empty());
        assert_eq!(devices.error(), None);
        assert!(!devices.is_loading());
    }

    #[test]
    fn first_created_device_becomes_active() {
        let h = Harness::with_token("tok");
        let devices = store(&h);
        h.transport.respond(201, json!({"id": 9, "name": "X", "imei": "123"}));

        let created = block_on(devices.create_device("X")).unwrap();

        assert_eq!(created.id, RecordId::Int(9));
        assert_eq!(devices.devices(), vec![created.clone()]);
        assert_eq!(devices.active_device(), Some(created));

        let request = &h.transport.requests()[0];
        assert_eq!(request.method, Method::Post);
        assert!(request.url.ends_with("/devices/"));
        assert_eq!(request.body, Some(json!({"name": "X"})));
    }

    #[test]
    fn later_devices_do_not_steal_selection() {
        let h = Harness::with_token("tok");
        let devices = store(&h);
        h.transport.respond(201, json!({"id": 1, "name": "A"}));
        h.transport.respond(201, json!({"id": 2, "name": "B"}));

        block_on(devices.create_device("A")).unwrap();
        block_on(devices.create_device("B")).unwrap();

        assert_eq!(devices.devices().len(), 2);
        assert_eq!(devices.active_device_id(), Some(RecordId::Int(1)));
    }

    #[test]
    fn create_requires_session() {
        let h = Harness::anonymous();
        let devices = store(&h);

        let err = block_on(devices.create_device("X")).unwrap_err();
        assert_eq!(err, t("not_authenticated", "EN"));
        assert_eq!(h.transport.request_count(), 0);
    }

    #[test]
    fn create_failure_shows_detail_or_fallback() {
        let h = Harness::with_token("tok");
        let devices = store(&h);
        h.transport.respond(400, json!({"detail": "Device name taken"}));
        h.transport.respond_raw(500, "");

        assert_eq!(
            block_on(devices.create_device("X")).unwrap_err(),
            "Device name taken"
        );
        assert_eq!(
            block_on(devices.create_device("X")).unwrap_err(),
            t("device_create_failed", "EN")
        );
        assert!(devices.devices().is_empty());
    }

    #[test]
    fn expired_token_on_fetch_logs_out() {
        let h = Harness::with_token("expired");
        let devices = store(&h);
        h.transport.respond(401, json!({"detail": "Could not validate credentials"}));

        block_on(devices.fetch_devices());

        assert!(!h.auth.is_authenticated());
        assert_eq!(devices.error(), Some(t("session_expired", "EN")));
    }

    #[test]
    fn active_device_accepts_foreign_records() {
        let h = Harness::with_token("tok");
        let devices = store(&h);
        let foreign: Device = serde_json::from_value(json!({"id": 42, "name": "Z"})).unwrap();

        devices.set_active_device(&foreign);
        assert_eq!(devices.active_device(), Some(foreign.clone()));

        // A later fetch neither hides nor replaces the selection
        h.transport.respond(200, json!([{"id": 1, "name": "A"}]));
        block_on(devices.fetch_devices());

        assert_eq!(devices.devices().len(), 1);
        assert_eq!(devices.active_device(), Some(foreign));
        assert_eq!(devices.active_device_id(), Some(RecordId::Int(42)));
    }

    #[test]
    fn active_device_follows_refetched_record() {
        let h = Harness::with_token("tok");
        let devices = store(&h);
        h.transport.respond(200, json!([{"id": 1, "name": "A"}]));
        h.transport.respond(200, json!([{"id": 1, "name": "A (renamed)"}]));

        block_on(devices.fetch_devices());
        block_on(devices.fetch_devices());

        assert_eq!(devices.active_device().unwrap().name, "A (renamed)");
    }
}
