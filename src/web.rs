// ============================================================================
// WASM ENTRY - page bootstrap + functions callable from JavaScript
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::stores::UserFetch;

// One App per page
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Oryx web client ({})", CONFIG.api_base_url);

    let app = App::browser(&CONFIG);
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app.clone());
    });

    wasm_bindgen_futures::spawn_local(async move {
        match app.initialize().await {
            UserFetch::Loaded(user) => {
                log::info!("✅ Session restored for user #{}", user.id);
                app.load_dashboard().await;
            }
            UserFetch::LoggedOut => log::info!("🔒 Stored session expired"),
            UserFetch::Failed(e) => log::warn!("⚠️ Session check failed: {}", e),
            UserFetch::Skipped | UserFetch::Discarded => {}
        }
    });

    Ok(())
}

fn app() -> Result<App, JsValue> {
    APP.with(|cell| cell.borrow().clone())
        .ok_or_else(|| JsValue::from_str("App is not initialized"))
}

#[wasm_bindgen]
pub async fn login(email: String, password: String) -> Result<(), JsValue> {
    let app = app()?;
    app.session
        .login(&email, &password)
        .await
        .map_err(|e| JsValue::from_str(&e))?;
    app.load_dashboard().await;
    Ok(())
}

#[wasm_bindgen]
pub async fn register(email: String, password: String) -> Result<(), JsValue> {
    app()?
        .session
        .register(&email, &password)
        .await
        .map_err(|e| JsValue::from_str(&e))
}

#[wasm_bindgen]
pub fn logout() -> Result<(), JsValue> {
    app()?.session.logout();
    Ok(())
}

#[wasm_bindgen]
pub fn is_authenticated() -> bool {
    app().map(|app| app.session.is_authenticated()).unwrap_or(false)
}

/// Creates a device; resolves to the server record as a JSON string
#[wasm_bindgen]
pub async fn create_device(name: String) -> Result<String, JsValue> {
    let device = app()?
        .devices
        .create_device(&name)
        .await
        .map_err(|e| JsValue::from_str(&e))?;
    serde_json::to_string(&device).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Creates a trip from a JSON payload; resolves to the server record as a JSON string
#[wasm_bindgen]
pub async fn create_trip(payload_json: String) -> Result<String, JsValue> {
    let payload: serde_json::Value =
        serde_json::from_str(&payload_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let trip = app()?
        .trips
        .create_trip(&payload)
        .await
        .map_err(|e| JsValue::from_str(&e))?;
    serde_json::to_string(&trip).map_err(|e| JsValue::from_str(&e.to_string()))
}
