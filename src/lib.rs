// ============================================================================
// ORYX WEB CLIENT - session + device + trip state for the browser front end
// ============================================================================
// Layers (leaves first):
// - utils:    config constants, i18n, durable storage
// - services: HTTP transport + stateless API client (401 => logout lives here)
// - state:    Rc<RefCell> state with change notifications
// - stores:   session / devices / trips, what views talk to
// - app:      wiring, one instance per page
// ============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use config::{AppConfig, CONFIG};
pub use error::ApiError;
pub use stores::{DeviceStore, SessionStore, TripStore, UserFetch};
