/// Base URL of the Oryx REST API when `API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Language of user-facing messages when `APP_LANGUAGE` is not set
pub const DEFAULT_LANGUAGE: &str = "RU";

/// Durable key holding the raw bearer token
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

// API paths, relative to the base URL
pub const PATH_LOGIN: &str = "/auth/login";
pub const PATH_REGISTER: &str = "/auth/register";
pub const PATH_CURRENT_USER: &str = "/users/me";
pub const PATH_MY_DEVICES: &str = "/devices/me";
pub const PATH_DEVICES: &str = "/devices/";
pub const PATH_MY_TRIPS: &str = "/trips/me";
pub const PATH_TRIPS: &str = "/trips/";
