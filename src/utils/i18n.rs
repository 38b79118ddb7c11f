// ============================================================================
// I18N - user-facing messages
// ============================================================================

use std::collections::HashMap;

/// Message table for a language code (`RU`, `EN`). Unknown codes fall back to `RU`.
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();

    match lang.to_uppercase().as_str() {
        "EN" => {
            // Session
            translations.insert("login_failed", "Authorization failed");
            translations.insert("register_failed", "Registration failed");
            translations.insert("not_authenticated", "Not authenticated");
            translations.insert("session_expired", "Session expired, please sign in again");
            translations.insert("network_error", "Could not reach the server");
            translations.insert("invalid_response", "Unexpected server response");
            translations.insert("user_fetch_failed", "Failed to load user data");

            // Devices
            translations.insert("devices_fetch_failed", "Failed to load devices");
            translations.insert("device_create_failed", "Failed to create device");

            // Trips
            translations.insert("trips_fetch_failed", "Failed to load trips");
            translations.insert("trip_create_failed", "Failed to create trip");
        }
        _ => {
            // Session
            translations.insert("login_failed", "Ошибка авторизации");
            translations.insert("register_failed", "Ошибка регистрации");
            translations.insert("not_authenticated", "Не авторизован");
            translations.insert("session_expired", "Сессия истекла, войдите снова");
            translations.insert("network_error", "Сервер недоступен");
            translations.insert("invalid_response", "Некорректный ответ сервера");
            translations.insert("user_fetch_failed", "Ошибка получения данных пользователя");

            // Devices
            translations.insert("devices_fetch_failed", "Ошибка получения данных об устройствах");
            translations.insert("device_create_failed", "Ошибка создания устройства");

            // Trips
            translations.insert("trips_fetch_failed", "Ошибка получения данных о поездках");
            translations.insert("trip_create_failed", "Ошибка создания поездки");
        }
    }

    translations
}

/// Translate a message key; returns the key itself when no translation exists
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    key.to_string()
}
