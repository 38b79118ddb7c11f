// ============================================================================
// API CLIENT - Oryx REST endpoints, no state of its own
// ============================================================================
// Every bearer request goes through `send_authorized`, which owns the
// "401 => logout" policy for the whole client.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{Credentials, Device, ErrorBody, NewDevice, TokenResponse, Trip, User};
use crate::services::http::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::state::AuthProvider;
use crate::utils::constants::*;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Rc<dyn HttpTransport>,
    auth: Rc<dyn AuthProvider>,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Rc<dyn HttpTransport>, auth: Rc<dyn AuthProvider>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            auth,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.token().is_some()
    }

    /// POST /auth/login
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse, ApiError> {
        let body = serde_json::to_value(credentials)?;
        let response = self.send_public(Method::Post, PATH_LOGIN, Some(body)).await?;
        decode(&response)
    }

    /// POST /auth/register. The response body is not used.
    pub async fn register(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let body = serde_json::to_value(credentials)?;
        self.send_public(Method::Post, PATH_REGISTER, Some(body)).await?;
        Ok(())
    }

    /// GET /users/me
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let response = self.send_authorized(Method::Get, PATH_CURRENT_USER, None).await?;
        decode(&response)
    }

    /// GET /devices/me
    pub async fn list_devices(&self) -> Result<Vec<Device>, ApiError> {
        let response = self.send_authorized(Method::Get, PATH_MY_DEVICES, None).await?;
        decode(&response)
    }

    /// POST /devices/
    pub async fn create_device(&self, name: &str) -> Result<Device, ApiError> {
        let body = serde_json::to_value(NewDevice {
            name: name.to_string(),
        })?;
        let response = self.send_authorized(Method::Post, PATH_DEVICES, Some(body)).await?;
        decode(&response)
    }

    /// GET /trips/me
    pub async fn list_trips(&self) -> Result<Vec<Trip>, ApiError> {
        let response = self.send_authorized(Method::Get, PATH_MY_TRIPS, None).await?;
        decode(&response)
    }

    /// POST /trips/ with the payload passed through untouched
    pub async fn create_trip(&self, payload: Value) -> Result<Trip, ApiError> {
        let response = self.send_authorized(Method::Post, PATH_TRIPS, Some(payload)).await?;
        decode(&response)
    }

    async fn send_public(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let request = HttpRequest {
            method,
            url: self.url(path),
            bearer: None,
            body,
        };
        let response = self.transport.send(request).await?;
        check_status(response)
    }

    /// Bearer request. Without a token nothing is sent. A 401 logs the session
    /// out, unless the token changed while the request was in flight.
    async fn send_authorized(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<HttpResponse, ApiError> {
        let token = self.auth.token().ok_or(ApiError::NotAuthenticated)?;
        let request = HttpRequest {
            method,
            url: self.url(path),
            bearer: Some(token.clone()),
            body,
        };

        let response = self.transport.send(request).await?;
        if response.status == 401 {
            if self.auth.token().as_deref() == Some(token.as_str()) {
                self.auth.force_logout();
            } else {
                log::debug!("401 for a token that is no longer current on {}", path);
            }
            return Err(ApiError::Unauthorized);
        }
        check_status(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    Err(ApiError::Status {
        status: response.status,
        detail: ErrorBody::detail_from(&response.body),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(ApiError::from)
}
