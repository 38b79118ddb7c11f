//! Scripted transport and ready-made wiring for unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;
use crate::services::{ApiClient, HttpRequest, HttpResponse, HttpTransport};
use crate::state::AuthState;
use crate::utils::constants::DEFAULT_API_BASE_URL;
use crate::utils::storage::MemoryStorage;

type InFlightHook = Box<dyn FnOnce()>;

/// Answers requests from a queue and records every request it receives.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
    in_flight: RefCell<VecDeque<InFlightHook>>,
}

impl MockTransport {
    pub fn respond(&self, status: u16, body: Value) {
        self.respond_raw(status, &body.to_string());
    }

    pub fn respond_raw(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    /// Next request fails at the transport level
    pub fn fail(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    /// Run `hook` while the next request is in flight, after it was sent and
    /// before its response is handed back. Hooks queue up one per request.
    pub fn while_in_flight<F>(&self, hook: F)
    where
        F: FnOnce() + 'static,
    {
        self.in_flight.borrow_mut().push_back(Box::new(hook));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let url = request.url.clone();
        self.requests.borrow_mut().push(request);
        let hook = self.in_flight.borrow_mut().pop_front();
        if let Some(hook) = hook {
            hook();
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network(format!("no scripted response for {}", url))))
    }
}

pub struct Harness {
    pub storage: MemoryStorage,
    pub transport: Rc<MockTransport>,
    pub auth: AuthState,
    pub api: ApiClient,
}

impl Harness {
    pub fn anonymous() -> Self {
        Self::from_storage(MemoryStorage::new())
    }

    /// Session restored from a persisted token
    pub fn with_token(token: &str) -> Self {
        Self::from_storage(MemoryStorage::with_item("token", token))
    }

    fn from_storage(storage: MemoryStorage) -> Self {
        let transport = Rc::new(MockTransport::default());
        let auth = AuthState::restore(Rc::new(storage.clone()), "token");
        let api = ApiClient::new(DEFAULT_API_BASE_URL, transport.clone(), Rc::new(auth.clone()));
        Self {
            storage,
            transport,
            auth,
            api,
        }
    }
}
