pub mod api_client;
pub mod http;

pub use api_client::ApiClient;
pub use http::{HttpRequest, HttpResponse, HttpTransport, Method};

#[cfg(target_arch = "wasm32")]
pub use http::GlooTransport;
