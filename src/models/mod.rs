pub mod auth;
pub mod device;
pub mod record_id;
pub mod trip;
pub mod user;

pub use auth::{Credentials, ErrorBody, TokenResponse};
pub use device::{Device, NewDevice};
pub use record_id::RecordId;
pub use trip::Trip;
pub use user::User;
