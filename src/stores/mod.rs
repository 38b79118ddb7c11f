pub mod device_store;
pub mod session_store;
pub mod trip_store;

pub use device_store::DeviceStore;
pub use session_store::{SessionStore, UserFetch};
pub use trip_store::TripStore;
