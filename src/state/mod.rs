// ============================================================================
// STATE - shared Rc<RefCell> state with change notifications
// ============================================================================

pub mod auth_state;
pub mod reactivity;
pub mod resource_state;

pub use auth_state::*;
pub use reactivity::*;
pub use resource_state::*;
