// ============================================================================
// STATE MODULE - Store, actions and reactivity (Rc<RefCell> + subscribers)
// ============================================================================

pub mod actions;
pub mod pagination;
pub mod reactivity;
pub mod store;

pub use actions::AppActions;
pub use pagination::Pagination;
pub use reactivity::{StoreHandle, SubscriptionId};
pub use store::{Store, StoreAction};
