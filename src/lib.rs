// ============================================================================
// RECOMMEDIA - Movie discovery front end (Yew + WASM)
// ============================================================================
// - Components: Yew function components, one per route plus shared pieces
// - Hooks: access to the shared store through context
// - State: Store + StoreAction commands, reactive handle, actions
// - Services: HTTP client and browser storage, behind traits
// - Models: records exchanged with the RecomMedia API
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod testing;

pub use components::App;
