pub mod use_store;

pub use use_store::{use_actions, use_store, UseStoreHandle};
