//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (keyboard codes to game keys)
//! - Storage (LocalStorage on web)

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod storage;

pub use input::{Key, KeyEvent};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStore;
