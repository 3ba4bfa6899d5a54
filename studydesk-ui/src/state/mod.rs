//! State Management
//!
//! Session stores and reactive page state shared by every view.

pub mod global;
pub mod sessions;

pub use global::{provide_global_state, GlobalState};
pub use sessions::Sessions;
