//! Sessions
//!
//! Two independent session stores, one per [`Realm`]: learners and
//! administrators. Each holds an identity and its bearer credential, persists
//! the credential under a fixed key and revalidates it on start-up.
//!
//! Stores are explicit values built at the composition root and handed to
//! whatever needs them; nothing here is global.

#[cfg(feature = "native")]
mod file;
mod realm;
mod state;
mod storage;
mod store;

#[cfg(feature = "native")]
pub use file::FileTokenStorage;
pub use realm::{AdminRealm, Realm, UserRealm};
pub use state::Session;
pub use storage::{MemoryTokenStorage, TokenStorage, TokenStoreError};
pub use store::{AdminSessionStore, SessionStore, UserSessionStore};
