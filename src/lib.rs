//! # Study Desk
//!
//! Client core for a JWT-authenticated learning platform: learner and
//! administrator sessions, page routing, typed access to the REST API,
//! dashboard view models and the bundled study material.
//!
//! ## Modules
//!
//! - [`routing`]: reconciles the requested page with both sessions
//! - [`session`]: independent learner and admin session stores
//! - [`api`]: REST client over a pluggable transport
//! - [`dashboard`]: stat cards, activity monitor, user table, study area
//! - [`content`]: study documents and their section parser
//!
//! The default `native` feature adds a reqwest transport, file-backed token
//! storage, TOML configuration, logging setup and the `studydesk` CLI.
//! Without it the crate builds for `wasm32-unknown-unknown`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use studydesk::api::{ApiClient, ReqwestTransport};
//! use studydesk::routing::{AuthFlags, Navigator, Page};
//! use studydesk::session::{AdminSessionStore, FileTokenStorage, UserSessionStore};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Rc::new(ApiClient::new(ReqwestTransport::new(None)?, "http://localhost:8000"));
//!     let tokens = FileTokenStorage::new("/tmp/studydesk-tokens");
//!
//!     let user = UserSessionStore::new(Rc::clone(&api), tokens.clone());
//!     let admin = AdminSessionStore::new(api, tokens);
//!     user.restore().await;
//!     admin.restore().await;
//!
//!     let mut nav = Navigator::new(Page::Dashboard);
//!     let view = nav.view(AuthFlags::new(user.is_authenticated(), admin.is_authenticated()));
//!     println!("showing {:?}", view);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod content;
pub mod dashboard;
pub mod routing;
pub mod session;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

// Re-export top-level types for convenience
pub use api::{ApiClient, ApiError, ApiResult, Transport};

pub use routing::{reconcile, select_view, AuthFlags, Navigator, Page, View};

pub use session::{
    AdminRealm, AdminSessionStore, MemoryTokenStorage, Realm, Session, SessionStore,
    TokenStorage, UserRealm, UserSessionStore,
};

pub use content::{parse_sections, Section, StudyDocument, Technology};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
