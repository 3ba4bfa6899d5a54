//! Study Desk REST API client
//!
//! Typed access to the remote learning-platform API over a pluggable
//! [`Transport`].
//!
//! # Endpoints
//!
//! ## Learner
//! - `POST /login`, `POST /register` - Credentials exchange
//! - `GET /me`, `GET /dashboard` - Identity and progress
//!
//! ## Admin
//! - `POST /admin/login`, `GET /admin/me`, `GET /admin/dashboard`
//! - `/admin/users/...` - User management
//! - `/admin/activities/...` - Activity monitoring
//! - `/admin/stats/...` - System statistics
//! - `/admin/posts/...` - Content moderation
//! - `/admin/settings`, `/admin/health`, `/admin/cache/clear`
//! - `/admin/notifications/...` - Broadcasts and direct notices
//!
//! # Example
//!
//! ```rust,ignore
//! use studydesk::api::{ApiClient, ReqwestTransport};
//! use studydesk::session::UserRealm;
//!
//! let api = ApiClient::new(ReqwestTransport::new(None)?, "http://localhost:8000");
//! let grant = api.sign_in::<UserRealm>("ada@example.com", "secret").await?;
//! let dashboard = api.user_dashboard(&grant.access_token).await?;
//! ```

mod admin;
pub mod client;
pub mod dto;
pub mod endpoint;
pub mod error;
#[cfg(feature = "native")]
pub mod http;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiClient, DEFAULT_API_BASE};
pub use dto::*;
pub use endpoint::{Endpoint, Params};
pub use error::{ApiError, ApiResult};
#[cfg(feature = "native")]
pub use http::ReqwestTransport;
pub use transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};
