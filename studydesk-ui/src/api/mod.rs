//! Browser plumbing for the API client
//!
//! A `fetch` transport for the shared [`ApiClient`](studydesk::ApiClient) and
//! `localStorage` persistence for session tokens.

pub mod client;
pub mod storage;

pub use client::{get_api_base, BrowserTransport};
pub use storage::LocalTokenStorage;
