//! Session stores
//!
//! The two independent session stores, built once at the composition root.

use std::rc::Rc;

use studydesk::api::ApiClient;
use studydesk::session::{AdminSessionStore, UserSessionStore};

use crate::api::{get_api_base, BrowserTransport, LocalTokenStorage};

pub type BrowserApi = ApiClient<BrowserTransport>;

/// Learner and admin sessions over one API client
pub struct Sessions {
    pub api: Rc<BrowserApi>,
    pub user: UserSessionStore<BrowserTransport, LocalTokenStorage>,
    pub admin: AdminSessionStore<BrowserTransport, LocalTokenStorage>,
}

impl Sessions {
    /// Build both stores, picking up tokens persisted by an earlier visit
    pub fn new() -> Self {
        let api = Rc::new(ApiClient::new(BrowserTransport, get_api_base()));
        Self {
            user: UserSessionStore::new(Rc::clone(&api), LocalTokenStorage),
            admin: AdminSessionStore::new(Rc::clone(&api), LocalTokenStorage),
            api,
        }
    }

    /// Revalidate persisted tokens. Either session may end up logged out.
    pub async fn restore(&self) {
        self.user.restore().await;
        self.admin.restore().await;
    }
}
