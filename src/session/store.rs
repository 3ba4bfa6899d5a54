//! Session store
//!
//! Owns one realm's session: credential exchange, persistence of the bearer
//! token, revalidation on start-up and authenticated requests.

use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;

use super::realm::{AdminRealm, Realm, UserRealm};
use super::state::Session;
use super::storage::TokenStorage;
use crate::api::{ApiClient, ApiError, ApiResult, AuthGrant, Endpoint, Transport, UserProfile};

/// Session store for one realm.
///
/// Methods take `&self`: the session lives behind a `RefCell` that is never
/// borrowed across an await point, so one store can be shared by every view.
pub struct SessionStore<R: Realm, T, S> {
    api: Rc<ApiClient<T>>,
    storage: S,
    session: RefCell<Session<R::Identity>>,
    _realm: PhantomData<R>,
}

pub type UserSessionStore<T, S> = SessionStore<UserRealm, T, S>;
pub type AdminSessionStore<T, S> = SessionStore<AdminRealm, T, S>;

impl<R: Realm, T: Transport, S: TokenStorage> SessionStore<R, T, S> {
    /// Create a store, picking up any persisted token.
    ///
    /// The token stays unconfirmed until [`restore`](Self::restore) runs.
    pub fn new(api: Rc<ApiClient<T>>, storage: S) -> Self {
        let session = match storage.load(R::TOKEN_KEY) {
            Ok(Some(token)) => Session::restored(token),
            Ok(None) => Session::anonymous(),
            Err(e) => {
                tracing::warn!(realm = R::NAME, error = %e, "failed to read persisted token");
                Session::anonymous()
            }
        };

        Self {
            api,
            storage,
            session: RefCell::new(session),
            _realm: PhantomData,
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session<R::Identity> {
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    pub fn is_pending(&self) -> bool {
        self.session.borrow().is_pending()
    }

    pub fn identity(&self) -> Option<R::Identity> {
        self.session.borrow().identity().cloned()
    }

    pub fn token(&self) -> Option<String> {
        self.session.borrow().token().map(str::to_string)
    }

    /// Revalidate a persisted token.
    ///
    /// Any failure, network errors included, ends the session. Returns
    /// whether the store is authenticated afterwards.
    pub async fn restore(&self) -> bool {
        let token = {
            let session = self.session.borrow();
            if !session.is_pending() {
                return session.is_authenticated();
            }
            session.token().map(str::to_string)
        };
        let Some(token) = token else {
            return false;
        };

        match self.api.identity::<R>(&token).await {
            Ok(identity) => {
                // A login or logout may have landed while the request was in flight
                let mut session = self.session.borrow_mut();
                if session.token() != Some(token.as_str()) {
                    return session.is_authenticated();
                }
                session.confirm(identity);
                tracing::info!(realm = R::NAME, "session restored");
                true
            }
            Err(e) => {
                tracing::warn!(realm = R::NAME, error = %e, "token revalidation failed, logging out");
                if self.session.borrow().token() == Some(token.as_str()) {
                    self.logout();
                }
                false
            }
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On failure the current session is left untouched and the error
    /// carries the server's message.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<R::Identity> {
        let grant = self.api.sign_in::<R>(email, password).await?;
        Ok(self.establish(grant))
    }

    /// End the session locally. Never fails.
    pub fn logout(&self) {
        self.session.borrow_mut().clear();
        if let Err(e) = self.storage.remove(R::TOKEN_KEY) {
            tracing::warn!(realm = R::NAME, error = %e, "failed to remove persisted token");
        }
        tracing::info!(realm = R::NAME, "logged out");
    }

    /// Authenticated request with this session's bearer token
    pub async fn fetch<Res: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> ApiResult<Res> {
        let token = self.token().ok_or(ApiError::Unauthenticated)?;
        self.api.authorized(&token, endpoint, body).await
    }

    /// Bearer token for callers that use the client directly
    pub fn require_token(&self) -> ApiResult<String> {
        self.token().ok_or(ApiError::Unauthenticated)
    }

    fn establish(&self, grant: AuthGrant<R::Identity>) -> R::Identity {
        if let Err(e) = self.storage.save(R::TOKEN_KEY, &grant.access_token) {
            tracing::warn!(realm = R::NAME, error = %e, "failed to persist token");
        }

        let identity = grant.identity;
        *self.session.borrow_mut() = Session::established(grant.access_token, identity.clone());
        tracing::info!(realm = R::NAME, name = R::display_name(&identity), "signed in");
        identity
    }
}

impl<T: Transport, S: TokenStorage> SessionStore<UserRealm, T, S> {
    /// Create an account and sign into it.
    ///
    /// When the server does not hand back a token with the new account, the
    /// same credentials are used to log in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> ApiResult<UserProfile> {
        let reply = self.api.register(name, email, password).await?;

        match reply.into_grant() {
            Some(grant) => Ok(self.establish(grant)),
            None => self.login(email, password).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::api::Method;
    use crate::routing::{AuthFlags, Navigator, Page};
    use crate::session::MemoryTokenStorage;

    const USER_GRANT: &str =
        r#"{"access_token": "user-tok", "user": {"id": 1, "name": "Ada", "email": "ada@x.io"}}"#;
    const ADMIN_GRANT: &str =
        r#"{"access_token": "admin-tok", "admin": {"id": 1, "name": "Root", "email": "root@x.io"}}"#;

    fn api(transport: &ScriptedTransport) -> Rc<ApiClient<ScriptedTransport>> {
        Rc::new(ApiClient::new(transport.clone(), "http://api.test"))
    }

    #[tokio::test]
    async fn test_login_persists_token() {
        let transport = ScriptedTransport::new().on(Method::Post, "/login", 200, USER_GRANT);
        let storage = MemoryTokenStorage::new();
        let store = UserSessionStore::new(api(&transport), storage.clone());

        let identity = store.login("ada@x.io", "pw").await.unwrap();

        assert_eq!(identity.name, "Ada");
        assert!(store.is_authenticated());
        assert_eq!(store.token().as_deref(), Some("user-tok"));
        assert_eq!(storage.get("token").as_deref(), Some("user-tok"));
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_unchanged() {
        let transport = ScriptedTransport::new()
            .on(Method::Post, "/login", 200, USER_GRANT)
            .on(
                Method::Post,
                "/login",
                401,
                r#"{"detail": "Incorrect email or password"}"#,
            );
        let storage = MemoryTokenStorage::new();
        storage.save("token", "old-tok").unwrap();
        let store = UserSessionStore::new(api(&transport), storage.clone());
        let before = store.session();

        let err = store.login("ada@x.io", "wrong").await.unwrap_err();

        assert_eq!(err.user_message(), "Incorrect email or password");
        assert_eq!(store.session(), before);
        assert_eq!(storage.get("token").as_deref(), Some("old-tok"));
    }

    #[tokio::test]
    async fn test_failed_login_while_signed_in_keeps_session() {
        let transport = ScriptedTransport::new().on(Method::Post, "/admin/login", 200, ADMIN_GRANT);
        let store = AdminSessionStore::new(api(&transport), MemoryTokenStorage::new());
        store.login("root@x.io", "pw").await.unwrap();

        let failing = ScriptedTransport::new().unreachable(Method::Post, "/admin/login");
        let store = SessionStore::<AdminRealm, _, _> {
            api: api(&failing),
            storage: MemoryTokenStorage::new(),
            session: RefCell::new(store.session()),
            _realm: PhantomData,
        };

        let err = store.login("root@x.io", "pw").await.unwrap_err();
        assert_eq!(err.user_message(), "Network error");
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn test_restore_confirms_persisted_token() {
        let transport = ScriptedTransport::new().on(
            Method::Get,
            "/admin/me",
            200,
            r#"{"id": 1, "name": "Root", "email": "root@x.io"}"#,
        );
        let storage = MemoryTokenStorage::new();
        storage.save("adminToken", "admin-tok").unwrap();

        let store = AdminSessionStore::new(api(&transport), storage);
        assert!(store.is_pending());
        assert!(!store.is_authenticated());

        assert!(store.restore().await);
        assert_eq!(store.identity().map(|a| a.name), Some("Root".to_string()));
        assert_eq!(transport.requests()[0].bearer.as_deref(), Some("admin-tok"));
    }

    #[tokio::test]
    async fn test_restore_failure_logs_out() {
        let transport = ScriptedTransport::new().unreachable(Method::Get, "/me");
        let storage = MemoryTokenStorage::new();
        storage.save("token", "stale").unwrap();

        let store = UserSessionStore::new(api(&transport), storage.clone());
        assert!(!store.restore().await);

        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
        assert_eq!(storage.get("token"), None);
    }

    #[tokio::test]
    async fn test_restore_without_token_makes_no_request() {
        let transport = ScriptedTransport::new();
        let store = UserSessionStore::new(api(&transport), MemoryTokenStorage::new());
        assert!(!store.restore().await);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_session_survives_reload() {
        let transport = ScriptedTransport::new()
            .on(Method::Post, "/login", 200, USER_GRANT)
            .on(
                Method::Get,
                "/me",
                200,
                r#"{"id": 1, "name": "Ada", "email": "ada@x.io"}"#,
            );
        let storage = MemoryTokenStorage::new();

        let first = UserSessionStore::new(api(&transport), storage.clone());
        first.login("ada@x.io", "pw").await.unwrap();
        drop(first);

        let reloaded = UserSessionStore::new(api(&transport), storage);
        assert!(reloaded.restore().await);
        assert_eq!(reloaded.token().as_deref(), Some("user-tok"));
    }

    #[tokio::test]
    async fn test_register_with_token() {
        let transport = ScriptedTransport::new().on(Method::Post, "/register", 200, USER_GRANT);
        let store = UserSessionStore::new(api(&transport), MemoryTokenStorage::new());

        store.register("Ada", "ada@x.io", "pw").await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(transport.paths(), vec!["/register"]);
    }

    #[tokio::test]
    async fn test_register_without_token_logs_in() {
        let transport = ScriptedTransport::new()
            .on(
                Method::Post,
                "/register",
                201,
                r#"{"message": "User created", "user": {"id": 1, "name": "Ada"}}"#,
            )
            .on(Method::Post, "/login", 200, USER_GRANT);
        let store = UserSessionStore::new(api(&transport), MemoryTokenStorage::new());

        store.register("Ada", "ada@x.io", "pw").await.unwrap();

        assert_eq!(transport.paths(), vec!["/register", "/login"]);
        assert_eq!(store.token().as_deref(), Some("user-tok"));
    }

    #[tokio::test]
    async fn test_register_rejection_is_verbatim() {
        let transport = ScriptedTransport::new().on(
            Method::Post,
            "/register",
            400,
            r#"{"detail": "Email already registered"}"#,
        );
        let store = UserSessionStore::new(api(&transport), MemoryTokenStorage::new());

        let err = store.register("Ada", "ada@x.io", "pw").await.unwrap_err();
        assert_eq!(err.user_message(), "Email already registered");
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_fetch_requires_session() {
        let transport = ScriptedTransport::new();
        let store = UserSessionStore::new(api(&transport), MemoryTokenStorage::new());

        let err = store
            .fetch::<serde_json::Value>(Endpoint::Dashboard, None)
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Unauthenticated);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_back_to_login_ends_admin_session() {
        let transport = ScriptedTransport::new().on(Method::Post, "/admin/login", 200, ADMIN_GRANT);
        let storage = MemoryTokenStorage::new();
        let admin = AdminSessionStore::new(api(&transport), storage.clone());
        admin.login("root@x.io", "pw").await.unwrap();

        let mut nav = Navigator::new(Page::AdminLogin);
        nav.sync(AuthFlags::new(false, admin.is_authenticated()));
        assert_eq!(nav.page(), Page::Admin);

        nav.back_to_login(admin.is_authenticated(), || admin.logout());

        assert_eq!(nav.page(), Page::Login);
        assert!(!admin.is_authenticated());
        assert_eq!(storage.get("adminToken"), None);
    }

    #[tokio::test]
    async fn test_back_to_login_with_persisted_token_stays_local() {
        let transport = ScriptedTransport::new().unreachable(Method::Get, "/admin/me");
        let storage = MemoryTokenStorage::new();
        storage.save("adminToken", "admin-tok").unwrap();
        let admin = AdminSessionStore::new(api(&transport), storage.clone());

        let mut nav = Navigator::new(Page::Admin);
        nav.back_to_login(admin.token().is_some(), || admin.logout());

        assert_eq!(nav.page(), Page::Login);
        assert_eq!(admin.token(), None);
        assert_eq!(storage.get("adminToken"), None);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_realms_are_independent() {
        let transport = ScriptedTransport::new()
            .on(Method::Post, "/login", 200, USER_GRANT)
            .on(Method::Post, "/admin/login", 200, ADMIN_GRANT);
        let storage = MemoryTokenStorage::new();
        let client = api(&transport);
        let user = UserSessionStore::new(Rc::clone(&client), storage.clone());
        let admin = AdminSessionStore::new(client, storage.clone());

        user.login("ada@x.io", "pw").await.unwrap();
        admin.login("root@x.io", "pw").await.unwrap();
        admin.logout();

        assert!(user.is_authenticated());
        assert_eq!(storage.get("token").as_deref(), Some("user-tok"));
        assert_eq!(storage.get("adminToken"), None);
    }
}
