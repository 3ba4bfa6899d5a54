//! HTTP API Client
//!
//! Thin wrappers over the remote REST API. Each call makes exactly one
//! request through the configured [`Transport`]; there is no retry, caching
//! or request coalescing.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::dto::{
    ActivityList, AdminDashboard, AuthGrant, LoginRequest, RegisterReply, RegisterRequest,
    UserDashboard, UserProfile,
};
use super::endpoint::Endpoint;
use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, Method, Transport};
use crate::dashboard::ActivityQuery;
use crate::session::Realm;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// REST API client
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client; a trailing slash on the base URL is ignored
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for an endpoint
    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Send one request and decode the JSON answer.
    ///
    /// An empty success body decodes as JSON `null`.
    pub async fn call<R: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        bearer: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> ApiResult<R> {
        let request = ApiRequest {
            method: endpoint.method(),
            url: self.url(&endpoint),
            bearer: bearer.map(str::to_string),
            body,
        };

        tracing::debug!(method = %request.method, url = %request.url, "api request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| ApiError::Network(e.0))?;

        if !response.is_success() {
            let err = ApiError::rejected(response.status, &response.body);
            tracing::debug!(status = response.status, error = %err, "api request rejected");
            return Err(err);
        }

        let text = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };

        serde_json::from_str(text).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// Authenticated request with an optional JSON body
    pub async fn authorized<R: DeserializeOwned>(
        &self,
        token: &str,
        endpoint: Endpoint,
        body: Option<serde_json::Value>,
    ) -> ApiResult<R> {
        self.call(endpoint, Some(token), body).await
    }

    /// Generic authenticated request against any learner-side route
    pub async fn authenticated_request(
        &self,
        token: &str,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<serde_json::Value> {
        let endpoint = Endpoint::Custom {
            method,
            path: path.to_string(),
        };
        self.authorized(token, endpoint, body).await
    }

    // ============ Authentication ============

    /// Exchange credentials for a bearer token in the given realm
    pub async fn sign_in<R: Realm>(
        &self,
        email: &str,
        password: &str,
    ) -> ApiResult<AuthGrant<R::Identity>> {
        let body = json_body(&LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })?;
        self.call(R::login_endpoint(), None, Some(body)).await
    }

    /// Fetch the identity behind a bearer token in the given realm
    pub async fn identity<R: Realm>(&self, token: &str) -> ApiResult<R::Identity> {
        self.authorized(token, R::identity_endpoint(), None).await
    }

    /// Create a learner account
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> ApiResult<RegisterReply<UserProfile>> {
        let body = json_body(&RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;
        self.call(Endpoint::Register, None, Some(body)).await
    }

    // ============ Dashboards ============

    pub async fn user_dashboard(&self, token: &str) -> ApiResult<UserDashboard> {
        self.authorized(token, Endpoint::Dashboard, None).await
    }

    pub async fn admin_dashboard(&self, token: &str) -> ApiResult<AdminDashboard> {
        self.authorized(token, Endpoint::AdminDashboard, None).await
    }

    /// Activity feed for the admin activity monitor
    pub async fn activities(&self, token: &str, query: &ActivityQuery) -> ApiResult<ActivityList> {
        self.authorized(token, Endpoint::Activities(query.params()), None)
            .await
    }
}

/// Serialize a request body
pub(crate) fn json_body<B: Serialize>(body: &B) -> ApiResult<serde_json::Value> {
    serde_json::to_value(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::dashboard::{ActivityFilter, TimeWindow};
    use crate::session::{AdminRealm, UserRealm};

    fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
        ApiClient::new(transport.clone(), "http://api.test/")
    }

    #[tokio::test]
    async fn test_sign_in_posts_credentials() {
        let transport = ScriptedTransport::new().on(
            Method::Post,
            "/login",
            200,
            r#"{"access_token": "abc", "user": {"id": 1, "name": "Ada", "email": "ada@x.io"}}"#,
        );
        let api = client(&transport);

        let grant = api.sign_in::<UserRealm>("ada@x.io", "pw").await.unwrap();
        assert_eq!(grant.access_token, "abc");
        assert_eq!(grant.identity.name, "Ada");

        let sent = transport.requests();
        assert_eq!(sent[0].url, "http://api.test/login");
        assert_eq!(sent[0].bearer, None);
        assert_eq!(
            sent[0].body,
            Some(serde_json::json!({"email": "ada@x.io", "password": "pw"}))
        );
    }

    #[tokio::test]
    async fn test_rejection_surfaces_detail() {
        let transport = ScriptedTransport::new().on(
            Method::Post,
            "/admin/login",
            401,
            r#"{"detail": "Invalid admin credentials"}"#,
        );
        let err = client(&transport)
            .sign_in::<AdminRealm>("root@x.io", "nope")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(err.user_message(), "Invalid admin credentials");
    }

    #[tokio::test]
    async fn test_network_failure() {
        let transport = ScriptedTransport::new().unreachable(Method::Get, "/dashboard");
        let err = client(&transport).user_dashboard("tok").await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert_eq!(err.user_message(), "Network error");
    }

    #[tokio::test]
    async fn test_malformed_payload() {
        let transport = ScriptedTransport::new().on(Method::Get, "/admin/dashboard", 200, "[1, 2");
        let err = client(&transport).admin_dashboard("tok").await.unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[tokio::test]
    async fn test_activities_sends_filters_and_bearer() {
        let transport = ScriptedTransport::new().on(
            Method::Get,
            "/admin/activities",
            200,
            r#"{"activities": [{"type": "login"}]}"#,
        );
        let query = ActivityQuery::new(ActivityFilter::Security, TimeWindow::Week);

        let list = client(&transport).activities("admintok", &query).await.unwrap();
        assert_eq!(list.activities.len(), 1);

        let sent = transport.requests();
        assert_eq!(
            sent[0].url,
            "http://api.test/admin/activities?filter=security&time_range=7d"
        );
        assert_eq!(sent[0].bearer.as_deref(), Some("admintok"));
    }

    #[tokio::test]
    async fn test_empty_body_decodes_as_null() {
        let transport = ScriptedTransport::new().on(Method::Put, "/profile", 204, "");
        let value = client(&transport)
            .authenticated_request("tok", Method::Put, "/profile", None)
            .await
            .unwrap();
        assert!(value.is_null());
    }
}
