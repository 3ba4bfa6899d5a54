//! Admin API
//!
//! Uniform wrappers for the admin back office. Every call carries the admin
//! bearer token. Payloads the front end never inspects stay as raw JSON.

use serde_json::Value;

use super::client::{json_body, ApiClient};
use super::dto::{EntityId, FlagRequest, ManagedUser, UserList};
use super::endpoint::{Endpoint, Params};
use super::error::ApiResult;
use super::transport::Transport;

impl<T: Transport> ApiClient<T> {
    // ============ Users ============

    pub async fn users(&self, token: &str, params: Params) -> ApiResult<UserList> {
        self.authorized(token, Endpoint::Users(params), None).await
    }

    pub async fn user(&self, token: &str, id: &EntityId) -> ApiResult<ManagedUser> {
        self.authorized(token, Endpoint::UserDetails(id.clone()), None)
            .await
    }

    pub async fn update_user(&self, token: &str, id: &EntityId, changes: Value) -> ApiResult<Value> {
        self.authorized(token, Endpoint::UpdateUser(id.clone()), Some(changes))
            .await
    }

    pub async fn delete_user(&self, token: &str, id: &EntityId) -> ApiResult<Value> {
        self.authorized(token, Endpoint::DeleteUser(id.clone()), None)
            .await
    }

    pub async fn activate_user(&self, token: &str, id: &EntityId) -> ApiResult<Value> {
        self.authorized(token, Endpoint::ActivateUser(id.clone()), None)
            .await
    }

    pub async fn deactivate_user(&self, token: &str, id: &EntityId) -> ApiResult<Value> {
        self.authorized(token, Endpoint::DeactivateUser(id.clone()), None)
            .await
    }

    pub async fn user_activities(
        &self,
        token: &str,
        id: &EntityId,
        params: Params,
    ) -> ApiResult<Value> {
        self.authorized(token, Endpoint::UserActivities(id.clone(), params), None)
            .await
    }

    // ============ Activity ============

    pub async fn activity_stats(&self, token: &str, time_range: &str) -> ApiResult<Value> {
        let endpoint = Endpoint::ActivityStats {
            time_range: time_range.to_string(),
        };
        self.authorized(token, endpoint, None).await
    }

    pub async fn export_activities(&self, token: &str, params: Params) -> ApiResult<Value> {
        self.authorized(token, Endpoint::ExportActivities(params), None)
            .await
    }

    // ============ Statistics ============

    pub async fn system_stats(&self, token: &str) -> ApiResult<Value> {
        self.authorized(token, Endpoint::SystemStats, None).await
    }

    pub async fn user_growth(&self, token: &str, period: &str) -> ApiResult<Value> {
        let endpoint = Endpoint::UserGrowth {
            period: period.to_string(),
        };
        self.authorized(token, endpoint, None).await
    }

    pub async fn engagement(&self, token: &str, period: &str) -> ApiResult<Value> {
        let endpoint = Endpoint::Engagement {
            period: period.to_string(),
        };
        self.authorized(token, endpoint, None).await
    }

    pub async fn performance(&self, token: &str) -> ApiResult<Value> {
        self.authorized(token, Endpoint::Performance, None).await
    }

    // ============ Content ============

    pub async fn posts(&self, token: &str, params: Params) -> ApiResult<Value> {
        self.authorized(token, Endpoint::Posts(params), None).await
    }

    pub async fn update_post(&self, token: &str, id: &EntityId, changes: Value) -> ApiResult<Value> {
        self.authorized(token, Endpoint::UpdatePost(id.clone()), Some(changes))
            .await
    }

    pub async fn delete_post(&self, token: &str, id: &EntityId) -> ApiResult<Value> {
        self.authorized(token, Endpoint::DeletePost(id.clone()), None)
            .await
    }

    pub async fn flag_post(&self, token: &str, id: &EntityId, reason: &str) -> ApiResult<Value> {
        let body = json_body(&FlagRequest {
            reason: reason.to_string(),
        })?;
        self.authorized(token, Endpoint::FlagPost(id.clone()), Some(body))
            .await
    }

    // ============ Settings ============

    pub async fn settings(&self, token: &str) -> ApiResult<Value> {
        self.authorized(token, Endpoint::Settings, None).await
    }

    pub async fn update_settings(&self, token: &str, settings: Value) -> ApiResult<Value> {
        self.authorized(token, Endpoint::UpdateSettings, Some(settings))
            .await
    }

    pub async fn system_health(&self, token: &str) -> ApiResult<Value> {
        self.authorized(token, Endpoint::SystemHealth, None).await
    }

    pub async fn clear_cache(&self, token: &str) -> ApiResult<Value> {
        self.authorized(token, Endpoint::ClearCache, None).await
    }

    // ============ Notifications ============

    pub async fn broadcast(&self, token: &str, message: Value) -> ApiResult<Value> {
        self.authorized(token, Endpoint::Broadcast, Some(message))
            .await
    }

    pub async fn notify_user(&self, token: &str, id: &EntityId, message: Value) -> ApiResult<Value> {
        self.authorized(token, Endpoint::NotifyUser(id.clone()), Some(message))
            .await
    }

    pub async fn notification_history(&self, token: &str, params: Params) -> ApiResult<Value> {
        self.authorized(token, Endpoint::NotificationHistory(params), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::api::transport::Method;
    use serde_json::json;

    fn client(transport: &ScriptedTransport) -> ApiClient<ScriptedTransport> {
        ApiClient::new(transport.clone(), "http://api.test")
    }

    #[tokio::test]
    async fn test_user_lifecycle_routes() {
        let transport = ScriptedTransport::new()
            .on(Method::Post, "/admin/users/9/deactivate", 200, r#"{"ok": true}"#)
            .on(Method::Post, "/admin/users/9/activate", 200, r#"{"ok": true}"#)
            .on(Method::Delete, "/admin/users/9", 200, "{}");
        let api = client(&transport);
        let id = EntityId::from(9);

        api.deactivate_user("t", &id).await.unwrap();
        api.activate_user("t", &id).await.unwrap();
        api.delete_user("t", &id).await.unwrap();

        assert_eq!(
            transport.paths(),
            vec![
                "/admin/users/9/deactivate",
                "/admin/users/9/activate",
                "/admin/users/9"
            ]
        );
        assert!(transport
            .requests()
            .iter()
            .all(|r| r.bearer.as_deref() == Some("t")));
    }

    #[tokio::test]
    async fn test_users_accepts_bare_list() {
        let transport = ScriptedTransport::new().on(
            Method::Get,
            "/admin/users",
            200,
            r#"[{"id": 1, "name": "Ada", "email": "ada@x.io"}]"#,
        );
        let list = client(&transport)
            .users("t", vec![("page".into(), "1".into())])
            .await
            .unwrap();
        assert_eq!(list.users[0].name, "Ada");
        assert_eq!(transport.paths(), vec!["/admin/users?page=1"]);
    }

    #[tokio::test]
    async fn test_flag_post_sends_reason() {
        let transport =
            ScriptedTransport::new().on(Method::Post, "/admin/posts/3/flag", 200, "{}");
        client(&transport)
            .flag_post("t", &EntityId::from(3), "spam")
            .await
            .unwrap();
        assert_eq!(transport.requests()[0].body, Some(json!({"reason": "spam"})));
    }

    #[tokio::test]
    async fn test_broadcast_failure_is_verbatim() {
        let transport = ScriptedTransport::new().on(
            Method::Post,
            "/admin/notifications/broadcast",
            422,
            r#"{"detail": "Message must not be empty"}"#,
        );
        let err = client(&transport)
            .broadcast("t", json!({"message": ""}))
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "Message must not be empty");
    }

    #[tokio::test]
    async fn test_unscripted_route_is_rejected() {
        let transport = ScriptedTransport::new();
        let err = client(&transport).system_health("t").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.user_message(), "Not Found");
    }
}
