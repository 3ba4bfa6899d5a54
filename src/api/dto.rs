//! Data Transfer Objects
//!
//! Request and response payloads for the remote API. Server payloads are
//! loosely typed, so every record defaults at this boundary: missing or
//! `null` counters become zero, missing lists become empty and ids may be
//! numbers or strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================
// Lenient field helpers
// ============================================

/// Treat `null` like a missing field
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Counters arrive as integers, floats, numeric strings or `null`
fn lenient_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Free text that may arrive as a number or `null`
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

// ============================================
// Identity
// ============================================

/// Record identifier, numeric or textual depending on the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{}", n),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        value
            .parse::<i64>()
            .map(EntityId::Number)
            .unwrap_or_else(|_| EntityId::Text(value.to_string()))
    }
}

/// Signed-in learner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Signed-in administrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminProfile {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

// ============================================
// Authentication
// ============================================

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Successful sign-in: bearer token plus identity.
///
/// User logins answer with `user`, admin logins with `admin`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthGrant<I> {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(rename = "user", alias = "admin")]
    pub identity: I,
}

/// Registration answer. Some backends sign the new user in directly, others
/// only echo the created account.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegisterReply<I> {
    #[serde(default)]
    pub access_token: Option<String>,
    pub user: Option<I>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<I> RegisterReply<I> {
    /// Convert into a grant when the reply carries both token and identity
    pub fn into_grant(self) -> Option<AuthGrant<I>> {
        match (self.access_token, self.user) {
            (Some(access_token), Some(identity)) => Some(AuthGrant {
                access_token,
                token_type: None,
                identity,
            }),
            _ => None,
        }
    }
}

// ============================================
// Dashboards
// ============================================

/// Learner dashboard payload (`GET /dashboard`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDashboard {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub user_email: String,
    #[serde(default)]
    pub user_id: Option<EntityId>,
    #[serde(default)]
    pub dashboard_data: Option<Progress>,
}

/// Learner progress counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_posts: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_views: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_likes: u64,
}

/// Admin dashboard payload (`GET /admin/dashboard`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboard {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_users: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub active_users: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_posts: u64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_views: u64,
    #[serde(default, deserialize_with = "null_default")]
    pub recent_system_activity: Vec<SystemEvent>,
}

/// Entry in the admin overview's recent activity list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemEvent {
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub time: String,
}

// ============================================
// Activity monitoring
// ============================================

/// Activity feed payload (`GET /admin/activities`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityList {
    #[serde(default, deserialize_with = "null_default")]
    pub activities: Vec<Activity>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// A single user activity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "type", default, deserialize_with = "lenient_text")]
    pub kind: String,
    #[serde(default)]
    pub user_id: Option<EntityId>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

// ============================================
// User management
// ============================================

/// Account as listed in the admin user table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedUser {
    #[serde(default)]
    pub id: Option<EntityId>,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub email: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
}

fn default_active() -> bool {
    true
}

/// User list payload (`GET /admin/users`)
///
/// Accepts either `{"users": [...], "total": n}` or a bare array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "UserListWire")]
pub struct UserList {
    pub users: Vec<ManagedUser>,
    pub total: Option<u64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum UserListWire {
    Wrapped {
        #[serde(default, deserialize_with = "null_default")]
        users: Vec<ManagedUser>,
        #[serde(default)]
        total: Option<u64>,
    },
    Bare(Vec<ManagedUser>),
}

impl From<UserListWire> for UserList {
    fn from(wire: UserListWire) -> Self {
        match wire {
            UserListWire::Wrapped { users, total } => Self { users, total },
            UserListWire::Bare(users) => Self { users, total: None },
        }
    }
}

/// Body for `POST /admin/posts/{id}/flag`
#[derive(Debug, Clone, Serialize)]
pub struct FlagRequest {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_dashboard_defaults() {
        let dash: AdminDashboard = serde_json::from_str(
            r#"{"total_users": 12, "active_users": null, "total_posts": 3.0}"#,
        )
        .unwrap();

        assert_eq!(dash.total_users, 12);
        assert_eq!(dash.active_users, 0);
        assert_eq!(dash.total_posts, 3);
        assert_eq!(dash.total_views, 0);
        assert!(dash.recent_system_activity.is_empty());
    }

    #[test]
    fn test_user_dashboard_without_progress() {
        let dash: UserDashboard =
            serde_json::from_str(r#"{"user_email": "ada@example.com", "user_id": 7}"#).unwrap();
        assert_eq!(dash.user_email, "ada@example.com");
        assert_eq!(dash.user_id, Some(EntityId::Number(7)));
        assert!(dash.dashboard_data.is_none());
    }

    #[test]
    fn test_grant_accepts_user_and_admin_keys() {
        let user: AuthGrant<UserProfile> = serde_json::from_str(
            r#"{"access_token": "t1", "token_type": "bearer", "user": {"id": 1, "name": "Ada", "email": "a@x.io"}}"#,
        )
        .unwrap();
        assert_eq!(user.identity.name, "Ada");

        let admin: AuthGrant<AdminProfile> = serde_json::from_str(
            r#"{"access_token": "t2", "admin": {"id": "root", "name": "Root", "email": "r@x.io"}}"#,
        )
        .unwrap();
        assert_eq!(admin.identity.id, Some(EntityId::Text("root".into())));
        assert_eq!(admin.access_token, "t2");
    }

    #[test]
    fn test_register_reply_into_grant() {
        let reply: RegisterReply<UserProfile> =
            serde_json::from_str(r#"{"message": "created", "user": {"name": "Ada"}}"#).unwrap();
        assert!(reply.into_grant().is_none());

        let reply: RegisterReply<UserProfile> = serde_json::from_str(
            r#"{"access_token": "t", "user": {"name": "Ada", "email": "a@x.io"}}"#,
        )
        .unwrap();
        assert_eq!(reply.into_grant().map(|g| g.access_token), Some("t".into()));
    }

    #[test]
    fn test_activity_tolerates_sparse_records() {
        let list: ActivityList = serde_json::from_str(
            r#"{"activities": [{"type": "login", "details": null}, {"description": 42}]}"#,
        )
        .unwrap();
        assert_eq!(list.activities.len(), 2);
        assert_eq!(list.activities[0].kind, "login");
        assert!(list.activities[0].details.is_none());
        assert_eq!(list.activities[1].kind, "");
        assert_eq!(list.activities[1].description, "42");
    }

    #[test]
    fn test_user_list_shapes() {
        let wrapped: UserList =
            serde_json::from_str(r#"{"users": [{"id": 1, "name": "A"}], "total": 10}"#).unwrap();
        assert_eq!(wrapped.users.len(), 1);
        assert_eq!(wrapped.total, Some(10));
        assert!(wrapped.users[0].is_active);

        let bare: UserList =
            serde_json::from_str(r#"[{"id": 2, "email": "b@x.io", "is_active": false}]"#).unwrap();
        assert_eq!(bare.users[0].email, "b@x.io");
        assert!(!bare.users[0].is_active);
        assert_eq!(bare.total, None);
    }

    #[test]
    fn test_entity_id_from_str() {
        assert_eq!(EntityId::from("42"), EntityId::Number(42));
        assert_eq!(EntityId::from("abc").to_string(), "abc");
    }
}
