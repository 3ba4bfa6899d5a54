//! API endpoints
//!
//! Every route the front end calls, with its method and path. Query strings
//! are URL-encoded here so callers only deal with key/value pairs.

use super::dto::EntityId;
use super::transport::Method;

/// Query parameters as ordered key/value pairs
pub type Params = Vec<(String, String)>;

/// Default window for activity statistics
pub const DEFAULT_STATS_RANGE: &str = "24h";

/// Default period for growth and engagement statistics
pub const DEFAULT_STATS_PERIOD: &str = "30d";

/// Routes of the remote API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    // Learner
    Login,
    Register,
    Me,
    Dashboard,

    // Admin authentication
    AdminLogin,
    AdminMe,
    AdminDashboard,

    // User management
    Users(Params),
    UserDetails(EntityId),
    UpdateUser(EntityId),
    DeleteUser(EntityId),
    ActivateUser(EntityId),
    DeactivateUser(EntityId),
    UserActivities(EntityId, Params),

    // Activity monitoring
    Activities(Params),
    ActivityStats { time_range: String },
    ExportActivities(Params),

    // System statistics
    SystemStats,
    UserGrowth { period: String },
    Engagement { period: String },
    Performance,

    // Content management
    Posts(Params),
    UpdatePost(EntityId),
    DeletePost(EntityId),
    FlagPost(EntityId),

    // Settings
    Settings,
    UpdateSettings,
    SystemHealth,
    ClearCache,

    // Notifications
    Broadcast,
    NotifyUser(EntityId),
    NotificationHistory(Params),

    /// Any other learner-side route, for the generic authenticated request
    Custom { method: Method, path: String },
}

impl Endpoint {
    pub fn method(&self) -> Method {
        use Endpoint::*;
        match self {
            Login | Register | AdminLogin => Method::Post,
            ActivateUser(_) | DeactivateUser(_) | FlagPost(_) => Method::Post,
            ClearCache | Broadcast | NotifyUser(_) => Method::Post,
            UpdateUser(_) | UpdatePost(_) | UpdateSettings => Method::Put,
            DeleteUser(_) | DeletePost(_) => Method::Delete,
            Custom { method, .. } => *method,
            _ => Method::Get,
        }
    }

    /// Path relative to the API base, including any query string
    pub fn path(&self) -> String {
        use Endpoint::*;
        match self {
            Login => "/login".to_string(),
            Register => "/register".to_string(),
            Me => "/me".to_string(),
            Dashboard => "/dashboard".to_string(),

            AdminLogin => "/admin/login".to_string(),
            AdminMe => "/admin/me".to_string(),
            AdminDashboard => "/admin/dashboard".to_string(),

            Users(params) => with_query("/admin/users", params),
            UserDetails(id) | UpdateUser(id) | DeleteUser(id) => {
                format!("/admin/users/{}", segment(id))
            }
            ActivateUser(id) => format!("/admin/users/{}/activate", segment(id)),
            DeactivateUser(id) => format!("/admin/users/{}/deactivate", segment(id)),
            UserActivities(id, params) => {
                with_query(&format!("/admin/users/{}/activities", segment(id)), params)
            }

            Activities(params) => with_query("/admin/activities", params),
            ActivityStats { time_range } => {
                with_query("/admin/activities/stats", &pair("time_range", time_range))
            }
            ExportActivities(params) => with_query("/admin/activities/export", params),

            SystemStats => "/admin/stats".to_string(),
            UserGrowth { period } => with_query("/admin/stats/user-growth", &pair("period", period)),
            Engagement { period } => with_query("/admin/stats/engagement", &pair("period", period)),
            Performance => "/admin/stats/performance".to_string(),

            Posts(params) => with_query("/admin/posts", params),
            UpdatePost(id) | DeletePost(id) => format!("/admin/posts/{}", segment(id)),
            FlagPost(id) => format!("/admin/posts/{}/flag", segment(id)),

            Settings | UpdateSettings => "/admin/settings".to_string(),
            SystemHealth => "/admin/health".to_string(),
            ClearCache => "/admin/cache/clear".to_string(),

            Broadcast => "/admin/notifications/broadcast".to_string(),
            NotifyUser(id) => format!("/admin/notifications/user/{}", segment(id)),
            NotificationHistory(params) => with_query("/admin/notifications/history", params),

            Custom { path, .. } => {
                if path.starts_with('/') {
                    path.clone()
                } else {
                    format!("/{}", path)
                }
            }
        }
    }
}

fn segment(id: &EntityId) -> String {
    urlencoding::encode(&id.to_string()).into_owned()
}

fn pair(key: &str, value: &str) -> Params {
    vec![(key.to_string(), value.to_string())]
}

/// Append URL-encoded parameters to a path
pub fn with_query(path: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query: Vec<String> = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect();

    format!("{}?{}", path, query.join("&"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_routes() {
        assert_eq!(Endpoint::Login.path(), "/login");
        assert_eq!(Endpoint::Login.method(), Method::Post);
        assert_eq!(Endpoint::AdminMe.path(), "/admin/me");
        assert_eq!(Endpoint::AdminMe.method(), Method::Get);
    }

    #[test]
    fn test_user_management_routes() {
        let id = EntityId::from(7);
        assert_eq!(Endpoint::ActivateUser(id.clone()).path(), "/admin/users/7/activate");
        assert_eq!(Endpoint::DeleteUser(id.clone()).method(), Method::Delete);
        assert_eq!(Endpoint::UpdateUser(id.clone()).method(), Method::Put);
        assert_eq!(
            Endpoint::UserActivities(id, vec![("limit".into(), "5".into())]).path(),
            "/admin/users/7/activities?limit=5"
        );
    }

    #[test]
    fn test_query_encoding() {
        let params = vec![
            ("search".to_string(), "ada lovelace".to_string()),
            ("page".to_string(), "2".to_string()),
        ];
        assert_eq!(
            Endpoint::Users(params).path(),
            "/admin/users?search=ada%20lovelace&page=2"
        );
        assert_eq!(Endpoint::Users(Vec::new()).path(), "/admin/users");
    }

    #[test]
    fn test_statistics_routes() {
        let stats = Endpoint::ActivityStats {
            time_range: DEFAULT_STATS_RANGE.to_string(),
        };
        assert_eq!(stats.path(), "/admin/activities/stats?time_range=24h");

        let growth = Endpoint::UserGrowth {
            period: DEFAULT_STATS_PERIOD.to_string(),
        };
        assert_eq!(growth.path(), "/admin/stats/user-growth?period=30d");
    }

    #[test]
    fn test_text_ids_are_escaped() {
        let id = EntityId::Text("a/b".to_string());
        assert_eq!(Endpoint::FlagPost(id).path(), "/admin/posts/a%2Fb/flag");
    }

    #[test]
    fn test_custom_route() {
        let endpoint = Endpoint::Custom {
            method: Method::Put,
            path: "profile".to_string(),
        };
        assert_eq!(endpoint.path(), "/profile");
        assert_eq!(endpoint.method(), Method::Put);
    }
}
