//! Activity monitor view model
//!
//! Filters, summary counters and display rows for the admin activity feed.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::api::{Activity, Params};

/// Maximum number of entries rendered in the feed
pub const FEED_LIMIT: usize = 50;

/// Maximum user agent characters shown per entry
pub const USER_AGENT_PREVIEW: usize = 50;

pub const UNKNOWN_USER: &str = "Unknown User";
pub const UNKNOWN: &str = "Unknown";

/// Unrecognised filter or time window value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

// ============================================
// Activity kinds
// ============================================

/// Known activity types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Login,
    Logout,
    Register,
    PostCreate,
    PostView,
    PostLike,
    ProfileUpdate,
    PasswordChange,
    Other(String),
}

impl ActivityKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "login" => ActivityKind::Login,
            "logout" => ActivityKind::Logout,
            "register" => ActivityKind::Register,
            "post_create" => ActivityKind::PostCreate,
            "post_view" => ActivityKind::PostView,
            "post_like" => ActivityKind::PostLike,
            "profile_update" => ActivityKind::ProfileUpdate,
            "password_change" => ActivityKind::PasswordChange,
            other => ActivityKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityKind::Login => "login",
            ActivityKind::Logout => "logout",
            ActivityKind::Register => "register",
            ActivityKind::PostCreate => "post_create",
            ActivityKind::PostView => "post_view",
            ActivityKind::PostLike => "post_like",
            ActivityKind::ProfileUpdate => "profile_update",
            ActivityKind::PasswordChange => "password_change",
            ActivityKind::Other(raw) => raw,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::Login => "🔑",
            ActivityKind::Logout => "🚪",
            ActivityKind::Register => "👤",
            ActivityKind::PostCreate => "📝",
            ActivityKind::PostView => "👁️",
            ActivityKind::PostLike => "❤️",
            ActivityKind::ProfileUpdate => "✏️",
            ActivityKind::PasswordChange => "🔒",
            ActivityKind::Other(_) => "📊",
        }
    }

    /// Badge colour classes
    pub fn badge(&self) -> &'static str {
        match self {
            ActivityKind::Login => "bg-green-100 text-green-800",
            ActivityKind::Logout => "bg-gray-100 text-gray-800",
            ActivityKind::Register => "bg-blue-100 text-blue-800",
            ActivityKind::PostCreate => "bg-purple-100 text-purple-800",
            ActivityKind::PostView => "bg-yellow-100 text-yellow-800",
            ActivityKind::PostLike => "bg-red-100 text-red-800",
            ActivityKind::ProfileUpdate => "bg-indigo-100 text-indigo-800",
            ActivityKind::PasswordChange => "bg-orange-100 text-orange-800",
            ActivityKind::Other(_) => "bg-gray-100 text-gray-800",
        }
    }

    /// Upper-cased label with underscores as spaces
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ").to_uppercase()
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================
// Query options
// ============================================

/// Activity category filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityFilter {
    #[default]
    All,
    Login,
    Posts,
    Profile,
    Security,
}

impl ActivityFilter {
    pub const ALL: [ActivityFilter; 5] = [
        ActivityFilter::All,
        ActivityFilter::Login,
        ActivityFilter::Posts,
        ActivityFilter::Profile,
        ActivityFilter::Security,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityFilter::All => "all",
            ActivityFilter::Login => "login",
            ActivityFilter::Posts => "posts",
            ActivityFilter::Profile => "profile",
            ActivityFilter::Security => "security",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityFilter::All => "All Activities",
            ActivityFilter::Login => "Login Events",
            ActivityFilter::Posts => "Post Activities",
            ActivityFilter::Profile => "Profile Changes",
            ActivityFilter::Security => "Security Events",
        }
    }
}

impl FromStr for ActivityFilter {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "activity filter",
                value: s.to_string(),
            })
    }
}

/// Look-back window for the feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeWindow {
    #[serde(rename = "1h")]
    Hour,
    #[default]
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "all")]
    AllTime,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Hour,
        TimeWindow::Day,
        TimeWindow::Week,
        TimeWindow::Month,
        TimeWindow::AllTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "1h",
            TimeWindow::Day => "24h",
            TimeWindow::Week => "7d",
            TimeWindow::Month => "30d",
            TimeWindow::AllTime => "all",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeWindow::Hour => "Last Hour",
            TimeWindow::Day => "Last 24 Hours",
            TimeWindow::Week => "Last 7 Days",
            TimeWindow::Month => "Last 30 Days",
            TimeWindow::AllTime => "All Time",
        }
    }
}

impl FromStr for TimeWindow {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| UnknownOption {
                kind: "time window",
                value: s.to_string(),
            })
    }
}

/// Parameters of one activity feed request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    pub filter: ActivityFilter,
    pub window: TimeWindow,
}

impl ActivityQuery {
    pub fn new(filter: ActivityFilter, window: TimeWindow) -> Self {
        Self { filter, window }
    }

    pub fn params(&self) -> Params {
        vec![
            ("filter".to_string(), self.filter.as_str().to_string()),
            ("time_range".to_string(), self.window.as_str().to_string()),
        ]
    }
}

// ============================================
// Summary counters
// ============================================

/// Counters shown above the feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivitySummary {
    pub logins_today: usize,
    pub posts_created: usize,
    pub page_views: usize,
    pub active_users: usize,
}

impl ActivitySummary {
    /// Summarise a fetched feed. `today` is the viewer's local date.
    pub fn compute(activities: &[Activity], today: NaiveDate) -> Self {
        let mut summary = Self::default();
        let mut users = HashSet::new();

        for activity in activities {
            match ActivityKind::parse(&activity.kind) {
                ActivityKind::Login => {
                    let on_today = activity
                        .timestamp
                        .as_deref()
                        .and_then(local_date)
                        .is_some_and(|date| date == today);
                    if on_today {
                        summary.logins_today += 1;
                    }
                }
                ActivityKind::PostCreate => summary.posts_created += 1,
                ActivityKind::PostView => summary.page_views += 1,
                _ => {}
            }
            // Entries without a user id count as one anonymous user
            users.insert(activity.user_id.as_ref().map(ToString::to_string));
        }

        summary.active_users = users.len();
        summary
    }
}

/// Parse a timestamp into the viewer's local date.
///
/// Offset-qualified timestamps are converted to local time; naive ones are
/// taken as already local.
pub fn local_date(timestamp: &str) -> Option<NaiveDate> {
    parse_local(timestamp).map(|dt| dt.date())
}

fn parse_local(timestamp: &str) -> Option<NaiveDateTime> {
    let timestamp = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(timestamp, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

// ============================================
// Feed rows
// ============================================

/// One rendered feed entry
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub user: String,
    pub when: String,
    pub description: String,
    /// Pretty-printed details, when present
    pub details: Option<String>,
    pub ip_address: String,
    pub user_agent: String,
    pub location: Option<String>,
}

impl ActivityEntry {
    pub fn from_activity(activity: &Activity) -> Self {
        let details = activity
            .details
            .as_ref()
            .filter(|d| !d.is_null())
            .map(|d| serde_json::to_string_pretty(d).unwrap_or_else(|_| d.to_string()));

        Self {
            kind: ActivityKind::parse(&activity.kind),
            user: non_empty(activity.user_name.as_deref()).unwrap_or(UNKNOWN_USER).to_string(),
            when: activity
                .timestamp
                .as_deref()
                .map(format_timestamp)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            description: activity.description.clone(),
            details,
            ip_address: non_empty(activity.ip_address.as_deref()).unwrap_or(UNKNOWN).to_string(),
            user_agent: non_empty(activity.user_agent.as_deref())
                .map(preview_user_agent)
                .unwrap_or_else(|| UNKNOWN.to_string()),
            location: non_empty(activity.location.as_deref()).map(str::to_string),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// First [`USER_AGENT_PREVIEW`] characters of a user agent
pub fn preview_user_agent(agent: &str) -> String {
    agent.chars().take(USER_AGENT_PREVIEW).collect()
}

/// Local date and time for display; unparseable input is shown as-is
pub fn format_timestamp(timestamp: &str) -> String {
    parse_local(timestamp)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// The rendered feed: at most [`FEED_LIMIT`] rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityFeed {
    pub entries: Vec<ActivityEntry>,
    /// Number of activities received
    pub total: usize,
}

impl ActivityFeed {
    pub fn build(activities: &[Activity]) -> Self {
        Self {
            entries: activities
                .iter()
                .take(FEED_LIMIT)
                .map(ActivityEntry::from_activity)
                .collect(),
            total: activities.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// More activities arrived than are shown
    pub fn is_truncated(&self) -> bool {
        self.total > FEED_LIMIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EntityId;

    fn activity(kind: &str, user: i64, timestamp: &str) -> Activity {
        Activity {
            kind: kind.to_string(),
            user_id: Some(EntityId::from(user)),
            timestamp: Some(timestamp.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_kind_presentation() {
        let kind = ActivityKind::parse("password_change");
        assert_eq!(kind.icon(), "🔒");
        assert_eq!(kind.badge(), "bg-orange-100 text-orange-800");
        assert_eq!(kind.label(), "PASSWORD CHANGE");

        let other = ActivityKind::parse("comment_added");
        assert_eq!(other.icon(), "📊");
        assert_eq!(other.badge(), "bg-gray-100 text-gray-800");
        assert_eq!(other.label(), "COMMENT ADDED");
    }

    #[test]
    fn test_query_params() {
        let query = ActivityQuery::default();
        assert_eq!(query.window, TimeWindow::Day);
        assert_eq!(
            query.params(),
            vec![
                ("filter".to_string(), "all".to_string()),
                ("time_range".to_string(), "24h".to_string())
            ]
        );
        assert_eq!("30d".parse::<TimeWindow>().unwrap(), TimeWindow::Month);
        assert_eq!("security".parse::<ActivityFilter>().unwrap(), ActivityFilter::Security);
        assert!("weekly".parse::<TimeWindow>().is_err());
    }

    #[test]
    fn test_summary_counts() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let activities = vec![
            activity("login", 1, "2024-05-02T09:15:00"),
            activity("login", 2, "2024-05-01T23:59:00"),
            activity("post_create", 1, "2024-05-02T09:20:00"),
            activity("post_view", 3, "2024-05-02T09:21:00"),
            activity("post_view", 3, "2024-05-02T09:22:00"),
            activity("login", 4, "not a date"),
        ];

        let summary = ActivitySummary::compute(&activities, today);
        assert_eq!(summary.logins_today, 1);
        assert_eq!(summary.posts_created, 1);
        assert_eq!(summary.page_views, 2);
        assert_eq!(summary.active_users, 4);
    }

    #[test]
    fn test_entry_fallbacks() {
        let sparse = Activity {
            kind: "login".to_string(),
            ..Default::default()
        };
        let entry = ActivityEntry::from_activity(&sparse);
        assert_eq!(entry.user, "Unknown User");
        assert_eq!(entry.ip_address, "Unknown");
        assert_eq!(entry.user_agent, "Unknown");
        assert_eq!(entry.location, None);
        assert_eq!(entry.details, None);
    }

    #[test]
    fn test_user_agent_is_truncated() {
        let agent = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko)";
        let record = Activity {
            user_agent: Some(agent.to_string()),
            details: Some(serde_json::json!({"post_id": 4})),
            ..Default::default()
        };
        let entry = ActivityEntry::from_activity(&record);
        assert_eq!(entry.user_agent.chars().count(), USER_AGENT_PREVIEW);
        assert!(agent.starts_with(&entry.user_agent));
        assert!(entry.details.unwrap().contains("\"post_id\": 4"));
    }

    #[test]
    fn test_feed_is_capped() {
        let activities: Vec<Activity> = (0..60)
            .map(|i| activity("post_view", i, "2024-05-02T10:00:00"))
            .collect();
        let feed = ActivityFeed::build(&activities);
        assert_eq!(feed.entries.len(), FEED_LIMIT);
        assert_eq!(feed.total, 60);
        assert!(feed.is_truncated());

        let short = ActivityFeed::build(&activities[..FEED_LIMIT]);
        assert!(!short.is_truncated());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-05-02T09:15:00.123"), "2024-05-02 09:15:00");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
