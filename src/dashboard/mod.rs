//! Dashboard view models
//!
//! Presentation-ready data derived from server payloads: stat cards, the
//! activity monitor, the user table and the learner study area. Nothing
//! here renders; the browser front end and the terminal client both draw
//! from these.

mod activity;
mod stats;
mod study;
mod tabs;
mod users;

pub use activity::{
    format_timestamp, local_date, preview_user_agent, ActivityEntry, ActivityFeed, ActivityFilter,
    ActivityKind, ActivityQuery, ActivitySummary, TimeWindow, UnknownOption, FEED_LIMIT,
    UNKNOWN, UNKNOWN_USER, USER_AGENT_PREVIEW,
};
pub use stats::{
    admin_overview, format_count, identity_banner, progress_cards, EventTone, StatCard,
    NO_RECENT_ACTIVITY,
};
pub use study::{CopyFeedback, StudyView, COPIED_LABEL, COPY_FEEDBACK_MS, COPY_LABEL};
pub use tabs::AdminTab;
pub use users::{apply, perform_and_apply, UserAction, UserRow};

/// Inline error shown when a dashboard payload cannot be fetched
pub const DASHBOARD_FETCH_FAILED: &str = "Failed to fetch dashboard data";

/// Inline error shown when the activity feed cannot be fetched
pub const ACTIVITIES_FETCH_FAILED: &str = "Failed to fetch activities";

/// Inline message for a failed dashboard fetch.
///
/// Network failures keep their own message; anything else gets `context`.
pub fn fetch_error(err: &crate::api::ApiError, context: &str) -> String {
    match err {
        crate::api::ApiError::Network(_) => err.user_message(),
        _ => context.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;

    #[test]
    fn test_fetch_error_messages() {
        let network = ApiError::Network("refused".into());
        assert_eq!(fetch_error(&network, DASHBOARD_FETCH_FAILED), "Network error");

        let rejected = ApiError::rejected(500, "");
        assert_eq!(
            fetch_error(&rejected, ACTIVITIES_FETCH_FAILED),
            "Failed to fetch activities"
        );
    }
}
