//! Stat cards and overview lists

use crate::api::{AdminDashboard, Progress, SystemEvent, UserDashboard};

/// Shown when the overview has no recent events
pub const NO_RECENT_ACTIVITY: &str = "No recent activity available";

/// A single counter tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: u64,
    pub icon: &'static str,
    /// Background colour class of the icon badge
    pub accent: &'static str,
}

impl StatCard {
    const fn new(label: &'static str, value: u64, icon: &'static str, accent: &'static str) -> Self {
        Self {
            label,
            value,
            icon,
            accent,
        }
    }

    /// Value with thousands separators
    pub fn display_value(&self) -> String {
        format_count(self.value)
    }
}

/// The four admin overview tiles
pub fn admin_overview(data: &AdminDashboard) -> [StatCard; 4] {
    [
        StatCard::new("Total Users", data.total_users, "👥", "bg-blue-500"),
        StatCard::new("Active Users", data.active_users, "🟢", "bg-green-500"),
        StatCard::new("Total Posts", data.total_posts, "📝", "bg-purple-500"),
        StatCard::new("Total Views", data.total_views, "👁️", "bg-yellow-500"),
    ]
}

/// Learner progress tiles, only when the server sent progress data
pub fn progress_cards(data: &UserDashboard) -> Option<[StatCard; 3]> {
    data.dashboard_data.as_ref().map(progress_tiles)
}

fn progress_tiles(progress: &Progress) -> [StatCard; 3] {
    [
        StatCard::new("Total Posts", progress.total_posts, "📝", "bg-blue-500"),
        StatCard::new("Total Views", progress.total_views, "👁️", "bg-green-500"),
        StatCard::new("Total Likes", progress.total_likes, "❤️", "bg-red-500"),
    ]
}

/// Banner line identifying the signed-in learner
pub fn identity_banner(data: &UserDashboard) -> String {
    match &data.user_id {
        Some(id) => format!("{} (User ID: {})", data.user_email, id),
        None => data.user_email.clone(),
    }
}

/// Colour of a recent-activity marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTone {
    Signup,
    Login,
    Neutral,
}

impl EventTone {
    pub fn of(event: &SystemEvent) -> Self {
        match event.kind.as_str() {
            "user_signup" => EventTone::Signup,
            "user_login" => EventTone::Login,
            _ => EventTone::Neutral,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            EventTone::Signup => "bg-green-500",
            EventTone::Login => "bg-blue-500",
            EventTone::Neutral => "bg-gray-500",
        }
    }
}

/// Group digits in threes: `12345` becomes `12,345`
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_overview_defaults_to_zero() {
        let data: AdminDashboard = serde_json::from_str(r#"{"total_users": 1500}"#).unwrap();
        let cards = admin_overview(&data);
        assert_eq!(cards[0].label, "Total Users");
        assert_eq!(cards[0].display_value(), "1,500");
        assert!(cards[1..].iter().all(|c| c.value == 0));
    }

    #[test]
    fn test_progress_only_with_data() {
        let bare: UserDashboard = serde_json::from_str(r#"{"user_email": "a@x.io"}"#).unwrap();
        assert!(progress_cards(&bare).is_none());
        assert_eq!(identity_banner(&bare), "a@x.io");

        let full: UserDashboard = serde_json::from_str(
            r#"{"user_email": "a@x.io", "user_id": 3, "dashboard_data": {"total_likes": "7"}}"#,
        )
        .unwrap();
        let cards = progress_cards(&full).unwrap();
        assert_eq!(cards[2].value, 7);
        assert_eq!(identity_banner(&full), "a@x.io (User ID: 3)");
    }

    #[test]
    fn test_event_tone() {
        let event = |kind: &str| SystemEvent {
            kind: kind.to_string(),
            ..Default::default()
        };
        assert_eq!(EventTone::of(&event("user_signup")), EventTone::Signup);
        assert_eq!(EventTone::of(&event("user_login")).class(), "bg-blue-500");
        assert_eq!(EventTone::of(&event("backup")), EventTone::Neutral);
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
