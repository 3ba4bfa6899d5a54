//! UI Components
//!
//! Reusable Leptos components for the learner and admin dashboards.

pub mod activity_monitor;
pub mod error_banner;
pub mod form;
pub mod loading;
pub mod nav;
pub mod stat_card;
pub mod study;
pub mod toast;
pub mod user_table;

pub use activity_monitor::ActivityMonitor;
pub use error_banner::ErrorBanner;
pub use form::{FormError, TextField};
pub use loading::{CardSkeleton, InlineLoading, ListSkeleton, Loading};
pub use nav::NavShortcuts;
pub use stat_card::StatCardView;
pub use study::StudyArea;
pub use toast::Toast;
pub use user_table::UserTable;
