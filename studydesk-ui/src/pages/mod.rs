//! Pages
//!
//! Top-level page components, one per view.

pub mod admin_dashboard;
pub mod admin_login;
pub mod dashboard;
pub mod login;
pub mod register;

pub use admin_dashboard::AdminDashboard;
pub use admin_login::AdminLogin;
pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;
