//! View Routing
//!
//! Decides which page is displayed from the two session flags and the page
//! the user asked for. The reconciliation is a pure function evaluated on
//! every state change; [`Navigator`] keeps the requested page between
//! evaluations.

use std::fmt;
use std::str::FromStr;

/// Page identifiers understood by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Register,
    AdminLogin,
    Admin,
    Dashboard,
}

impl Page {
    /// Every page, in declaration order
    pub const ALL: [Page; 5] = [
        Page::Login,
        Page::Register,
        Page::AdminLogin,
        Page::Admin,
        Page::Dashboard,
    ];

    /// Stable identifier used on the command line and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Register => "register",
            Page::AdminLogin => "admin-login",
            Page::Admin => "admin",
            Page::Dashboard => "dashboard",
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::Login
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a page name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(Page::Login),
            "register" => Ok(Page::Register),
            "admin-login" | "admin_login" => Ok(Page::AdminLogin),
            "admin" => Ok(Page::Admin),
            "dashboard" => Ok(Page::Dashboard),
            other => Err(UnknownPage(other.to_string())),
        }
    }
}

/// Authentication flags of the two independent sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthFlags {
    pub user: bool,
    pub admin: bool,
}

impl AuthFlags {
    pub fn new(user: bool, admin: bool) -> Self {
        Self { user, admin }
    }

    /// Neither session is authenticated
    pub fn anonymous() -> Self {
        Self::default()
    }
}

/// Resolve the page to display.
///
/// Rules are evaluated in priority order; the first match wins. Admin
/// authentication always takes precedence over user authentication.
pub fn reconcile(page: Page, flags: AuthFlags) -> Page {
    if flags.admin && page != Page::Admin {
        Page::Admin
    } else if flags.user && matches!(page, Page::Login | Page::Register) {
        Page::Dashboard
    } else if !flags.user && !flags.admin && page == Page::Dashboard {
        Page::Login
    } else if !flags.admin && page == Page::Admin {
        Page::AdminLogin
    } else {
        page
    }
}

/// The screen rendered for a resolved page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Admin dashboard with a "Back to Login" action
    AdminDashboard,
    /// Admin sign-in form with a "Back to User Login" action
    AdminLogin,
    /// Learner dashboard with an "Admin Panel" action
    UserDashboard,
    /// Registration form
    Register,
    /// User sign-in form
    Login,
}

impl View {
    /// Whether the view offers the "Admin Panel" shortcut
    pub fn offers_admin_panel(&self) -> bool {
        matches!(self, View::UserDashboard | View::Register | View::Login)
    }

    /// Whether the view offers the return-to-login action
    pub fn offers_back_to_login(&self) -> bool {
        matches!(self, View::AdminDashboard | View::AdminLogin)
    }
}

/// Pick the screen for a page that has already been reconciled
pub fn select_view(page: Page, flags: AuthFlags) -> View {
    if flags.admin && page == Page::Admin {
        View::AdminDashboard
    } else if page == Page::AdminLogin {
        View::AdminLogin
    } else if flags.user {
        View::UserDashboard
    } else if page == Page::Register {
        View::Register
    } else {
        View::Login
    }
}

/// Holds the requested page and applies reconciliation to it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    page: Page,
}

impl Navigator {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Currently stored page
    pub fn page(&self) -> Page {
        self.page
    }

    /// Record a navigation request from the UI
    pub fn request(&mut self, page: Page) {
        tracing::debug!(page = %page, "navigation requested");
        self.page = page;
    }

    /// Reconcile the stored page against the session flags.
    ///
    /// Returns `true` when the stored page changed.
    pub fn sync(&mut self, flags: AuthFlags) -> bool {
        let resolved = reconcile(self.page, flags);
        if resolved != self.page {
            tracing::debug!(from = %self.page, to = %resolved, "page reconciled");
            self.page = resolved;
            true
        } else {
            false
        }
    }

    /// Reconcile and pick the view to render
    pub fn view(&mut self, flags: AuthFlags) -> View {
        self.sync(flags);
        select_view(self.page, flags)
    }

    /// Return to the user login page.
    ///
    /// When an admin session is active, `end_admin_session` runs first.
    pub fn back_to_login<F>(&mut self, admin_authenticated: bool, end_admin_session: F)
    where
        F: FnOnce(),
    {
        if admin_authenticated {
            end_admin_session();
        }
        self.page = Page::Login;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flags() -> [AuthFlags; 4] {
        [
            AuthFlags::new(false, false),
            AuthFlags::new(true, false),
            AuthFlags::new(false, true),
            AuthFlags::new(true, true),
        ]
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        for flags in all_flags() {
            for page in Page::ALL {
                let once = reconcile(page, flags);
                assert_eq!(reconcile(once, flags), once, "{page} with {flags:?}");
            }
        }
    }

    #[test]
    fn test_admin_always_wins() {
        for user in [false, true] {
            for page in Page::ALL {
                assert_eq!(reconcile(page, AuthFlags::new(user, true)), Page::Admin);
            }
        }
    }

    #[test]
    fn test_anonymous_dashboard_goes_to_login() {
        assert_eq!(reconcile(Page::Dashboard, AuthFlags::anonymous()), Page::Login);
    }

    #[test]
    fn test_admin_login_with_admin_session() {
        assert_eq!(
            reconcile(Page::AdminLogin, AuthFlags::new(false, true)),
            Page::Admin
        );
    }

    #[test]
    fn test_user_leaves_auth_forms() {
        let flags = AuthFlags::new(true, false);
        assert_eq!(reconcile(Page::Login, flags), Page::Dashboard);
        assert_eq!(reconcile(Page::Register, flags), Page::Dashboard);
        assert_eq!(reconcile(Page::AdminLogin, flags), Page::AdminLogin);
        assert_eq!(reconcile(Page::Admin, flags), Page::AdminLogin);
    }

    #[test]
    fn test_anonymous_pages_left_alone() {
        let flags = AuthFlags::anonymous();
        assert_eq!(reconcile(Page::Login, flags), Page::Login);
        assert_eq!(reconcile(Page::Register, flags), Page::Register);
        assert_eq!(reconcile(Page::AdminLogin, flags), Page::AdminLogin);
        assert_eq!(reconcile(Page::Admin, flags), Page::AdminLogin);
    }

    #[test]
    fn test_select_view() {
        assert_eq!(
            select_view(Page::Admin, AuthFlags::new(false, true)),
            View::AdminDashboard
        );
        assert_eq!(
            select_view(Page::AdminLogin, AuthFlags::new(true, false)),
            View::AdminLogin
        );
        assert_eq!(
            select_view(Page::Dashboard, AuthFlags::new(true, false)),
            View::UserDashboard
        );
        assert_eq!(
            select_view(Page::Register, AuthFlags::anonymous()),
            View::Register
        );
        assert_eq!(select_view(Page::Login, AuthFlags::anonymous()), View::Login);
        assert!(View::Login.offers_admin_panel());
        assert!(View::AdminLogin.offers_back_to_login());
    }

    #[test]
    fn test_back_to_login_ends_admin_session() {
        let mut nav = Navigator::new(Page::Admin);
        let mut admin_active = true;

        nav.back_to_login(admin_active, || admin_active = false);

        assert!(!admin_active);
        assert_eq!(nav.page(), Page::Login);
        assert_eq!(nav.view(AuthFlags::anonymous()), View::Login);
    }

    #[test]
    fn test_back_to_login_without_admin_session() {
        let mut nav = Navigator::new(Page::AdminLogin);
        let mut called = false;

        nav.back_to_login(false, || called = true);

        assert!(!called);
        assert_eq!(nav.page(), Page::Login);
    }

    #[test]
    fn test_navigator_sync_reports_change() {
        let mut nav = Navigator::default();
        assert!(nav.sync(AuthFlags::new(true, false)));
        assert_eq!(nav.page(), Page::Dashboard);
        assert!(!nav.sync(AuthFlags::new(true, false)));
    }

    #[test]
    fn test_page_parse() {
        assert_eq!("admin-login".parse::<Page>(), Ok(Page::AdminLogin));
        assert_eq!(" Dashboard ".parse::<Page>(), Ok(Page::Dashboard));
        assert!("settings".parse::<Page>().is_err());
        for page in Page::ALL {
            assert_eq!(page.as_str().parse::<Page>(), Ok(page));
        }
    }
}
