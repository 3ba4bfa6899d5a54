//! Global Application State
//!
//! Reactive state management using Leptos signals. The session stores are
//! the source of truth; the signals here mirror them so views re-render when
//! a session starts or ends.

use leptos::*;
use std::rc::Rc;

use studydesk::api::{AdminProfile, UserProfile};
use studydesk::routing::{reconcile, select_view, AuthFlags, Navigator, Page, View};

use super::sessions::Sessions;

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Both session stores
    pub sessions: Rc<Sessions>,
    /// Requested page, reconciled against the session flags
    pub nav: RwSignal<Navigator>,
    /// Signed-in learner, if any
    pub user: RwSignal<Option<UserProfile>>,
    /// Signed-in administrator, if any
    pub admin: RwSignal<Option<AdminProfile>>,
    /// Persisted tokens are still being revalidated
    pub restoring: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let sessions = Rc::new(Sessions::new());
    let pending = sessions.user.is_pending() || sessions.admin.is_pending();

    let state = GlobalState {
        user: create_rw_signal(sessions.user.identity()),
        admin: create_rw_signal(sessions.admin.identity()),
        sessions,
        nav: create_rw_signal(Navigator::default()),
        restoring: create_rw_signal(pending),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state.clone());
    state
}

impl GlobalState {
    /// Current authentication flags (tracked)
    pub fn flags(&self) -> AuthFlags {
        AuthFlags::new(
            self.user.with(Option::is_some),
            self.admin.with(Option::is_some),
        )
    }

    fn flags_untracked(&self) -> AuthFlags {
        AuthFlags::new(
            self.user.with_untracked(Option::is_some),
            self.admin.with_untracked(Option::is_some),
        )
    }

    /// The view to render for the current page and flags
    pub fn view(&self) -> View {
        let flags = self.flags();
        select_view(self.nav.with(Navigator::page), flags)
    }

    /// Copy the stores' identities into the signals
    pub fn refresh_sessions(&self) {
        self.user.set(self.sessions.user.identity());
        self.admin.set(self.sessions.admin.identity());
    }

    /// Reconcile the stored page with the current flags.
    ///
    /// Only writes the signal when the page actually changes.
    pub fn reconcile(&self) {
        let flags = self.flags();
        let page = self.nav.with_untracked(Navigator::page);
        if reconcile(page, flags) != page {
            self.nav.update(|nav| {
                nav.sync(flags);
            });
        }
    }

    /// Request a page
    pub fn navigate(&self, page: Page) {
        let flags = self.flags_untracked();
        self.nav.update(|nav| {
            nav.request(page);
            nav.sync(flags);
        });
    }

    /// End the admin session if there is one and show the user login
    pub fn back_to_login(&self) {
        let admin_authenticated = self.sessions.admin.is_authenticated();
        let sessions = Rc::clone(&self.sessions);
        self.nav
            .update(|nav| nav.back_to_login(admin_authenticated, || sessions.admin.logout()));
        self.refresh_sessions();
    }

    pub fn logout_user(&self) {
        self.sessions.user.logout();
        self.refresh_sessions();
    }

    pub fn logout_admin(&self) {
        self.sessions.admin.logout();
        self.refresh_sessions();
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
