//! App Root Component
//!
//! Main application component with page selection and global providers.

use leptos::*;

use studydesk::routing::View;

use crate::components::{Loading, NavShortcuts, Toast};
use crate::pages::{AdminDashboard, AdminLogin, Dashboard, Login, Register};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    let state = provide_global_state();

    // Revalidate tokens persisted by an earlier visit
    if state.restoring.get_untracked() {
        let state = state.clone();
        spawn_local(async move {
            state.sessions.restore().await;
            state.refresh_sessions();
            state.restoring.set(false);
        });
    }

    // Re-evaluate the page whenever a session starts or ends
    let state_for_effect = state.clone();
    create_effect(move |_| {
        state_for_effect.reconcile();
    });

    // Only re-render the page when the selected view changes
    let state_for_view = state.clone();
    let current_view = create_memo(move |_| state_for_view.view());

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            {move || {
                if state.restoring.get() {
                    return view! { <Loading message="Restoring your session..." /> }.into_view();
                }
                let current = current_view.get();
                let page = match current {
                    View::AdminDashboard => view! { <AdminDashboard /> }.into_view(),
                    View::AdminLogin => view! { <AdminLogin /> }.into_view(),
                    View::UserDashboard => view! { <Dashboard /> }.into_view(),
                    View::Register => view! { <Register /> }.into_view(),
                    View::Login => view! { <Login /> }.into_view(),
                };
                view! {
                    {page}
                    <NavShortcuts current=current />
                }.into_view()
            }}

            // Toast notifications
            <Toast />
        </div>
    }
}
