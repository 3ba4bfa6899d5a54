//! Navigation Shortcuts
//!
//! Floating buttons that switch between the learner and admin areas.

use leptos::*;

use studydesk::routing::{Page, View};

use crate::state::global::GlobalState;

/// Shortcuts offered by a view
#[component]
pub fn NavShortcuts(current: View) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    if current.offers_admin_panel() {
        return view! {
            <div class="fixed bottom-4 right-4">
                <button
                    class="px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 text-sm"
                    on:click=move |_| state.navigate(Page::AdminLogin)
                >
                    "Admin Panel"
                </button>
            </div>
        }
        .into_view();
    }

    if current.offers_back_to_login() {
        let (label, class) = if current == View::AdminDashboard {
            (
                "← Back to Login",
                "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 text-sm shadow-xl border-2 border-white",
            )
        } else {
            (
                "← Back to User Login",
                "px-4 py-2 text-sm text-blue-600 hover:text-blue-800 underline",
            )
        };
        return view! {
            <div class="fixed bottom-4 left-4">
                <button class=class on:click=move |_| state.back_to_login()>
                    {label}
                </button>
            </div>
        }
        .into_view();
    }

    ().into_view()
}
