//! Error Banner Component
//!
//! Inline error with a manual retry affordance.

use leptos::*;

#[component]
pub fn ErrorBanner<F>(
    #[prop(into)]
    message: String,
    on_retry: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded-lg">
            <p>{message}</p>
            <button
                class="mt-2 text-sm font-medium text-red-800 underline hover:text-red-900"
                on:click=move |_| on_retry()
            >
                "Try Again"
            </button>
        </div>
    }
}
