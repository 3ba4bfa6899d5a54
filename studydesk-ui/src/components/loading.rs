//! Loading Component
//!
//! Spinners and skeleton placeholders shown while requests are in flight.

use leptos::*;

/// Centered spinner with an optional caption
#[component]
pub fn Loading(#[prop(optional, into)] message: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12">
            <div class="loading-spinner w-12 h-12" />
            {message.map(|text| view! { <p class="mt-4 text-gray-600">{text}</p> })}
        </div>
    }
}

/// Spinner sized for buttons
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! { <span class="inline-block align-middle loading-spinner w-4 h-4" /> }
}

/// Placeholder for a stat card
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-5 animate-pulse flex items-center space-x-4">
            <div class="bg-gray-200 rounded-md h-12 w-12" />
            <div class="flex-1 space-y-2">
                <div class="h-3 bg-gray-200 rounded w-2/3" />
                <div class="h-5 bg-gray-200 rounded w-1/3" />
            </div>
        </div>
    }
}

/// Placeholder rows for feeds and tables
#[component]
pub fn ListSkeleton(#[prop(default = 3)] count: usize) -> impl IntoView {
    let rows = (0..count)
        .map(|_| {
            view! {
                <div class="flex space-x-4">
                    <div class="rounded-full bg-gray-200 h-10 w-10" />
                    <div class="flex-1 space-y-2 py-1">
                        <div class="h-4 bg-gray-200 rounded w-3/4" />
                        <div class="h-4 bg-gray-200 rounded w-1/2" />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! { <div class="animate-pulse space-y-3">{rows}</div> }
}
