//! Toast Notification Component
//!
//! Transient success and error messages. Clicking a toast dismisses it.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast stack in the top-right corner
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (success, error) = (state.success, state.error);

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {move || success.get().map(|text| view! {
                <Notice text=text tone=Tone::Success on_dismiss=move || success.set(None) />
            })}
            {move || error.get().map(|text| view! {
                <Notice text=text tone=Tone::Error on_dismiss=move || error.set(None) />
            })}
        </div>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Success => ("✓", "bg-green-600"),
            Tone::Error => ("⚠", "bg-red-600"),
        }
    }
}

#[component]
fn Notice<F>(text: String, tone: Tone, on_dismiss: F) -> impl IntoView
where
    F: Fn() + 'static,
{
    let (icon, background) = tone.style();

    view! {
        <div
            role="status"
            class=format!("{} text-white px-4 py-3 rounded-lg shadow-lg flex items-center gap-3 cursor-pointer", background)
            on:click=move |_| on_dismiss()
        >
            <span>{icon}</span>
            <span class="text-sm font-medium">{text}</span>
        </div>
    }
}
