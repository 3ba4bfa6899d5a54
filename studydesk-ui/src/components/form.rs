//! Form Components
//!
//! Labelled inputs and the inline error shown under sign-in forms.

use leptos::*;

/// Labelled text input bound to a signal
#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional, into)]
    placeholder: String,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700">{label}</span>
            <input
                type=input_type
                required=true
                placeholder=placeholder
                class="mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md shadow-sm \
                       focus:outline-none focus:ring-indigo-500 focus:border-indigo-500"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

/// Inline form error, hidden when empty
#[component]
pub fn FormError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|msg| view! {
            <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-2 rounded text-sm">
                {msg}
            </div>
        })}
    }
}
