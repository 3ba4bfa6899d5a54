//! Login Page
//!
//! Learner sign-in form.

use leptos::*;

use studydesk::routing::Page;

use crate::components::{FormError, InlineLoading, TextField};
use crate::state::global::GlobalState;

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let state = state_for_submit.clone();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            match state.sessions.user.login(&email, &password).await {
                Ok(_) => state.refresh_sessions(),
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-lg p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                    <p class="text-gray-500 mt-1">"Sign in to continue learning"</p>
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <FormError message=error />
                    <TextField label="Email" input_type="email" placeholder="you@example.com" value=email />
                    <TextField label="Password" input_type="password" value=password />
                    <button
                        type="submit"
                        class="w-full py-2 px-4 bg-indigo-600 text-white rounded-md hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() {
                            view! { <InlineLoading /> " Signing in..." }.into_view()
                        } else {
                            "Sign In".into_view()
                        }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <button
                        class="text-indigo-600 hover:text-indigo-800 font-medium"
                        on:click=move |_| state.navigate(Page::Register)
                    >
                        "Sign up"
                    </button>
                </p>
            </div>
        </div>
    }
}
