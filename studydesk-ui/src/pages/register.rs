//! Register Page
//!
//! Account creation form. A successful registration signs the learner in.

use leptos::*;

use studydesk::routing::Page;

use crate::components::{FormError, InlineLoading, TextField};
use crate::state::global::GlobalState;

/// Register page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let name = create_rw_signal(String::new());
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
        let name = name.get_untracked();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            match state.sessions.user.register(&name, &email, &password).await {
                Ok(_) => {
                    state.refresh_sessions();
                    state.show_success("Account created");
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-lg p-8 space-y-6">
                <div class="text-center">
                    <h1 class="text-3xl font-bold">"Create Account"</h1>
                    <p class="text-gray-500 mt-1">"Start your learning journey"</p>
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <FormError message=error />
                    <TextField label="Full Name" placeholder="Ada Lovelace" value=name />
                    <TextField label="Email" input_type="email" placeholder="you@example.com" value=email />
                    <TextField label="Password" input_type="password" value=password />
                    <button
                        type="submit"
                        class="w-full py-2 px-4 bg-indigo-600 text-white rounded-md hover:bg-indigo-700 disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() {
                            view! { <InlineLoading /> " Creating account..." }.into_view()
                        } else {
                            "Sign Up".into_view()
                        }}
                    </button>
                </form>

                <p class="text-center text-sm text-gray-600">
                    "Already have an account? "
                    <button
                        class="text-indigo-600 hover:text-indigo-800 font-medium"
                        on:click=move |_| state.navigate(Page::Login)
                    >
                        "Sign in"
                    </button>
                </p>
            </div>
        </div>
    }
}
