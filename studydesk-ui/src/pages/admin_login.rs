//! Admin Login Page

use leptos::*;

use crate::components::{FormError, InlineLoading, TextField};
use crate::state::global::GlobalState;

/// Administrator sign-in form
#[component]
pub fn AdminLogin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let submitting = create_rw_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let state = state.clone();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            match state.sessions.admin.login(&email, &password).await {
                Ok(admin) => {
                    state.refresh_sessions();
                    state.show_success(&format!("Welcome, {}", admin.name));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-900 px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow-2xl p-8 space-y-6 border-t-4 border-red-600">
                <div class="text-center">
                    <div class="mx-auto h-12 w-12 bg-red-600 rounded-full flex items-center justify-center text-white text-xl">
                        "🔒"
                    </div>
                    <h1 class="mt-4 text-3xl font-bold">"Admin Access"</h1>
                    <p class="text-gray-500 mt-1">"Sign in with your administrator account"</p>
                </div>

                <form class="space-y-4" on:submit=on_submit>
                    <FormError message=error />
                    <TextField label="Admin Email" input_type="email" placeholder="admin@example.com" value=email />
                    <TextField label="Password" input_type="password" value=password />
                    <button
                        type="submit"
                        class="w-full py-2 px-4 bg-red-600 text-white rounded-md hover:bg-red-700 disabled:opacity-50"
                        disabled=move || submitting.get()
                    >
                        {move || if submitting.get() {
                            view! { <InlineLoading /> " Signing in..." }.into_view()
                        } else {
                            "Sign In as Admin".into_view()
                        }}
                    </button>
                </form>
            </div>
        </div>
    }
}
