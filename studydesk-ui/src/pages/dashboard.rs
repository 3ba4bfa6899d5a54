//! Dashboard Page
//!
//! Learner dashboard: welcome banner, study material and progress counters.

use leptos::*;

use studydesk::api::{Endpoint, UserDashboard};
use studydesk::dashboard::{
    fetch_error, identity_banner, progress_cards, StudyView, DASHBOARD_FETCH_FAILED,
};

use crate::components::{ErrorBanner, Loading, StatCardView, StudyArea};
use crate::state::global::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let data = create_rw_signal(None::<UserDashboard>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);
    let study = create_rw_signal(StudyView::default());
    let refresh = create_trigger();

    // Fetch the learner payload on mount and on retry
    let state_for_fetch = state.clone();
    create_effect(move |_| {
        refresh.track();
        let state = state_for_fetch.clone();
        loading.set(true);
        spawn_local(async move {
            match state
                .sessions
                .user
                .fetch::<UserDashboard>(Endpoint::Dashboard, None)
                .await
            {
                Ok(payload) => {
                    data.set(Some(payload));
                    error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch dashboard: {}", e).into());
                    error.set(Some(fetch_error(&e, DASHBOARD_FETCH_FAILED)));
                }
            }
            loading.set(false);
        });
    });

    let state_for_name = state.clone();
    let name = move || {
        state_for_name
            .user
            .with(|user| user.as_ref().map(|u| u.name.clone()).unwrap_or_default())
    };

    view! {
        <div class="min-h-screen">
            // Navigation
            <nav class="bg-white shadow-sm border-b sticky top-0 z-40">
                <div class="max-w-7xl mx-auto px-4 flex justify-between h-16">
                    <div class="flex items-center space-x-4">
                        {move || matches!(study.get(), StudyView::Study { .. }).then(|| view! {
                            <button
                                class="text-blue-600 hover:text-blue-800"
                                on:click=move |_| study.update(StudyView::back)
                            >
                                "← Back to Dashboard"
                            </button>
                        })}
                        <h1 class="text-xl font-semibold text-gray-900">
                            {move || study.with(StudyView::heading)}
                        </h1>
                    </div>
                    <div class="flex items-center space-x-4">
                        <span class="text-gray-700">"Welcome, " {name}</span>
                        <button
                            class="bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-md text-sm font-medium"
                            on:click=move |_| state.logout_user()
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </nav>

            <main class="max-w-7xl mx-auto py-8 px-4 space-y-8">
                {move || error.get().map(|msg| view! {
                    <ErrorBanner message=msg on_retry=move || refresh.notify() />
                })}

                {move || {
                    if loading.get() {
                        return view! { <Loading message="Loading your dashboard..." /> }.into_view();
                    }
                    let home = matches!(study.get(), StudyView::Home);
                    let payload = data.get();
                    view! {
                        {payload.clone().filter(|_| home).map(|payload| view! { <WelcomeBanner data=payload /> })}
                        <StudyArea study=study />
                        {payload.filter(|_| home).and_then(|payload| progress_cards(&payload)).map(|cards| view! {
                            <section>
                                <h3 class="text-lg font-semibold text-gray-900 mb-6">"Your Progress"</h3>
                                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                                    {cards.into_iter().map(|card| view! { <StatCardView card=card /> }).collect_view()}
                                </div>
                            </section>
                        })}
                    }.into_view()
                }}
            </main>
        </div>
    }
}

#[component]
fn WelcomeBanner(data: UserDashboard) -> impl IntoView {
    view! {
        <div class="bg-gradient-to-r from-blue-500 to-purple-600 rounded-xl shadow-lg text-white p-8">
            <h2 class="text-2xl font-bold mb-2">"Welcome to Your Learning Journey! 🚀"</h2>
            <p class="text-blue-100 mb-4">
                "Master programming and database skills with our comprehensive study materials."
            </p>
            <div class="bg-white/10 rounded-lg p-4 text-sm">{identity_banner(&data)}</div>
        </div>
    }
}
