//! Admin Dashboard Page
//!
//! Tabbed admin area: overview counters, user management, the activity
//! monitor and a settings placeholder.

use leptos::*;

use studydesk::api::{AdminDashboard as AdminPayload, SystemEvent};
use studydesk::dashboard::{
    admin_overview, fetch_error, AdminTab, EventTone, DASHBOARD_FETCH_FAILED, NO_RECENT_ACTIVITY,
};

use crate::components::{ActivityMonitor, CardSkeleton, ErrorBanner, StatCardView, UserTable};
use crate::state::global::GlobalState;

/// Admin dashboard page component
#[component]
pub fn AdminDashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let data = create_rw_signal(None::<AdminPayload>);
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);
    let tab = create_rw_signal(AdminTab::default());
    let refresh = create_trigger();

    let state_for_fetch = state.clone();
    create_effect(move |_| {
        refresh.track();
        let state = state_for_fetch.clone();
        loading.set(true);
        spawn_local(async move {
            let result = match state.sessions.admin.require_token() {
                Ok(token) => state.sessions.api.admin_dashboard(&token).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(payload) => {
                    data.set(Some(payload));
                    error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to fetch admin dashboard: {}", e).into(),
                    );
                    error.set(Some(fetch_error(&e, DASHBOARD_FETCH_FAILED)));
                }
            }
            loading.set(false);
        });
    });

    let state_for_name = state.clone();
    let admin_name = move || {
        state_for_name
            .admin
            .with(|admin| admin.as_ref().map(|a| a.name.clone()).unwrap_or_default())
    };

    view! {
        <div class="min-h-screen">
            // Admin navigation
            <nav class="bg-white shadow-lg border-b-2 border-red-600">
                <div class="max-w-7xl mx-auto px-4 flex justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <div class="h-8 w-8 bg-red-600 rounded-full flex items-center justify-center text-white">
                            "🔒"
                        </div>
                        <h1 class="text-xl font-bold text-gray-900">"Admin Panel"</h1>
                    </div>
                    <div class="flex items-center space-x-4">
                        <button
                            class="text-gray-500 hover:text-gray-700 p-2 rounded-md hover:bg-gray-100"
                            title="Refresh Data"
                            on:click=move |_| refresh.notify()
                        >
                            "⟳"
                        </button>
                        <span class="text-sm text-gray-700">"Admin: " {admin_name}</span>
                        <button
                            class="bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-md text-sm font-medium"
                            on:click=move |_| state.logout_admin()
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </nav>

            // Tab navigation
            <div class="bg-white border-b">
                <nav class="max-w-7xl mx-auto px-4 flex space-x-8">
                    {AdminTab::ALL.into_iter().map(|t| view! {
                        <button
                            class=move || if tab.get() == t {
                                "py-4 px-1 border-b-2 font-medium text-sm border-red-500 text-red-600"
                            } else {
                                "py-4 px-1 border-b-2 font-medium text-sm border-transparent text-gray-500 hover:text-gray-700"
                            }
                            on:click=move |_| tab.set(t)
                        >
                            <span class="mr-2">{t.icon()}</span>
                            {t.name()}
                        </button>
                    }).collect_view()}
                </nav>
            </div>

            <main class="max-w-7xl mx-auto py-6 px-4 space-y-6">
                {move || error.get().map(|msg| view! {
                    <ErrorBanner message=msg on_retry=move || refresh.notify() />
                })}

                {move || {
                    if loading.get() {
                        return view! {
                            <div class="grid grid-cols-1 md:grid-cols-4 gap-5">
                                {(0..4).map(|_| view! { <CardSkeleton /> }).collect_view()}
                            </div>
                        }.into_view();
                    }
                    // Tabs only render once the overview payload arrived
                    let Some(payload) = data.get() else {
                        return ().into_view();
                    };
                    match tab.get() {
                        AdminTab::Overview => view! { <Overview data=payload /> }.into_view(),
                        AdminTab::Users => view! { <UserTable /> }.into_view(),
                        AdminTab::Activity => view! { <ActivityMonitor /> }.into_view(),
                        AdminTab::Settings => view! {
                            <div class="bg-white rounded-lg shadow p-6">
                                <h3 class="text-lg font-medium text-gray-900 mb-4">"Admin Settings"</h3>
                                <p class="text-gray-600">"Settings panel coming soon..."</p>
                            </div>
                        }.into_view(),
                    }
                }}
            </main>
        </div>
    }
}

#[component]
fn Overview(data: AdminPayload) -> impl IntoView {
    let cards = admin_overview(&data);
    let events = data.recent_system_activity;

    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 gap-5 sm:grid-cols-2 lg:grid-cols-4">
                {cards.into_iter().map(|card| view! { <StatCardView card=card /> }).collect_view()}
            </div>

            <div class="bg-white rounded-lg shadow p-6">
                <h3 class="text-lg font-medium text-gray-900 mb-4">"Recent System Activity"</h3>
                {if events.is_empty() {
                    view! { <p class="text-gray-500 text-sm">{NO_RECENT_ACTIVITY}</p> }.into_view()
                } else {
                    view! {
                        <ul class="space-y-4">
                            {events.into_iter().map(|event| view! { <EventRow event=event /> }).collect_view()}
                        </ul>
                    }.into_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn EventRow(event: SystemEvent) -> impl IntoView {
    let tone = EventTone::of(&event);

    view! {
        <li class="flex items-center space-x-3">
            <span class=format!("h-8 w-8 rounded-full {} flex items-center justify-center text-white text-sm", tone.class())>
                "👤"
            </span>
            <div class="flex-1 flex justify-between text-sm text-gray-500">
                <p>{event.description}</p>
                <span class="whitespace-nowrap">{event.time}</span>
            </div>
        </li>
    }
}
