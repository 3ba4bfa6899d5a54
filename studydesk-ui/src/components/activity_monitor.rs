//! Activity Monitor Component
//!
//! Filterable feed of user activities with summary counters.

use leptos::*;

use studydesk::api::Activity;
use studydesk::dashboard::{
    fetch_error, ActivityEntry, ActivityFeed, ActivityFilter, ActivityQuery, ActivitySummary,
    TimeWindow, ACTIVITIES_FETCH_FAILED, FEED_LIMIT,
};

use crate::components::{ErrorBanner, ListSkeleton};
use crate::state::global::GlobalState;

/// Activity tab of the admin dashboard
#[component]
pub fn ActivityMonitor() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let filter = create_rw_signal(ActivityFilter::default());
    let window = create_rw_signal(TimeWindow::default());
    let activities = create_rw_signal(Vec::<Activity>::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);
    let refresh = create_trigger();

    // Refetch whenever a filter changes or a refresh is requested
    create_effect(move |_| {
        refresh.track();
        let query = ActivityQuery::new(filter.get(), window.get());
        let state = state.clone();

        loading.set(true);
        spawn_local(async move {
            let result = match state.sessions.admin.require_token() {
                Ok(token) => state.sessions.api.activities(&token, &query).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(list) => {
                    activities.set(list.activities);
                    error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch activities: {}", e).into());
                    error.set(Some(fetch_error(&e, ACTIVITIES_FETCH_FAILED)));
                }
            }
            loading.set(false);
        });
    });

    let summary = create_memo(move |_| {
        activities.with(|list| ActivitySummary::compute(list, chrono::Local::now().date_naive()))
    });
    let feed = create_memo(move |_| activities.with(|list| ActivityFeed::build(list)));

    view! {
        <div class="space-y-6">
            // Header and filters
            <div class="bg-white rounded-lg shadow p-6">
                <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                    <div>
                        <h2 class="text-2xl font-bold text-gray-900">"User Activity"</h2>
                        <p class="mt-1 text-sm text-gray-600">
                            "Monitor all user activities across the platform"
                        </p>
                    </div>

                    <div class="mt-4 md:mt-0 flex flex-col sm:flex-row gap-4">
                        <select
                            class="px-4 py-2 border border-gray-300 rounded-lg"
                            on:change=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    filter.set(value);
                                }
                            }
                        >
                            {ActivityFilter::ALL.into_iter().map(|f| view! {
                                <option value=f.as_str() selected=move || filter.get() == f>
                                    {f.label()}
                                </option>
                            }).collect_view()}
                        </select>

                        <select
                            class="px-4 py-2 border border-gray-300 rounded-lg"
                            on:change=move |ev| {
                                if let Ok(value) = event_target_value(&ev).parse() {
                                    window.set(value);
                                }
                            }
                        >
                            {TimeWindow::ALL.into_iter().map(|w| view! {
                                <option value=w.as_str() selected=move || window.get() == w>
                                    {w.label()}
                                </option>
                            }).collect_view()}
                        </select>

                        <button
                            class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700"
                            on:click=move |_| refresh.notify()
                        >
                            "Refresh"
                        </button>
                    </div>
                </div>
            </div>

            {move || error.get().map(|msg| view! {
                <ErrorBanner message=msg on_retry=move || refresh.notify() />
            })}

            {move || {
                if loading.get() {
                    view! {
                        <div class="bg-white rounded-lg shadow p-6">
                            <ListSkeleton count=5 />
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <SummaryRow summary=summary.get() />
                        <FeedList feed=feed.get() />
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn SummaryRow(summary: ActivitySummary) -> impl IntoView {
    let tiles = [
        ("Logins Today", summary.logins_today, "🔑"),
        ("Posts Created", summary.posts_created, "📝"),
        ("Page Views", summary.page_views, "👁️"),
        ("Active Users", summary.active_users, "👥"),
    ];

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {tiles.into_iter().map(|(label, value, icon)| view! {
                <div class="bg-white rounded-lg shadow p-4 flex items-center space-x-3">
                    <span class="text-2xl">{icon}</span>
                    <div>
                        <p class="text-sm text-gray-500">{label}</p>
                        <p class="text-xl font-semibold">{value}</p>
                    </div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn FeedList(feed: ActivityFeed) -> impl IntoView {
    if feed.is_empty() {
        return view! {
            <div class="bg-white rounded-lg shadow p-12 text-center">
                <div class="text-4xl mb-2">"📊"</div>
                <h3 class="text-lg font-medium text-gray-900">"No activities found"</h3>
                <p class="text-gray-500">"No user activities match your current filters."</p>
            </div>
        }
        .into_view();
    }

    let truncated = feed.is_truncated();
    let total = feed.total;

    view! {
        <div class="bg-white rounded-lg shadow divide-y divide-gray-200">
            {feed.entries.into_iter().map(|entry| view! { <FeedRow entry=entry /> }).collect_view()}
        </div>
        {truncated.then(|| view! {
            <p class="text-center text-sm text-gray-500">
                {format!("Showing {} of {} activities", FEED_LIMIT, total)}
            </p>
        })}
    }
    .into_view()
}

#[component]
fn FeedRow(entry: ActivityEntry) -> impl IntoView {
    let ActivityEntry {
        kind,
        user,
        when,
        description,
        details,
        ip_address,
        user_agent,
        location,
    } = entry;

    view! {
        <div class="p-4 flex space-x-4">
            <div class="text-2xl">{kind.icon()}</div>
            <div class="flex-1 min-w-0">
                <div class="flex items-center justify-between">
                    <div class="flex items-center space-x-2">
                        <span class="font-medium text-gray-900">{user}</span>
                        <span class=format!("px-2 py-0.5 text-xs font-semibold rounded-full {}", kind.badge())>
                            {kind.label()}
                        </span>
                    </div>
                    <span class="text-sm text-gray-500">{when}</span>
                </div>
                <p class="mt-1 text-sm text-gray-700">{description}</p>
                {details.map(|d| view! {
                    <pre class="mt-2 p-2 bg-gray-50 rounded text-xs overflow-x-auto">{d}</pre>
                })}
                <div class="mt-2 flex flex-wrap gap-4 text-xs text-gray-500">
                    <span>"IP: " {ip_address}</span>
                    <span>"Agent: " {user_agent}</span>
                    {location.map(|l| view! { <span>"Location: " {l}</span> })}
                </div>
            </div>
        </div>
    }
}
