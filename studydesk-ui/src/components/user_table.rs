//! User Table Component
//!
//! Account list with activate, deactivate and delete actions.

use leptos::*;

use studydesk::api::{EntityId, ManagedUser, Params};
use studydesk::dashboard::{apply, fetch_error, UserAction, UserRow};

use crate::components::{ErrorBanner, ListSkeleton};
use crate::state::global::GlobalState;

const USERS_FETCH_FAILED: &str = "Failed to fetch users";

/// Users tab of the admin dashboard
#[component]
pub fn UserTable() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let users = create_rw_signal(Vec::<ManagedUser>::new());
    let search = create_rw_signal(String::new());
    let loading = create_rw_signal(true);
    let error = create_rw_signal(None::<String>);
    let refresh = create_trigger();

    let state_for_fetch = state.clone();
    create_effect(move |_| {
        refresh.track();
        let state = state_for_fetch.clone();
        let mut params = Params::new();
        let term = search.get_untracked();
        if !term.trim().is_empty() {
            params.push(("search".to_string(), term.trim().to_string()));
        }

        loading.set(true);
        spawn_local(async move {
            let result = match state.sessions.admin.require_token() {
                Ok(token) => state.sessions.api.users(&token, params).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(list) => {
                    users.set(list.users);
                    error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch users: {}", e).into());
                    error.set(Some(fetch_error(&e, USERS_FETCH_FAILED)));
                }
            }
            loading.set(false);
        });
    });

    let run_action = move |id: EntityId, action: UserAction| {
        if action == UserAction::Delete && !confirm_delete() {
            return;
        }
        let state = state.clone();
        spawn_local(async move {
            let result = match state.sessions.admin.require_token() {
                Ok(token) => action.perform(state.sessions.api.as_ref(), &token, &id).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(_) => {
                    users.update(|list| apply(list, &id, action));
                    state.show_success(&format!("User {}d", action.label().to_lowercase()));
                }
                Err(e) => state.show_error(&e.user_message()),
            }
        });
    };
    let run_action = store_value(run_action);

    view! {
        <div class="bg-white rounded-lg shadow">
            <div class="p-6 flex flex-col md:flex-row md:items-center md:justify-between gap-4">
                <div>
                    <h2 class="text-2xl font-bold text-gray-900">"Users"</h2>
                    <p class="mt-1 text-sm text-gray-600">"View and manage user accounts"</p>
                </div>
                <form
                    class="flex gap-2"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        refresh.notify();
                    }
                >
                    <input
                        type="search"
                        placeholder="Search by name or email"
                        class="px-4 py-2 border border-gray-300 rounded-lg"
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                        "Search"
                    </button>
                </form>
            </div>

            {move || error.get().map(|msg| view! {
                <div class="px-6 pb-4">
                    <ErrorBanner message=msg on_retry=move || refresh.notify() />
                </div>
            })}

            {move || {
                if loading.get() {
                    return view! { <div class="p-6"><ListSkeleton count=5 /></div> }.into_view();
                }
                let rows: Vec<UserRow> = users.with(|list| list.iter().map(UserRow::from_user).collect());
                if rows.is_empty() {
                    return view! {
                        <p class="p-6 text-center text-gray-500">"No users found"</p>
                    }.into_view();
                }
                view! {
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                {["Name", "Email", "Status", "Joined", "Last Login", "Actions"].into_iter().map(|h| view! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{h}</th>
                                }).collect_view()}
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {rows.into_iter().map(|row| view! {
                                <UserRowView row=row on_action=move |id, action| run_action.with_value(|run| run(id, action)) />
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </div>
    }
}

#[component]
fn UserRowView<F>(row: UserRow, on_action: F) -> impl IntoView
where
    F: Fn(EntityId, UserAction) + Copy + 'static,
{
    let UserRow {
        id,
        name,
        email,
        status,
        status_class,
        joined,
        last_login,
        actions,
    } = row;

    view! {
        <tr>
            <td class="px-6 py-4 text-sm font-medium text-gray-900">{name}</td>
            <td class="px-6 py-4 text-sm text-gray-500">{email}</td>
            <td class="px-6 py-4">
                <span class=format!("px-2 inline-flex text-xs font-semibold rounded-full {}", status_class)>
                    {status}
                </span>
            </td>
            <td class="px-6 py-4 text-sm text-gray-500">{joined}</td>
            <td class="px-6 py-4 text-sm text-gray-500">{last_login}</td>
            <td class="px-6 py-4 text-sm space-x-2">
                {id.map(|id| actions.into_iter().map(|action| {
                    let id = id.clone();
                    let class = match action {
                        UserAction::Delete => "text-red-600 hover:text-red-900",
                        _ => "text-indigo-600 hover:text-indigo-900",
                    };
                    view! {
                        <button class=class on:click=move |_| on_action(id.clone(), action)>
                            {action.label()}
                        </button>
                    }
                }).collect_view())}
            </td>
        </tr>
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message("Are you sure you want to delete this user?")
                .ok()
        })
        .unwrap_or(false)
}
