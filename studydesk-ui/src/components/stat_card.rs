//! Stat Card Component

use leptos::*;

use studydesk::dashboard::StatCard;

/// A single counter tile
#[component]
pub fn StatCardView(card: StatCard) -> impl IntoView {
    view! {
        <div class="bg-white overflow-hidden shadow rounded-lg">
            <div class="p-5 flex items-center">
                <div class=format!("{} rounded-md p-3 text-white text-xl", card.accent)>
                    {card.icon}
                </div>
                <div class="ml-5">
                    <dt class="text-sm font-medium text-gray-500 truncate">{card.label}</dt>
                    <dd class="text-lg font-medium text-gray-900">{card.display_value()}</dd>
                </div>
            </div>
        </div>
    }
}
