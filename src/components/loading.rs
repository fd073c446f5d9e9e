//! Loading Component
//!
//! Full-page placeholder shown while a view's single fetch is pending.

use leptos::*;

/// Full-page loading card
#[component]
pub fn LoadingCard(
    /// Message shown while the fetch is pending
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold">{label}</h2>
            <div class="loading-spinner w-8 h-8 mt-4" />
        </div>
    }
}
