//! Stat Card Component
//!
//! Displays a single dashboard counter with an optional trend annotation.

use leptos::*;

/// Dashboard counter card
#[component]
pub fn StatCard(
    /// Counter label
    label: &'static str,
    /// Leading icon
    icon: &'static str,
    /// Live counter value
    #[prop(into)]
    value: Signal<u32>,
    /// Static trend annotation; presentational only, not computed
    #[prop(optional)]
    trend: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            // Header with label and icon
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{label}</span>
                <span class="text-2xl">{icon}</span>
            </div>

            // Counter value
            <div class="text-3xl font-bold mt-2">
                {move || value.get()}
            </div>

            {trend.map(|t| view! {
                <div class="text-sm text-green-400 mt-2">{t}</div>
            })}
        </div>
    }
}
