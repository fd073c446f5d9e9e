//! Dashboard Page
//!
//! Guild-wide summary counters and quick actions.

use leptos::*;

use crate::api;
use crate::components::{LoadingCard, StatCard};
use crate::state::fallback;
use crate::state::loader::load_on_mount;
use crate::state::model::DashboardStats;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let stats = create_rw_signal(DashboardStats::default());
    let loading = create_rw_signal(true);

    load_on_mount(
        api::fetch_stats,
        fallback::dashboard_stats,
        "dashboard stats",
        stats,
        loading,
    );

    view! {
        {move || {
            if loading.get() {
                view! { <LoadingCard label="Loading Dashboard..." /> }.into_view()
            } else {
                view! { <DashboardLoaded stats=stats /> }.into_view()
            }
        }}
    }
}

/// Populated dashboard view
#[component]
fn DashboardLoaded(stats: RwSignal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div class="bg-gray-800 rounded-xl p-6">
                <h1 class="text-3xl font-bold">"📊 Guild Dashboard"</h1>
                <p class="text-gray-400 mt-1">"Welcome to the Warborne Guild Management System"</p>
            </div>

            // Summary counters
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard
                    label="Total Players"
                    icon="👥"
                    value=Signal::derive(move || stats.get().total_players)
                    trend="↑ 4 this week"
                />
                <StatCard
                    label="Total Guilds"
                    icon="🏰"
                    value=Signal::derive(move || stats.get().total_guilds)
                />
                <StatCard
                    label="Total Loadouts"
                    icon="⚔️"
                    value=Signal::derive(move || stats.get().total_loadouts)
                    trend="↑ 12 this week"
                />
                <StatCard
                    label="Active Players"
                    icon="🟢"
                    value=Signal::derive(move || stats.get().active_players)
                    trend="→ steady"
                />
            </div>

            // Quick actions
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"🚀 Quick Actions"</h2>
                <div class="flex flex-wrap gap-3">
                    <QuickAction label="Add New Player" />
                    <QuickAction label="Create Loadout" />
                    <QuickAction label="Manage Guild" />
                    <QuickAction label="View Reports" />
                </div>
            </section>
        </div>
    }
}

/// Quick action button; wiring to mutation endpoints is a later milestone.
#[component]
fn QuickAction(label: &'static str) -> impl IntoView {
    view! {
        <button class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors">
            {label}
        </button>
    }
}
