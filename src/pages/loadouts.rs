//! Loadouts Page
//!
//! Gear loadout cards with per-loadout action stubs.

use leptos::*;

use crate::api;
use crate::components::LoadingCard;
use crate::state::fallback;
use crate::state::loader::load_on_mount;
use crate::state::model::Loadout;

fn loadout_heading(count: usize) -> String {
    format!("Loadout List ({} loadouts)", count)
}

/// Loadout management page
#[component]
pub fn Loadouts() -> impl IntoView {
    let loadouts = create_rw_signal(Vec::<Loadout>::new());
    let loading = create_rw_signal(true);

    load_on_mount(
        api::fetch_loadouts,
        fallback::loadouts,
        "loadouts",
        loadouts,
        loading,
    );

    view! {
        {move || {
            if loading.get() {
                view! { <LoadingCard label="Loading Loadouts..." /> }.into_view()
            } else {
                view! { <LoadoutsLoaded loadouts=loadouts /> }.into_view()
            }
        }}
    }
}

/// Populated loadout grid
#[component]
fn LoadoutsLoaded(loadouts: RwSignal<Vec<Loadout>>) -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div class="bg-gray-800 rounded-xl p-6">
                <h1 class="text-3xl font-bold">"⚔️ Loadout Management"</h1>
                <p class="text-gray-400 mt-1">"Manage player loadouts and gear configurations"</p>
            </div>

            // Loadout grid with live count
            <div class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || loadout_heading(loadouts.get().len())}
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                    {move || {
                        loadouts.get().into_iter().map(|loadout| {
                            view! { <LoadoutCard loadout=loadout /> }
                        }).collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

/// Single loadout card; actions are placeholders until mutations are wired.
#[component]
fn LoadoutCard(loadout: Loadout) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4 border border-gray-600">
            <h3 class="font-semibold">{loadout.name}</h3>
            <p class="text-gray-400 text-sm mt-2">"Player: "{loadout.player}</p>
            <p class="text-gray-400 text-sm">"Gear Items: "{loadout.gear_count}</p>

            <div class="flex space-x-2 mt-4">
                <button class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded text-sm">
                    "View"
                </button>
                <button class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded text-sm">
                    "Edit"
                </button>
                <button class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm">
                    "Delete"
                </button>
            </div>
        </div>
    }
}
