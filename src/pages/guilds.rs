//! Guilds Page
//!
//! Guild cards with member counts and action stubs.

use leptos::*;

use crate::api;
use crate::components::LoadingCard;
use crate::state::fallback;
use crate::state::loader::load_on_mount;
use crate::state::model::Guild;

fn guild_heading(count: usize) -> String {
    format!("Guild List ({} guilds)", count)
}

/// Guild management page
#[component]
pub fn Guilds() -> impl IntoView {
    let guilds = create_rw_signal(Vec::<Guild>::new());
    let loading = create_rw_signal(true);

    load_on_mount(
        api::fetch_guilds,
        fallback::guilds,
        "guilds",
        guilds,
        loading,
    );

    view! {
        {move || {
            if loading.get() {
                view! { <LoadingCard label="Loading Guilds..." /> }.into_view()
            } else {
                view! { <GuildsLoaded guilds=guilds /> }.into_view()
            }
        }}
    }
}

/// Populated guild grid
#[component]
fn GuildsLoaded(guilds: RwSignal<Vec<Guild>>) -> impl IntoView {
    view! {
        <div class="space-y-8">
            // Page header
            <div class="bg-gray-800 rounded-xl p-6">
                <h1 class="text-3xl font-bold">"🏰 Guild Management"</h1>
                <p class="text-gray-400 mt-1">"Manage guild information and member statistics"</p>
            </div>

            // Guild grid with live count
            <div class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || guild_heading(guilds.get().len())}
                </h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                    {move || {
                        guilds.get().into_iter().map(|guild| {
                            view! { <GuildCard guild=guild /> }
                        }).collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

/// Single guild card; actions are placeholders until mutations are wired.
#[component]
fn GuildCard(guild: Guild) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4 border border-gray-600">
            <h3 class="font-semibold">{guild.name}</h3>
            <p class="text-gray-400 text-sm mt-2">"Members: "{guild.member_count}</p>
            <p class="text-gray-400 text-sm">"Description: "{guild.description}</p>

            <div class="flex space-x-2 mt-4">
                <button class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded text-sm">
                    "View Members"
                </button>
                <button class="px-3 py-1 bg-gray-600 hover:bg-gray-500 rounded text-sm">
                    "Edit Guild"
                </button>
                <button class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm">
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guild_heading_shows_live_count() {
        assert_eq!(guild_heading(3), "Guild List (3 guilds)");
        assert_eq!(guild_heading(1), "Guild List (1 guilds)");
    }
}
