//! Players Page
//!
//! Player roster with client-side search over Discord names.

use leptos::*;

use crate::api;
use crate::components::LoadingCard;
use crate::state::fallback;
use crate::state::loader::load_on_mount;
use crate::state::model::Player;

/// Case-insensitive substring filter over Discord display names.
///
/// Preserves the roster's relative order; an empty term returns the full
/// roster unchanged. Purely local, no backend round-trip.
fn filter_players(players: &[Player], term: &str) -> Vec<Player> {
    if term.is_empty() {
        return players.to_vec();
    }
    let needle = term.to_lowercase();
    players
        .iter()
        .filter(|player| player.discord_name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

fn roster_heading(count: usize) -> String {
    format!("Player List ({} players)", count)
}

/// Badge color per role tag; unknown tags share a neutral color.
fn role_color(role: &str) -> &'static str {
    match role.to_lowercase().as_str() {
        "tank" => "bg-blue-500",
        "dps" => "bg-red-500",
        "support" => "bg-green-500",
        _ => "bg-gray-500",
    }
}

/// Player management page
#[component]
pub fn Players() -> impl IntoView {
    let players = create_rw_signal(Vec::<Player>::new());
    let loading = create_rw_signal(true);

    load_on_mount(
        api::fetch_players,
        fallback::players,
        "players",
        players,
        loading,
    );

    view! {
        {move || {
            if loading.get() {
                view! { <LoadingCard label="Loading Players..." /> }.into_view()
            } else {
                view! { <PlayersLoaded players=players /> }.into_view()
            }
        }}
    }
}

/// Populated roster view with the search box
#[component]
fn PlayersLoaded(players: RwSignal<Vec<Player>>) -> impl IntoView {
    let (search_term, set_search_term) = create_signal(String::new());

    // Recomputed on every keystroke
    let filtered = create_memo(move |_| filter_players(&players.get(), &search_term.get()));

    view! {
        <div class="space-y-8">
            // Header with search
            <div class="bg-gray-800 rounded-xl p-6">
                <h1 class="text-3xl font-bold">"👥 Player Management"</h1>
                <input
                    type="text"
                    placeholder="Search players..."
                    prop:value=move || search_term.get()
                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 mt-4
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            // Roster table
            <div class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {move || roster_heading(filtered.get().len())}
                </h2>

                <table class="w-full text-left">
                    <thead>
                        <tr class="text-gray-400 text-sm border-b border-gray-700">
                            <th class="py-2">"Discord Name"</th>
                            <th class="py-2">"Game Role"</th>
                            <th class="py-2">"Guild"</th>
                            <th class="py-2">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered.get().into_iter().map(|player| {
                                view! { <PlayerRow player=player /> }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Single roster row
#[component]
fn PlayerRow(player: Player) -> impl IntoView {
    view! {
        <tr class="border-b border-gray-700 last:border-0">
            <td class="py-3">{player.discord_name}</td>
            <td class="py-3"><RoleBadge role=player.game_role /></td>
            <td class="py-3">{player.guild}</td>
            <td class="py-3">
                <button class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded text-sm mr-2">
                    "Edit"
                </button>
                <button class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm">
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

/// Role badge; players without a role tag get a muted placeholder.
#[component]
fn RoleBadge(role: Option<String>) -> impl IntoView {
    match role {
        Some(role) => {
            let class = format!(
                "text-xs px-2 py-0.5 rounded-full text-white {}",
                role_color(&role)
            );
            view! { <span class=class>{role}</span> }.into_view()
        }
        None => view! { <span class="text-gray-500 text-xs">"—"</span> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Vec<Player> {
        vec![
            Player {
                id: 1,
                discord_name: "PlayerOne".to_string(),
                game_role: Some("Tank".to_string()),
                guild: "Warborne Elite".to_string(),
            },
            Player {
                id: 2,
                discord_name: "PlayerTwo".to_string(),
                game_role: Some("DPS".to_string()),
                guild: "Warborne Elite".to_string(),
            },
            Player {
                id: 3,
                discord_name: "Scout".to_string(),
                game_role: None,
                guild: "Warborne Scouts".to_string(),
            },
        ]
    }

    #[test]
    fn empty_term_returns_full_roster() {
        let roster = sample_roster();
        assert_eq!(filter_players(&roster, ""), roster);
    }

    #[test]
    fn filter_is_case_insensitive() {
        let hits = filter_players(&sample_roster(), "playerone");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].discord_name, "PlayerOne");
    }

    #[test]
    fn filter_preserves_relative_order() {
        let hits = filter_players(&sample_roster(), "player");
        let names: Vec<&str> = hits.iter().map(|p| p.discord_name.as_str()).collect();
        assert_eq!(names, vec!["PlayerOne", "PlayerTwo"]);
    }

    #[test]
    fn filter_keeps_players_without_a_role() {
        let hits = filter_players(&sample_roster(), "scout");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].game_role, None);
    }

    #[test]
    fn no_match_yields_empty_roster() {
        assert!(filter_players(&sample_roster(), "zzz").is_empty());
    }

    #[test]
    fn roster_heading_shows_live_count() {
        assert_eq!(roster_heading(2), "Player List (2 players)");
        assert_eq!(roster_heading(0), "Player List (0 players)");
    }

    #[test]
    fn role_colors_are_case_insensitive_with_neutral_default() {
        assert_eq!(role_color("Tank"), "bg-blue-500");
        assert_eq!(role_color("dps"), "bg-red-500");
        assert_eq!(role_color("SUPPORT"), "bg-green-500");
        assert_eq!(role_color("Healer"), "bg-gray-500");
    }
}
