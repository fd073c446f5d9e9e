//! Fallback Datasets
//!
//! Static sample data installed when a live fetch fails, so every view
//! stays populated while the backend is unreachable. Each dataset matches
//! the shape of the corresponding API payload exactly. Designers can update
//! the sample data here without touching any view logic.

use super::model::{DashboardStats, Guild, Loadout, Player};

/// Counters shown when `/api/dashboard/stats/` is unreachable
pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_players: 42,
        total_guilds: 3,
        total_loadouts: 156,
        active_players: 28,
    }
}

/// Sample roster shown when `/api/players/` is unreachable
pub fn players() -> Vec<Player> {
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
            discord_name: "PlayerThree".to_string(),
            game_role: Some("Support".to_string()),
            guild: "Warborne Elite".to_string(),
        },
    ]
}

/// Sample builds shown when `/api/loadouts/` is unreachable
pub fn loadouts() -> Vec<Loadout> {
    vec![
        Loadout {
            id: 1,
            name: "Tank Build".to_string(),
            player: "PlayerOne".to_string(),
            gear_count: 8,
        },
        Loadout {
            id: 2,
            name: "DPS Build".to_string(),
            player: "PlayerTwo".to_string(),
            gear_count: 6,
        },
        Loadout {
            id: 3,
            name: "Support Build".to_string(),
            player: "PlayerThree".to_string(),
            gear_count: 7,
        },
    ]
}

/// Sample guilds shown when `/api/guilds/` is unreachable
pub fn guilds() -> Vec<Guild> {
    vec![
        Guild {
            id: 1,
            name: "Warborne Elite".to_string(),
            member_count: 15,
            description: "Elite guild for experienced players".to_string(),
        },
        Guild {
            id: 2,
            name: "Warborne Warriors".to_string(),
            member_count: 12,
            description: "Warrior-focused guild".to_string(),
        },
        Guild {
            id: 3,
            name: "Warborne Support".to_string(),
            member_count: 8,
            description: "Support and healing focused".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_stats_match_documented_counters() {
        let stats = dashboard_stats();
        assert_eq!(stats.total_players, 42);
        assert_eq!(stats.total_guilds, 3);
        assert_eq!(stats.total_loadouts, 156);
        assert_eq!(stats.active_players, 28);
    }

    #[test]
    fn fallback_loadouts_are_the_three_sample_builds() {
        let summary: Vec<(String, String, u32)> = loadouts()
            .into_iter()
            .map(|l| (l.name, l.player, l.gear_count))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Tank Build".to_string(), "PlayerOne".to_string(), 8),
                ("DPS Build".to_string(), "PlayerTwo".to_string(), 6),
                ("Support Build".to_string(), "PlayerThree".to_string(), 7),
            ]
        );
    }

    #[test]
    fn fallback_roster_is_all_warborne_elite() {
        let roster = players();
        assert_eq!(roster.len(), 3);
        assert!(roster.iter().all(|p| p.guild == "Warborne Elite"));
        assert!(roster.iter().all(|p| p.game_role.is_some()));
    }

    #[test]
    fn fallback_guilds_carry_member_counts() {
        let counts: Vec<u32> = guilds().iter().map(|g| g.member_count).collect();
        assert_eq!(counts, vec![15, 12, 8]);
    }

    #[test]
    fn fallback_ids_are_unique_within_each_collection() {
        fn all_unique(ids: Vec<u32>) -> bool {
            let mut seen = ids.clone();
            seen.sort_unstable();
            seen.dedup();
            seen.len() == ids.len()
        }

        assert!(all_unique(players().iter().map(|p| p.id).collect()));
        assert!(all_unique(loadouts().iter().map(|l| l.id).collect()));
        assert!(all_unique(guilds().iter().map(|g| g.id).collect()));
    }
}
