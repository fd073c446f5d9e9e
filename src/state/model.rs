//! Domain Records
//!
//! Plain data records mirroring the backend API payloads. Collections keep
//! server response order; nothing is transformed on load.

/// A guild member as returned by `/api/players/`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Player {
    pub id: u32,
    pub discord_name: String,
    /// Open-ended role tag (Tank, DPS, Support, ...); may be absent
    #[serde(default)]
    pub game_role: Option<String>,
    /// Guild name reference, not an enforced foreign key at this layer
    pub guild: String,
}

/// A gear loadout as returned by `/api/loadouts/`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Loadout {
    pub id: u32,
    pub name: String,
    pub player: String,
    pub gear_count: u32,
}

/// A guild as returned by `/api/guilds/`
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Guild {
    pub id: u32,
    pub name: String,
    pub member_count: u32,
    pub description: String,
}

/// Aggregate counters from `/api/dashboard/stats/`
///
/// Recomputed wholesale by the server on every fetch. Counters missing
/// from the payload read as zero instead of failing the whole record.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub total_players: u32,
    #[serde(default)]
    pub total_guilds: u32,
    #[serde(default)]
    pub total_loadouts: u32,
    #[serde(default)]
    pub active_players: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_payload_loads_verbatim() {
        let payload = r#"[{"id":1,"discord_name":"Foo","game_role":"Tank","guild":"G1"}]"#;
        let players: Vec<Player> = serde_json::from_str(payload).unwrap();
        assert_eq!(
            players,
            vec![Player {
                id: 1,
                discord_name: "Foo".to_string(),
                game_role: Some("Tank".to_string()),
                guild: "G1".to_string(),
            }]
        );
    }

    #[test]
    fn player_without_role_still_loads() {
        let payload = r#"{"id":7,"discord_name":"NoRole","guild":"G1"}"#;
        let player: Player = serde_json::from_str(payload).unwrap();
        assert_eq!(player.game_role, None);
    }

    #[test]
    fn players_keep_server_order() {
        let payload = r#"[
            {"id":3,"discord_name":"C","guild":"G"},
            {"id":1,"discord_name":"A","guild":"G"},
            {"id":2,"discord_name":"B","guild":"G"}
        ]"#;
        let players: Vec<Player> = serde_json::from_str(payload).unwrap();
        let ids: Vec<u32> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn loadout_payload_loads_verbatim() {
        let payload = r#"{"id":2,"name":"DPS Build","player":"PlayerTwo","gear_count":6}"#;
        let loadout: Loadout = serde_json::from_str(payload).unwrap();
        assert_eq!(loadout.name, "DPS Build");
        assert_eq!(loadout.player, "PlayerTwo");
        assert_eq!(loadout.gear_count, 6);
    }

    #[test]
    fn stats_payload_loads_verbatim() {
        let payload =
            r#"{"totalPlayers":10,"totalGuilds":2,"totalLoadouts":5,"activePlayers":7}"#;
        let stats: DashboardStats = serde_json::from_str(payload).unwrap();
        assert_eq!(stats.total_players, 10);
        assert_eq!(stats.total_guilds, 2);
        assert_eq!(stats.total_loadouts, 5);
        assert_eq!(stats.active_players, 7);
    }

    #[test]
    fn missing_stats_counters_read_as_zero() {
        let payload = r#"{"totalPlayers":10}"#;
        let stats: DashboardStats = serde_json::from_str(payload).unwrap();
        assert_eq!(stats.total_players, 10);
        assert_eq!(stats.total_guilds, 0);
        assert_eq!(stats.total_loadouts, 0);
        assert_eq!(stats.active_players, 0);
    }
}
