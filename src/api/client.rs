//! HTTP API Client
//!
//! Functions for communicating with the guild management REST API.
//!
//! Every fetch here is a single unauthenticated GET returning JSON. All
//! failures (network, bad status, undecodable body) collapse into one
//! `String` error; callers decide how to recover.

use gloo_net::http::Request;

use crate::state::model::{DashboardStats, Guild, Loadout, Player};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("warborne_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Issue one GET request and decode the JSON payload.
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Server error: status {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the dashboard counters
pub async fn fetch_stats() -> Result<DashboardStats, String> {
    get_json("/dashboard/stats/").await
}

/// Fetch the full player roster
pub async fn fetch_players() -> Result<Vec<Player>, String> {
    get_json("/players/").await
}

/// Fetch all loadouts
pub async fn fetch_loadouts() -> Result<Vec<Loadout>, String> {
    get_json("/loadouts/").await
}

/// Fetch all guilds
pub async fn fetch_guilds() -> Result<Vec<Guild>, String> {
    get_json("/guilds/").await
}
