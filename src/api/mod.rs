//! Backend API
//!
//! HTTP access to the guild management REST API.

pub mod client;

pub use client::{fetch_guilds, fetch_loadouts, fetch_players, fetch_stats};
