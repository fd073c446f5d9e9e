//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod stat_card;

pub use loading::LoadingCard;
pub use nav::Nav;
pub use stat_card::StatCard;
