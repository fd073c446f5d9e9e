//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod guilds;
pub mod loadouts;
pub mod players;

pub use dashboard::Dashboard;
pub use guilds::Guilds;
pub use loadouts::Loadouts;
pub use players::Players;
