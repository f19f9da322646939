//! Pages
//!
//! Top-level page components for each route.

pub mod home;
pub mod resources;

pub use home::Home;
pub use resources::{Activities, Leaderboard, Teams, Users, Workouts};
