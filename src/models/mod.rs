//! Resource Models
//!
//! Item types for the five OctoFit collections. Every field is optional and
//! read leniently so that a sparse or oddly-typed object from the API still
//! renders with fallback values instead of failing the whole list.

mod lenient;
mod types;

pub use lenient::text_of;
pub use types::{Activity, LeaderboardEntry, Team, User, Workout};
