//! The five OctoFit resource views
//!
//! Each submodule builds the [`ResourceSpec`] for one resource: its columns,
//! cards, fallbacks and empty state. [`ResourceKind`] names them for the CLI
//! and the UI router.
//!
//! [`ResourceSpec`]: crate::resource::ResourceSpec

mod activities;
mod leaderboard;
mod teams;
mod users;
mod workouts;

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

pub use activities::activities;
pub use leaderboard::{leaderboard, progress_percent, rank_medal, rank_title, score_text};
pub use teams::teams;
pub use users::users;
pub use workouts::{category_icon, difficulty_tone, workouts};

/// One of the five resource lists served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "native", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Activities,
    Workouts,
    Teams,
    Leaderboard,
    Users,
}

impl ResourceKind {
    /// Every resource, in navigation order
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Activities,
        ResourceKind::Workouts,
        ResourceKind::Teams,
        ResourceKind::Leaderboard,
        ResourceKind::Users,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "activities",
            ResourceKind::Workouts => "workouts",
            ResourceKind::Teams => "teams",
            ResourceKind::Leaderboard => "leaderboard",
            ResourceKind::Users => "users",
        }
    }

    /// Path of the list relative to the API base
    pub fn path(&self) -> String {
        format!("{}/", self.name())
    }

    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "Activities",
            ResourceKind::Workouts => "Workouts",
            ResourceKind::Teams => "Teams",
            ResourceKind::Leaderboard => "Leaderboard",
            ResourceKind::Users => "Users",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "🏃",
            ResourceKind::Workouts => "💪",
            ResourceKind::Teams => "👥",
            ResourceKind::Leaderboard => "🏆",
            ResourceKind::Users => "👤",
        }
    }

    /// One-line description used on the home page
    pub fn blurb(&self) -> &'static str {
        match self {
            ResourceKind::Activities => "Track and log your fitness activities",
            ResourceKind::Workouts => "Discover personalized workout routines",
            ResourceKind::Teams => "Join or create fitness teams for group challenges",
            ResourceKind::Leaderboard => "See how you rank against other OctoFit members",
            ResourceKind::Users => "OctoFit community members",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim_matches('/')))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Format an API date as `YYYY-MM-DD`.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` and plain
/// dates. Anything else is shown as received.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%Y-%m-%d").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }

    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_and_paths() {
        assert_eq!(ResourceKind::Leaderboard.path(), "leaderboard/");
        assert_eq!(ResourceKind::from_name("Teams"), Some(ResourceKind::Teams));
        assert_eq!(ResourceKind::from_name("/users/"), Some(ResourceKind::Users));
        assert_eq!(ResourceKind::from_name("profiles"), None);
        assert_eq!(ResourceKind::ALL.len(), 5);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-01T08:30:00Z"), "2024-05-01");
        assert_eq!(format_date("2024-05-01T08:30:00.123456+02:00"), "2024-05-01");
        assert_eq!(format_date("2024-05-01T08:30:00.123456"), "2024-05-01");
        assert_eq!(format_date("2024-05-01"), "2024-05-01");
        assert_eq!(format_date("last tuesday"), "last tuesday");
    }
}
