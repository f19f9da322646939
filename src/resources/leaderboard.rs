//! Leaderboard presentation
//!
//! Entries arrive already ranked; the rank shown is the 1-based position in
//! the server order. Nothing here sorts.

use crate::models::LeaderboardEntry;
use crate::render::{Cell, Podium, PodiumPlace, Tone};
use crate::resource::ResourceSpec;

/// Score that fills the progress bar
const FULL_SCORE: f64 = 1000.0;
const PODIUM_SIZE: usize = 3;

/// Leaderboard view. Table and podium only, no card grid.
pub fn leaderboard() -> ResourceSpec<LeaderboardEntry> {
    ResourceSpec::<LeaderboardEntry>::builder("leaderboard")
        .subtitle("See how you rank against other OctoFit members")
        .total_label("Total Members")
        .column("Rank", |rank, _| {
            Cell::badge(format!("{} #{}", rank_medal(rank), rank), rank_tone(rank))
        })
        .column("Member", |rank, e: &LeaderboardEntry| Cell::strong(member(rank, e)))
        .column("Score", |_, e: &LeaderboardEntry| {
            Cell::strong(format!("{} pts", score_text(e.score)))
        })
        .column("Badge", |rank, _| {
            Cell::badge(format!("{} {}", rank_medal(rank), rank_title(rank)), rank_tone(rank))
        })
        .column("Progress", |_, e: &LeaderboardEntry| {
            let percent = progress_percent(e.score);
            Cell::Progress {
                percent,
                label: format!("{}%", percent.round()),
            }
        })
        .podium(podium)
        .empty_state(
            "No Leaderboard Data Available",
            "Start logging activities to appear on the leaderboard!",
            "Log Your First Activity",
        )
        .build()
}

pub fn rank_medal(rank: usize) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "🏅",
    }
}

pub fn rank_title(rank: usize) -> &'static str {
    match rank {
        1 => "Gold",
        2 => "Silver",
        3 => "Bronze",
        _ => "Participant",
    }
}

fn rank_tone(rank: usize) -> Tone {
    match rank {
        1 | 3 => Tone::Warning,
        2 => Tone::Secondary,
        _ => Tone::Primary,
    }
}

/// Progress bar fill, `score / 1000` as a percentage capped to 0..=100
pub fn progress_percent(score: Option<f64>) -> f64 {
    let score = score.filter(|s| s.is_finite()).unwrap_or(0.0);
    (score * 100.0 / FULL_SCORE).clamp(0.0, 100.0)
}

/// Score without a trailing `.0` for whole numbers; 0 when absent
pub fn score_text(score: Option<f64>) -> String {
    match score.filter(|s| s.is_finite()) {
        Some(s) if s.fract() == 0.0 => format!("{:.0}", s),
        Some(s) => s.to_string(),
        None => "0".to_string(),
    }
}

fn member(rank: usize, e: &LeaderboardEntry) -> String {
    e.display_name()
        .map(str::to_string)
        .unwrap_or_else(|| format!("Player {}", rank))
}

/// Top three, shown in the order 2nd, 1st, 3rd
fn podium(entries: &[LeaderboardEntry]) -> Option<Podium> {
    if entries.len() < PODIUM_SIZE {
        return None;
    }

    let place = |rank: usize, title: &str, tone: Tone| {
        let entry = &entries[rank - 1];
        PodiumPlace {
            rank,
            medal: rank_medal(rank).to_string(),
            name: member(rank, entry),
            score: format!("{} pts", score_text(entry.score)),
            title: title.to_string(),
            tone,
        }
    };

    Some(Podium {
        places: vec![
            place(2, "2nd Place", Tone::Secondary),
            place(1, "Champion", Tone::Warning),
            place(3, "3rd Place", Tone::Warning),
        ],
    })
}
