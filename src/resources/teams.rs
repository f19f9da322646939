use crate::models::Team;
use crate::render::{Card, Cell, Tone};
use crate::resource::ResourceSpec;

use super::format_date;

const DEFAULT_CATEGORY: &str = "Fitness";

/// Teams view
pub fn teams() -> ResourceSpec<Team> {
    ResourceSpec::<Team>::builder("teams")
        .subtitle("Join or create fitness teams for group challenges")
        .column("#", |position, _| {
            Cell::badge(position.to_string(), Tone::Secondary)
        })
        .column("Team Name", |position, t: &Team| Cell::strong(name(position, t)))
        .column("Members", |_, t: &Team| Cell::badge(members(t), Tone::Info))
        .column("Category", |_, t: &Team| Cell::badge(category(t), Tone::Success))
        .column("Created", |_, t: &Team| Cell::muted(created(t)))
        .card(|position, t: &Team| {
            Card::new(name(position, t))
                .line(Cell::or_muted(t.description.as_deref(), "No description available"))
                .badge(Cell::badge(members(t), Tone::Info))
                .badge(Cell::badge(category(t), Tone::Success))
                .field("Created", Cell::muted(created(t)))
        })
        .empty_state(
            "No Teams Found",
            "Create a team to get started with group fitness challenges!",
            "Create Your First Team",
        )
        .build()
}

fn name(position: usize, t: &Team) -> String {
    t.name.clone().unwrap_or_else(|| format!("Team {}", position))
}

fn members(t: &Team) -> String {
    format!("{} members", t.member_count())
}

fn category(t: &Team) -> &str {
    t.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
}

fn created(t: &Team) -> String {
    t.created_date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| "Unknown".to_string())
}
