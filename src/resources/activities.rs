use crate::models::Activity;
use crate::render::{Card, Cell, Tone};
use crate::resource::ResourceSpec;

use super::format_date;

const DEFAULT_TYPE: &str = "General Activity";
const NO_DURATION: &str = "N/A";
const NO_DESCRIPTION: &str = "No description available";
const NO_DATE: &str = "Today";

/// Activities view
pub fn activities() -> ResourceSpec<Activity> {
    ResourceSpec::<Activity>::builder("activities")
        .subtitle("Track and log your fitness activities")
        .column("#", |position, _| {
            Cell::badge(position.to_string(), Tone::Secondary)
        })
        .column("Type", |_, a: &Activity| Cell::badge(activity_type(a), Tone::Info))
        .column("Duration", |_, a: &Activity| {
            Cell::strong(a.duration.as_deref().unwrap_or(NO_DURATION))
        })
        .column("Description", |_, a: &Activity| {
            Cell::text(a.description.as_deref().unwrap_or(NO_DESCRIPTION))
        })
        .column("Date", |_, a: &Activity| Cell::muted(date(a)))
        .card(|_, a: &Activity| {
            let mut card = Card::new(activity_type(a))
                .field("Duration", Cell::or_muted(a.duration.as_deref(), NO_DURATION))
                .field("Description", Cell::text(a.description.as_deref().unwrap_or(NO_DESCRIPTION)))
                .field("Date", Cell::muted(date(a)));
            if let Some(username) = a.user.as_ref().and_then(|u| u.username.as_deref()) {
                card = card.field("Member", Cell::text(username));
            }
            card
        })
        .empty_state(
            "No Activities Found",
            "Start your fitness journey by logging your first activity!",
            "Log Activity",
        )
        .build()
}

fn activity_type(a: &Activity) -> &str {
    a.activity_type.as_deref().unwrap_or(DEFAULT_TYPE)
}

fn date(a: &Activity) -> String {
    a.date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| NO_DATE.to_string())
}
