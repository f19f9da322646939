use crate::models::Workout;
use crate::render::{Card, Cell, Tone};
use crate::resource::ResourceSpec;

const DEFAULT_CATEGORY: &str = "General";
const DEFAULT_DIFFICULTY: &str = "Medium";
const NO_DURATION: &str = "Not specified";
const DESCRIPTION_PREVIEW: usize = 50;

/// Workouts view
pub fn workouts() -> ResourceSpec<Workout> {
    ResourceSpec::<Workout>::builder("workouts")
        .subtitle("Discover personalized workout routines")
        .column("#", |position, _| {
            Cell::badge(position.to_string(), Tone::Secondary)
        })
        .column("Workout", |position, w: &Workout| Cell::strong(title(position, w)))
        .column("Category", |_, w: &Workout| {
            Cell::text(format!("{} {}", category_icon(w.category.as_deref()), category(w)))
        })
        .column("Difficulty", |_, w: &Workout| difficulty_badge(w))
        .column("Duration", |_, w: &Workout| {
            Cell::strong(w.duration.as_deref().unwrap_or(NO_DURATION))
        })
        .column("Description", |_, w: &Workout| match w.description.as_deref() {
            Some(description) => Cell::text(preview(description)),
            None => Cell::muted("No description"),
        })
        .card(|position, w: &Workout| {
            Card::new(format!("{} {}", category_icon(w.category.as_deref()), title(position, w)))
                .badge(difficulty_badge(w))
                .badge(Cell::badge(category(w), Tone::Info))
                .field("Duration", Cell::text(w.duration.as_deref().unwrap_or(NO_DURATION)))
                .line(Cell::or_muted(w.description.as_deref(), "No description available"))
        })
        .empty_state(
            "No Workouts Found",
            "Create your first workout to get started on your fitness journey!",
            "Create Your First Workout",
        )
        .build()
}

/// Badge tone for a difficulty level
pub fn difficulty_tone(difficulty: Option<&str>) -> Tone {
    match difficulty.map(str::to_lowercase).as_deref() {
        Some("easy") => Tone::Success,
        Some("medium") => Tone::Warning,
        Some("hard") => Tone::Danger,
        _ => Tone::Secondary,
    }
}

pub fn category_icon(category: Option<&str>) -> &'static str {
    match category.map(str::to_lowercase).as_deref() {
        Some("cardio") => "🏃",
        Some("yoga") => "🧘",
        Some("sports") => "⚽",
        _ => "💪",
    }
}

fn title(position: usize, w: &Workout) -> String {
    w.title
        .clone()
        .unwrap_or_else(|| format!("Workout {}", position))
}

fn category(w: &Workout) -> &str {
    w.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
}

fn difficulty_badge(w: &Workout) -> Cell {
    Cell::badge(
        w.difficulty.as_deref().unwrap_or(DEFAULT_DIFFICULTY),
        difficulty_tone(w.difficulty.as_deref()),
    )
}

/// First 50 characters followed by `...` when longer
fn preview(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_PREVIEW {
        let head: String = description.chars().take(DESCRIPTION_PREVIEW).collect();
        format!("{}...", head)
    } else {
        description.to_string()
    }
}
