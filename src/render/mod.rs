//! Rendering
//!
//! `render` maps the state of one resource view to a [`ViewTree`]. It is a
//! pure function: the same state and spec always give the same tree.

mod text;
mod tree;

pub use text::to_text;
pub use tree::{
    Action, ActionKind, Card, CardField, Cell, EmptyState, ErrorPanel, Listing, LoadingIndicator,
    Podium, PodiumPlace, Row, Table, Tone, ViewTree,
};

use crate::resource::{ListResource, ResourceSpec, ResourceStatus};

/// Render the current state of a resource view
pub fn render<T>(state: &ListResource<T>, spec: &ResourceSpec<T>) -> ViewTree {
    match state.status() {
        ResourceStatus::Idle | ResourceStatus::Loading => ViewTree::Loading(LoadingIndicator {
            label: format!("Loading {}...", spec.name()),
        }),
        ResourceStatus::Failed => ViewTree::Failed(ErrorPanel {
            heading: format!("Error Loading {}", spec.title()),
            message: state
                .last_error()
                .unwrap_or("Unknown error")
                .to_string(),
            retry: Action::retry(),
        }),
        ResourceStatus::Loaded if state.items().is_empty() => ViewTree::Empty(spec.empty_state()),
        ResourceStatus::Loaded => {
            let items = state.items();
            ViewTree::Populated(Listing {
                title: spec.title().to_string(),
                subtitle: spec.subtitle().to_string(),
                refresh: Action::refresh(),
                podium: spec.podium(items),
                table: spec.table(items),
                cards: spec.cards(items),
                total: items.len(),
                total_label: spec.total_label().to_string(),
            })
        }
    }
}
