//! Resource Pages
//!
//! One page per resource list, each a thin wrapper over the shared view.

use leptos::*;
use octofit::resources;

use crate::components::resource_view;

#[component]
pub fn Activities() -> impl IntoView {
    resource_view(resources::activities())
}

#[component]
pub fn Workouts() -> impl IntoView {
    resource_view(resources::workouts())
}

#[component]
pub fn Teams() -> impl IntoView {
    resource_view(resources::teams())
}

/// Ranked members with the top-three podium
#[component]
pub fn Leaderboard() -> impl IntoView {
    resource_view(resources::leaderboard())
}

#[component]
pub fn Users() -> impl IntoView {
    resource_view(resources::users())
}
