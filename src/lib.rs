//! # OctoFit
//!
//! Dashboard for the OctoFit Tracker school fitness API. Five resource views
//! (activities, workouts, teams, leaderboard, users) each fetch one list and
//! render it as a table and a card grid.
//!
//! ## Modules
//!
//! - [`models`]: API item types, read leniently
//! - [`resource`]: list state, fetch lifecycle and the generic view
//! - [`render`]: pure render tree plus a terminal renderer
//! - [`resources`]: the five view configurations
//! - `config`, `logging`, `sample_api`: native host support (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use octofit::render::to_text;
//! use octofit::resource::{HttpFetcher, ResourceListView};
//! use octofit::resources;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Arc::new(HttpFetcher::new(Duration::from_secs(30))?);
//!     let view = ResourceListView::mount(
//!         resources::leaderboard(),
//!         fetcher,
//!         "http://localhost:8000/api",
//!     );
//!
//!     view.load().await;
//!     print!("{}", to_text(&view.render()));
//!
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod render;
pub mod resource;
pub mod resources;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod sample_api;

pub use models::{Activity, LeaderboardEntry, Team, User, Workout};
pub use render::ViewTree;
pub use resource::{
    FetchError, ListResource, LoadOutcome, ResourceFetcher, ResourceListView, ResourceSpec,
    ResourceStatus,
};
pub use resources::ResourceKind;
