//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod loading;
pub mod nav;
pub mod resource_view;

pub use loading::Loading;
pub use nav::Nav;
pub use resource_view::resource_view;
