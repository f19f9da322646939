//! Resource view core
//!
//! State, errors and fetch lifecycle shared by every list view, plus the
//! configuration type that tells one view apart from another.

mod error;
mod fetch;
#[cfg(feature = "native")]
mod http;
mod spec;
mod state;
mod view;

pub use error::{FetchError, FetchResult};
pub use fetch::{join_endpoint, parse_items, ResourceFetcher};
#[cfg(feature = "native")]
pub use http::HttpFetcher;
pub use spec::{
    CardFn, CellFn, Column, EmptyStateText, PodiumFn, ResourceSpec, ResourceSpecBuilder,
    DEFAULT_CARD_LIMIT,
};
pub use state::{ListResource, ResourceStatus};
pub use view::{LoadOutcome, ResourceListView};
