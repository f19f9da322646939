//! API access

pub mod client;

pub use client::{fetch_list, get_api_base, set_api_base, DEFAULT_API_BASE};
