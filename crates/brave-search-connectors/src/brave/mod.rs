//! Brave Search API adapter

pub mod client;
pub mod format;
pub mod models;

pub use client::{BraveClient, MAX_COUNT, MAX_OFFSET};
pub use models::{DescriptionsResponse, Poi, PoiResponse, WebResult, WebSearchResponse};
