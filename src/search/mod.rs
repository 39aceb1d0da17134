//! Web search retrieval.
//!
//! The feedback loop only sees the [`SearchClient`] trait; the
//! [`GoogleSearchClient`] implementation talks to the Google Custom Search
//! JSON API.

pub mod client;
pub mod google;

pub use client::{SearchClient, SearchResult};
pub use google::{GoogleSearchClient, GoogleSearchConfig};
