//! UniProtKB REST access
//!
//! [`JsonFetcher`] is the transport seam; [`UniprotClient`] drives the two
//! lookup pipelines over it.

pub mod client;
pub mod endpoints;
pub mod fetcher;

pub use client::UniprotClient;
pub use fetcher::{HttpFetcher, JsonFetcher};

#[cfg(test)]
pub(crate) mod test_support;
