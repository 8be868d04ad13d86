//! In-memory fetcher for unit tests

use super::fetcher::JsonFetcher;
use crate::error::{Result, UniprotError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

pub(crate) const ROOT: &str = "http://uniprot.test";

/// Serves canned payloads keyed by `url?k=v&...` (params in call order).
#[derive(Default)]
pub(crate) struct StaticFetcher {
    responses: HashMap<String, Value>,
}

impl StaticFetcher {
    fn key(url: &str, params: &[(&str, &str)]) -> String {
        let query: Vec<String> = params.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        format!("{}?{}", url, query.join("&"))
    }

    pub(crate) fn entry(mut self, accession: &str, payload: Value) -> Self {
        let url = super::endpoints::entry_url(ROOT, accession);
        self.responses
            .insert(Self::key(&url, &[("format", "json")]), payload);
        self
    }

    pub(crate) fn stream(mut self, query: &str, payload: Value) -> Self {
        let url = super::endpoints::stream_url(ROOT);
        self.responses
            .insert(Self::key(&url, &[("query", query), ("format", "json")]), payload);
        self
    }
}

#[async_trait]
impl JsonFetcher for StaticFetcher {
    async fn get_json(&self, url: &str, params: &[(&str, &str)]) -> Result<Value> {
        self.responses
            .get(&Self::key(url, params))
            .cloned()
            .ok_or_else(|| UniprotError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}
