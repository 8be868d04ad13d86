//! UniProtKB client
//!
//! Two pipelines reach the service:
//!
//! - by accession: `GET {root}/uniprotkb/{accession}?format=json` answers with a
//!   single entry, returned as a [`Record`]
//! - by foreign id: `GET {root}/uniprotkb/stream?query={id}&format=json` answers
//!   with a results envelope, returned as [`SearchResults`] and unwrapped by the
//!   `foreign_*` operations
//!
//! Every extracting operation comes in two flavours. `try_*` returns shape and
//! absence problems as [`UniprotError`]; the plain name logs them and returns
//! the empty value (`""`, `{}` or an empty table). Transport errors propagate
//! from both.

use crate::api::endpoints::{self, FORMAT_JSON};
use crate::api::fetcher::{HttpFetcher, JsonFetcher};
use crate::config::ClientConfig;
use crate::error::{Result, UniprotError};
use crate::extract;
use crate::lenient;
use crate::model::{Record, SearchResults};
use crate::tables::{CrossReferenceTable, FeatureTable};
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};

const OP_FETCH_FIELD: &str = "fetch_field";
const OP_FOREIGN_RECORD: &str = "foreign_record";
const OP_FOREIGN_ENTRY: &str = "foreign_entry";

/// Client for the UniProtKB REST service
pub struct UniprotClient {
    fetcher: Box<dyn JsonFetcher>,
    service_root: String,
}

impl std::fmt::Debug for UniprotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniprotClient")
            .field("service_root", &self.service_root)
            .finish_non_exhaustive()
    }
}

impl UniprotClient {
    /// Create an HTTP client from a configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_fetcher(config.service_root(), fetcher))
    }

    /// Create a client over any fetcher
    pub fn with_fetcher(service_root: impl Into<String>, fetcher: impl JsonFetcher + 'static) -> Self {
        let service_root: String = service_root.into();
        Self {
            fetcher: Box::new(fetcher),
            service_root: service_root.trim_end_matches('/').to_string(),
        }
    }

    /// Get the service root
    pub fn service_root(&self) -> &str {
        &self.service_root
    }

    // ------------------------------------------------------------------------
    // Accession pipeline
    // ------------------------------------------------------------------------

    /// Fetch the entry for an accession.
    ///
    /// A body that is not a JSON object, or not JSON at all, is treated as no
    /// entry. Transport and status errors propagate.
    pub async fn fetch_by_accession(&self, accession: &str) -> Result<Record> {
        let url = endpoints::entry_url(&self.service_root, accession);
        let payload = match self.fetcher.get_json(&url, &[FORMAT_JSON]).await {
            Ok(payload) => payload,
            Err(UniprotError::JsonParse(e)) => {
                warn!(identifier = %accession, error = %e, "Entry body is not JSON, treating as absent");
                return Ok(Record::empty());
            }
            Err(e) => return Err(e),
        };

        Ok(Record::from_value(payload).unwrap_or_else(|| {
            warn!(identifier = %accession, "Entry payload is not a JSON object, treating as absent");
            Record::empty()
        }))
    }

    /// One top-level field of the entry
    pub async fn try_fetch_field(&self, accession: &str, field: &str) -> Result<Value> {
        let record = self.fetch_by_accession(accession).await?;
        record
            .get(field)
            .cloned()
            .ok_or_else(|| UniprotError::missing(OP_FETCH_FIELD, accession, format!("field '{}'", field)))
    }

    /// One top-level field of the entry, or `{}`
    pub async fn fetch_field(&self, accession: &str, field: &str) -> Result<Value> {
        lenient::degrade_with(self.try_fetch_field(accession, field).await, || {
            Value::Object(Map::new())
        })
    }

    /// Amino-acid sequence of the entry
    pub async fn try_sequence(&self, accession: &str) -> Result<String> {
        let record = self.fetch_by_accession(accession).await?;
        extract::try_sequence(&record, accession)
    }

    /// Amino-acid sequence, or `""`
    pub async fn sequence(&self, accession: &str) -> Result<String> {
        lenient::degrade(self.try_sequence(accession).await)
    }

    /// Feature table of the entry restricted to `types`
    pub async fn try_features<S: AsRef<str> + Sync>(
        &self,
        accession: &str,
        types: &[S],
    ) -> Result<FeatureTable> {
        let record = self.fetch_by_accession(accession).await?;
        extract::try_features(&record, accession, types)
    }

    /// Feature table restricted to `types` (all rows when `types` is empty)
    pub async fn features<S: AsRef<str> + Sync>(
        &self,
        accession: &str,
        types: &[S],
    ) -> Result<FeatureTable> {
        lenient::degrade(self.try_features(accession, types).await)
    }

    /// Cross-reference table of the entry
    pub async fn try_cross_references(&self, accession: &str) -> Result<CrossReferenceTable> {
        let record = self.fetch_by_accession(accession).await?;
        extract::try_cross_references(&record, accession)
    }

    /// Cross-reference table, empty when the entry has none
    pub async fn cross_references(&self, accession: &str) -> Result<CrossReferenceTable> {
        lenient::degrade(self.try_cross_references(accession).await)
    }

    // ------------------------------------------------------------------------
    // Foreign-id pipeline
    // ------------------------------------------------------------------------

    /// Search the stream endpoint for a foreign id (e.g. an Ensembl ENST/ENSP).
    ///
    /// Returns `{}` when nothing matched or the body is not JSON, the untouched
    /// envelope otherwise.
    pub async fn fetch_by_foreign_id(&self, foreign_id: &str) -> Result<SearchResults> {
        let url = endpoints::stream_url(&self.service_root);
        let payload = match self
            .fetcher
            .get_json(&url, &[("query", foreign_id.trim()), FORMAT_JSON])
            .await
        {
            Ok(payload) => payload,
            Err(UniprotError::JsonParse(e)) => {
                warn!(identifier = %foreign_id, error = %e, "Search body is not JSON, treating as no results");
                return Ok(SearchResults::empty());
            }
            Err(e) => return Err(e),
        };

        let results = SearchResults::from_value(payload);
        debug!(identifier = %foreign_id, results = results.results().len(), "Stream search done");
        Ok(results)
    }

    /// First search result for a foreign id
    pub async fn try_foreign_record(&self, foreign_id: &str) -> Result<Record> {
        let results = self.fetch_by_foreign_id(foreign_id).await?;
        if results.is_empty() {
            return Err(UniprotError::missing(OP_FOREIGN_RECORD, foreign_id, "results"));
        }
        results.first_record().ok_or_else(|| {
            UniprotError::shape(OP_FOREIGN_RECORD, foreign_id, "first result is not an object")
        })
    }

    /// Named top-level entry of the first search result.
    ///
    /// Strings come back as-is; other JSON values as compact JSON text. A
    /// `null` value counts as absent.
    pub async fn try_foreign_entry(&self, foreign_id: &str, entry: &str) -> Result<String> {
        let record = self.try_foreign_record(foreign_id).await?;
        match record.get(entry) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Null) | None => Err(UniprotError::missing(
                OP_FOREIGN_ENTRY,
                foreign_id,
                format!("'{}' key in response", entry),
            )),
            Some(other) => Ok(other.to_string()),
        }
    }

    /// Named entry of the first search result, or `""`
    pub async fn foreign_entry(&self, foreign_id: &str, entry: &str) -> Result<String> {
        lenient::degrade(self.try_foreign_entry(foreign_id, entry).await)
    }

    /// Sequence of the first search result
    pub async fn try_foreign_sequence(&self, foreign_id: &str) -> Result<String> {
        let record = self.try_foreign_record(foreign_id).await?;
        extract::try_sequence(&record, foreign_id)
    }

    /// Sequence of the first search result, or `""`
    pub async fn foreign_sequence(&self, foreign_id: &str) -> Result<String> {
        lenient::degrade(self.try_foreign_sequence(foreign_id).await)
    }

    /// Feature table of the first search result restricted to `types`
    pub async fn try_foreign_features<S: AsRef<str> + Sync>(
        &self,
        foreign_id: &str,
        types: &[S],
    ) -> Result<FeatureTable> {
        let record = self.try_foreign_record(foreign_id).await?;
        extract::try_features(&record, foreign_id, types)
    }

    /// Feature table of the first search result, empty when there is none
    pub async fn foreign_features<S: AsRef<str> + Sync>(
        &self,
        foreign_id: &str,
        types: &[S],
    ) -> Result<FeatureTable> {
        lenient::degrade(self.try_foreign_features(foreign_id, types).await)
    }

    /// Cross-reference table of the first search result
    pub async fn try_foreign_cross_references(&self, foreign_id: &str) -> Result<CrossReferenceTable> {
        let record = self.try_foreign_record(foreign_id).await?;
        extract::try_cross_references(&record, foreign_id)
    }

    /// Cross-reference table of the first search result, empty when there is none
    pub async fn foreign_cross_references(&self, foreign_id: &str) -> Result<CrossReferenceTable> {
        lenient::degrade(self.try_foreign_cross_references(foreign_id).await)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::api::test_support::{StaticFetcher, ROOT};
    use serde_json::json;

    fn tp53_entry() -> Value {
        json!({
            "primaryAccession": "P04637",
            "annotationScore": 5.0,
            "sequence": {"value": "MEEPQSDPSV", "length": 10},
            "features": [
                {"type": "Domain", "location": {"start": {"value": 94}, "end": {"value": 292}}, "description": "DNA-binding"},
                {"type": "Region", "location": {"start": {"value": 1}, "end": {"value": 83}}, "description": "Interaction with HRMT1L2"}
            ],
            "uniProtKBCrossReferences": [
                {"database": "PDB", "id": "1A1U", "properties": []},
                {"database": "Ensembl", "id": "ENST00000269305.9", "properties": []}
            ]
        })
    }

    fn client(fetcher: StaticFetcher) -> UniprotClient {
        UniprotClient::with_fetcher(ROOT, fetcher)
    }

    #[tokio::test]
    async fn test_fetch_by_accession_returns_object_as_is() {
        let c = client(StaticFetcher::default().entry("P04637", tp53_entry()));
        let record = c.fetch_by_accession("P04637").await.unwrap();
        assert_eq!(record.into_value(), tp53_entry());
    }

    #[tokio::test]
    async fn test_fetch_by_accession_non_object_is_empty() {
        let c = client(StaticFetcher::default().entry("P04637", json!(["not", "an", "entry"])));
        assert!(c.fetch_by_accession("P04637").await.unwrap().is_empty());
        assert_eq!(c.sequence("P04637").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_transport_errors_propagate_from_lenient_calls() {
        let c = client(StaticFetcher::default());
        assert!(matches!(
            c.sequence("P99999").await,
            Err(UniprotError::Status { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_field() {
        let c = client(StaticFetcher::default().entry("P04637", tp53_entry()));
        assert_eq!(
            c.fetch_field("P04637", "primaryAccession").await.unwrap(),
            json!("P04637")
        );
        assert_eq!(c.fetch_field("P04637", "comments").await.unwrap(), json!({}));
        assert!(c
            .try_fetch_field("P04637", "comments")
            .await
            .unwrap_err()
            .is_missing());
    }

    #[tokio::test]
    async fn test_accession_extractors() {
        let c = client(StaticFetcher::default().entry("P04637", tp53_entry()));
        assert_eq!(c.sequence("P04637").await.unwrap(), "MEEPQSDPSV");
        assert_eq!(c.features("P04637", &["Domain"]).await.unwrap().len(), 1);
        assert_eq!(c.cross_references("P04637").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_by_foreign_id_no_results_is_empty_object() {
        let c = client(StaticFetcher::default().stream("ENST000", json!({"results": []})));
        let results = c.fetch_by_foreign_id("ENST000").await.unwrap();
        assert_eq!(results.into_value(), json!({}));
    }

    #[tokio::test]
    async fn test_fetch_by_foreign_id_keeps_envelope() {
        let payload = json!({"results": [tp53_entry()]});
        let c = client(StaticFetcher::default().stream("ENST00000269305", payload.clone()));
        let results = c.fetch_by_foreign_id("ENST00000269305").await.unwrap();
        assert_eq!(results.into_value(), payload);
    }

    #[tokio::test]
    async fn test_foreign_extractors() {
        let c = client(
            StaticFetcher::default().stream("ENST00000269305", json!({"results": [tp53_entry()]})),
        );
        assert_eq!(c.foreign_sequence("ENST00000269305").await.unwrap(), "MEEPQSDPSV");
        let none: [&str; 0] = [];
        assert_eq!(
            c.foreign_features("ENST00000269305", &none).await.unwrap().len(),
            2
        );
        assert_eq!(
            c.foreign_cross_references("ENST00000269305")
                .await
                .unwrap()
                .first_id("Ensembl"),
            Some("ENST00000269305.9")
        );
        assert_eq!(
            c.foreign_entry("ENST00000269305", "annotationScore").await.unwrap(),
            "5.0"
        );
    }

    #[tokio::test]
    async fn test_foreign_entry_null_is_absent() {
        let mut entry = tp53_entry();
        entry["proteinExistence"] = Value::Null;
        let c = client(
            StaticFetcher::default().stream("ENST00000269305", json!({"results": [entry]})),
        );
        assert!(c
            .try_foreign_entry("ENST00000269305", "proteinExistence")
            .await
            .unwrap_err()
            .is_missing());
        assert_eq!(
            c.foreign_entry("ENST00000269305", "proteinExistence").await.unwrap(),
            ""
        );
    }

    #[tokio::test]
    async fn test_foreign_lookup_with_no_results_degrades() {
        let c = client(StaticFetcher::default().stream("ENST000", json!({"results": []})));
        assert_eq!(c.foreign_sequence("ENST000").await.unwrap(), "");
        assert!(c.foreign_features("ENST000", &["Domain"]).await.unwrap().is_empty());
        assert!(c
            .try_foreign_record("ENST000")
            .await
            .unwrap_err()
            .is_missing());
    }

    #[test]
    fn test_service_root_trailing_slash() {
        let c = UniprotClient::with_fetcher("http://uniprot.test/", StaticFetcher::default());
        assert_eq!(c.service_root(), ROOT);
    }
}
