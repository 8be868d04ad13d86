//! UniProtKB entry model
//!
//! The two endpoints answer with different layouts and the types keep them
//! apart:
//!
//! - `/uniprotkb/{accession}` returns one entry, held as a [`Record`]
//! - `/uniprotkb/stream?query=...` returns `{"results": [entry, ...]}`, held as
//!   [`SearchResults`] with the envelope intact
//!
//! A [`Record`] keeps the decoded JSON object so any top-level field can be
//! fetched by name. The parts protref interprets (sequence, features,
//! cross-references) are deserialized on demand into typed structs.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level keys of a UniProtKB entry that protref reads.
pub mod fields {
    pub const PRIMARY_ACCESSION: &str = "primaryAccession";
    pub const SEQUENCE: &str = "sequence";
    pub const FEATURES: &str = "features";
    pub const CROSS_REFERENCES: &str = "uniProtKBCrossReferences";
    pub const RESULTS: &str = "results";
}

/// One UniProtKB entry, or the empty object when nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// The absent record (`{}`)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap a decoded payload. Anything other than a JSON object yields `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw top-level field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// `primaryAccession`, when present and a string
    pub fn primary_accession(&self) -> Option<&str> {
        self.get(fields::PRIMARY_ACCESSION).and_then(Value::as_str)
    }

    /// Deserialize a top-level field into `T`.
    ///
    /// `Ok(None)` when the field is absent, `Err` when it has the wrong layout.
    pub(crate) fn section<T: DeserializeOwned>(
        &self,
        field: &str,
    ) -> std::result::Result<Option<T>, serde_json::Error> {
        self.get(field)
            .map(|value| T::deserialize(value))
            .transpose()
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Envelope returned by the stream endpoint.
///
/// Either the full `{"results": [...]}` object with at least one result, or
/// the empty object when the query matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResults(Map<String, Value>);

impl SearchResults {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Keep the payload only when it is an object with a non-empty `results` list.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map)
                if map
                    .get(fields::RESULTS)
                    .and_then(Value::as_array)
                    .is_some_and(|results| !results.is_empty()) =>
            {
                Self(map)
            }
            _ => Self::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `results` list, empty when there is none
    pub fn results(&self) -> &[Value] {
        self.0
            .get(fields::RESULTS)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// `results[0]` as a record, when it is an object
    pub fn first_record(&self) -> Option<Record> {
        self.results()
            .first()
            .and_then(|value| Record::from_value(value.clone()))
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

/// `sequence` block of an entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SequenceBlock {
    pub value: String,
}

/// One annotated region, flattened for tabular use.
///
/// Bounds are `None` where the service marks the position as unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub description: String,
}

/// Wire layout of a feature inside an entry
#[derive(Debug, Deserialize)]
pub(crate) struct FeatureEntry {
    #[serde(rename = "type")]
    feature_type: String,
    location: FeatureLocation,
    description: String,
}

#[derive(Debug, Deserialize)]
struct FeatureLocation {
    start: Position,
    end: Position,
}

#[derive(Debug, Deserialize)]
struct Position {
    // null for `"modifier": "UNKNOWN"`
    #[serde(default)]
    value: Option<i64>,
}

impl From<FeatureEntry> for Feature {
    fn from(entry: FeatureEntry) -> Self {
        Self {
            feature_type: entry.feature_type,
            start: entry.location.start.value,
            end: entry.location.end.value,
            description: entry.description,
        }
    }
}

/// Link from an entry to another database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossReference {
    pub database: String,
    pub id: String,
    /// Passed through untouched; `null` when the service omits it
    #[serde(default)]
    pub properties: Value,
}
