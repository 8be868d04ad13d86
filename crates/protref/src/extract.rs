//! Extraction of sequence, features and cross-references from a [`Record`]
//!
//! These are pure transforms. Each `try_*` function reports shape problems and
//! missing data as [`UniprotError`]; the plain variants log the error and
//! return the empty value instead.
//!
//! `identifier` is only used to label errors, so callers pass whatever id they
//! fetched the record with.

use crate::error::{Result, UniprotError};
use crate::lenient;
use crate::model::{fields, CrossReference, Feature, FeatureEntry, Record, SequenceBlock};
use crate::tables::{CrossReferenceTable, FeatureTable};
use serde_json::{Map, Value};

pub const OP_SEQUENCE: &str = "sequence";
pub const OP_FEATURES: &str = "features";
pub const OP_CROSS_REFERENCES: &str = "cross_references";

/// `sequence.value`, untouched
pub fn try_sequence(record: &Record, identifier: &str) -> Result<String> {
    record
        .section::<SequenceBlock>(fields::SEQUENCE)
        .map_err(|e| UniprotError::shape(OP_SEQUENCE, identifier, e))?
        .map(|block| block.value)
        .ok_or_else(|| UniprotError::missing(OP_SEQUENCE, identifier, "sequence"))
}

pub fn sequence(record: &Record, identifier: &str) -> String {
    lenient::or_default(try_sequence(record, identifier))
}

/// Feature table, restricted to `types` unless `types` is empty.
///
/// A single malformed feature fails the whole extraction.
pub fn try_features<S: AsRef<str>>(
    record: &Record,
    identifier: &str,
    types: &[S],
) -> Result<FeatureTable> {
    let entries = record
        .section::<Vec<FeatureEntry>>(fields::FEATURES)
        .map_err(|e| UniprotError::shape(OP_FEATURES, identifier, e))?
        .ok_or_else(|| UniprotError::missing(OP_FEATURES, identifier, "features"))?;

    if entries.is_empty() {
        return Ok(FeatureTable::default());
    }

    let table: FeatureTable = entries.into_iter().map(Feature::from).collect();
    Ok(table.with_types(types))
}

pub fn features<S: AsRef<str>>(record: &Record, identifier: &str, types: &[S]) -> FeatureTable {
    lenient::or_default(try_features(record, identifier, types))
}

/// Cross-reference table. Entries without a `database` key are skipped.
pub fn try_cross_references(record: &Record, identifier: &str) -> Result<CrossReferenceTable> {
    let entries = record
        .section::<Vec<Map<String, Value>>>(fields::CROSS_REFERENCES)
        .map_err(|e| UniprotError::shape(OP_CROSS_REFERENCES, identifier, e))?
        .ok_or_else(|| {
            UniprotError::missing(OP_CROSS_REFERENCES, identifier, "cross-reference information")
        })?;

    entries
        .into_iter()
        .filter(|entry| entry.contains_key("database"))
        .map(|entry| {
            serde_json::from_value::<CrossReference>(Value::Object(entry))
                .map_err(|e| UniprotError::shape(OP_CROSS_REFERENCES, identifier, e))
        })
        .collect()
}

pub fn cross_references(record: &Record, identifier: &str) -> CrossReferenceTable {
    lenient::or_default(try_cross_references(record, identifier))
}
