//! Row-ordered tables of features and cross-references
//!
//! A table is a plain ordered list of rows. Row positions are the row index, so
//! any filtered table is indexed from zero again.

use crate::model::{CrossReference, Feature};
use serde::Serialize;

/// Ensembl database name as it appears in cross-references.
pub const ENSEMBL: &str = "Ensembl";

/// Ordered rows of `R`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Table<R> {
    rows: Vec<R>,
}

pub type FeatureTable = Table<Feature>;
pub type CrossReferenceTable = Table<CrossReference>;

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R> Table<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.rows.get(index)
    }

    pub fn first(&self) -> Option<&R> {
        self.rows.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rows.iter()
    }

    /// Rows matching `predicate`, in their original relative order
    pub fn filter(&self, mut predicate: impl FnMut(&R) -> bool) -> Self
    where
        R: Clone,
    {
        self.rows.iter().filter(|row| predicate(row)).cloned().collect()
    }
}

impl<R> FromIterator<R> for Table<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<R> IntoIterator for Table<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Table<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl FeatureTable {
    /// Keep rows whose type is one of `types`. An empty list keeps everything.
    pub fn with_types<S: AsRef<str>>(&self, types: &[S]) -> Self {
        if types.is_empty() {
            return self.clone();
        }
        self.filter(|row| types.iter().any(|t| t.as_ref() == row.feature_type))
    }
}

impl CrossReferenceTable {
    /// Rows pointing into `database`
    pub fn for_database(&self, database: &str) -> Self {
        self.filter(|row| row.database == database)
    }

    /// `id` of the first row pointing into `database`
    pub fn first_id(&self, database: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.database == database)
            .map(|row| row.id.as_str())
    }
}

/// A row that can be laid out as text cells
pub trait TabularRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl TabularRow for Feature {
    const HEADERS: &'static [&'static str] = &["type", "start", "end", "description"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.feature_type.clone(),
            position_cell(self.start),
            position_cell(self.end),
            self.description.clone(),
        ]
    }
}

/// Unknown positions render as an empty cell
fn position_cell(position: Option<i64>) -> String {
    position.map(|value| value.to_string()).unwrap_or_default()
}

impl TabularRow for CrossReference {
    const HEADERS: &'static [&'static str] = &["database", "id", "properties"];

    fn cells(&self) -> Vec<String> {
        let properties = match &self.properties {
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        vec![self.database.clone(), self.id.clone(), properties]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn feature(feature_type: &str, start: i64, end: i64) -> Feature {
        Feature {
            feature_type: feature_type.to_string(),
            start: Some(start),
            end: Some(end),
            description: String::new(),
        }
    }

    fn xref(database: &str, id: &str) -> CrossReference {
        CrossReference {
            database: database.to_string(),
            id: id.to_string(),
            properties: json!([]),
        }
    }

    #[test]
    fn test_with_types_keeps_order_and_reindexes() {
        let table: FeatureTable = vec![
            feature("Signal", 1, 20),
            feature("Domain", 30, 90),
            feature("Transmembrane", 100, 120),
            feature("Domain", 150, 210),
        ]
        .into_iter()
        .collect();

        let domains = table.with_types(&["Domain"]);
        assert_eq!(domains.len(), 2);
        assert_eq!(domains.get(0).and_then(|f| f.start), Some(30));
        assert_eq!(domains.get(1).and_then(|f| f.start), Some(150));
        assert!(domains.get(2).is_none());
    }

    #[test]
    fn test_with_empty_types_is_identity() {
        let table = FeatureTable::new(vec![feature("Chain", 1, 300), feature("Domain", 5, 50)]);
        let none: [&str; 0] = [];
        assert_eq!(table.with_types(&none), table);
    }

    #[test]
    fn test_with_unknown_type_is_empty() {
        let table = FeatureTable::new(vec![feature("Chain", 1, 300)]);
        assert!(table.with_types(&["Zinc finger"]).is_empty());
    }

    #[test]
    fn test_first_id_is_first_in_source_order() {
        let table = CrossReferenceTable::new(vec![
            xref("PDB", "1ABC"),
            xref(ENSEMBL, "ENST00000269305.9"),
            xref(ENSEMBL, "ENST00000445888.6"),
        ]);
        assert_eq!(table.first_id(ENSEMBL), Some("ENST00000269305.9"));
        assert_eq!(table.for_database(ENSEMBL).len(), 2);
        assert!(table.first_id("RefSeq").is_none());
    }

    #[test]
    fn test_cells_match_headers() {
        let f = feature("Domain", 3, 9);
        assert_eq!(f.cells().len(), Feature::HEADERS.len());
        let x = xref("PDB", "1ABC");
        assert_eq!(x.cells(), vec!["PDB", "1ABC", "[]"]);
    }

    #[test]
    fn test_unknown_positions_render_as_empty_cells() {
        let f = Feature {
            feature_type: "Chain".to_string(),
            start: None,
            end: Some(147),
            description: "Hemoglobin subunit beta".to_string(),
        };
        assert_eq!(f.cells(), vec!["Chain", "", "147", "Hemoglobin subunit beta"]);
    }

    const TYPES: &[&str] = &["Chain", "Domain", "Region", "Signal", "Helix"];

    fn arb_feature() -> impl Strategy<Value = Feature> {
        (
            prop::sample::select(TYPES),
            prop::option::of(1i64..2000),
            prop::option::of(1i64..2000),
        )
            .prop_map(|(feature_type, start, end)| Feature {
                feature_type: feature_type.to_string(),
                start,
                end,
                description: String::new(),
            })
    }

    proptest! {
        #[test]
        fn test_with_types_empty_filter_is_identity(
            rows in prop::collection::vec(arb_feature(), 0..40)
        ) {
            let table = FeatureTable::new(rows);
            let none: [&str; 0] = [];
            prop_assert_eq!(table.with_types(&none), table);
        }

        /// The subset holds exactly the matching rows, in source order, indexed from zero
        #[test]
        fn test_with_types_is_ordered_subsequence(
            rows in prop::collection::vec(arb_feature(), 0..40),
            wanted in prop::sample::subsequence(TYPES, 1..=TYPES.len()),
        ) {
            let table = FeatureTable::new(rows.clone());
            let subset = table.with_types(&wanted);

            let expected: Vec<Feature> = rows
                .into_iter()
                .filter(|f| wanted.contains(&f.feature_type.as_str()))
                .collect();

            prop_assert_eq!(subset.len(), expected.len());
            for (index, row) in expected.iter().enumerate() {
                prop_assert_eq!(subset.get(index), Some(row));
            }
            prop_assert!(subset.get(expected.len()).is_none());
        }
    }
}
