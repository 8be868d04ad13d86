//! Command implementations for the `protref` binary

pub mod lookup;
pub mod record;
pub mod table;

use crate::api::UniprotClient;
use crate::error::Result;
use crate::tables::{TabularRow, Table};
use crate::OutputFormat;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};
use serde::Serialize;

/// Shared state for one command invocation
#[derive(Debug)]
pub struct Context {
    pub client: UniprotClient,
    pub strict: bool,
    pub format: OutputFormat,
}

/// Lay out a table with a leading row-index column
pub fn render_table<R: TabularRow>(table: &Table<R>) -> comfy_table::Table {
    let mut header = vec!["#"];
    header.extend_from_slice(R::HEADERS);

    let mut out = comfy_table::Table::new();
    out.load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(header);

    for (index, row) in table.iter().enumerate() {
        let mut cells = vec![index.to_string()];
        cells.extend(row.cells());
        out.add_row(cells);
    }

    out
}

/// Print a table in the requested format
pub fn print_table<R: TabularRow + Serialize>(table: &Table<R>, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table if table.is_empty() => println!("(no rows)"),
        OutputFormat::Table => println!("{}", render_table(table)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(table)?),
    }
    Ok(())
}

/// Print any JSON value
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::model::Feature;

    #[test]
    fn test_render_table_has_index_column() {
        let table = Table::new(vec![Feature {
            feature_type: "Domain".to_string(),
            start: Some(94),
            end: Some(292),
            description: "DNA-binding".to_string(),
        }]);
        let rendered = render_table(&table).to_string();
        assert!(rendered.contains("description"));
        assert!(rendered.contains("DNA-binding"));
        assert!(rendered.contains("292"));
    }
}
