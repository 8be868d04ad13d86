//! `features` and `xrefs`

use super::{print_table, Context};
use crate::error::Result;

pub async fn features(ctx: &Context, id: &str, types: &[String], ensembl: bool) -> Result<()> {
    let table = match (ensembl, ctx.strict) {
        (false, false) => ctx.client.features(id, types).await?,
        (false, true) => ctx.client.try_features(id, types).await?,
        (true, false) => ctx.client.foreign_features(id, types).await?,
        (true, true) => ctx.client.try_foreign_features(id, types).await?,
    };
    print_table(&table, ctx.format)
}

pub async fn xrefs(ctx: &Context, id: &str, database: Option<&str>, ensembl: bool) -> Result<()> {
    let table = match (ensembl, ctx.strict) {
        (false, false) => ctx.client.cross_references(id).await?,
        (false, true) => ctx.client.try_cross_references(id).await?,
        (true, false) => ctx.client.foreign_cross_references(id).await?,
        (true, true) => ctx.client.try_foreign_cross_references(id).await?,
    };

    let table = match database {
        Some(db) => table.for_database(db),
        None => table,
    };
    print_table(&table, ctx.format)
}
