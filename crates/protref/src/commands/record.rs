//! `record`, `field` and `sequence`

use super::{print_json, Context};
use crate::error::{Result, UniprotError};

/// Print the raw entry, or the search envelope with `ensembl`
pub async fn show(ctx: &Context, id: &str, ensembl: bool) -> Result<()> {
    if ensembl {
        let results = ctx.client.fetch_by_foreign_id(id).await?;
        if ctx.strict && results.is_empty() {
            return Err(UniprotError::missing("record", id, "results"));
        }
        return print_json(&results);
    }

    let record = ctx.client.fetch_by_accession(id).await?;
    if ctx.strict && record.is_empty() {
        return Err(UniprotError::missing("record", id, "entry"));
    }
    print_json(&record)
}

pub async fn field(ctx: &Context, accession: &str, field: &str) -> Result<()> {
    let value = if ctx.strict {
        ctx.client.try_fetch_field(accession, field).await?
    } else {
        ctx.client.fetch_field(accession, field).await?
    };
    print_json(&value)
}

pub async fn sequence(ctx: &Context, id: &str, ensembl: bool) -> Result<()> {
    let sequence = match (ensembl, ctx.strict) {
        (false, false) => ctx.client.sequence(id).await?,
        (false, true) => ctx.client.try_sequence(id).await?,
        (true, false) => ctx.client.foreign_sequence(id).await?,
        (true, true) => ctx.client.try_foreign_sequence(id).await?,
    };
    println!("{}", sequence);
    Ok(())
}
