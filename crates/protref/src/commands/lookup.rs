//! `to-ensembl` and `to-accession`

use super::Context;
use crate::error::Result;

/// Print the Ensembl transcript for an accession (empty line when none)
pub async fn to_ensembl(ctx: &Context, accession: &str) -> Result<()> {
    let id = if ctx.strict {
        ctx.client.try_accession_to_foreign_id(accession).await?
    } else {
        ctx.client.accession_to_foreign_id(accession).await?
    };
    println!("{}", id);
    Ok(())
}

/// Print the accession for an Ensembl id (empty line when none)
pub async fn to_accession(ctx: &Context, ensembl_id: &str) -> Result<()> {
    let accession = if ctx.strict {
        ctx.client.try_foreign_id_to_accession(ensembl_id).await?
    } else {
        ctx.client.foreign_id_to_accession(ensembl_id).await?
    };
    println!("{}", accession);
    Ok(())
}
