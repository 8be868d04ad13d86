//! Accession <-> Ensembl identifier resolution

use crate::api::UniprotClient;
use crate::error::{Result, UniprotError};
use crate::lenient;
use crate::model::fields;
use crate::tables::ENSEMBL;

pub const OP_ACCESSION_TO_FOREIGN_ID: &str = "accession_to_foreign_id";
pub const OP_FOREIGN_ID_TO_ACCESSION: &str = "foreign_id_to_accession";

impl UniprotClient {
    /// Ensembl transcript id linked from an accession.
    ///
    /// The first Ensembl cross-reference in source order wins. An entry with no
    /// cross-references and an entry with no Ensembl link are reported as
    /// distinct [`UniprotError::Missing`] errors.
    pub async fn try_accession_to_foreign_id(&self, accession: &str) -> Result<String> {
        let table = self.try_cross_references(accession).await?;
        if table.is_empty() {
            return Err(UniprotError::missing(
                OP_ACCESSION_TO_FOREIGN_ID,
                accession,
                "cross-reference information",
            ));
        }

        table.first_id(ENSEMBL).map(str::to_owned).ok_or_else(|| {
            UniprotError::missing(OP_ACCESSION_TO_FOREIGN_ID, accession, "Ensembl information")
        })
    }

    /// Ensembl transcript id linked from an accession, or `""`
    pub async fn accession_to_foreign_id(&self, accession: &str) -> Result<String> {
        lenient::degrade(self.try_accession_to_foreign_id(accession).await)
    }

    /// Primary accession of the first entry matching a foreign id
    pub async fn try_foreign_id_to_accession(&self, foreign_id: &str) -> Result<String> {
        let record = self.try_foreign_record(foreign_id).await?;
        record
            .primary_accession()
            .map(str::to_owned)
            .ok_or_else(|| {
                UniprotError::missing(
                    OP_FOREIGN_ID_TO_ACCESSION,
                    foreign_id,
                    format!("'{}' key in response", fields::PRIMARY_ACCESSION),
                )
            })
    }

    /// Primary accession of the first entry matching a foreign id, or `""`
    pub async fn foreign_id_to_accession(&self, foreign_id: &str) -> Result<String> {
        lenient::degrade(self.try_foreign_id_to_accession(foreign_id).await)
    }

    /// Older name of [`UniprotClient::foreign_id_to_accession`]
    pub async fn lookup_accession(&self, foreign_id: &str) -> Result<String> {
        self.foreign_id_to_accession(foreign_id).await
    }
}
