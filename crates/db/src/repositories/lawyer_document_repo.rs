//! Repository for the `lawyer_documents` table.

use casebridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::lawyer_document::{CreateLawyerDocuments, LawyerDocuments};

const COLUMNS: &str = "id, lawyer_id, uploaded, photo_id_path, cop_path, created_at";

/// Provides operations for lawyer verification document sets.
pub struct LawyerDocumentRepo;

impl LawyerDocumentRepo {
    /// Insert the one-time document set with `uploaded = true`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLawyerDocuments,
    ) -> Result<LawyerDocuments, sqlx::Error> {
        let query = format!(
            "INSERT INTO lawyer_documents (lawyer_id, uploaded, photo_id_path, cop_path)
             VALUES ($1, TRUE, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LawyerDocuments>(&query)
            .bind(input.lawyer_id)
            .bind(&input.photo_id_path)
            .bind(&input.cop_path)
            .fetch_one(pool)
            .await
    }

    /// Find the document set for a lawyer, if one exists.
    pub async fn find_by_lawyer_id(
        pool: &PgPool,
        lawyer_id: DbId,
    ) -> Result<Option<LawyerDocuments>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lawyer_documents WHERE lawyer_id = $1");
        sqlx::query_as::<_, LawyerDocuments>(&query)
            .bind(lawyer_id)
            .fetch_optional(pool)
            .await
    }
}
