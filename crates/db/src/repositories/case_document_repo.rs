//! Repository for the `case_documents` table.

use casebridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::legal_case::CaseDocument;

const COLUMNS: &str = "id, legal_case_id, title, file_path, uploaded_at";

/// Provides operations for documents attached to cases.
pub struct CaseDocumentRepo;

impl CaseDocumentRepo {
    /// Attach a document to a case, returning the created row.
    pub async fn create(
        pool: &PgPool,
        legal_case_id: DbId,
        title: &str,
        file_path: &str,
    ) -> Result<CaseDocument, sqlx::Error> {
        let query = format!(
            "INSERT INTO case_documents (legal_case_id, title, file_path)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CaseDocument>(&query)
            .bind(legal_case_id)
            .bind(title)
            .bind(file_path)
            .fetch_one(pool)
            .await
    }

    /// List the documents of a case, oldest first.
    pub async fn list_for_case(
        pool: &PgPool,
        legal_case_id: DbId,
    ) -> Result<Vec<CaseDocument>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM case_documents
             WHERE legal_case_id = $1
             ORDER BY uploaded_at ASC"
        );
        sqlx::query_as::<_, CaseDocument>(&query)
            .bind(legal_case_id)
            .fetch_all(pool)
            .await
    }
}
