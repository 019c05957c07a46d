//! Repository for the `legal_cases` table.

use casebridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::legal_case::{CaseWithClient, CreateLegalCase, LegalCase, UpdateLegalCase};

const COLUMNS: &str = "id, title, client_id, lawyer_id, court, case_number, next_hearing, \
                       status, priority, last_update, created_at";

const JOINED_COLUMNS: &str = "lc.id, lc.title, lc.client_id, c.full_name AS client_name, \
                              lc.court, lc.case_number, lc.next_hearing, lc.status, \
                              lc.priority, lc.last_update, lc.created_at";

/// Provides CRUD operations for legal cases.
pub struct LegalCaseRepo;

impl LegalCaseRepo {
    /// Insert a new case, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLegalCase) -> Result<LegalCase, sqlx::Error> {
        let query = format!(
            "INSERT INTO legal_cases
                (title, client_id, lawyer_id, court, case_number, next_hearing, status, priority)
             VALUES ($1, $2, $3, $4, $5, $6,
                     COALESCE($7, 'active'::case_status),
                     COALESCE($8, 'medium'::case_priority))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LegalCase>(&query)
            .bind(&input.title)
            .bind(input.client_id)
            .bind(input.lawyer_id)
            .bind(&input.court)
            .bind(&input.case_number)
            .bind(input.next_hearing)
            .bind(input.status)
            .bind(input.priority)
            .fetch_one(pool)
            .await
    }

    /// Find a case by primary key, scoped to its owning lawyer.
    pub async fn find_for_lawyer(
        pool: &PgPool,
        id: DbId,
        lawyer_id: DbId,
    ) -> Result<Option<LegalCase>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM legal_cases WHERE id = $1 AND lawyer_id = $2");
        sqlx::query_as::<_, LegalCase>(&query)
            .bind(id)
            .bind(lawyer_id)
            .fetch_optional(pool)
            .await
    }

    /// List a lawyer's cases with client names, newest first.
    pub async fn list_for_lawyer(
        pool: &PgPool,
        lawyer_id: DbId,
    ) -> Result<Vec<CaseWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM legal_cases lc
             JOIN client_profiles c ON c.id = lc.client_id
             WHERE lc.lawyer_id = $1
             ORDER BY lc.created_at DESC"
        );
        sqlx::query_as::<_, CaseWithClient>(&query)
            .bind(lawyer_id)
            .fetch_all(pool)
            .await
    }

    /// List the cases in which a client is the named party, newest first.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<CaseWithClient>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM legal_cases lc
             JOIN client_profiles c ON c.id = lc.client_id
             WHERE lc.client_id = $1
             ORDER BY lc.created_at DESC"
        );
        sqlx::query_as::<_, CaseWithClient>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Apply an incremental patch, refreshing `last_update`.
    ///
    /// Scoped to the owning lawyer; returns `None` when no matching row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        lawyer_id: DbId,
        input: &UpdateLegalCase,
    ) -> Result<Option<LegalCase>, sqlx::Error> {
        let query = format!(
            "UPDATE legal_cases SET
                status = COALESCE($3, status),
                priority = COALESCE($4, priority),
                next_hearing = COALESCE($5, next_hearing),
                last_update = NOW()
             WHERE id = $1 AND lawyer_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LegalCase>(&query)
            .bind(id)
            .bind(lawyer_id)
            .bind(input.status)
            .bind(input.priority)
            .bind(input.next_hearing)
            .fetch_optional(pool)
            .await
    }

    /// Count of cases owned by a lawyer.
    pub async fn count_for_lawyer(pool: &PgPool, lawyer_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM legal_cases WHERE lawyer_id = $1")
            .bind(lawyer_id)
            .fetch_one(pool)
            .await
    }
}
