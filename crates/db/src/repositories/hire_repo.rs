//! Repository for the `hires` table.

use casebridge_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::hire::{Hire, HireContact, HireStatus, HireWithLawyer, LawyerClientEntry};

const COLUMNS: &str =
    "id, client_id, lawyer_id, status, deposit_amount, is_paid, hired_at, updated_at";

/// Provides operations on hire relationship records.
pub struct HireRepo;

impl HireRepo {
    /// Create a new hire request in `pending` status.
    pub async fn create(
        pool: &PgPool,
        client_id: DbId,
        lawyer_id: DbId,
        deposit_amount: Decimal,
        is_paid: bool,
    ) -> Result<Hire, sqlx::Error> {
        let query = format!(
            "INSERT INTO hires (client_id, lawyer_id, deposit_amount, is_paid)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hire>(&query)
            .bind(client_id)
            .bind(lawyer_id)
            .bind(deposit_amount)
            .bind(is_paid)
            .fetch_one(pool)
            .await
    }

    /// Find a hire by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Hire>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM hires WHERE id = $1");
        sqlx::query_as::<_, Hire>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply the lawyer's response to a pending hire as one guarded update.
    ///
    /// Returns `None` when the hire is no longer `pending`, so a concurrent
    /// second response cannot overwrite the first.
    pub async fn respond(
        pool: &PgPool,
        id: DbId,
        status: HireStatus,
    ) -> Result<Option<Hire>, sqlx::Error> {
        let query = format!(
            "UPDATE hires SET status = $2, updated_at = NOW()
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Hire>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Whether an accepted hire exists for the (client, lawyer) pair.
    pub async fn accepted_exists(
        pool: &PgPool,
        client_id: DbId,
        lawyer_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(
                 SELECT 1 FROM hires
                 WHERE client_id = $1 AND lawyer_id = $2 AND status = 'accepted'
             )",
        )
        .bind(client_id)
        .bind(lawyer_id)
        .fetch_one(pool)
        .await
    }

    /// List a client's hire requests, newest first, with lawyer display fields.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<HireWithLawyer>, sqlx::Error> {
        sqlx::query_as::<_, HireWithLawyer>(
            "SELECT h.id, h.client_id, h.lawyer_id, h.status, h.deposit_amount,
                    h.is_paid, h.hired_at,
                    l.full_name AS lawyer_name, l.specialization AS lawyer_specialization
             FROM hires h
             JOIN lawyer_profiles l ON l.id = h.lawyer_id
             WHERE h.client_id = $1
             ORDER BY h.hired_at DESC",
        )
        .bind(client_id)
        .fetch_all(pool)
        .await
    }

    /// Derived chat contacts for a lawyer: one entry per distinct client
    /// with an accepted hire.
    pub async fn contacts_for_lawyer(
        pool: &PgPool,
        lawyer_id: DbId,
    ) -> Result<Vec<HireContact>, sqlx::Error> {
        sqlx::query_as::<_, HireContact>(
            "SELECT DISTINCT u.id AS user_id, c.full_name, u.email, 'client' AS role
             FROM hires h
             JOIN client_profiles c ON c.id = h.client_id
             JOIN users u ON u.id = c.user_id
             WHERE h.lawyer_id = $1 AND h.status = 'accepted'",
        )
        .bind(lawyer_id)
        .fetch_all(pool)
        .await
    }

    /// Derived chat contacts for a client: one entry per distinct lawyer
    /// with an accepted hire.
    pub async fn contacts_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<HireContact>, sqlx::Error> {
        sqlx::query_as::<_, HireContact>(
            "SELECT DISTINCT u.id AS user_id, l.full_name, u.email, 'lawyer' AS role
             FROM hires h
             JOIN lawyer_profiles l ON l.id = h.lawyer_id
             JOIN users u ON u.id = l.user_id
             WHERE h.client_id = $1 AND h.status = 'accepted'",
        )
        .bind(client_id)
        .fetch_all(pool)
        .await
    }

    /// A lawyer's client roster with per-client case counts, newest hire first.
    pub async fn clients_for_lawyer(
        pool: &PgPool,
        lawyer_id: DbId,
    ) -> Result<Vec<LawyerClientEntry>, sqlx::Error> {
        sqlx::query_as::<_, LawyerClientEntry>(
            "SELECT c.id AS client_id, c.full_name, c.phone_number, u.email,
                    h.id AS hire_id, h.status AS hire_status,
                    (SELECT COUNT(*) FROM legal_cases lc
                      WHERE lc.client_id = c.id AND lc.lawyer_id = h.lawyer_id) AS total_cases,
                    (SELECT COUNT(*) FROM legal_cases lc
                      WHERE lc.client_id = c.id AND lc.lawyer_id = h.lawyer_id
                        AND lc.status = 'active') AS active_cases
             FROM hires h
             JOIN client_profiles c ON c.id = h.client_id
             JOIN users u ON u.id = c.user_id
             WHERE h.lawyer_id = $1
             ORDER BY h.hired_at DESC",
        )
        .bind(lawyer_id)
        .fetch_all(pool)
        .await
    }

    /// Count of distinct clients with an accepted hire for a lawyer.
    pub async fn count_distinct_accepted_clients(
        pool: &PgPool,
        lawyer_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(DISTINCT client_id) FROM hires
             WHERE lawyer_id = $1 AND status = 'accepted'",
        )
        .bind(lawyer_id)
        .fetch_one(pool)
        .await
    }
}
