//! Repository for the `transactions` table.
//!
//! Lifecycle mutations are guarded updates keyed on the current status so
//! concurrent verify/update/delete calls cannot interleave into an
//! inconsistent row.

use casebridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::transaction::{
    CreateTransaction, Transaction, TransactionStats, TransactionStatus, TransactionView,
};

const COLUMNS: &str = "id, client_id, lawyer_id, amount, status, description, \
                       gateway_order_id, gateway_payment_id, gateway_signature, paid_at, \
                       created_at";

/// Provides operations on payment transactions.
pub struct TransactionRepo;

impl TransactionRepo {
    /// Insert a new pending transaction backed by a gateway order.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTransaction,
    ) -> Result<Transaction, sqlx::Error> {
        let query = format!(
            "INSERT INTO transactions (client_id, lawyer_id, amount, description, gateway_order_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(input.client_id)
            .bind(input.lawyer_id)
            .bind(input.amount)
            .bind(&input.description)
            .bind(&input.gateway_order_id)
            .fetch_one(pool)
            .await
    }

    /// Find a transaction by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM transactions WHERE id = $1");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a transaction by id and its stored gateway order id.
    pub async fn find_by_id_and_order(
        pool: &PgPool,
        id: DbId,
        gateway_order_id: &str,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM transactions WHERE id = $1 AND gateway_order_id = $2");
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(gateway_order_id)
            .fetch_optional(pool)
            .await
    }

    /// Complete a pending transaction after successful signature verification.
    ///
    /// Stores the payment id and signature and stamps `paid_at` in one guarded
    /// update. Returns `None` when the transaction was not `pending`.
    pub async fn mark_completed(
        pool: &PgPool,
        id: DbId,
        gateway_payment_id: &str,
        gateway_signature: &str,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "UPDATE transactions SET
                status = 'completed',
                gateway_payment_id = $2,
                gateway_signature = $3,
                paid_at = NOW()
             WHERE id = $1 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(gateway_payment_id)
            .bind(gateway_signature)
            .fetch_optional(pool)
            .await
    }

    /// Manually move a pending transaction to `failed` or `refunded`.
    ///
    /// Scoped to the owning lawyer; guarded on `pending` so a completed
    /// transaction can never be downgraded. Returns `None` when no row
    /// matched the guard.
    pub async fn update_status_manual(
        pool: &PgPool,
        id: DbId,
        lawyer_id: DbId,
        status: TransactionStatus,
    ) -> Result<Option<Transaction>, sqlx::Error> {
        let query = format!(
            "UPDATE transactions SET status = $3
             WHERE id = $1 AND lawyer_id = $2 AND status = 'pending'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Transaction>(&query)
            .bind(id)
            .bind(lawyer_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pending transaction owned by the given lawyer.
    ///
    /// Returns `true` if a row was deleted; non-pending rows are immutable
    /// to deletion.
    pub async fn delete_pending(
        pool: &PgPool,
        id: DbId,
        lawyer_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM transactions WHERE id = $1 AND lawyer_id = $2 AND status = 'pending'",
        )
        .bind(id)
        .bind(lawyer_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a lawyer's transactions, newest first, with optional status
    /// filter and free-text search over client name, description, or id.
    pub async fn list_for_lawyer(
        pool: &PgPool,
        lawyer_id: DbId,
        status: Option<TransactionStatus>,
        search: Option<&str>,
    ) -> Result<Vec<TransactionView>, sqlx::Error> {
        sqlx::query_as::<_, TransactionView>(
            "SELECT t.id, t.amount, t.status, t.description, t.created_at, t.paid_at,
                    t.gateway_order_id,
                    c.full_name AS client_name, cu.email AS client_email,
                    l.full_name AS lawyer_name, l.specialization AS lawyer_specialization
             FROM transactions t
             JOIN client_profiles c ON c.id = t.client_id
             JOIN users cu ON cu.id = c.user_id
             JOIN lawyer_profiles l ON l.id = t.lawyer_id
             WHERE t.lawyer_id = $1
               AND ($2::transaction_status IS NULL OR t.status = $2)
               AND ($3::text IS NULL
                    OR c.full_name ILIKE '%' || $3 || '%'
                    OR t.description ILIKE '%' || $3 || '%'
                    OR t.id::text = $3)
             ORDER BY t.created_at DESC",
        )
        .bind(lawyer_id)
        .bind(status)
        .bind(search)
        .fetch_all(pool)
        .await
    }

    /// List a client's payment requests, newest first, with optional status
    /// filter.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
        status: Option<TransactionStatus>,
    ) -> Result<Vec<TransactionView>, sqlx::Error> {
        sqlx::query_as::<_, TransactionView>(
            "SELECT t.id, t.amount, t.status, t.description, t.created_at, t.paid_at,
                    t.gateway_order_id,
                    c.full_name AS client_name, cu.email AS client_email,
                    l.full_name AS lawyer_name, l.specialization AS lawyer_specialization
             FROM transactions t
             JOIN client_profiles c ON c.id = t.client_id
             JOIN users cu ON cu.id = c.user_id
             JOIN lawyer_profiles l ON l.id = t.lawyer_id
             WHERE t.client_id = $1
               AND ($2::transaction_status IS NULL OR t.status = $2)
             ORDER BY t.created_at DESC",
        )
        .bind(client_id)
        .bind(status)
        .fetch_all(pool)
        .await
    }

    /// Aggregate stats for a lawyer's transactions.
    pub async fn stats_for_lawyer(
        pool: &PgPool,
        lawyer_id: DbId,
    ) -> Result<TransactionStats, sqlx::Error> {
        Self::stats(pool, "lawyer_id", lawyer_id).await
    }

    /// Aggregate stats for a client's payment requests.
    pub async fn stats_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<TransactionStats, sqlx::Error> {
        Self::stats(pool, "client_id", client_id).await
    }

    async fn stats(
        pool: &PgPool,
        owner_column: &str,
        owner_id: DbId,
    ) -> Result<TransactionStats, sqlx::Error> {
        // owner_column is a compile-time constant from the two callers above,
        // never user input.
        let query = format!(
            "SELECT COUNT(*) AS total_transactions,
                    COUNT(*) FILTER (WHERE status = 'completed') AS completed_count,
                    COUNT(*) FILTER (WHERE status = 'pending') AS pending_count,
                    COUNT(*) FILTER (WHERE status = 'failed') AS failed_count,
                    COUNT(*) FILTER (WHERE status = 'refunded') AS refunded_count,
                    COALESCE(SUM(amount) FILTER (WHERE status = 'completed'), 0) AS completed_amount,
                    COALESCE(SUM(amount) FILTER (WHERE status = 'pending'), 0) AS pending_amount
             FROM transactions
             WHERE {owner_column} = $1"
        );
        sqlx::query_as::<_, TransactionStats>(&query)
            .bind(owner_id)
            .fetch_one(pool)
            .await
    }
}
