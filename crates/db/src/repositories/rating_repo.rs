//! Repository for the `lawyer_ratings` table.
//!
//! Ratings are upserted on the (client, lawyer) pair; after each upsert the
//! lawyer's denormalized profile rating is recomputed from all current rows
//! (full recomputation, not an incremental counter).

use casebridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::LawyerRating;

const COLUMNS: &str = "id, client_id, lawyer_id, rating, created_at, updated_at";

/// Provides rating upsert and aggregation operations.
pub struct RatingRepo;

impl RatingRepo {
    /// Insert or update the rating for a (client, lawyer) pair; latest wins.
    pub async fn upsert(
        pool: &PgPool,
        client_id: DbId,
        lawyer_id: DbId,
        rating: i16,
    ) -> Result<LawyerRating, sqlx::Error> {
        let query = format!(
            "INSERT INTO lawyer_ratings (client_id, lawyer_id, rating)
             VALUES ($1, $2, $3)
             ON CONFLICT ON CONSTRAINT uq_lawyer_ratings_client_lawyer
             DO UPDATE SET rating = EXCLUDED.rating, updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LawyerRating>(&query)
            .bind(client_id)
            .bind(lawyer_id)
            .bind(rating)
            .fetch_one(pool)
            .await
    }

    /// Find the rating a client gave a lawyer, if any.
    pub async fn find_by_pair(
        pool: &PgPool,
        client_id: DbId,
        lawyer_id: DbId,
    ) -> Result<Option<LawyerRating>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM lawyer_ratings WHERE client_id = $1 AND lawyer_id = $2");
        sqlx::query_as::<_, LawyerRating>(&query)
            .bind(client_id)
            .bind(lawyer_id)
            .fetch_optional(pool)
            .await
    }

    /// Recompute and store the lawyer's displayed rating, returning it.
    ///
    /// The mean is taken and written in a single statement, so racing
    /// upserts cannot persist a stale value.
    pub async fn recompute_lawyer_rating(
        pool: &PgPool,
        lawyer_id: DbId,
    ) -> Result<f64, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE lawyer_profiles
             SET rating = COALESCE(
                 (SELECT ROUND(AVG(r.rating)::numeric, 1)::double precision
                  FROM lawyer_ratings r
                  WHERE r.lawyer_id = lawyer_profiles.id),
                 0.0)
             WHERE id = $1
             RETURNING rating",
        )
        .bind(lawyer_id)
        .fetch_one(pool)
        .await
    }
}
