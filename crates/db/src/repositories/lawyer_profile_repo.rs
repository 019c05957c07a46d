//! Repository for the `lawyer_profiles` table.

use casebridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::lawyer_profile::{CreateLawyerProfile, LawyerProfile, UpdateLawyerProfile};

const COLUMNS: &str = "id, user_id, full_name, bar_registration_number, specialization, \
                       experience_years, location, bio, is_verified, rating, cases_won, \
                       clients_served, created_at";

/// Provides CRUD operations for lawyer profiles.
pub struct LawyerProfileRepo;

impl LawyerProfileRepo {
    /// Insert a new lawyer profile, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLawyerProfile,
    ) -> Result<LawyerProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO lawyer_profiles
                (user_id, full_name, bar_registration_number, specialization,
                 experience_years, location, bio)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LawyerProfile>(&query)
            .bind(input.user_id)
            .bind(&input.full_name)
            .bind(&input.bar_registration_number)
            .bind(&input.specialization)
            .bind(&input.experience_years)
            .bind(&input.location)
            .bind(&input.bio)
            .fetch_one(pool)
            .await
    }

    /// Find a lawyer profile by primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LawyerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lawyer_profiles WHERE id = $1");
        sqlx::query_as::<_, LawyerProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile owned by a user (1:1).
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<LawyerProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lawyer_profiles WHERE user_id = $1");
        sqlx::query_as::<_, LawyerProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a lawyer with this bar registration number already exists.
    pub async fn bar_number_exists(pool: &PgPool, bar_number: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM lawyer_profiles WHERE bar_registration_number = $1)",
        )
        .bind(bar_number)
        .fetch_one(pool)
        .await
    }

    /// Apply a partial profile update. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. The derived
    /// `rating` and the admin-controlled `is_verified` flag are untouchable
    /// through this path.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLawyerProfile,
    ) -> Result<Option<LawyerProfile>, sqlx::Error> {
        let query = format!(
            "UPDATE lawyer_profiles SET
                full_name = COALESCE($2, full_name),
                specialization = COALESCE($3, specialization),
                experience_years = COALESCE($4, experience_years),
                location = COALESCE($5, location),
                bio = COALESCE($6, bio)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LawyerProfile>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.specialization)
            .bind(&input.experience_years)
            .bind(&input.location)
            .bind(&input.bio)
            .fetch_optional(pool)
            .await
    }
}
