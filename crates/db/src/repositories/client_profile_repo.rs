//! Repository for the `client_profiles` table.

use casebridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::client_profile::{ClientProfile, CreateClientProfile};

const COLUMNS: &str = "id, user_id, full_name, address, phone_number, created_at";

/// Provides CRUD operations for client profiles.
pub struct ClientProfileRepo;

impl ClientProfileRepo {
    /// Insert a new client profile, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateClientProfile,
    ) -> Result<ClientProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO client_profiles (user_id, full_name, address, phone_number)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ClientProfile>(&query)
            .bind(input.user_id)
            .bind(&input.full_name)
            .bind(&input.address)
            .bind(&input.phone_number)
            .fetch_one(pool)
            .await
    }

    /// Find a client profile by primary key.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ClientProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM client_profiles WHERE id = $1");
        sqlx::query_as::<_, ClientProfile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the profile owned by a user (1:1).
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<ClientProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM client_profiles WHERE user_id = $1");
        sqlx::query_as::<_, ClientProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }
}
