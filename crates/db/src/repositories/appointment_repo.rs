//! Repository for the `appointments` table.

use casebridge_core::types::DbId;
use sqlx::PgPool;

use crate::models::appointment::{
    Appointment, AppointmentStatus, AppointmentWithNames, CreateAppointment,
};

const COLUMNS: &str = "id, client_id, lawyer_id, title, description, appointment_date, \
                       appointment_time, status, created_at";

const JOINED_COLUMNS: &str = "a.id, a.client_id, a.lawyer_id, a.title, a.description, \
                              a.appointment_date, a.appointment_time, a.status, a.created_at, \
                              c.full_name AS client_name, l.full_name AS lawyer_name";

/// Provides CRUD operations for appointments.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a new appointment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments
                (client_id, lawyer_id, title, description, appointment_date, appointment_time)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(input.client_id)
            .bind(input.lawyer_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.appointment_date)
            .bind(input.appointment_time)
            .fetch_one(pool)
            .await
    }

    /// Find an appointment by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE id = $1");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a lawyer's appointments, most recent date first.
    pub async fn list_for_lawyer(
        pool: &PgPool,
        lawyer_id: DbId,
    ) -> Result<Vec<AppointmentWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM appointments a
             JOIN client_profiles c ON c.id = a.client_id
             JOIN lawyer_profiles l ON l.id = a.lawyer_id
             WHERE a.lawyer_id = $1
             ORDER BY a.appointment_date DESC"
        );
        sqlx::query_as::<_, AppointmentWithNames>(&query)
            .bind(lawyer_id)
            .fetch_all(pool)
            .await
    }

    /// List a client's appointments, most recent date first.
    pub async fn list_for_client(
        pool: &PgPool,
        client_id: DbId,
    ) -> Result<Vec<AppointmentWithNames>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM appointments a
             JOIN client_profiles c ON c.id = a.client_id
             JOIN lawyer_profiles l ON l.id = a.lawyer_id
             WHERE a.client_id = $1
             ORDER BY a.appointment_date DESC"
        );
        sqlx::query_as::<_, AppointmentWithNames>(&query)
            .bind(client_id)
            .fetch_all(pool)
            .await
    }

    /// Update an appointment's status, scoped to its owning lawyer.
    ///
    /// Returns `None` when no matching row.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        lawyer_id: DbId,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!(
            "UPDATE appointments SET status = $3
             WHERE id = $1 AND lawyer_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(id)
            .bind(lawyer_id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an appointment, scoped to its owning lawyer.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, lawyer_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1 AND lawyer_id = $2")
            .bind(id)
            .bind(lawyer_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
