//! Appointment model.

use casebridge_core::types::{DbId, Timestamp};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Appointment status, mapping to the `appointment_status` PostgreSQL enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "appointment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Scheduled,
    Completed,
    Cancelled,
}

/// Full appointment row, created by a lawyer for an existing client profile.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Appointment {
    pub id: DbId,
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub title: String,
    pub description: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: AppointmentStatus,
    pub created_at: Timestamp,
}

/// An appointment joined with counterpart display fields, for listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AppointmentWithNames {
    pub id: DbId,
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub title: String,
    pub description: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
    pub status: AppointmentStatus,
    pub created_at: Timestamp,
    pub client_name: String,
    pub lawyer_name: String,
}

/// DTO for scheduling a new appointment.
#[derive(Debug)]
pub struct CreateAppointment {
    pub client_id: DbId,
    pub lawyer_id: DbId,
    pub title: String,
    pub description: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: NaiveTime,
}
