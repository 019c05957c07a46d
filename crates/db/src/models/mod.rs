//! Entity models and DTOs.
//!
//! Each model file carries the full row struct (`FromRow`), the Create/Update
//! DTOs, and any status enums mapping to a PostgreSQL enum type created by
//! the migrations.

pub mod appointment;
pub mod client_profile;
pub mod conversation;
pub mod hire;
pub mod lawyer_document;
pub mod lawyer_profile;
pub mod legal_case;
pub mod rating;
pub mod session;
pub mod transaction;
pub mod user;
