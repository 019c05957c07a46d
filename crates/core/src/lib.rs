//! Shared domain types for the CaseBridge platform.
//!
//! - [`error`] -- the `CoreError` taxonomy shared across crates.
//! - [`types`] -- primitive type aliases (`DbId`, `Timestamp`).
//! - [`roles`] -- well-known role name constants.
//! - [`rating`] -- lawyer rating aggregation.
//! - [`catalog`] -- fixed choice catalogs (specializations, experience bands).

pub mod catalog;
pub mod error;
pub mod rating;
pub mod roles;
pub mod types;
