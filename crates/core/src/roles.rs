//! Well-known role name constants.
//!
//! These must match the `user_role` enum values seeded by the migrations.

/// A general user who hires lawyers.
pub const ROLE_CLIENT: &str = "client";
/// A verified legal professional.
pub const ROLE_LAWYER: &str = "lawyer";
/// Reserved system identity (the legal assistant bot account).
pub const ROLE_SYSTEM: &str = "system";
