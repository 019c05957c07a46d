//! Request extractors for authentication and role-gated identity.

pub mod auth;
pub mod identity;
