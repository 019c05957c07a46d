//! HTTP request handlers, grouped per resource.

pub mod appointments;
pub mod cases;
pub mod chat;
pub mod hire;
pub mod lawyers;
pub mod transactions;
pub mod users;
