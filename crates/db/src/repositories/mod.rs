//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod appointment_repo;
pub mod case_document_repo;
pub mod client_profile_repo;
pub mod conversation_repo;
pub mod hire_repo;
pub mod lawyer_document_repo;
pub mod lawyer_profile_repo;
pub mod legal_case_repo;
pub mod message_repo;
pub mod rating_repo;
pub mod session_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use appointment_repo::AppointmentRepo;
pub use case_document_repo::CaseDocumentRepo;
pub use client_profile_repo::ClientProfileRepo;
pub use conversation_repo::ConversationRepo;
pub use hire_repo::HireRepo;
pub use lawyer_document_repo::LawyerDocumentRepo;
pub use lawyer_profile_repo::LawyerProfileRepo;
pub use legal_case_repo::LegalCaseRepo;
pub use message_repo::MessageRepo;
pub use rating_repo::RatingRepo;
pub use session_repo::SessionRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
