use std::sync::Arc;

use casebridge_assistant::LegalAssistant;
use casebridge_core::types::DbId;
use casebridge_gateway::PaymentGateway;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: casebridge_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Payment gateway collaborator.
    pub gateway: Arc<dyn PaymentGateway>,
    /// Legal assistant collaborator.
    pub assistant: Arc<dyn LegalAssistant>,
    /// User id of the reserved bot account, provisioned at startup.
    pub bot_user_id: DbId,
}
