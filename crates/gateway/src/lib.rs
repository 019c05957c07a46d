//! Payment gateway collaborator.
//!
//! The platform opens an order with an external payment gateway when a
//! lawyer creates a payment request, and later verifies the checkout
//! signature the gateway hands to the paying client. Both concerns live
//! behind [`PaymentGateway`] so handlers and tests never depend on the
//! concrete HTTP client.

pub mod razorpay;
pub mod signature;

use async_trait::async_trait;

pub use razorpay::RazorpayGateway;

/// Errors surfaced by the gateway collaborator.
///
/// Nothing is retried here; failures travel to the caller verbatim.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The gateway could not be reached or returned a transport error.
    #[error("Gateway request failed: {0}")]
    Request(String),

    /// The gateway answered with a non-success status.
    #[error("Gateway rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The gateway's response could not be decoded.
    #[error("Malformed gateway response: {0}")]
    MalformedResponse(String),
}

/// An order opened with the gateway. The order id is stored on the local
/// transaction and must match at verification time.
#[derive(Debug, Clone)]
pub struct GatewayOrder {
    pub order_id: String,
    pub amount_minor: i64,
    pub currency: String,
}

/// The payment gateway, as seen by the rest of the platform.
///
/// `create_order` is a blocking external round trip with no cancellation
/// support; callers carry their own timeout policy (the HTTP implementation
/// sets a client-side request timeout).
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Open an order for the given amount in minor currency units.
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, GatewayError>;

    /// Verify a checkout signature against an order/payment id pair.
    ///
    /// This is the only integrity guarantee in the payment flow.
    fn verify_signature(&self, order_id: &str, payment_id: &str, signature: &str) -> bool;

    /// The public key id clients need to run checkout.
    fn key_id(&self) -> &str;
}
