use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::value_objects::payments::GatewayPayment;

#[automock]
#[async_trait]
pub trait PaymentGateway {
    /// Creates a checkout preference and returns the gateway response verbatim.
    async fn create_preference(
        &self,
        amount: f64,
        reservation_id: Option<Uuid>,
    ) -> Result<serde_json::Value>;

    /// Fetches the authoritative payment record by gateway payment id.
    async fn get_payment(&self, payment_id: String) -> Result<GatewayPayment>;
}
