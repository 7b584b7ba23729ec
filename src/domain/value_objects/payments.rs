use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::payments::PaymentEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePreferenceModel {
    pub precio: Option<f64>,
    pub reservation_id: Option<Uuid>,
}

/// Asynchronous gateway notification: `{"type": "payment", "data": {"id": ...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookModel {
    #[serde(rename = "type")]
    pub notification_type: String,
    pub data: Option<WebhookData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookData {
    pub id: serde_json::Value,
}

impl WebhookData {
    /// Gateway notifications carry the payment id either as a number or a string.
    pub fn id_as_string(&self) -> Option<String> {
        match &self.id {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}

/// Authoritative payment record fetched back from the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayPayment {
    pub id: serde_json::Value,
    pub status: String,
    pub external_reference: Option<String>,
    pub transaction_amount: Option<f64>,
    pub payment_method_id: Option<String>,
}

impl GatewayPayment {
    pub fn id_as_string(&self) -> String {
        match &self.id {
            serde_json::Value::String(id) => id.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentModel {
    pub id: Uuid,
    pub amount: f64,
    #[serde(rename = "reservationId")]
    pub reservation_id: Uuid,
    pub payment_method: String,
    pub gateway_payment_id: Option<String>,
}

impl From<PaymentEntity> for PaymentModel {
    fn from(entity: PaymentEntity) -> Self {
        Self {
            id: entity.id,
            amount: entity.amount,
            reservation_id: entity.reservation_id,
            payment_method: entity.payment_method,
            gateway_payment_id: entity.gateway_payment_id,
        }
    }
}
