use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::payment_methods::PaymentMethodEntity;

#[derive(Debug, Clone, Deserialize)]
pub struct InsertPaymentMethodModel {
    pub card_holder: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

impl InsertPaymentMethodModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.card_holder.trim().is_empty()
            || self.card_number.trim().is_empty()
            || self.expiration_date.trim().is_empty()
            || self.cvv.trim().is_empty()
        {
            return Err("Faltan campos obligatorios".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePaymentMethodModel {
    pub card_holder: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
}

impl UpdatePaymentMethodModel {
    pub fn validate(&self) -> Result<(), String> {
        if self.card_holder.trim().is_empty()
            || self.card_number.trim().is_empty()
            || self.expiration_date.trim().is_empty()
            || self.cvv.trim().is_empty()
        {
            return Err("Faltan campos obligatorios".to_string());
        }
        Ok(())
    }
}

/// Masked view of a stored card. Only the last four digits survive intake.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentMethodModel {
    pub id: Uuid,
    pub card_holder: String,
    pub card_brand: Option<String>,
    pub card_last4: String,
    pub expiration_date: String,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentMethodEntity> for PaymentMethodModel {
    fn from(entity: PaymentMethodEntity) -> Self {
        Self {
            id: entity.id,
            card_holder: entity.card_holder,
            card_brand: entity.card_brand,
            card_last4: entity.card_last4,
            expiration_date: entity.expiration_date,
            user_id: entity.user_id,
            created_at: entity.created_at,
        }
    }
}
