use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::payment_methods;

// Card rows carry only masked data: holder, brand, last4, expiration and a
// SHA-256 fingerprint of the PAN. The PAN and CVV never reach the database.
#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = payment_methods)]
pub struct PaymentMethodEntity {
    pub id: Uuid,
    pub card_holder: String,
    pub card_brand: Option<String>,
    pub card_last4: String,
    pub card_fingerprint: String,
    pub expiration_date: String,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = payment_methods)]
pub struct InsertPaymentMethodEntity {
    pub card_holder: String,
    pub card_brand: Option<String>,
    pub card_last4: String,
    pub card_fingerprint: String,
    pub expiration_date: String,
    pub user_id: Uuid,
}

#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = payment_methods)]
pub struct UpdatePaymentMethodEntity {
    pub card_holder: String,
    pub card_brand: Option<String>,
    pub card_last4: String,
    pub card_fingerprint: String,
    pub expiration_date: String,
}
