pub mod delivery_statuses;
pub mod payment_statuses;
