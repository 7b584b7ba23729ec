pub mod image_storage;
pub mod machinery;
pub mod mailer;
pub mod payment_gateway;
pub mod payment_methods;
pub mod payments;
pub mod providers;
pub mod reservations;
pub mod uploads;
pub mod users;
