pub mod email;
pub mod machinery;
pub mod pagos;
pub mod payment_methods;
pub mod providers;
pub mod reservations;
pub mod uploads;
pub mod users;
