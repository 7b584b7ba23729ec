pub mod email;
pub mod machinery;
pub mod payment_methods;
pub mod payment_processing;
pub mod providers;
pub mod reservations;
pub mod uploads;
pub mod users;
