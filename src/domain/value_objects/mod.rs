pub mod email;
pub mod enums;
pub mod machinery;
pub mod payment_methods;
pub mod payments;
pub mod providers;
pub mod reservations;
pub mod uploads;
pub mod users;
