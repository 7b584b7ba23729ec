pub mod axum_http;
pub mod mercado_pago;
pub mod postgres;
pub mod smtp;
pub mod storage;
