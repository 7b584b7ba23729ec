#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub server: Server,
    pub database: Database,
    pub mercado_pago: MercadoPago,
    pub smtp: Smtp,
    pub s3: S3,
}

#[derive(Debug, Clone)]
pub struct Server {
    pub port: u16,
    pub body_limit: u64,
    pub timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Database {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct MercadoPago {
    pub access_token: String,
    pub base_url: String,
    /// Public origin of this backend, used for back URLs and the webhook.
    pub public_base_url: String,
    /// Mobile deep link prefix for payment redirect outcomes.
    pub deep_link_base: String,
}

#[derive(Debug, Clone)]
pub struct Smtp {
    pub host: String,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Debug, Clone)]
pub struct S3 {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub public_base_url: String,
}
