use anyhow::{Ok, Result};

use super::config_model::DotEnvyConfig;

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = super::config_model::Server {
        port: std::env::var("SERVER_PORT")
            .expect("SERVER_PORT is invalid")
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .expect("SERVER_BODY_LIMIT is invalid")
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .expect("SERVER_TIMEOUT is invalid")
            .parse()?,
    };

    let database = super::config_model::Database {
        url: std::env::var("DATABASE_URL").expect("DATABASE_URL is invalid"),
    };

    let mercado_pago = super::config_model::MercadoPago {
        access_token: std::env::var("MERCADO_PAGO_ACCESS_TOKEN")
            .expect("MERCADO_PAGO_ACCESS_TOKEN is invalid"),
        base_url: std::env::var("MERCADO_PAGO_BASE_URL")
            .unwrap_or_else(|_| "https://api.mercadopago.com".to_string()),
        public_base_url: std::env::var("PUBLIC_BASE_URL").expect("PUBLIC_BASE_URL is invalid"),
        deep_link_base: std::env::var("DEEP_LINK_BASE")
            .unwrap_or_else(|_| "rentek://payment".to_string()),
    };

    let smtp = super::config_model::Smtp {
        host: std::env::var("SMTP_HOST").expect("SMTP_HOST is invalid"),
        username: std::env::var("SMTP_USERNAME").expect("SMTP_USERNAME is invalid"),
        password: std::env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD is invalid"),
        from: std::env::var("SMTP_FROM").expect("SMTP_FROM is invalid"),
    };

    let s3 = super::config_model::S3 {
        endpoint: std::env::var("S3_ENDPOINT").expect("S3_ENDPOINT is invalid"),
        region: std::env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
        access_key: std::env::var("S3_ACCESS_KEY").expect("S3_ACCESS_KEY is invalid"),
        secret_key: std::env::var("S3_SECRET_KEY").expect("S3_SECRET_KEY is invalid"),
        bucket: std::env::var("S3_BUCKET").expect("S3_BUCKET is invalid"),
        public_base_url: std::env::var("S3_PUBLIC_BASE_URL")
            .expect("S3_PUBLIC_BASE_URL is invalid"),
    };

    Ok(DotEnvyConfig {
        server,
        database,
        mercado_pago,
        smtp,
        s3,
    })
}
