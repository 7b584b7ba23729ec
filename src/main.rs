use std::sync::Arc;

use anyhow::Result;
use rentek_backend::{
    config::config_loader,
    infrastructure::{
        axum_http::http_serve, mercado_pago::MercadoPagoClient,
        postgres::postgres_connection, smtp::SmtpMailer, storage::s3::S3ImageStore,
    },
};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Backend exited with error: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let dotenvy_env = config_loader::load()?;
    info!("ENV has been loaded");

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database.url)?;
    info!("Postgres connection has been established");

    let payment_gateway = MercadoPagoClient::new(
        dotenvy_env.mercado_pago.access_token.clone(),
        dotenvy_env.mercado_pago.base_url.clone(),
        dotenvy_env.mercado_pago.public_base_url.clone(),
    );
    let mailer = SmtpMailer::new(&dotenvy_env.smtp)?;
    let image_storage = S3ImageStore::new(&dotenvy_env.s3).await?;

    http_serve::start(
        Arc::new(dotenvy_env),
        Arc::new(postgres_pool),
        Arc::new(payment_gateway),
        Arc::new(mailer),
        Arc::new(image_storage),
    )
    .await?;

    Ok(())
}
