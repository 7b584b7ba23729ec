use std::{net::SocketAddr, sync::Arc, time::Duration};

use anyhow::Result;
use axum::{
    Router,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::config_model::DotEnvyConfig,
    infrastructure::{
        axum_http::{default_routers, routers},
        mercado_pago::MercadoPagoClient,
        postgres::postgres_connection::PgPool,
        smtp::SmtpMailer,
        storage::s3::S3ImageStore,
    },
};

pub async fn start(
    config: Arc<DotEnvyConfig>,
    db_pool: Arc<PgPool>,
    payment_gateway: Arc<MercadoPagoClient>,
    mailer: Arc<SmtpMailer>,
    image_storage: Arc<S3ImageStore>,
) -> Result<()> {
    let app = Router::new()
        .fallback(default_routers::not_found)
        .nest("/users", routers::users::routes(Arc::clone(&db_pool)))
        .nest(
            "/providers",
            routers::providers::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/machinery",
            routers::machinery::routes(Arc::clone(&db_pool), Arc::clone(&image_storage)),
        )
        .nest(
            "/reservations",
            routers::reservations::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/payment-methods",
            routers::payment_methods::routes(Arc::clone(&db_pool)),
        )
        .nest(
            "/api/pagos",
            routers::pagos::routes(
                Arc::clone(&db_pool),
                Arc::clone(&payment_gateway),
                Arc::clone(&mailer),
                config.mercado_pago.deep_link_base.clone(),
            ),
        )
        .nest(
            "/api/upload",
            routers::uploads::routes(Arc::clone(&db_pool), Arc::clone(&image_storage)),
        )
        .nest("/email", routers::email::routes(Arc::clone(&mailer)))
        .route("/health-check", get(default_routers::health_check))
        .layer(TimeoutLayer::new(Duration::from_secs(config.server.timeout)))
        .layer(RequestBodyLimitLayer::new(
            (config.server.body_limit * 1024 * 1024).try_into()?,
        ))
        .layer(
            CorsLayer::new()
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([AUTHORIZATION, CONTENT_TYPE])
                .allow_origin(Any), // TODO Add the domain later
        )
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server is running on port {}", config.server.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+C signal"),
        _ = terminate => info!("Received terminate signal"),
    }
}
