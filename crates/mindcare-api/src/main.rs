use std::env;
use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

/// Session tokens last one day; the frontend re-logs-in after that.
const TOKEN_TTL_SECONDS: u64 = 24 * 60 * 60;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("MINDCARE_BUCKET").unwrap_or_else(|_| "mindcare".to_string());
    let model_id = env::var("MINDCARE_MODEL_ID")
        .unwrap_or_else(|_| mindcare_chat::chat::DEFAULT_MODEL_ID.to_string());
    let addr = env::var("MINDCARE_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
    // No default for the signing secret: a guessable secret would let anyone
    // mint valid session tokens.
    let jwt_secret = env::var("MINDCARE_JWT_SECRET")
        .map_err(|_| eyre::eyre!("MINDCARE_JWT_SECRET must be set"))?;

    let aws_config = mindcare_storage::client::load_aws_config().await;
    let s3 = mindcare_storage::client::build_client(&aws_config);

    let state = AppState {
        s3,
        aws_config: Arc::new(aws_config),
        bucket,
        jwt_secret: Arc::new(jwt_secret.into_bytes()),
        token_ttl_seconds: TOKEN_TTL_SECONDS,
        model_id,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let public = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Instruments (no auth — public questionnaire schemas)
        .route("/instruments", get(routes::instruments::list_instruments))
        .route(
            "/instruments/{id}",
            get(routes::instruments::get_instrument_detail),
        )
        .route("/auth/register", post(routes::auth::register))
        .route("/auth/login", post(routes::auth::login));

    let protected = Router::new()
        .route("/users/{id}", get(routes::users::get_profile))
        .route("/users/{id}", put(routes::users::update_profile))
        .route(
            "/users/{id}/photo",
            post(routes::users::upload_photo)
                .layer(DefaultBodyLimit::max(routes::users::MAX_PHOTO_BYTES + 1024)),
        )
        .route(
            "/assessments/classify",
            post(routes::assessments::classify_assessment),
        )
        .route("/chat", post(routes::chat::send_message))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = public
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "mindcare api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
