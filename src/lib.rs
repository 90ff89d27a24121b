use serde::{Deserialize, Serialize};

pub mod api;
pub mod booking;
pub mod gallery;
pub mod pricing;
pub mod startup_checks;
pub mod suggest;

/// Placeholder that must be replaced at deploy time; flagged by the
/// startup checks.
pub const DEFAULT_SESSION_SECRET: &str = "change-me-in-production";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub app: AppConfig,
    pub store: StoreConfig,
    pub vision: VisionConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub name: String,
    pub log_level: String,
    pub admin_password: String,
    pub session_secret: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Where gallery records live. Without a base URL the server keeps records
/// in memory, which is only useful for development and tests.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VisionConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub cache_capacity: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    pub direct_discount_percent: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            app: AppConfig {
                name: "Ko Lake Villa".to_string(),
                log_level: "info".to_string(),
                admin_password: "password".to_string(),
                session_secret: DEFAULT_SESSION_SECRET.to_string(),
                base_url: None,
            },
            store: StoreConfig {
                base_url: None,
                timeout_seconds: 10,
            },
            vision: VisionConfig {
                endpoint: None,
                api_key: None,
                timeout_seconds: 10,
                cache_capacity: suggest::BoundedSuggestionCache::DEFAULT_CAPACITY,
            },
            pricing: PricingConfig {
                direct_discount_percent: 15,
            },
        }
    }
}

use axum::Router;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

#[derive(Debug, Error)]
pub enum CreateAppError {
    #[error("gallery store configuration error: {0}")]
    Store(#[from] gallery::GalleryError),

    #[error("vision provider configuration error: {0}")]
    Vision(#[from] suggest::SuggestError),

    #[error("store base URL is invalid: {0}")]
    InvalidStoreUrl(String),
}

#[derive(Clone)]
pub struct AppState {
    pub gallery: gallery::SharedGallery,
    pub suggestions: suggest::SharedSuggestions,
    pub rates: Arc<pricing::RateCard>,
    pub config: Config,
}

pub async fn create_app(config: Config) -> Result<Router, CreateAppError> {
    let store: gallery::store::DynGalleryStore = match &config.store.base_url {
        Some(raw) => {
            let base_url = url::Url::parse(raw)
                .map_err(|e| CreateAppError::InvalidStoreUrl(format!("{}: {}", raw, e)))?;
            Arc::new(gallery::store::HttpGalleryStore::new(
                base_url,
                std::time::Duration::from_secs(config.store.timeout_seconds),
            )?)
        }
        None => Arc::new(gallery::store::InMemoryGalleryStore::new()),
    };

    let gallery = Arc::new(gallery::GalleryManager::new(store));

    let provider = suggest::providers::create_provider(&config.vision)?;
    let cache = Arc::new(suggest::BoundedSuggestionCache::new(
        config.vision.cache_capacity,
    ));
    let suggestions = Arc::new(suggest::SuggestionService::new(provider, cache));

    let rates = Arc::new(pricing::RateCard::new(
        config.pricing.direct_discount_percent,
    ));

    tracing::info!(
        store = gallery.store_name(),
        vision = suggestions.provider_name(),
        "application state initialized"
    );

    let app_state = AppState {
        gallery,
        suggestions,
        rates,
        config,
    };

    Ok(Router::new()
        .route("/api/health", axum::routing::get(api::health_handler))
        .route("/api/auth", axum::routing::post(api::authenticate_handler))
        .route("/api/verify", axum::routing::get(api::verify_handler))
        .route(
            "/api/gallery",
            axum::routing::get(gallery::list_handler).post(gallery::create_handler),
        )
        .route(
            "/api/gallery/categories",
            axum::routing::get(gallery::categories_handler),
        )
        .route(
            "/api/gallery/suggest",
            axum::routing::post(suggest::suggest_handler),
        )
        .route(
            "/api/gallery/bulk-delete",
            axum::routing::post(gallery::bulk_delete_handler),
        )
        .route(
            "/api/gallery/{id}",
            axum::routing::put(gallery::update_handler).delete(gallery::delete_handler),
        )
        .route("/api/rooms", axum::routing::get(pricing::rooms_handler))
        .route(
            "/api/booking",
            axum::routing::post(booking::booking_handler),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    let method = request.method();
                    let uri = request.uri();
                    let matched_path = request
                        .extensions()
                        .get::<axum::extract::MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::info_span!(
                        "http_request",
                        method = %method,
                        uri = %uri,
                        matched_path,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        let status = response.status();
                        tracing::info!(
                            target: "access_log",
                            status = %status,
                            latency_ms = %latency.as_millis(),
                            "response"
                        );
                    },
                ),
        )
        .with_state(app_state))
}
