//! # Backend Module
//!
//! Contains all non-UI logic for the digital closet.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients
//!     ↓
//! IO Layer (REST API, mappers)
//!     ↓
//! Domain Layer (ClosetStore, services, views)
//!     ↓
//! Storage Layer (JSON files)
//! ```
//!
//! The application root owns exactly one `ClosetStore`. Every service in
//! `AppState` holds a handle to it, so all mutations go through one lock.

pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use log::info;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::backend::domain::{
    ClosetStore, IdGenerator, OutfitService, RecommendationService, UuidIdGenerator, ViewConfig,
    ViewService, ViewSynchronizer, WardrobeService,
};
use crate::backend::storage::{ClosetStorage, JsonConnection, PersistentStore};
use crate::config::AppConfig;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub wardrobe_service: WardrobeService,
    pub outfit_service: OutfitService,
    pub recommendation_service: RecommendationService,
    pub view_service: ViewService,
}

/// Initialize the backend over the JSON files in the configured data directory
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("📁 Using data directory: {}", config.data_directory.display());
    let connection = JsonConnection::new(&config.data_directory)?;

    let views = ViewSynchronizer::new(ViewConfig {
        recommendation_limit: config.recommendation_limit,
    });
    Ok(initialize_with_storage(
        Arc::new(connection),
        Arc::new(UuidIdGenerator),
        views,
    ))
}

/// Wire the services around one store over the given storage backend
pub fn initialize_with_storage(
    storage: Arc<dyn ClosetStorage>,
    ids: Arc<dyn IdGenerator>,
    views: ViewSynchronizer,
) -> AppState {
    info!("Setting up domain model");
    let recommendation_limit = views.config().recommendation_limit;
    let store = ClosetStore::open(PersistentStore::new(storage), ids, views);

    info!("Setting up application state");
    AppState {
        wardrobe_service: WardrobeService::new(store.clone()),
        outfit_service: OutfitService::new(store.clone()),
        recommendation_service: RecommendationService::new(store.clone(), recommendation_limit),
        view_service: ViewService::new(store),
    }
}

/// CORS for the browser frontend. No origin configured means any origin.
pub fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    Ok(match allowed_origin {
        Some(origin) => cors.allow_origin(
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))?,
        ),
        None => cors.allow_origin(Any),
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, cors: CorsLayer) -> Router {
    let api_routes = Router::new()
        .nest("/items", io::rest::item_apis::router())
        .nest("/outfits", io::rest::outfit_apis::router())
        .nest("/recommendations", io::rest::recommendation_apis::router())
        .nest("/views", io::rest::view_apis::router())
        .nest("/calendar", io::rest::calendar_apis::router());

    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}


#[cfg(test)]
mod tests {
    use super::test_support::{send, test_app};
    use super::*;
    use crate::backend::storage::{MemoryStorage, StoreKey};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_cors_layer_rejects_bad_origin() {
        assert!(cors_layer(Some("http://localhost:8080")).is_ok());
        assert!(cors_layer(None).is_ok());
        assert!(cors_layer(Some("bad\norigin")).is_err());
    }

    #[tokio::test]
    async fn test_register_wear_remove_end_to_end() {
        let storage = MemoryStorage::new();
        let app = test_app(&storage);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/items",
            Some(json!({"name": "白いTシャツ", "category": "tops"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let item_id = body["item"]["id"].as_str().unwrap().to_string();

        send(
            &app,
            Method::POST,
            "/api/outfits/2024-06-01/toggle",
            Some(json!({"item_id": item_id})),
        )
        .await;
        let (_, outfit) = send(&app, Method::GET, "/api/outfits/2024-06-01", None).await;
        assert_eq!(outfit["items"][0]["name"], "白いTシャツ");

        let (status, _) = send(&app, Method::DELETE, &format!("/api/items/{}", item_id), None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, outfit) = send(&app, Method::GET, "/api/outfits/2024-06-01", None).await;
        assert_eq!(outfit["items"], json!([]));
        assert_eq!(storage.contents(StoreKey::Outfits).unwrap().trim(), "{}");
    }

    #[tokio::test]
    async fn test_state_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::with_data_directory(temp_dir.path());

        let app = create_router(initialize_backend(&config).unwrap(), cors_layer(None).unwrap());
        let (_, body) = send(&app, Method::POST, "/api/items", Some(json!({"name": "ブルージーンズ", "category": "bottoms"}))).await;
        let item_id = body["item"]["id"].as_str().unwrap().to_string();
        assert!(item_id.starts_with("item::"));
        send(
            &app,
            Method::POST,
            "/api/outfits/2024-06-01/wear",
            Some(json!({"item_id": item_id})),
        )
        .await;

        let reopened = create_router(initialize_backend(&config).unwrap(), cors_layer(None).unwrap());
        let (_, item) = send(&reopened, Method::GET, &format!("/api/items/{}", item_id), None).await;
        assert_eq!(item["name"], "ブルージーンズ");
        let (_, outfit) = send(&reopened, Method::GET, "/api/outfits/2024-06-01", None).await;
        assert_eq!(outfit["items"][0]["id"], item_id.as_str());
    }

    #[tokio::test]
    async fn test_legacy_browser_data_loads() {
        let storage = MemoryStorage::new()
            .with_contents(
                StoreKey::Wardrobe,
                r#"[
                    {"id": 1718000000000, "name": "白いTシャツ", "category": "tops", "color": "", "image": null, "date": "2024-05-01"},
                    {"id": 1718000000001, "name": "ブルージーンズ", "category": "bottoms", "date": "2024-05-02"},
                    {"id": 1718000000002, "name": "スニーカー", "category": "shoes", "date": ""}
                ]"#,
            )
            .with_contents(
                StoreKey::Outfits,
                r#"{"2024-06-01": [1718000000000, 42], "2024-06-02": [7], "2024-06-03": [], "2024-06-04": [1718000000002]}"#,
            );
        let app = test_app(&storage);

        let (_, outfit) = send(&app, Method::GET, "/api/outfits/2024-06-01", None).await;
        assert_eq!(outfit["items"].as_array().unwrap().len(), 1);
        assert_eq!(outfit["items"][0]["id"], "1718000000000");
        assert_eq!(outfit["items"][0]["color"], serde_json::Value::Null);

        let (_, outfit) = send(&app, Method::GET, "/api/outfits/2024-06-04", None).await;
        assert_eq!(outfit["items"][0]["name"], "スニーカー");

        let (_, items) = send(&app, Method::GET, "/api/items?sort=oldest", None).await;
        assert_eq!(items["items"][0]["name"], "スニーカー");
        assert_eq!(items["items"][0]["addedDate"], "1970-01-01T00:00:00+00:00");
        assert_eq!(items["items"][1]["addedDate"], "2024-05-01T00:00:00+00:00");

        let (_, item) = send(&app, Method::GET, "/api/items/1718000000001", None).await;
        assert_eq!(item["name"], "ブルージーンズ");

        // Loading alone leaves the stored outfits as they were
        assert!(storage.contents(StoreKey::Outfits).unwrap().contains("42"));

        send(
            &app,
            Method::POST,
            "/api/outfits/2024-06-05/toggle",
            Some(json!({"item_id": "1718000000001"})),
        )
        .await;
        let stored = storage.contents(StoreKey::Outfits).unwrap();
        assert!(!stored.contains("2024-06-02"));
        assert!(!stored.contains("42"));
        assert!(stored.contains("2024-06-04"));
    }
}
