//! Warehouse API Library
//!
//! HTTP API for managing warehouses and the inventory items stored in them.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod middleware_helpers;
pub mod migrator;
pub mod openapi;
pub mod services;
pub mod tracing;
pub mod validation;

use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub services: handlers::AppServices,
}

impl AppState {
    /// Wires every service to the shared pool.
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        let services = handlers::AppServices::new(db.clone());
        Self { db, services }
    }

    pub fn warehouse_service(&self) -> Arc<services::warehouses::WarehouseService> {
        self.services.warehouses.clone()
    }

    pub fn inventory_service(&self) -> Arc<services::inventories::InventoryService> {
        self.services.inventories.clone()
    }
}

/// Resource routes, mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(handlers::warehouses::warehouse_routes())
        .merge(handlers::inventories::inventory_routes())
}

/// Unmatched paths answer with the standard JSON error body.
async fn route_not_found() -> errors::ServiceError {
    errors::ServiceError::NotFound("Route not found".to_string())
}

/// Full application router: API, health checks, request ids and HTTP tracing.
///
/// Transport concerns that depend on deployment (CORS, compression, Swagger UI)
/// are layered on by the binary.
pub fn app_router(state: AppState) -> Router {
    let health = health::health_routes(state.db.clone());

    Router::new()
        .route("/api", get(handlers::common::welcome))
        .nest("/api", api_routes())
        .fallback(route_not_found)
        .with_state(state)
        .merge(health)
        // A panicking handler still answers with the JSON error body
        .layer(CatchPanicLayer::custom(errors::panic_response))
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id::request_id_middleware,
        ))
}
