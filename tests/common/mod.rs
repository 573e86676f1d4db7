use axum::{
    body::{self, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use sea_orm::{
    ConnectionTrait, DatabaseBackend as DbBackend, EntityTrait, PaginatorTrait, Statement,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;
use warehouse_api::{
    config::AppConfig,
    db,
    entities::{inventory, warehouse},
    AppState,
};

/// Helper harness for spinning up the application over a throwaway SQLite file.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _db_dir: TempDir,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_dir = tempfile::tempdir().expect("create temp dir for test database");
        let db_path = db_dir.path().join("warehouse_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.auto_migrate = true;
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool));
        let router = warehouse_api::app_router(state.clone());

        Self {
            router,
            state,
            _db_dir: db_dir,
        }
    }

    /// Send a request against the router with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Send a raw, possibly malformed, JSON body.
    #[allow(dead_code)]
    pub async fn request_raw(&self, method: Method, uri: &str, body: &'static str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Creates a warehouse through the API and returns its id.
    #[allow(dead_code)]
    pub async fn create_warehouse(&self, name: &str) -> i64 {
        let response = self
            .request(Method::POST, "/api/warehouses", Some(warehouse_payload(name)))
            .await;
        assert_eq!(response.status(), 201, "warehouse creation should succeed");
        response_json(response).await["id"]
            .as_i64()
            .expect("warehouse id")
    }

    /// Creates an inventory item through the API and returns its id.
    #[allow(dead_code)]
    pub async fn create_inventory(&self, warehouse_id: i64, item_name: &str, quantity: i64) -> i64 {
        let response = self
            .request(
                Method::POST,
                "/api/inventories",
                Some(inventory_payload(warehouse_id, item_name, quantity)),
            )
            .await;
        assert_eq!(response.status(), 201, "inventory creation should succeed");
        response_json(response).await["id"]
            .as_i64()
            .expect("inventory id")
    }

    /// Runs a raw statement against the test database.
    #[allow(dead_code)]
    pub async fn execute_sql(&self, sql: &str) {
        self.state
            .db
            .execute(Statement::from_string(DbBackend::Sqlite, sql.to_string()))
            .await
            .expect("raw statement should succeed");
    }

    /// Reads an inventory row straight from the store, bypassing the join used by the API.
    #[allow(dead_code)]
    pub async fn stored_inventory(&self, id: i64) -> Option<inventory::Model> {
        inventory::Entity::find_by_id(id as i32)
            .one(self.state.db.as_ref())
            .await
            .expect("load inventory row")
    }

    #[allow(dead_code)]
    pub async fn warehouse_count(&self) -> u64 {
        warehouse::Entity::find()
            .count(self.state.db.as_ref())
            .await
            .expect("count warehouses")
    }

    #[allow(dead_code)]
    pub async fn inventory_count(&self) -> u64 {
        inventory::Entity::find()
            .count(self.state.db.as_ref())
            .await
            .expect("count inventories")
    }
}

pub async fn response_json(response: Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body bytes");
    serde_json::from_slice(&bytes).expect("json response")
}

#[allow(dead_code)]
pub fn warehouse_payload(name: &str) -> Value {
    json!({
        "warehouse_name": name,
        "address": "503 Broadway",
        "city": "New York",
        "country": "USA",
        "contact_name": "Parmin Aujla",
        "contact_position": "Warehouse Manager",
        "contact_phone": "+1 (646) 123-1234",
        "contact_email": "paujla@instock.com"
    })
}

#[allow(dead_code)]
pub fn inventory_payload(warehouse_id: i64, item_name: &str, quantity: i64) -> Value {
    json!({
        "warehouse_id": warehouse_id,
        "item_name": item_name,
        "description": "This 50\", 4K LED TV provides a crystal-clear picture.",
        "category": "Electronics",
        "status": "In Stock",
        "quantity": quantity
    })
}
