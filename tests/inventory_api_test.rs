mod common;

use axum::http::Method;
use serde_json::{json, Value};
use test_case::test_case;

use common::{inventory_payload, response_json, TestApp};

fn update_payload(status: &str, quantity: Value) -> Value {
    json!({
        "item_name": "Television",
        "description": "Refurbished 4K LED TV",
        "category": "Electronics",
        "status": status,
        "quantity": quantity
    })
}

#[tokio::test]
async fn create_inventory_returns_stored_row() {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;

    let response = app
        .request(
            Method::POST,
            "/api/inventories",
            Some(inventory_payload(warehouse_id, "Television", 500)),
        )
        .await;
    assert_eq!(response.status(), 201);

    let body = response_json(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    assert_eq!(body["warehouse_id"], warehouse_id);
    assert_eq!(body["item_name"], "Television");
    assert_eq!(body["category"], "Electronics");
    assert_eq!(body["status"], "In Stock");
    assert_eq!(body["quantity"], 500);
}

#[tokio::test]
async fn quantity_may_be_sent_as_numeric_string() {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;

    let mut payload = inventory_payload(warehouse_id, "Hoodie", 0);
    payload["quantity"] = json!("260");

    let response = app
        .request(Method::POST, "/api/inventories", Some(payload))
        .await;
    assert_eq!(response.status(), 201);
    assert_eq!(response_json(response).await["quantity"], 260);
}

#[tokio::test]
async fn create_out_of_stock_stores_zero() {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;

    let mut payload = inventory_payload(warehouse_id, "Gym Bag", 40);
    payload["status"] = json!("Out of Stock");

    let response = app
        .request(Method::POST, "/api/inventories", Some(payload))
        .await;
    assert_eq!(response.status(), 201);
    assert_eq!(response_json(response).await["quantity"], 0);
}

#[test_case("warehouse_id" ; "warehouse reference")]
#[test_case("item_name" ; "item name")]
#[test_case("description" ; "description")]
#[test_case("category" ; "category")]
#[test_case("status" ; "status")]
#[test_case("quantity" ; "quantity")]
#[tokio::test]
async fn missing_field_is_rejected_without_write(field: &str) {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;

    let mut payload = inventory_payload(warehouse_id, "Television", 5);
    payload.as_object_mut().unwrap().remove(field);

    let response = app
        .request(Method::POST, "/api/inventories", Some(payload))
        .await;
    assert_eq!(response.status(), 400);

    let body = response_json(response).await;
    assert!(body["message"].as_str().unwrap().contains(field));
    assert_eq!(app.inventory_count().await, 0);
}

#[tokio::test]
async fn non_numeric_quantity_is_tagged() {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;

    let mut payload = inventory_payload(warehouse_id, "Television", 5);
    payload["quantity"] = json!("plenty");

    let response = app
        .request(Method::POST, "/api/inventories", Some(payload))
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(response_json(response).await["type"], "quantity");
    assert_eq!(app.inventory_count().await, 0);
}

#[tokio::test]
async fn unknown_warehouse_is_rejected_without_write() {
    let app = TestApp::new().await;

    let response = app
        .request(
            Method::POST,
            "/api/inventories",
            Some(inventory_payload(999, "Television", 5)),
        )
        .await;
    assert_eq!(response.status(), 400);

    let body = response_json(response).await;
    assert_eq!(body["type"], "warehouse_id");
    assert_eq!(body["message"], "Warehouse does not exist");
    assert_eq!(app.inventory_count().await, 0);
}

#[tokio::test]
async fn list_for_warehouse_returns_summary_rows_only() {
    let app = TestApp::new().await;
    let manhattan = app.create_warehouse("Manhattan").await;
    let washington = app.create_warehouse("Washington").await;
    let tv = app.create_inventory(manhattan, "Television", 10).await;
    let hoodie = app.create_inventory(manhattan, "Hoodie", 4).await;
    app.create_inventory(washington, "Keychain", 7).await;

    let response = app
        .request(
            Method::GET,
            &format!("/api/warehouses/{manhattan}/inventories"),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);

    let list = response_json(response).await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["id"], tv);
    assert_eq!(rows[1]["id"], hoodie);

    let mut keys: Vec<&str> = rows[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["category", "id", "item_name", "quantity", "status"]);
}

#[tokio::test]
async fn list_for_unknown_warehouse_is_empty() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::GET, "/api/warehouses/999/inventories", None)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn list_all_returns_joined_rows() {
    let app = TestApp::new().await;
    let manhattan = app.create_warehouse("Manhattan").await;
    let washington = app.create_warehouse("Washington").await;
    app.create_inventory(manhattan, "Television", 10).await;
    app.create_inventory(washington, "Keychain", 7).await;

    let response = app.request(Method::GET, "/api/inventories", None).await;
    assert_eq!(response.status(), 200);

    let list = response_json(response).await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["warehouse_name"], "Manhattan");
    assert_eq!(rows[1]["warehouse_name"], "Washington");
    assert_eq!(rows[1]["item_name"], "Keychain");

    let mut keys: Vec<&str> = rows[0]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "category",
            "description",
            "id",
            "item_name",
            "quantity",
            "status",
            "warehouse_name"
        ]
    );
}

#[tokio::test]
async fn get_inventory_joins_warehouse_name() {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Jersey").await;
    let id = app.create_inventory(warehouse_id, "Television", 10).await;

    let response = app
        .request(Method::GET, &format!("/api/inventories/{id}"), None)
        .await;
    assert_eq!(response.status(), 200);

    let body = response_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["warehouse_name"], "Jersey");
    assert_eq!(body["quantity"], 10);
    assert!(body.get("warehouse_id").is_none());
}

#[tokio::test]
async fn get_missing_inventory_is_not_found() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/api/inventories/77", None).await;
    assert_eq!(response.status(), 404);
    assert_eq!(
        response_json(response).await["message"],
        "Inventory item with ID 77 not found"
    );
}

#[tokio::test]
async fn update_replaces_fields() {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;
    let id = app.create_inventory(warehouse_id, "Television", 10).await;

    let response = app
        .request(
            Method::PUT,
            &format!("/api/inventories/{id}"),
            Some(update_payload("In Stock", json!(25))),
        )
        .await;
    assert_eq!(response.status(), 200);

    let body = response_json(response).await;
    assert_eq!(body["id"], id);
    assert_eq!(body["warehouse_id"], warehouse_id);
    assert_eq!(body["description"], "Refurbished 4K LED TV");
    assert_eq!(body["quantity"], 25);
}

#[test_case(json!(50) ; "positive quantity")]
#[test_case(json!(0) ; "zero quantity")]
#[test_case(json!("12") ; "numeric string")]
#[tokio::test]
async fn update_to_out_of_stock_stores_zero(quantity: Value) {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;
    let id = app.create_inventory(warehouse_id, "Television", 10).await;

    let response = app
        .request(
            Method::PUT,
            &format!("/api/inventories/{id}"),
            Some(update_payload("Out of Stock", quantity)),
        )
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(response_json(response).await["quantity"], 0);

    let response = app
        .request(Method::GET, &format!("/api/inventories/{id}"), None)
        .await;
    let stored = response_json(response).await;
    assert_eq!(stored["status"], "Out of Stock");
    assert_eq!(stored["quantity"], 0);
}

#[tokio::test]
async fn update_missing_item_is_not_found_before_validation() {
    let app = TestApp::new().await;

    let response = app
        .request(Method::PUT, "/api/inventories/5", Some(json!({})))
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn update_with_missing_field_leaves_row_unchanged() {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;
    let id = app.create_inventory(warehouse_id, "Television", 10).await;

    let mut payload = update_payload("In Stock", json!(99));
    payload.as_object_mut().unwrap().remove("category");

    let response = app
        .request(Method::PUT, &format!("/api/inventories/{id}"), Some(payload))
        .await;
    assert_eq!(response.status(), 400);

    let response = app
        .request(Method::GET, &format!("/api/inventories/{id}"), None)
        .await;
    assert_eq!(response_json(response).await["quantity"], 10);
}

#[tokio::test]
async fn update_rejects_non_numeric_quantity() {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;
    let id = app.create_inventory(warehouse_id, "Television", 10).await;

    let response = app
        .request(
            Method::PUT,
            &format!("/api/inventories/{id}"),
            Some(update_payload("In Stock", json!("a dozen"))),
        )
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(response_json(response).await["type"], "quantity");
}

#[tokio::test]
async fn delete_inventory_then_repeat_is_not_found() {
    let app = TestApp::new().await;
    let warehouse_id = app.create_warehouse("Manhattan").await;
    let id = app.create_inventory(warehouse_id, "Television", 10).await;

    let response = app
        .request(Method::DELETE, &format!("/api/inventories/{id}"), None)
        .await;
    assert_eq!(response.status(), 204);
    assert_eq!(app.inventory_count().await, 0);

    for _ in 0..2 {
        let response = app
            .request(Method::DELETE, &format!("/api/inventories/{id}"), None)
            .await;
        assert_eq!(response.status(), 404);
    }
}

#[tokio::test]
async fn update_of_item_whose_warehouse_vanished_is_rejected() {
    let app = TestApp::new().await;

    // Only reachable with foreign keys disabled; the schema cascades otherwise.
    app.execute_sql("PRAGMA foreign_keys = OFF").await;
    app.execute_sql(
        "INSERT INTO inventories (warehouse_id, item_name, description, category, status, quantity) \
         VALUES (999, 'Television', '4K LED TV', 'Electronics', 'In Stock', 10)",
    )
    .await;
    app.execute_sql("PRAGMA foreign_keys = ON").await;
    let id = 1;
    let before = app.stored_inventory(id).await.expect("orphan row inserted");
    assert_eq!(before.warehouse_id, 999);

    let response = app
        .request(
            Method::PUT,
            &format!("/api/inventories/{id}"),
            Some(update_payload("Out of Stock", json!(50))),
        )
        .await;
    assert_eq!(response.status(), 400);

    let body = response_json(response).await;
    assert_eq!(body["type"], "warehouse_id");
    assert_eq!(body["message"], "Warehouse does not exist");

    let after = app.stored_inventory(id).await.expect("row still stored");
    assert_eq!(after, before);
}

#[tokio::test]
async fn store_failure_is_internal_error_with_hidden_details() {
    let app = TestApp::new().await;
    app.execute_sql("DROP TABLE inventories").await;

    let response = app.request(Method::GET, "/api/inventories", None).await;
    assert_eq!(response.status(), 500);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Internal Server Error");
    assert_eq!(body["message"], "Database error");
    assert!(!body.to_string().contains("inventories"));
}
