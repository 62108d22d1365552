//! Integration tests for the customer endpoints.
//!
//! Each test gets a fresh database from `#[sqlx::test]` and drives the real
//! router in-process. Run with `DATABASE_URL` set and `--ignored`.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

use customer_registry_api::routes::customers::CustomerResponse;
use customer_registry_integration_tests::TestContext;

fn taro() -> Value {
    json!({
        "customer_id": "C0001",
        "customer_name": "山田 太郎",
        "age": 35,
        "gender": "男性",
    })
}

fn hanako() -> Value {
    json!({
        "customer_id": "C0002",
        "customer_name": "佐藤 花子",
        "age": 28,
        "gender": "女性",
    })
}

fn parse(body: Value) -> CustomerResponse {
    serde_json::from_value(body).unwrap()
}

async fn create(ctx: &TestContext, payload: &Value) -> CustomerResponse {
    let response = ctx.post("/customers", payload).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    parse(response.body)
}

// =============================================================================
// Create
// =============================================================================

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_create_returns_stored_record(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();

    let customer = create(&ctx, &taro()).await;

    assert!(uuid::Uuid::parse_str(&customer.internal_id).is_ok());
    assert_eq!(customer.customer_id, "C0001");
    assert_eq!(customer.customer_name, "山田 太郎");
    assert_eq!(customer.age, Some(35));
    assert_eq!(customer.gender.as_deref(), Some("男性"));
}

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_create_generates_distinct_internal_ids(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();

    let first = create(&ctx, &taro()).await;
    let second = create(&ctx, &hanako()).await;

    assert_ne!(first.internal_id, second.internal_id);
}

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_duplicate_customer_id_fails_creation(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();
    let original = create(&ctx, &taro()).await;

    let mut duplicate = hanako();
    duplicate["customer_id"] = json!("C0001");
    let response = ctx.post("/customers", &duplicate).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({ "detail": "Failed to create customer" })
    );

    // The existing row is untouched
    let all = ctx.get("/allcustomers").await;
    let customers: Vec<CustomerResponse> = serde_json::from_value(all.body).unwrap();
    assert_eq!(customers, vec![original]);
}

// =============================================================================
// Read
// =============================================================================

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_read_after_create_is_identical(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();
    let created = create(&ctx, &taro()).await;

    let response = ctx.get(&format!("/customers/{}", created.internal_id)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(parse(response.body), created);
}

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_read_unknown_id_is_not_found(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();

    let response = ctx
        .get("/customers/67e55044-10b1-426f-9247-bb680e5fe0c8")
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body, json!({ "detail": "Customer not found" }));
}

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_read_all_empty_then_populated(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();

    let empty = ctx.get("/allcustomers").await;
    assert_eq!(empty.status, StatusCode::OK);
    assert_eq!(empty.body, json!([]));

    // Created out of order; listed by customer_id
    let second = create(&ctx, &hanako()).await;
    let first = create(&ctx, &taro()).await;

    let all = ctx.get("/allcustomers").await;
    assert_eq!(all.status, StatusCode::OK);
    let customers: Vec<CustomerResponse> = serde_json::from_value(all.body).unwrap();
    assert_eq!(customers, vec![first, second]);
}

// =============================================================================
// Update
// =============================================================================

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_update_replaces_every_field(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();
    let created = create(&ctx, &taro()).await;
    let uri = format!("/customers/{}", created.internal_id);

    let replacement = json!({
        "customer_id": "C0009",
        "customer_name": "山田 次郎",
        "age": 36,
        "gender": "その他",
    });
    let response = ctx.put(&uri, &replacement).await;

    assert_eq!(response.status, StatusCode::OK);
    let updated = parse(response.body);
    assert_eq!(updated.internal_id, created.internal_id);
    assert_eq!(updated.customer_id, "C0009");
    assert_eq!(updated.customer_name, "山田 次郎");
    assert_eq!(updated.age, Some(36));
    assert_eq!(updated.gender.as_deref(), Some("その他"));

    let reread = ctx.get(&uri).await;
    assert_eq!(parse(reread.body), updated);
}

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_update_keeping_own_customer_id(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();
    let created = create(&ctx, &taro()).await;

    let mut payload = taro();
    payload["age"] = json!(36);
    let response = ctx
        .put(&format!("/customers/{}", created.internal_id), &payload)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(parse(response.body).age, Some(36));
}

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_update_unknown_id_is_not_found(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();

    let response = ctx
        .put("/customers/67e55044-10b1-426f-9247-bb680e5fe0c8", &taro())
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["detail"],
        "Customer not found or failed to update"
    );

    let all = ctx.get("/allcustomers").await;
    assert_eq!(all.body, json!([]));
}

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_update_to_taken_customer_id_fails(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();
    create(&ctx, &taro()).await;
    let hanako_record = create(&ctx, &hanako()).await;
    let uri = format!("/customers/{}", hanako_record.internal_id);

    let mut payload = hanako();
    payload["customer_id"] = json!("C0001");
    let response = ctx.put(&uri, &payload).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body["detail"],
        "Customer not found or failed to update"
    );

    let reread = ctx.get(&uri).await;
    assert_eq!(parse(reread.body), hanako_record);
}

// =============================================================================
// Delete
// =============================================================================

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_delete_then_read_and_delete_again(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();
    let created = create(&ctx, &taro()).await;
    let uri = format!("/customers/{}", created.internal_id);

    let deleted = ctx.delete(&uri).await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
    assert_eq!(deleted.body, Value::Null);

    let read = ctx.get(&uri).await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);

    let again = ctx.delete(&uri).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_delete_leaves_other_customers(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();
    let taro_record = create(&ctx, &taro()).await;
    let hanako_record = create(&ctx, &hanako()).await;

    ctx.delete(&format!("/customers/{}", taro_record.internal_id))
        .await;

    let all = ctx.get("/allcustomers").await;
    let customers: Vec<CustomerResponse> = serde_json::from_value(all.body).unwrap();
    assert_eq!(customers, vec![hanako_record]);
}

#[sqlx::test(migrations = false)]
#[ignore = "Requires PostgreSQL (DATABASE_URL)"]
async fn test_freed_customer_id_can_be_reused(pool: PgPool) {
    let ctx = TestContext::new(pool).await.unwrap();
    let first = create(&ctx, &taro()).await;
    ctx.delete(&format!("/customers/{}", first.internal_id))
        .await;

    let second = create(&ctx, &taro()).await;

    assert_eq!(second.customer_id, "C0001");
    assert_ne!(second.internal_id, first.internal_id);
}
