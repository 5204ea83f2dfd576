use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Duration, Utc};
use entity::{gas_readings, temperature_readings};
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database, DbErr, EntityTrait, Set};
use serde_json::{Value, json};
use sitewatch_retention::{
    CleanupOrchestrator, PolicyRegistry, RegisteredCollection, RetentionPolicy,
};
use sitewatch_store::{RecordId, RecordStore, Store, StoreError, TelemetryTable};
use std::sync::Arc;
use tower::ServiceExt;

struct UnreachableStore;

#[async_trait]
impl RecordStore for UnreachableStore {
    async fn count(&self) -> sitewatch_store::Result<u64> {
        Err(StoreError::Database(DbErr::Custom("unreachable".to_string())))
    }

    async fn oldest_ids(&self, _limit: u64) -> sitewatch_store::Result<Vec<RecordId>> {
        Err(StoreError::Database(DbErr::Custom("unreachable".to_string())))
    }

    async fn delete_by_ids(&self, _ids: &[RecordId]) -> sitewatch_store::Result<u64> {
        Err(StoreError::Database(DbErr::Custom("unreachable".to_string())))
    }
}

async fn setup_store() -> Store {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    Store::new(db)
}

fn registry_for(store: &Store) -> Vec<RegisteredCollection> {
    store
        .record_stores()
        .into_iter()
        .map(|(table, records)| {
            RegisteredCollection::new(
                table.key(),
                table.display_name(),
                RetentionPolicy::new(80, 30).unwrap(),
                records,
            )
        })
        .collect()
}

fn app(collections: Vec<RegisteredCollection>) -> Router {
    let registry = Arc::new(PolicyRegistry::new(collections).unwrap());
    sitewatch_api::router(Arc::new(CleanupOrchestrator::new(registry)))
}

async fn seed_temperature(store: &Store, rows: i64) {
    let start = Utc::now().naive_utc() - Duration::hours(rows);
    let models = (0..rows).map(|i| temperature_readings::ActiveModel {
        device_id: Set("greenhouse-1".to_string()),
        celsius: Set(20.0),
        humidity_percent: Set(None),
        created_at: Set(start + Duration::hours(i)),
        ..Default::default()
    });

    temperature_readings::Entity::insert_many(models)
        .exec(store.db())
        .await
        .expect("Failed to seed temperature readings");
}

async fn seed_gas(store: &Store, rows: i64) {
    let start = Utc::now().naive_utc() - Duration::hours(rows);
    let models = (0..rows).map(|i| gas_readings::ActiveModel {
        device_id: Set("barn-co2".to_string()),
        ppm: Set(600.0),
        created_at: Set(start + Duration::hours(i)),
        ..Default::default()
    });

    gas_readings::Entity::insert_many(models)
        .exec(store.db())
        .await
        .expect("Failed to seed gas readings");
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let store = setup_store().await;
    let app = app(registry_for(&store));

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_routine_cleanup_reports_per_collection_counts() {
    let store = setup_store().await;
    seed_temperature(&store, 85).await;
    seed_gas(&store, 200).await;
    let app = app(registry_for(&store));

    let (status, body) = send(&app, "POST", "/admin/cleanup", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cleanup completed");
    assert_eq!(body["results"]["temperature"], 30);
    assert_eq!(body["results"]["gas"], 120);
    assert_eq!(body["results"]["rain"], 0);
    assert_eq!(
        body["results"].as_object().unwrap().len(),
        TelemetryTable::ALL.len()
    );

    let records = store.record_store(TelemetryTable::Temperature);
    assert_eq!(records.count().await.unwrap(), 55);
}

#[tokio::test]
async fn test_forced_cleanup_only_trims_oversized_collections() {
    let store = setup_store().await;
    seed_temperature(&store, 130).await;
    seed_gas(&store, 115).await;
    let app = app(registry_for(&store));

    let (status, body) = send(&app, "POST", "/admin/cleanup/force", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Forced cleanup completed");
    assert_eq!(body["results"]["temperature"], 50);
    assert_eq!(body["results"]["gas"], 0);

    assert_eq!(
        store
            .record_store(TelemetryTable::Temperature)
            .count()
            .await
            .unwrap(),
        80
    );
    assert_eq!(
        store.record_store(TelemetryTable::Gas).count().await.unwrap(),
        115
    );
}

#[tokio::test]
async fn test_cleanup_removes_oldest_rows() {
    let store = setup_store().await;
    seed_temperature(&store, 100).await;
    let app = app(registry_for(&store));

    let before = temperature_readings::Entity::find()
        .all(store.db())
        .await
        .unwrap();
    let cutoff = before.iter().map(|r| r.created_at).min().unwrap() + Duration::hours(29);

    send(&app, "POST", "/admin/cleanup", None).await;

    let after = temperature_readings::Entity::find()
        .all(store.db())
        .await
        .unwrap();
    assert_eq!(after.len(), 70);
    assert!(after.iter().all(|r| r.created_at > cutoff));
}

#[tokio::test]
async fn test_failing_collection_reports_sentinel() {
    let store = setup_store().await;
    seed_gas(&store, 200).await;

    let mut collections = registry_for(&store);
    collections.push(RegisteredCollection::new(
        "legacy",
        "Legacy",
        RetentionPolicy::new(80, 30).unwrap(),
        Arc::new(UnreachableStore),
    ));
    let app = app(collections);

    let (status, body) = send(&app, "POST", "/admin/cleanup", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["results"]["legacy"], -1);
    assert_eq!(body["results"]["gas"], 120);

    let (status, body) = send(&app, "GET", "/admin/collections/size", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("unreachable"));
}

#[tokio::test]
async fn test_collection_sizes() {
    let store = setup_store().await;
    seed_temperature(&store, 81).await;
    seed_gas(&store, 80).await;
    let app = app(registry_for(&store));

    let (status, body) = send(&app, "GET", "/admin/collections/size", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["temperature"],
        json!({
            "collection": "Temperature",
            "count": 81,
            "maxRecords": 80,
            "status": "exceeds limit",
        })
    );
    assert_eq!(body["gas"]["status"], "within limit");
    assert_eq!(body["rain"]["count"], 0);
}

#[tokio::test]
async fn test_update_config_is_reflected_in_get() {
    let store = setup_store().await;
    let app = app(registry_for(&store));

    let (status, body) = send(
        &app,
        "PUT",
        "/admin/cleanup/config",
        Some(json!({ "collection": "Temperature", "maxRecords": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Cleanup config updated for Temperature");

    let (status, body) = send(&app, "GET", "/admin/cleanup/config", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["temperature"],
        json!({ "collection": "Temperature", "maxRecords": 50, "deleteCount": 30 })
    );
    assert_eq!(body["soil_moisture"]["collection"], "SoilMoisture");
    assert_eq!(body["soil_moisture"]["maxRecords"], 80);
}

#[tokio::test]
async fn test_update_unknown_collection_is_not_found() {
    let store = setup_store().await;
    let app = app(registry_for(&store));

    let (status, body) = send(
        &app,
        "PUT",
        "/admin/cleanup/config",
        Some(json!({ "collection": "temperature", "maxRecords": 50 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "collection not found: temperature");
}

#[tokio::test]
async fn test_update_rejects_invalid_policy() {
    let store = setup_store().await;
    let app = app(registry_for(&store));

    let (status, body) = send(
        &app,
        "PUT",
        "/admin/cleanup/config",
        Some(json!({ "collection": "Gas", "maxRecords": 10, "deleteCount": 20 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid retention policy")
    );

    let (_, body) = send(&app, "GET", "/admin/cleanup/config", None).await;
    assert_eq!(body["gas"]["maxRecords"], 80);
}
