use crate::Result;
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use sitewatch_retention::{CleanupOrchestrator, CleanupReport, PolicyUpdate};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CleanupResponse {
    pub message: String,
    /// Rows deleted per collection key, `-1` where cleanup failed.
    pub results: BTreeMap<String, i64>,
}

impl CleanupResponse {
    fn from_report(message: &str, report: &CleanupReport) -> Self {
        Self {
            message: message.to_string(),
            results: report
                .outcomes
                .iter()
                .map(|(key, outcome)| (key.clone(), outcome.reported_count()))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSizeResponse {
    pub collection: String,
    pub count: u64,
    pub max_records: u64,
    /// `"within limit"` or `"exceeds limit"`
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct CollectionSizesResponse(pub BTreeMap<String, CollectionSizeResponse>);

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResponse {
    pub collection: String,
    pub max_records: u64,
    pub delete_count: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct PolicyConfigResponse(pub BTreeMap<String, PolicyResponse>);

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolicyRequest {
    /// Display name of the collection, e.g. `Temperature`.
    pub collection: String,
    pub max_records: Option<u64>,
    pub delete_count: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/admin/cleanup",
    tag = "retention",
    responses((status = OK, description = "Routine cleanup ran", body = CleanupResponse))
)]
pub async fn run_cleanup(
    State(orchestrator): State<Arc<CleanupOrchestrator>>,
) -> Json<CleanupResponse> {
    info!("Manual routine cleanup requested");

    let report = orchestrator.cleanup_all_collections().await;
    report.log_summary();

    Json(CleanupResponse::from_report("Cleanup completed", &report))
}

#[utoipa::path(
    post,
    path = "/admin/cleanup/force",
    tag = "retention",
    responses((status = OK, description = "Aggressive cleanup ran", body = CleanupResponse))
)]
pub async fn force_cleanup(
    State(orchestrator): State<Arc<CleanupOrchestrator>>,
) -> Json<CleanupResponse> {
    info!("Manual aggressive cleanup requested");

    let report = orchestrator.check_for_large_collections().await;
    report.log_summary();

    Json(CleanupResponse::from_report("Forced cleanup completed", &report))
}

#[utoipa::path(
    get,
    path = "/admin/collections/size",
    tag = "retention",
    responses(
        (status = OK, description = "Row counts per collection", body = CollectionSizesResponse),
        (status = INTERNAL_SERVER_ERROR, description = "A collection could not be counted"),
    )
)]
pub async fn collection_sizes(
    State(orchestrator): State<Arc<CleanupOrchestrator>>,
) -> Result<Json<CollectionSizesResponse>> {
    let sizes = orchestrator.registry().sizes().await?;

    Ok(Json(CollectionSizesResponse(
        sizes
            .into_iter()
            .map(|(key, size)| {
                (
                    key,
                    CollectionSizeResponse {
                        collection: size.collection,
                        count: size.count,
                        max_records: size.max_records,
                        status: size.status.to_string(),
                    },
                )
            })
            .collect(),
    )))
}

#[utoipa::path(
    get,
    path = "/admin/cleanup/config",
    tag = "retention",
    responses((status = OK, description = "Current retention policies", body = PolicyConfigResponse))
)]
pub async fn get_cleanup_config(
    State(orchestrator): State<Arc<CleanupOrchestrator>>,
) -> Json<PolicyConfigResponse> {
    let config = orchestrator.registry().config().await;

    Json(PolicyConfigResponse(
        config
            .into_iter()
            .map(|(key, view)| {
                (
                    key,
                    PolicyResponse {
                        collection: view.collection,
                        max_records: view.max_records,
                        delete_count: view.delete_count,
                    },
                )
            })
            .collect(),
    ))
}

#[utoipa::path(
    put,
    path = "/admin/cleanup/config",
    tag = "retention",
    request_body = UpdatePolicyRequest,
    responses(
        (status = OK, description = "Policy updated", body = MessageResponse),
        (status = NOT_FOUND, description = "No collection with that name"),
        (status = BAD_REQUEST, description = "Resulting policy is invalid"),
    )
)]
pub async fn update_cleanup_config(
    State(orchestrator): State<Arc<CleanupOrchestrator>>,
    Json(request): Json<UpdatePolicyRequest>,
) -> Result<Json<MessageResponse>> {
    orchestrator
        .registry()
        .update_policy(
            &request.collection,
            PolicyUpdate {
                max_records: request.max_records,
                delete_count: request.delete_count,
            },
        )
        .await?;

    Ok(Json(MessageResponse {
        message: format!("Cleanup config updated for {}", request.collection),
    }))
}
