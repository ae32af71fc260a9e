use crate::{
    domain::entities::{AssignmentReport, AutoAssignResponse, YearQuery},
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Query, State},
    Json,
};

/// POST /api/holidays/auto-assign?year= - Reassign the whole year
pub async fn auto_assign(
    State(state): State<AppState>,
    Query(params): Query<YearQuery>,
) -> ApiResult<Json<AutoAssignResponse>> {
    let report = state
        .holiday_assignment_service
        .auto_assign(params.year)
        .await?;

    Ok(Json(AutoAssignResponse {
        status: "success".to_string(),
        data: report,
    }))
}

/// GET /api/holidays/assignment-stats?year= - Report from persisted assignments
pub async fn assignment_stats(
    State(state): State<AppState>,
    Query(params): Query<YearQuery>,
) -> ApiResult<Json<AssignmentReport>> {
    let report = state
        .holiday_assignment_service
        .compute_stats(params.year)
        .await?;

    Ok(Json(report))
}
