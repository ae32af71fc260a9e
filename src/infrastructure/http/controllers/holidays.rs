use crate::{
    domain::entities::{
        ClearYearResponse, HolidayDate, ManualAssignmentRequest, ToggleHolidayRequest,
        ToggleHolidayResponse,
    },
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, State},
    Json,
};

/// POST /api/holidays - Add the date, or remove it if already a holiday
pub async fn toggle_holiday(
    State(state): State<AppState>,
    Json(request): Json<ToggleHolidayRequest>,
) -> ApiResult<Json<ToggleHolidayResponse>> {
    let status = state.holiday_service.toggle_holiday(request.date).await?;

    Ok(Json(ToggleHolidayResponse {
        status,
        date: request.date,
    }))
}

/// GET /api/holidays/:year
pub async fn list_holidays(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> ApiResult<Json<Vec<HolidayDate>>> {
    let holidays = state.holiday_service.list_holidays(year).await?;
    Ok(Json(holidays))
}

/// POST /api/holidays/assign - Manual override for a single date
pub async fn assign_holiday(
    State(state): State<AppState>,
    Json(request): Json<ManualAssignmentRequest>,
) -> ApiResult<Json<HolidayDate>> {
    let holiday = state
        .holiday_service
        .assign_holiday(request.date, request.employee_id.as_deref())
        .await?;

    Ok(Json(holiday))
}

/// DELETE /api/holidays/clear/:year
pub async fn clear_holidays(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> ApiResult<Json<ClearYearResponse>> {
    let deleted = state.holiday_service.clear_year(year).await?;

    Ok(Json(ClearYearResponse {
        status: "success".to_string(),
        message: format!("Cleared {} holidays for {}", deleted, year),
        deleted,
    }))
}
