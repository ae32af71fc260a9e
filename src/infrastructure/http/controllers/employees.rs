use crate::{
    domain::entities::{CreateEmployeeRequest, Employee},
    infrastructure::http::middleware::{ApiResult, AppState},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// POST /api/employees - Register an employee
pub async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<CreateEmployeeRequest>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let employee = state
        .employee_service
        .create_employee(&request.name, &request.email)
        .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/employees - List employees
pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.employee_service.list_employees().await?;
    Ok(Json(employees))
}

/// GET /api/employees/:id
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let employee = state.employee_service.get_employee(&id).await?;
    Ok(Json(employee))
}

/// DELETE /api/employees/:id
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    state.employee_service.delete_employee(&id).await?;
    Ok(Json(json!({ "status": "success" })))
}
