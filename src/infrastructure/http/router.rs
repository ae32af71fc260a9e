use crate::infrastructure::http::controllers::{assignments, employees, holidays};
use crate::infrastructure::http::middleware::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // Employee routes
        .route("/api/employees", post(employees::create_employee))
        .route("/api/employees", get(employees::list_employees))
        .route("/api/employees/:id", get(employees::get_employee))
        .route("/api/employees/:id", delete(employees::delete_employee))
        // Holiday calendar routes
        .route("/api/holidays", post(holidays::toggle_holiday))
        .route("/api/holidays/:year", get(holidays::list_holidays))
        .route("/api/holidays/assign", post(holidays::assign_holiday))
        .route("/api/holidays/clear/:year", delete(holidays::clear_holidays))
        // Assignment routes
        .route("/api/holidays/auto-assign", post(assignments::auto_assign))
        .route(
            "/api/holidays/assignment-stats",
            get(assignments::assignment_stats),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
