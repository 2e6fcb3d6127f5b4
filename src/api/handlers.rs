//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::AppState;
use super::types::{ErrorResponse, RowRecord, RowsQuery, ViewResponse};
use crate::table::rows::rows_with_field;
use crate::table::types::FieldValue;

/// Returns the derived table view and its summary.
///
/// `GET /view` → 200 + `ViewResponse` JSON
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<ViewResponse> {
    Json(ViewResponse {
        view: state.view.clone(),
        summary: state.summary.clone(),
    })
}

/// Returns dataset rows, optionally filtered by evaluated status and route.
///
/// `GET /rows` → 200 + `Vec<RowRecord>` JSON
/// `GET /rows?status=on` → rows currently ON
/// `GET /rows?route=KL%207` → rows on route "KL 7"
/// `GET /rows?status=idle` → 400 + `ErrorResponse`
pub async fn get_rows(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RowsQuery>,
) -> impl IntoResponse {
    let wanted = match query.status.as_deref() {
        None => None,
        Some("on") => Some(true),
        Some("off") => Some(false),
        Some(other) => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("`status` must be \"on\" or \"off\", got \"{other}\""),
                }),
            ));
        }
    };

    let mut filtered = match query.route.as_deref() {
        Some(route) => rows_with_field(&state.rows, "route", &FieldValue::Str(route.to_string())),
        None => state.rows.iter().collect(),
    };
    if let Some(on) = wanted {
        filtered.retain(|r| r.status == on);
    }
    let records: Vec<RowRecord> = filtered.into_iter().map(RowRecord::from).collect();

    Ok(Json(records))
}
