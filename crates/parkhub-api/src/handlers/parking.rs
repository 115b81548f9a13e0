//! Ticket issuance, lookup, pricing and release handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use parkhub_core::error::AppError;
use parkhub_entity::{Category, Ticket, TicketId};
use parkhub_service::PoolStatus;

use crate::dto::request::{EnterQuery, LeaveQuery};
use crate::dto::response::{ApiResponse, OwedResponse, ReleaseResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/parking/tickets?category=...
pub async fn create_ticket(
    State(state): State<AppState>,
    Query(query): Query<EnterQuery>,
) -> Result<Json<ApiResponse<Ticket>>, ApiError> {
    query
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let category: Category = query.category.parse()?;

    let ticket = state.parking.enter(category).await.ok_or_else(|| {
        AppError::service_unavailable(format!("No free slot for category '{category}'"))
    })?;

    Ok(Json(ApiResponse::ok(ticket)))
}

/// GET /api/parking/tickets
pub async fn list_tickets(State(state): State<AppState>) -> Json<ApiResponse<Vec<Ticket>>> {
    Json(ApiResponse::ok(state.parking.list_tickets().await))
}

/// GET /api/parking/tickets/{id}
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Ticket>>, ApiError> {
    let id = parse_ticket_id(&id)?;
    let ticket = state
        .parking
        .get_ticket(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Ticket {id} not found")))?;

    Ok(Json(ApiResponse::ok(ticket)))
}

/// GET /api/parking/tickets/{id}/owed
pub async fn get_owed(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<OwedResponse>>, ApiError> {
    let id = parse_ticket_id(&id)?;
    let owed = state.parking.check_owed(id).await;

    Ok(Json(ApiResponse::ok(OwedResponse {
        ticket_id: id,
        owed,
    })))
}

/// DELETE /api/parking/tickets/{id}?payment=...
pub async fn release_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<LeaveQuery>,
) -> Result<Json<ApiResponse<ReleaseResponse>>, ApiError> {
    let id = parse_ticket_id(&id)?;
    let released_at = state.parking.leave(id, query.payment).await?;

    Ok(Json(ApiResponse::ok(ReleaseResponse {
        ticket_id: id,
        released_at,
    })))
}

/// GET /api/parking/pool
pub async fn pool_status(State(state): State<AppState>) -> Json<ApiResponse<PoolStatus>> {
    Json(ApiResponse::ok(state.parking.pool_status().await))
}

fn parse_ticket_id(raw: &str) -> Result<TicketId, AppError> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("Invalid ticket id: '{raw}'")))
}
