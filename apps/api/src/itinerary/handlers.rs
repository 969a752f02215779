//! Axum route handlers for the itinerary API.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::itinerary::generator::generate_itinerary;
use crate::models::personality::TraitScores;
use crate::models::trip::{Itinerary, TripParameters};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Both fields are optional at the type level so a missing field is a
/// domain validation error rather than a serde rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateItineraryRequest {
    pub trip_parameters: Option<TripParameters>,
    pub personality_scores: Option<TraitScores>,
}

#[derive(Debug, Serialize)]
pub struct GenerateItineraryResponse {
    pub itinerary: Itinerary,
}

/// Compact listing entry for saved itineraries.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItinerarySummary {
    pub id: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_cost: f64,
    pub created_at: DateTime<Utc>,
}

impl From<&Itinerary> for ItinerarySummary {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            id: itinerary.id.clone(),
            destination: itinerary.trip_parameters.destination.clone(),
            start_date: itinerary.trip_parameters.start_date,
            end_date: itinerary.trip_parameters.end_date,
            total_cost: itinerary.total_cost,
            created_at: itinerary.created_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/itineraries/generate
///
/// Full generation pipeline: validate inputs → resolve model credential →
/// compile prompt → one model call → interpret → assemble itinerary.
/// Fails fast before the model is ever invoked when inputs or the
/// credential are missing.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateItineraryRequest>,
) -> Result<Json<GenerateItineraryResponse>, AppError> {
    let (Some(params), Some(scores)) = (request.trip_parameters, request.personality_scores)
    else {
        return Err(AppError::Validation("Missing required fields".to_string()));
    };

    params.validate().map_err(AppError::Validation)?;

    let model = state.model.as_ref().ok_or_else(|| {
        AppError::Configuration("ANTHROPIC_API_KEY is not configured".to_string())
    })?;

    let itinerary = generate_itinerary(model.as_ref(), &params, &scores).await?;

    Ok(Json(GenerateItineraryResponse { itinerary }))
}

/// POST /api/v1/itineraries
///
/// Saves an itinerary wholesale, replacing any existing entry with the
/// same id.
pub async fn handle_save(
    State(state): State<AppState>,
    Json(itinerary): Json<Itinerary>,
) -> Result<Json<Value>, AppError> {
    if itinerary.id.trim().is_empty() {
        return Err(AppError::Validation(
            "itinerary id cannot be empty".to_string(),
        ));
    }
    let id = itinerary.id.clone();
    state.store.save(itinerary).await;
    Ok(Json(json!({ "saved": id })))
}

/// GET /api/v1/itineraries
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let summaries: Vec<ItinerarySummary> = state
        .store
        .list()
        .await
        .iter()
        .map(ItinerarySummary::from)
        .collect();
    Ok(Json(json!({ "itineraries": summaries })))
}

/// GET /api/v1/itineraries/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GenerateItineraryResponse>, AppError> {
    let itinerary = state
        .store
        .load_by_id(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Itinerary {id} not found")))?;
    Ok(Json(GenerateItineraryResponse { itinerary }))
}

/// DELETE /api/v1/itineraries/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    if !state.store.delete_by_id(&id).await {
        return Err(AppError::NotFound(format!("Itinerary {id} not found")));
    }
    Ok(Json(json!({ "deleted": id })))
}
