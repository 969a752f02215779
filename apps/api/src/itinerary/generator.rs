//! Itinerary generation — orchestrates the pipeline around the model call.
//!
//! Flow: build prompt → single model call → interpret response → assemble
//! the final Itinerary with a fresh id, creation timestamp, and copies of
//! the originating inputs.
//!
//! The model call is the single suspension point and may block for a
//! while; the operation is atomic from the caller's perspective — either
//! a full itinerary or an error, never a partial result.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::itinerary::interpreter::interpret_response;
use crate::itinerary::prompt_builder::build_itinerary_prompt;
use crate::llm_client::{GenerationConfig, ItineraryModel, LlmError};
use crate::models::personality::TraitScores;
use crate::models::trip::{Itinerary, TripParameters};

/// Runs the generation pipeline once. No internal retry on transport or
/// parse failure; retry policy is a caller concern.
pub async fn generate_itinerary(
    model: &dyn ItineraryModel,
    params: &TripParameters,
    scores: &TraitScores,
) -> Result<Itinerary, AppError> {
    let prompt = build_itinerary_prompt(scores, params);
    info!(
        "Generating itinerary for {} ({} days)",
        params.destination,
        params.duration_days()
    );

    let text = model
        .generate(&prompt, &GenerationConfig::default())
        .await
        .map_err(|e| match e {
            LlmError::EmptyContent => AppError::ModelResponse(String::new()),
            other => AppError::Transport(other.to_string()),
        })?;

    let interpreted = interpret_response(&text)?;

    let itinerary = Itinerary {
        id: new_itinerary_id(),
        // Inputs are copied into the artifact, not referenced; later
        // mutation of the request data cannot alter a saved itinerary.
        trip_parameters: params.clone(),
        personality_scores: *scores,
        days: interpreted.days,
        total_cost: interpreted.total_cost,
        personality_insights: interpreted.personality_insights,
        created_at: Utc::now(),
    };

    info!(
        "Generated itinerary {} with {} days, total cost {}",
        itinerary.id,
        itinerary.days.len(),
        itinerary.total_cost
    );

    Ok(itinerary)
}

/// Globally unique itinerary id: creation time plus a random component.
fn new_itinerary_id() -> String {
    format!(
        "itinerary-{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}
