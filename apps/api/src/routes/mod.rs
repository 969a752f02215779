pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::itinerary::handlers as itinerary_handlers;
use crate::personality::handlers as personality_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Personality assessment API
        .route(
            "/api/v1/questions",
            get(personality_handlers::handle_get_questions),
        )
        .route(
            "/api/v1/personality/score",
            post(personality_handlers::handle_score),
        )
        // Itinerary API
        .route(
            "/api/v1/itineraries/generate",
            post(itinerary_handlers::handle_generate),
        )
        .route(
            "/api/v1/itineraries",
            post(itinerary_handlers::handle_save).get(itinerary_handlers::handle_list),
        )
        .route(
            "/api/v1/itineraries/:id",
            get(itinerary_handlers::handle_get).delete(itinerary_handlers::handle_delete),
        )
        .with_state(state)
}
