//! Axum route handlers for the personality assessment API.

use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::models::personality::{
    ActivityRecommendations, BigFiveTrait, PreferenceInfluence, QuestionResponse, TraitScores,
};
use crate::personality::influence::{
    activity_recommendations, derive_influence, personality_explanation,
};
use crate::personality::questions::{BFI_QUESTIONS, LIKERT_SCALE};
use crate::personality::scoring::{
    calculate_scores, is_valid_response, trait_interpretation, trait_label, unanswered_questions,
};

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub responses: Vec<QuestionResponse>,
}

/// Per-trait breakdown returned alongside the raw scores.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitSummary {
    #[serde(rename = "trait")]
    pub trait_: BigFiveTrait,
    pub score: u8,
    pub label: &'static str,
    pub interpretation: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub scores: TraitScores,
    pub traits: Vec<TraitSummary>,
    pub influence: PreferenceInfluence,
    pub explanation: String,
    pub recommendations: ActivityRecommendations,
    /// Bank question ids with no matching response. Scoring still runs;
    /// unanswered traits fall back to the scale midpoint.
    pub unanswered: Vec<u8>,
}

/// GET /api/v1/questions
///
/// Serves the static BFI-44 bank and the Likert scale options.
pub async fn handle_get_questions() -> Json<Value> {
    Json(json!({
        "questions": BFI_QUESTIONS[..],
        "scale": LIKERT_SCALE,
        "total": BFI_QUESTIONS.len(),
    }))
}

/// POST /api/v1/personality/score
///
/// Scores a set of Likert responses and returns the trait profile plus
/// everything derived from it: preference influence, narrative
/// explanation, and activity recommendation tiers.
pub async fn handle_score(
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    // Range check is a precondition of the scoring engine.
    for response in &request.responses {
        if !is_valid_response(response.value) {
            return Err(AppError::Validation(format!(
                "response for question {} must be an integer from 1 to 5 (got {})",
                response.question_id, response.value
            )));
        }
    }

    let scores = calculate_scores(&request.responses);
    let influence = derive_influence(&scores);
    let explanation = personality_explanation(&scores);
    let recommendations = activity_recommendations(&scores);

    let traits = BigFiveTrait::ALL
        .iter()
        .map(|&trait_| {
            let score = scores.get(trait_);
            TraitSummary {
                trait_,
                score,
                label: trait_label(score),
                interpretation: trait_interpretation(trait_, score),
            }
        })
        .collect();

    Ok(Json(ScoreResponse {
        scores,
        traits,
        influence,
        explanation,
        recommendations,
        unanswered: unanswered_questions(&request.responses),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_score_rejects_out_of_range_value() {
        let request = ScoreRequest {
            responses: vec![QuestionResponse {
                question_id: 1,
                value: 6,
            }],
        };
        let result = handle_score(Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_score_empty_responses_is_all_midpoints() {
        let response = handle_score(Json(ScoreRequest { responses: vec![] }))
            .await
            .unwrap();
        assert_eq!(response.0.scores.openness, 50);
        assert_eq!(response.0.unanswered.len(), 44);
        assert_eq!(response.0.traits.len(), 5);
        // All-moderate profile yields an empty narrative.
        assert!(response.0.explanation.is_empty());
    }

    #[tokio::test]
    async fn test_score_response_includes_derived_preferences() {
        // Strongly agree with every non-reversed openness item.
        let responses: Vec<QuestionResponse> = BFI_QUESTIONS
            .iter()
            .filter(|q| q.trait_ == BigFiveTrait::Openness && !q.reversed)
            .map(|q| QuestionResponse {
                question_id: q.id,
                value: 5,
            })
            .collect();

        let response = handle_score(Json(ScoreRequest { responses }))
            .await
            .unwrap();
        assert_eq!(response.0.scores.openness, 100);
        assert!(response.0.explanation.contains("high openness"));
        assert!(!response.0.influence.preferred_activities.is_empty());
    }

    #[tokio::test]
    async fn test_questions_endpoint_serves_the_full_bank() {
        let response = handle_get_questions().await;
        assert_eq!(response.0["total"], 44);
        assert_eq!(response.0["questions"].as_array().unwrap().len(), 44);
        assert_eq!(response.0["scale"].as_array().unwrap().len(), 5);
        assert_eq!(response.0["questions"][0]["trait"], "extraversion");
    }
}
