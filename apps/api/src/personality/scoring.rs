//! Scoring engine: converts Likert responses into normalized Big Five
//! trait scores using the BFI-44 methodology with reverse scoring.

use std::collections::HashMap;

use crate::models::personality::{BigFiveTrait, QuestionResponse, TraitScores};
use crate::personality::questions::{questions_for, BFI_QUESTIONS};

/// Calculates the five trait scores from questionnaire responses.
///
/// Per trait: answered items are averaged on the raw 1-5 scale (reversed
/// items contribute `6 − value`), then normalized to 0-100 via
/// `((average − 1) / 4) × 100` and rounded to the nearest integer.
///
/// A later response to the same question replaces an earlier one.
/// Responses for unknown question ids are ignored. A trait with no
/// answered items defaults to the scale midpoint (3), so an empty
/// response set yields 50 for every trait.
///
/// Precondition: every `value` is in 1..=5 — see [`is_valid_response`].
/// This function does not validate; callers must.
pub fn calculate_scores(responses: &[QuestionResponse]) -> TraitScores {
    // Last write wins per question id.
    let mut latest: HashMap<u8, u8> = HashMap::new();
    for response in responses {
        latest.insert(response.question_id, response.value);
    }

    let score_for = |trait_: BigFiveTrait| -> u8 {
        let mut sum = 0i32;
        let mut count = 0i32;

        for question in questions_for(trait_) {
            if let Some(&value) = latest.get(&question.id) {
                let adjusted = if question.reversed {
                    6 - i32::from(value)
                } else {
                    i32::from(value)
                };
                sum += adjusted;
                count += 1;
            }
        }

        let average = if count > 0 {
            f64::from(sum) / f64::from(count)
        } else {
            3.0
        };

        let normalized = ((average - 1.0) / 4.0) * 100.0;
        normalized.round().clamp(0.0, 100.0) as u8
    };

    TraitScores {
        openness: score_for(BigFiveTrait::Openness),
        conscientiousness: score_for(BigFiveTrait::Conscientiousness),
        extraversion: score_for(BigFiveTrait::Extraversion),
        agreeableness: score_for(BigFiveTrait::Agreeableness),
        neuroticism: score_for(BigFiveTrait::Neuroticism),
    }
}

/// Precondition check for a single Likert value.
pub fn is_valid_response(value: u8) -> bool {
    (1..=5).contains(&value)
}

/// Returns the ids of bank questions with no matching response.
pub fn unanswered_questions(responses: &[QuestionResponse]) -> Vec<u8> {
    let answered: std::collections::HashSet<u8> =
        responses.iter().map(|r| r.question_id).collect();
    BFI_QUESTIONS
        .iter()
        .map(|q| q.id)
        .filter(|id| !answered.contains(id))
        .collect()
}

/// Descriptive label for a 0-100 trait score.
pub fn trait_label(score: u8) -> &'static str {
    match score {
        70.. => "Very High",
        55..=69 => "High",
        45..=54 => "Moderate",
        30..=44 => "Low",
        _ => "Very Low",
    }
}

/// Interpretation text shown to the user for each trait at each level.
pub fn trait_interpretation(trait_: BigFiveTrait, score: u8) -> &'static str {
    let level = level_for(score);
    match (trait_, level) {
        (BigFiveTrait::Openness, Level::High) => {
            "You are imaginative, curious, and open to new experiences. You appreciate art, adventure, and variety."
        }
        (BigFiveTrait::Openness, Level::Moderate) => {
            "You balance familiarity with novelty, enjoying some new experiences while valuing tradition."
        }
        (BigFiveTrait::Openness, Level::Low) => {
            "You prefer routine and familiar experiences. You are practical and traditional in your approach."
        }
        (BigFiveTrait::Conscientiousness, Level::High) => {
            "You are organized, reliable, and goal-oriented. You plan carefully and follow through on commitments."
        }
        (BigFiveTrait::Conscientiousness, Level::Moderate) => {
            "You balance structure with flexibility, maintaining organization while adapting when needed."
        }
        (BigFiveTrait::Conscientiousness, Level::Low) => {
            "You are spontaneous and flexible. You prefer to go with the flow rather than strict planning."
        }
        (BigFiveTrait::Extraversion, Level::High) => {
            "You are outgoing, energetic, and enjoy social interactions. You thrive in group settings."
        }
        (BigFiveTrait::Extraversion, Level::Moderate) => {
            "You enjoy socializing but also value alone time. You adapt to both group and solo activities."
        }
        (BigFiveTrait::Extraversion, Level::Low) => {
            "You are reserved and prefer smaller, intimate gatherings or solitary activities."
        }
        (BigFiveTrait::Agreeableness, Level::High) => {
            "You are compassionate, cooperative, and value harmony. You prioritize others' needs and feelings."
        }
        (BigFiveTrait::Agreeableness, Level::Moderate) => {
            "You balance self-interest with consideration for others, being cooperative yet assertive."
        }
        (BigFiveTrait::Agreeableness, Level::Low) => {
            "You are competitive and direct. You prioritize your own goals and speak your mind."
        }
        (BigFiveTrait::Neuroticism, Level::High) => {
            "You are sensitive and may experience stress more intensely. You benefit from calm, predictable environments."
        }
        (BigFiveTrait::Neuroticism, Level::Moderate) => {
            "You handle stress reasonably well with occasional anxiety. You adapt to most situations."
        }
        (BigFiveTrait::Neuroticism, Level::Low) => {
            "You are emotionally stable and resilient. You remain calm under pressure and handle stress well."
        }
    }
}

#[derive(Clone, Copy)]
enum Level {
    High,
    Moderate,
    Low,
}

fn level_for(score: u8) -> Level {
    match score {
        55.. => Level::High,
        45..=54 => Level::Moderate,
        _ => Level::Low,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personality::questions::find_question;

    fn respond(question_id: u8, value: u8) -> QuestionResponse {
        QuestionResponse { question_id, value }
    }

    #[test]
    fn test_empty_responses_yield_midpoint_50_for_all_traits() {
        let scores = calculate_scores(&[]);
        assert_eq!(
            scores,
            TraitScores {
                openness: 50,
                conscientiousness: 50,
                extraversion: 50,
                agreeableness: 50,
                neuroticism: 50,
            }
        );
    }

    #[test]
    fn test_all_strongly_agree_on_non_reversed_openness_items() {
        // Answer 5 on every non-reversed openness item only.
        let responses: Vec<QuestionResponse> = BFI_QUESTIONS
            .iter()
            .filter(|q| q.trait_ == BigFiveTrait::Openness && !q.reversed)
            .map(|q| respond(q.id, 5))
            .collect();

        let scores = calculate_scores(&responses);
        assert_eq!(scores.openness, 100);
        // Other traits were never answered and default to midpoint.
        assert_eq!(scores.extraversion, 50);
    }

    #[test]
    fn test_reversed_item_contributes_six_minus_value() {
        // Question 6 is a reversed extraversion item. Answering 5
        // ("Strongly Agree" with being reserved) must score as 1 → 0/100.
        assert!(find_question(6).unwrap().reversed);
        let scores = calculate_scores(&[respond(6, 5)]);
        assert_eq!(scores.extraversion, 0);

        let scores = calculate_scores(&[respond(6, 1)]);
        assert_eq!(scores.extraversion, 100);
    }

    #[test]
    fn test_unknown_question_ids_are_ignored() {
        let scores = calculate_scores(&[respond(99, 5), respond(200, 1)]);
        assert_eq!(scores.openness, 50);
        assert_eq!(scores.neuroticism, 50);
    }

    #[test]
    fn test_last_response_wins_for_the_same_question() {
        // Question 1: non-reversed extraversion item.
        let scores = calculate_scores(&[respond(1, 1), respond(1, 5)]);
        assert_eq!(scores.extraversion, 100);
    }

    #[test]
    fn test_scores_are_always_within_bounds() {
        let responses: Vec<QuestionResponse> =
            BFI_QUESTIONS.iter().map(|q| respond(q.id, 3)).collect();
        let scores = calculate_scores(&responses);
        for trait_ in BigFiveTrait::ALL {
            assert!(scores.get(trait_) <= 100);
        }
        // All-neutral answers land exactly on the midpoint.
        assert_eq!(scores.openness, 50);
        assert_eq!(scores.conscientiousness, 50);
    }

    #[test]
    fn test_partial_trait_coverage_averages_only_answered_items() {
        // Two non-reversed extraversion items: one 5, one 1 → average 3 → 50.
        let scores = calculate_scores(&[respond(1, 5), respond(11, 1)]);
        assert_eq!(scores.extraversion, 50);
    }

    #[test]
    fn test_is_valid_response_bounds() {
        assert!(!is_valid_response(0));
        assert!(is_valid_response(1));
        assert!(is_valid_response(5));
        assert!(!is_valid_response(6));
    }

    #[test]
    fn test_unanswered_questions_reports_missing_ids() {
        let missing = unanswered_questions(&[respond(1, 3)]);
        assert_eq!(missing.len(), 43);
        assert!(!missing.contains(&1));
        assert!(missing.contains(&44));
    }

    #[test]
    fn test_trait_label_thresholds() {
        assert_eq!(trait_label(70), "Very High");
        assert_eq!(trait_label(69), "High");
        assert_eq!(trait_label(55), "High");
        assert_eq!(trait_label(54), "Moderate");
        assert_eq!(trait_label(45), "Moderate");
        assert_eq!(trait_label(44), "Low");
        assert_eq!(trait_label(30), "Low");
        assert_eq!(trait_label(29), "Very Low");
    }

    #[test]
    fn test_trait_interpretation_level_boundaries() {
        let high = trait_interpretation(BigFiveTrait::Openness, 55);
        let moderate = trait_interpretation(BigFiveTrait::Openness, 54);
        let low = trait_interpretation(BigFiveTrait::Openness, 44);
        assert_ne!(high, moderate);
        assert_ne!(moderate, low);
    }
}
