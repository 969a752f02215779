//! Response interpreter: extracts one JSON object from the model's free
//! text and post-processes it into typed itinerary days.
//!
//! Extraction strategy: an explicit balanced-brace scanner (string- and
//! escape-aware) finds the first complete `{...}` object; if the text has
//! an opening brace that never closes, we fall back to the greedy
//! first-`{`-to-last-`}` slice; if no brace span exists, the whole text is
//! tried. Failing all of that is a fatal, non-retried error for the
//! current request.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::personality::ActivityCategory;
use crate::models::trip::{Activity, Cost, DayItinerary, Location, TimeOfDay};

/// The model's itinerary payload after date conversion and id synthesis,
/// before the endpoint stamps identity and copies the inputs in.
#[derive(Debug, Clone)]
pub struct InterpretedItinerary {
    pub days: Vec<DayItinerary>,
    pub total_cost: f64,
    pub personality_insights: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawItinerary {
    days: Vec<RawDay>,
    #[serde(default)]
    total_cost: f64,
    personality_insights: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDay {
    day: u32,
    date: String,
    #[serde(default)]
    summary: String,
    activities: Vec<RawActivity>,
    #[serde(default)]
    total_cost: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawActivity {
    id: Option<String>,
    name: String,
    description: String,
    category: ActivityCategory,
    location: Location,
    duration: u32,
    cost: Cost,
    time_of_day: TimeOfDay,
    start_time: Option<String>,
    personality_match: Option<String>,
}

/// Parses the model's raw text into itinerary days.
///
/// Costs, date ranges, and category totals are trusted from the model;
/// only the JSON shape itself is enforced.
pub fn interpret_response(text: &str) -> Result<InterpretedItinerary, AppError> {
    let candidate = extract_json_span(text);

    let raw: RawItinerary = match candidate.and_then(|span| serde_json::from_str(span).ok()) {
        Some(parsed) => parsed,
        // Fallback: the model may have returned bare JSON with no framing.
        None => serde_json::from_str(text)
            .map_err(|_| AppError::ModelResponse(text.to_string()))?,
    };

    let days = raw
        .days
        .into_iter()
        .map(|day| {
            let date = parse_model_date(&day.date).ok_or_else(|| {
                AppError::ModelResponse(format!("unrecognized day date '{}'", day.date))
            })?;

            let activities = day
                .activities
                .into_iter()
                .map(|activity| Activity {
                    id: activity
                        .id
                        .filter(|id| !id.trim().is_empty())
                        .unwrap_or_else(synthesize_activity_id),
                    name: activity.name,
                    description: activity.description,
                    category: activity.category,
                    location: activity.location,
                    duration: activity.duration,
                    cost: activity.cost,
                    time_of_day: activity.time_of_day,
                    start_time: activity.start_time,
                    personality_match: activity.personality_match,
                })
                .collect();

            Ok(DayItinerary {
                day: day.day,
                date,
                summary: day.summary,
                activities,
                total_cost: day.total_cost,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(InterpretedItinerary {
        days,
        total_cost: raw.total_cost,
        personality_insights: raw.personality_insights,
    })
}

/// Finds the first complete `{...}` object in the text.
///
/// Walks from the first `{`, tracking brace depth while skipping string
/// literals and escape sequences, and returns the span where depth first
/// returns to zero. If the braces never balance, falls back to the greedy
/// first-`{`-to-last-`}` slice (the original behavior this replaces, kept
/// as a best-effort recovery for truncated output).
fn extract_json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    // Unbalanced: greedy fallback.
    let end = text.rfind('}')?;
    (end >= start).then(|| &text[start..=end])
}

/// Accepts the date shapes the model is known to produce: ISO dates, the
/// long form echoed from the prompt ("June 1, 2024"), and RFC 3339
/// timestamps.
fn parse_model_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%B %d, %Y") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }
    None
}

/// Unique activity id: timestamp plus random component, so collisions
/// within an itinerary are negligible.
fn synthesize_activity_id() -> String {
    format!(
        "activity-{}-{}",
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const MINIMAL_ITINERARY: &str = r#"{
        "days": [
            {
                "day": 1,
                "date": "2024-06-01",
                "summary": "Arrival and old town",
                "activities": [
                    {
                        "name": "Gothic Quarter walk",
                        "description": "Wander the medieval streets.",
                        "category": "historical",
                        "location": {
                            "name": "Gothic Quarter",
                            "address": "Barri Gòtic, Barcelona",
                            "coordinates": { "lat": 41.3833, "lng": 2.1777 }
                        },
                        "duration": 120,
                        "cost": { "amount": 0, "currency": "USD", "category": "free" },
                        "timeOfDay": "morning",
                        "startTime": "09:30",
                        "personalityMatch": "Suits high openness."
                    }
                ],
                "totalCost": 0
            }
        ],
        "totalCost": 0,
        "personalityInsights": "A culture-forward first day."
    }"#;

    #[test]
    fn test_parses_bare_json_object() {
        let result = interpret_response(MINIMAL_ITINERARY).unwrap();
        assert_eq!(result.days.len(), 1);
        assert_eq!(
            result.days[0].date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert_eq!(result.days[0].activities[0].name, "Gothic Quarter walk");
        assert_eq!(
            result.personality_insights.as_deref(),
            Some("A culture-forward first day.")
        );
    }

    #[test]
    fn test_extracts_json_from_surrounding_text() {
        let wrapped = format!("Here is your itinerary: {MINIMAL_ITINERARY} Enjoy the trip!");
        let result = interpret_response(&wrapped).unwrap();
        assert_eq!(result.days.len(), 1);
    }

    #[test]
    fn test_extracts_json_from_markdown_fences() {
        let fenced = format!("```json\n{MINIMAL_ITINERARY}\n```");
        let result = interpret_response(&fenced).unwrap();
        assert_eq!(result.days.len(), 1);
    }

    #[test]
    fn test_balanced_scanner_ignores_braces_inside_strings() {
        let tricky = r#"noise {"days": [], "totalCost": 0, "personalityInsights": "curly {braces} inside"} trailing"#;
        let result = interpret_response(tricky).unwrap();
        assert_eq!(
            result.personality_insights.as_deref(),
            Some("curly {braces} inside")
        );
    }

    #[test]
    fn test_balanced_scanner_stops_at_first_complete_object() {
        // A second object after the first must not be swallowed by a
        // greedy match.
        let two_objects =
            r#"{"days": [], "totalCost": 5} and also {"unrelated": true}"#;
        let result = interpret_response(two_objects).unwrap();
        assert_eq!(result.total_cost, 5.0);
    }

    #[test]
    fn test_unparsable_text_is_a_model_response_error() {
        let result = interpret_response("Sorry, I cannot plan this trip.");
        assert!(matches!(result, Err(AppError::ModelResponse(_))));
    }

    #[test]
    fn test_unbalanced_json_is_a_model_response_error() {
        let result = interpret_response(r#"{"days": [ {"day": 1"#);
        assert!(matches!(result, Err(AppError::ModelResponse(_))));
    }

    #[test]
    fn test_unknown_date_format_is_a_model_response_error() {
        let bad_date = MINIMAL_ITINERARY.replace("2024-06-01", "first of June");
        let result = interpret_response(&bad_date);
        assert!(matches!(result, Err(AppError::ModelResponse(_))));
    }

    #[test]
    fn test_accepts_long_form_dates_from_the_prompt_example() {
        let long_form = MINIMAL_ITINERARY.replace("2024-06-01", "June 1, 2024");
        let result = interpret_response(&long_form).unwrap();
        assert_eq!(
            result.days[0].date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_missing_activity_ids_are_synthesized_uniquely() {
        let first = interpret_response(MINIMAL_ITINERARY).unwrap();
        let second = interpret_response(MINIMAL_ITINERARY).unwrap();

        let ids: HashSet<String> = first
            .days
            .iter()
            .chain(second.days.iter())
            .flat_map(|d| d.activities.iter().map(|a| a.id.clone()))
            .collect();
        assert_eq!(ids.len(), 2, "synthesized ids must be unique");
        assert!(ids.iter().all(|id| id.starts_with("activity-")));
    }

    #[test]
    fn test_existing_activity_ids_are_preserved() {
        let with_id = MINIMAL_ITINERARY.replace(
            r#""name": "Gothic Quarter walk""#,
            r#""id": "model-id-1", "name": "Gothic Quarter walk""#,
        );
        let result = interpret_response(&with_id).unwrap();
        assert_eq!(result.days[0].activities[0].id, "model-id-1");
    }

    #[test]
    fn test_unknown_category_fails_the_parse() {
        let bad = MINIMAL_ITINERARY.replace(r#""category": "historical""#, r#""category": "sightseeing""#);
        let result = interpret_response(&bad);
        assert!(matches!(result, Err(AppError::ModelResponse(_))));
    }
}
