//! Prompt compiler: serializes trait scores, derived preferences, and trip
//! parameters into the single instruction string sent to the model,
//! including the literal example of the expected JSON response shape.
//!
//! Pure string construction; no side effects.

use crate::models::personality::{BigFiveTrait, TraitScores};
use crate::models::trip::TripParameters;
use crate::personality::influence::{derive_influence, personality_explanation};
use crate::personality::scoring::trait_label;

/// Builds the full itinerary-generation prompt.
pub fn build_itinerary_prompt(scores: &TraitScores, params: &TripParameters) -> String {
    let influence = derive_influence(scores);
    let explanation = personality_explanation(scores);

    let start_date = params.start_date.format("%B %-d, %Y").to_string();
    let end_date = params.end_date.format("%B %-d, %Y").to_string();
    let num_days = params.duration_days();

    let trait_lines: String = BigFiveTrait::ALL
        .iter()
        .map(|&trait_| {
            let score = scores.get(trait_);
            format!(
                "- {}: {}/100 ({}) - {}\n",
                trait_.display_name(),
                score,
                trait_label(score),
                trait_description(trait_, score)
            )
        })
        .collect();

    let preferred = influence
        .preferred_activities
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let avoided_line = if influence.avoided_activities.is_empty() {
        String::new()
    } else {
        let avoided = influence
            .avoided_activities
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("- Activities to Minimize: {avoided}\n")
    };

    let interests = params
        .interests
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let currency = &params.budget.currency;

    format!(
        r#"You are an expert travel planner creating a personalized trip itinerary.

# TRAVELER PERSONALITY PROFILE

## Big Five Scores (0-100 scale)
{trait_lines}
## Derived Travel Preferences
{explanation}

- Activity Pacing: {pacing}
- Activity Variety: {variety}
- Social Preference: {social}
- Planning Style: {planning}
- Adventure Level: {adventure}
- Cultural Immersion: {immersion}
- Preferred Activities: {preferred}
{avoided_line}
# TRIP PARAMETERS

- Destination: {destination}
- Dates: {start_date} to {end_date} ({num_days} days)
- Budget: {currency} ${amount} ({flexibility} flexibility)
- Travel Style: {travel_style}
- Interests: {interests}

# TASK

Create a detailed day-by-day itinerary that:
1. Matches this traveler's personality profile and preferences
2. Stays within the specified budget (total cost should be close to but not exceed the budget)
3. Includes activities from their stated interests
4. Respects their social preferences and pacing
5. Provides variety appropriate to their openness score
6. Includes specific activity times and durations

For each activity, provide:
- Name (specific place or experience)
- Description (2-3 sentences explaining what it is)
- Category (one of: adventure, cultural, culinary, nature, shopping, nightlife, relaxation, historical)
- Location (name, address, coordinates as lat/lng)
- Duration in minutes
- Cost (amount in {currency}, category: free/budget/moderate/expensive)
- Time of day (morning/afternoon/evening/night)
- Start time (HH:MM format, 24-hour)
- Brief explanation of how this activity matches the traveler's personality

Return your response as a valid JSON object with this exact structure:
{{
  "days": [
    {{
      "day": 1,
      "date": "{start_date}",
      "summary": "Brief summary of the day",
      "activities": [
        {{
          "id": "unique-id",
          "name": "Activity name",
          "description": "Description",
          "category": "cultural",
          "location": {{
            "name": "Location name",
            "address": "Full address",
            "coordinates": {{ "lat": 40.7128, "lng": -74.0060 }}
          }},
          "duration": 120,
          "cost": {{
            "amount": 25,
            "currency": "{currency}",
            "category": "moderate"
          }},
          "timeOfDay": "morning",
          "startTime": "09:00",
          "personalityMatch": "Matches high openness..."
        }}
      ],
      "totalCost": 100
    }}
  ],
  "totalCost": 500,
  "personalityInsights": "Overall explanation of how the itinerary matches this personality profile"
}}

IMPORTANT: Return ONLY the JSON object, no additional text before or after."#,
        trait_lines = trait_lines,
        explanation = explanation,
        pacing = influence.activity_pacing.as_str(),
        variety = influence.activity_variety.as_str(),
        social = influence.social_preference.as_str(),
        planning = influence.planning_style.as_str(),
        adventure = influence.adventure_level.as_str(),
        immersion = influence.cultural_immersion.as_str(),
        preferred = preferred,
        avoided_line = avoided_line,
        destination = params.destination,
        start_date = start_date,
        end_date = end_date,
        num_days = num_days,
        currency = currency,
        amount = params.budget.amount,
        flexibility = params.budget.flexibility.as_str(),
        travel_style = params.travel_style.as_str(),
        interests = interests,
    )
}

/// Short per-level trait description embedded next to each score.
fn trait_description(trait_: BigFiveTrait, score: u8) -> &'static str {
    enum Level {
        High,
        Moderate,
        Low,
    }
    let level = if score >= 55 {
        Level::High
    } else if score >= 45 {
        Level::Moderate
    } else {
        Level::Low
    };

    match (trait_, level) {
        (BigFiveTrait::Openness, Level::High) => {
            "Seeks novel experiences, appreciates art and culture, enjoys diverse activities"
        }
        (BigFiveTrait::Openness, Level::Moderate) => {
            "Balances familiar with novel, open to some new experiences"
        }
        (BigFiveTrait::Openness, Level::Low) => {
            "Prefers routine and familiar activities, practical approach"
        }
        (BigFiveTrait::Conscientiousness, Level::High) => {
            "Organized, detail-oriented, follows schedules strictly"
        }
        (BigFiveTrait::Conscientiousness, Level::Moderate) => {
            "Balanced planning with flexibility"
        }
        (BigFiveTrait::Conscientiousness, Level::Low) => {
            "Spontaneous, flexible, goes with the flow"
        }
        (BigFiveTrait::Extraversion, Level::High) => {
            "Energized by social interaction, enjoys group activities"
        }
        (BigFiveTrait::Extraversion, Level::Moderate) => {
            "Balanced between social and solo time"
        }
        (BigFiveTrait::Extraversion, Level::Low) => {
            "Prefers quieter, intimate settings and solo activities"
        }
        (BigFiveTrait::Agreeableness, Level::High) => {
            "Cooperative, values harmony, enjoys local interactions"
        }
        (BigFiveTrait::Agreeableness, Level::Moderate) => {
            "Balances cooperation with assertiveness"
        }
        (BigFiveTrait::Agreeableness, Level::Low) => {
            "Direct, competitive, prioritizes own goals"
        }
        (BigFiveTrait::Neuroticism, Level::High) => {
            "Benefits from relaxed pace, predictable schedule, low-stress activities"
        }
        (BigFiveTrait::Neuroticism, Level::Moderate) => {
            "Handles moderate stress, needs some buffer time"
        }
        (BigFiveTrait::Neuroticism, Level::Low) => {
            "Emotionally stable, handles intensive schedules and adventure well"
        }
    }
}
