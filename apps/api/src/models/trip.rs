//! Trip data model: user-supplied trip parameters and the generated
//! itinerary artifact. Wire format is camelCase to match the web client.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::personality::{ActivityCategory, TraitScores};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetFlexibility {
    Strict,
    Moderate,
    Flexible,
}

impl BudgetFlexibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetFlexibility::Strict => "strict",
            BudgetFlexibility::Moderate => "moderate",
            BudgetFlexibility::Flexible => "flexible",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    Solo,
    Couple,
    Family,
    Group,
}

impl TravelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Solo => "solo",
            TravelStyle::Couple => "couple",
            TravelStyle::Family => "family",
            TravelStyle::Group => "group",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: f64,
    pub currency: String,
    pub flexibility: BudgetFlexibility,
}

/// Trip parameters collected from the user before generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripParameters {
    pub destination: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_coords: Option<Coordinates>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget: Budget,
    pub travel_style: TravelStyle,
    pub interests: Vec<ActivityCategory>,
}

impl TripParameters {
    /// Inclusive day span of the trip: both endpoints count.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Checks the data-model invariants: ordered dates, positive budget,
    /// at least one interest.
    pub fn validate(&self) -> Result<(), String> {
        if self.destination.trim().is_empty() {
            return Err("destination cannot be empty".to_string());
        }
        if self.start_date > self.end_date {
            return Err("startDate must not be after endDate".to_string());
        }
        if self.budget.amount <= 0.0 {
            return Err("budget amount must be positive".to_string());
        }
        if self.interests.is_empty() {
            return Err("at least one interest is required".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Free,
    Budget,
    Moderate,
    Expensive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    pub amount: f64,
    pub currency: String,
    pub category: CostCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// A single scheduled activity within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ActivityCategory,
    pub location: Location,
    /// Duration in minutes.
    pub duration: u32,
    pub cost: Cost,
    pub time_of_day: TimeOfDay,
    /// "HH:MM", 24-hour clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// Why this activity suits the traveler's personality.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_match: Option<String>,
}

/// One calendar day of the itinerary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayItinerary {
    pub day: u32,
    pub date: NaiveDate,
    pub summary: String,
    pub activities: Vec<Activity>,
    pub total_cost: f64,
}

/// The complete generated itinerary. Created once by the generation
/// pipeline, immutable thereafter; carries copies of the inputs it was
/// generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub id: String,
    pub trip_parameters: TripParameters,
    pub personality_scores: TraitScores,
    pub days: Vec<DayItinerary>,
    pub total_cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personality_insights: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params() -> TripParameters {
        TripParameters {
            destination: "Lisbon, Portugal".to_string(),
            destination_coords: Some(Coordinates {
                lat: 38.7223,
                lng: -9.1393,
            }),
            start_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 6, 5).unwrap(),
            budget: Budget {
                amount: 1500.0,
                currency: "USD".to_string(),
                flexibility: BudgetFlexibility::Moderate,
            },
            travel_style: TravelStyle::Couple,
            interests: vec![ActivityCategory::Culinary, ActivityCategory::Historical],
        }
    }

    #[test]
    fn test_duration_is_inclusive_of_both_endpoints() {
        assert_eq!(sample_params().duration_days(), 5);
    }

    #[test]
    fn test_single_day_trip_has_duration_one() {
        let mut params = sample_params();
        params.end_date = params.start_date;
        assert_eq!(params.duration_days(), 1);
    }

    #[test]
    fn test_validate_rejects_reversed_dates() {
        let mut params = sample_params();
        params.end_date = NaiveDate::from_ymd_opt(2024, 5, 30).unwrap();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_budget() {
        let mut params = sample_params();
        params.budget.amount = 0.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_interests() {
        let mut params = sample_params();
        params.interests.clear();
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_trip_parameters_wire_format_is_camel_case() {
        let json = serde_json::to_value(sample_params()).unwrap();
        assert!(json.get("startDate").is_some());
        assert!(json.get("travelStyle").is_some());
        assert_eq!(json["travelStyle"], "couple");
        assert_eq!(json["budget"]["flexibility"], "moderate");
    }

    #[test]
    fn test_activity_optional_fields_are_omitted_when_absent() {
        let activity = Activity {
            id: "activity-1".to_string(),
            name: "Tram 28 ride".to_string(),
            description: "Historic tram through Alfama.".to_string(),
            category: ActivityCategory::Cultural,
            location: Location {
                name: "Martim Moniz".to_string(),
                address: "Praça Martim Moniz, Lisbon".to_string(),
                coordinates: Coordinates {
                    lat: 38.7169,
                    lng: -9.1359,
                },
            },
            duration: 60,
            cost: Cost {
                amount: 3.0,
                currency: "EUR".to_string(),
                category: CostCategory::Budget,
            },
            time_of_day: TimeOfDay::Morning,
            start_time: None,
            personality_match: None,
        };
        let json = serde_json::to_value(&activity).unwrap();
        assert!(json.get("startTime").is_none());
        assert!(json.get("personalityMatch").is_none());
        assert_eq!(json["timeOfDay"], "morning");
    }
}
