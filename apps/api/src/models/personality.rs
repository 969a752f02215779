//! Core personality data model: Big Five traits, normalized trait scores,
//! BFI-44 question/response types, and the derived travel-preference record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five traits measured by the BFI-44 instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    pub const ALL: [BigFiveTrait; 5] = [
        BigFiveTrait::Openness,
        BigFiveTrait::Conscientiousness,
        BigFiveTrait::Extraversion,
        BigFiveTrait::Agreeableness,
        BigFiveTrait::Neuroticism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "openness",
            BigFiveTrait::Conscientiousness => "conscientiousness",
            BigFiveTrait::Extraversion => "extraversion",
            BigFiveTrait::Agreeableness => "agreeableness",
            BigFiveTrait::Neuroticism => "neuroticism",
        }
    }

    /// Capitalized form for prompt/display text.
    pub fn display_name(&self) -> &'static str {
        match self {
            BigFiveTrait::Openness => "Openness",
            BigFiveTrait::Conscientiousness => "Conscientiousness",
            BigFiveTrait::Extraversion => "Extraversion",
            BigFiveTrait::Agreeableness => "Agreeableness",
            BigFiveTrait::Neuroticism => "Neuroticism",
        }
    }
}

impl fmt::Display for BigFiveTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized Big Five scores on a 0-100 scale.
///
/// A value type: derived once from questionnaire responses and passed by
/// copy from then on, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScores {
    pub openness: u8,
    pub conscientiousness: u8,
    pub extraversion: u8,
    pub agreeableness: u8,
    pub neuroticism: u8,
}

impl TraitScores {
    pub fn get(&self, trait_: BigFiveTrait) -> u8 {
        match trait_ {
            BigFiveTrait::Openness => self.openness,
            BigFiveTrait::Conscientiousness => self.conscientiousness,
            BigFiveTrait::Extraversion => self.extraversion,
            BigFiveTrait::Agreeableness => self.agreeableness,
            BigFiveTrait::Neuroticism => self.neuroticism,
        }
    }
}

/// A single BFI-44 item. The bank is static and never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    #[serde(rename = "trait")]
    pub trait_: BigFiveTrait,
    pub reversed: bool,
}

/// A user's answer to one question. `value` is a 1-5 Likert rating;
/// range validation is the caller's responsibility (see scoring module).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub question_id: u8,
    pub value: u8,
}

// ────────────────────────────────────────────────────────────────────────────
// Derived travel preferences
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityPacing {
    Relaxed,
    Moderate,
    Packed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityVariety {
    Focused,
    Balanced,
    Diverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SocialPreference {
    Solitary,
    SmallGroups,
    LargeGroups,
    Mixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanningStyle {
    Spontaneous,
    SemiPlanned,
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdventureLevel {
    Safe,
    ModerateRisk,
    Adventurous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CulturalImmersion {
    TouristFriendly,
    Moderate,
    DeepLocal,
}

impl ActivityPacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityPacing::Relaxed => "relaxed",
            ActivityPacing::Moderate => "moderate",
            ActivityPacing::Packed => "packed",
        }
    }
}

impl ActivityVariety {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityVariety::Focused => "focused",
            ActivityVariety::Balanced => "balanced",
            ActivityVariety::Diverse => "diverse",
        }
    }
}

impl SocialPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPreference::Solitary => "solitary",
            SocialPreference::SmallGroups => "small-groups",
            SocialPreference::LargeGroups => "large-groups",
            SocialPreference::Mixed => "mixed",
        }
    }
}

impl PlanningStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanningStyle::Spontaneous => "spontaneous",
            PlanningStyle::SemiPlanned => "semi-planned",
            PlanningStyle::Detailed => "detailed",
        }
    }
}

impl AdventureLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdventureLevel::Safe => "safe",
            AdventureLevel::ModerateRisk => "moderate-risk",
            AdventureLevel::Adventurous => "adventurous",
        }
    }
}

impl CulturalImmersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            CulturalImmersion::TouristFriendly => "tourist-friendly",
            CulturalImmersion::Moderate => "moderate",
            CulturalImmersion::DeepLocal => "deep-local",
        }
    }
}

/// The fixed set of activity categories used across preferences, interests,
/// and generated activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Adventure,
    Cultural,
    Culinary,
    Nature,
    Shopping,
    Nightlife,
    Relaxation,
    Historical,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 8] = [
        ActivityCategory::Adventure,
        ActivityCategory::Cultural,
        ActivityCategory::Culinary,
        ActivityCategory::Nature,
        ActivityCategory::Shopping,
        ActivityCategory::Nightlife,
        ActivityCategory::Relaxation,
        ActivityCategory::Historical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Adventure => "adventure",
            ActivityCategory::Cultural => "cultural",
            ActivityCategory::Culinary => "culinary",
            ActivityCategory::Nature => "nature",
            ActivityCategory::Shopping => "shopping",
            ActivityCategory::Nightlife => "nightlife",
            ActivityCategory::Relaxation => "relaxation",
            ActivityCategory::Historical => "historical",
        }
    }
}

impl fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel preferences derived from trait scores.
///
/// All eight judgments are computed independently; `preferred_activities`
/// and `avoided_activities` may overlap when trait combinations conflict.
/// That ambiguity is reported as-is — callers decide precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceInfluence {
    pub activity_pacing: ActivityPacing,
    pub activity_variety: ActivityVariety,
    pub social_preference: SocialPreference,
    pub planning_style: PlanningStyle,
    pub adventure_level: AdventureLevel,
    pub cultural_immersion: CulturalImmersion,
    pub preferred_activities: Vec<ActivityCategory>,
    pub avoided_activities: Vec<ActivityCategory>,
}

/// Four-tier partition of the category set for a given personality.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecommendations {
    pub highly_recommended: Vec<ActivityCategory>,
    pub recommended: Vec<ActivityCategory>,
    pub neutral: Vec<ActivityCategory>,
    pub not_recommended: Vec<ActivityCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_serde_roundtrip_is_lowercase() {
        let json = serde_json::to_string(&BigFiveTrait::Openness).unwrap();
        assert_eq!(json, r#""openness""#);
        let back: BigFiveTrait = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BigFiveTrait::Openness);
    }

    #[test]
    fn test_preference_enums_serialize_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SocialPreference::LargeGroups).unwrap(),
            r#""large-groups""#
        );
        assert_eq!(
            serde_json::to_string(&CulturalImmersion::DeepLocal).unwrap(),
            r#""deep-local""#
        );
        assert_eq!(
            serde_json::to_string(&AdventureLevel::ModerateRisk).unwrap(),
            r#""moderate-risk""#
        );
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for category in ActivityCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_question_response_uses_camel_case() {
        let response: QuestionResponse =
            serde_json::from_str(r#"{"questionId": 7, "value": 4}"#).unwrap();
        assert_eq!(response.question_id, 7);
        assert_eq!(response.value, 4);
    }

    #[test]
    fn test_trait_scores_get_covers_all_traits() {
        let scores = TraitScores {
            openness: 10,
            conscientiousness: 20,
            extraversion: 30,
            agreeableness: 40,
            neuroticism: 50,
        };
        let values: Vec<u8> = BigFiveTrait::ALL.iter().map(|t| scores.get(*t)).collect();
        assert_eq!(values, vec![10, 20, 30, 40, 50]);
    }
}
