//! Preference inference engine: maps Big Five trait scores to qualitative
//! travel preferences.
//!
//! All eight judgments are independent threshold rules over trait scores
//! (or linear combinations of two scores); there is no shared state or
//! ordering dependency between them. `derive_influence` is a pure function
//! and trivially idempotent.

use crate::models::personality::{
    ActivityCategory, ActivityPacing, ActivityRecommendations, ActivityVariety, AdventureLevel,
    CulturalImmersion, PlanningStyle, PreferenceInfluence, SocialPreference, TraitScores,
};

/// Derives the full travel-preference record from trait scores.
pub fn derive_influence(scores: &TraitScores) -> PreferenceInfluence {
    PreferenceInfluence {
        activity_pacing: derive_activity_pacing(scores),
        activity_variety: derive_activity_variety(scores),
        social_preference: derive_social_preference(scores),
        planning_style: derive_planning_style(scores),
        adventure_level: derive_adventure_level(scores),
        cultural_immersion: derive_cultural_immersion(scores),
        preferred_activities: derive_preferred_activities(scores),
        avoided_activities: derive_avoided_activities(scores),
    }
}

/// High conscientiousness + low neuroticism → packed schedule;
/// the reverse → relaxed pace.
fn derive_activity_pacing(scores: &TraitScores) -> ActivityPacing {
    let pacing = i16::from(scores.conscientiousness) - i16::from(scores.neuroticism);
    if pacing > 20 {
        ActivityPacing::Packed
    } else if pacing < -20 {
        ActivityPacing::Relaxed
    } else {
        ActivityPacing::Moderate
    }
}

fn derive_activity_variety(scores: &TraitScores) -> ActivityVariety {
    if scores.openness >= 60 {
        ActivityVariety::Diverse
    } else if scores.openness <= 40 {
        ActivityVariety::Focused
    } else {
        ActivityVariety::Balanced
    }
}

fn derive_social_preference(scores: &TraitScores) -> SocialPreference {
    if scores.extraversion >= 70 {
        SocialPreference::LargeGroups
    } else if scores.extraversion >= 50 {
        SocialPreference::SmallGroups
    } else if scores.extraversion >= 30 {
        SocialPreference::Mixed
    } else {
        SocialPreference::Solitary
    }
}

fn derive_planning_style(scores: &TraitScores) -> PlanningStyle {
    if scores.conscientiousness >= 65 {
        PlanningStyle::Detailed
    } else if scores.conscientiousness <= 35 && scores.openness >= 55 {
        PlanningStyle::Spontaneous
    } else {
        PlanningStyle::SemiPlanned
    }
}

/// High openness + low neuroticism → adventurous; the reverse → safe.
fn derive_adventure_level(scores: &TraitScores) -> AdventureLevel {
    let adventure = i16::from(scores.openness) - i16::from(scores.neuroticism);
    if adventure > 30 {
        AdventureLevel::Adventurous
    } else if adventure < -30 {
        AdventureLevel::Safe
    } else {
        AdventureLevel::ModerateRisk
    }
}

fn derive_cultural_immersion(scores: &TraitScores) -> CulturalImmersion {
    let immersion = (f64::from(scores.openness) + f64::from(scores.agreeableness)) / 2.0;
    if immersion >= 65.0 {
        CulturalImmersion::DeepLocal
    } else if immersion <= 40.0 {
        CulturalImmersion::TouristFriendly
    } else {
        CulturalImmersion::Moderate
    }
}

/// Preferred categories, deduplicated in first-seen order.
fn derive_preferred_activities(scores: &TraitScores) -> Vec<ActivityCategory> {
    let mut preferred: Vec<ActivityCategory> = Vec::new();
    let push = |list: &mut Vec<ActivityCategory>, category: ActivityCategory| {
        if !list.contains(&category) {
            list.push(category);
        }
    };

    if scores.openness >= 55 {
        push(&mut preferred, ActivityCategory::Cultural);
        push(&mut preferred, ActivityCategory::Historical);
        if scores.neuroticism <= 50 {
            push(&mut preferred, ActivityCategory::Adventure);
        }
    }

    if scores.extraversion >= 60 {
        push(&mut preferred, ActivityCategory::Nightlife);
    }

    if scores.agreeableness >= 55 {
        push(&mut preferred, ActivityCategory::Culinary);
    }

    if scores.neuroticism <= 40 {
        push(&mut preferred, ActivityCategory::Nature);
        push(&mut preferred, ActivityCategory::Adventure);
    }

    if scores.neuroticism >= 60 {
        push(&mut preferred, ActivityCategory::Relaxation);
    }

    if scores.openness <= 40 {
        push(&mut preferred, ActivityCategory::Shopping);
    }

    preferred
}

/// Categories that may not suit this personality.
///
/// Computed independently of the preferred list; the two may overlap for
/// conflicting trait combinations, and that overlap is deliberately not
/// resolved here.
fn derive_avoided_activities(scores: &TraitScores) -> Vec<ActivityCategory> {
    let mut avoided: Vec<ActivityCategory> = Vec::new();

    if scores.neuroticism >= 65 && scores.openness <= 45 {
        avoided.push(ActivityCategory::Adventure);
    }

    if scores.extraversion <= 35 {
        avoided.push(ActivityCategory::Nightlife);
    }

    if scores.openness <= 35 {
        avoided.push(ActivityCategory::Cultural);
    }

    avoided
}

/// Partitions the full category set into four recommendation tiers:
/// the first three preferred categories, any remaining preferred ones,
/// the avoided list, and everything else as neutral.
pub fn activity_recommendations(scores: &TraitScores) -> ActivityRecommendations {
    let preferred = derive_preferred_activities(scores);
    let avoided = derive_avoided_activities(scores);

    let highly_recommended: Vec<ActivityCategory> = preferred.iter().take(3).copied().collect();
    let recommended: Vec<ActivityCategory> = preferred.iter().skip(3).copied().collect();
    let neutral: Vec<ActivityCategory> = ActivityCategory::ALL
        .iter()
        .filter(|c| !preferred.contains(c) && !avoided.contains(c))
        .copied()
        .collect();

    ActivityRecommendations {
        highly_recommended,
        recommended,
        neutral,
        not_recommended: avoided,
    }
}

/// One sentence per notable trait, joined with single spaces. Traits in
/// the moderate band contribute nothing.
pub fn personality_explanation(scores: &TraitScores) -> String {
    let mut sentences: Vec<&'static str> = Vec::new();

    if scores.openness >= 60 {
        sentences.push(
            "Your high openness suggests you'll enjoy diverse, novel experiences and cultural immersion.",
        );
    } else if scores.openness <= 40 {
        sentences.push("You prefer familiar, structured activities with clear expectations.");
    }

    if scores.conscientiousness >= 60 {
        sentences.push(
            "Your conscientiousness means you appreciate detailed planning and packed itineraries.",
        );
    } else if scores.conscientiousness <= 40 {
        sentences.push("You prefer flexibility and spontaneity in your travel plans.");
    }

    if scores.extraversion >= 60 {
        sentences.push("As an extravert, you'll thrive in social settings and group activities.");
    } else if scores.extraversion <= 40 {
        sentences.push(
            "You'll enjoy quieter, more intimate experiences with smaller groups or solo activities.",
        );
    }

    if scores.agreeableness >= 60 {
        sentences
            .push("Your agreeableness draws you to cooperative experiences and local interactions.");
    }

    if scores.neuroticism >= 60 {
        sentences
            .push("You'll benefit from a relaxed pace with buffer time and low-stress activities.");
    } else if scores.neuroticism <= 40 {
        sentences.push(
            "Your emotional stability allows for intensive schedules and adventurous activities.",
        );
    }

    sentences.join(" ")
}
