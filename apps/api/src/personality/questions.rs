//! The BFI-44 question bank (Big Five Inventory, 44 items).
//!
//! 5-point Likert scale: 1 = Strongly Disagree … 5 = Strongly Agree.
//! Items flagged `reversed` are reverse-scored (6 − value).
//!
//! Static data, defined once, never mutated.

use serde::Serialize;

use crate::models::personality::{BigFiveTrait, Question};

const fn q(id: u8, text: &'static str, trait_: BigFiveTrait, reversed: bool) -> Question {
    Question {
        id,
        text,
        trait_,
        reversed,
    }
}

use crate::models::personality::BigFiveTrait::{
    Agreeableness, Conscientiousness, Extraversion, Neuroticism, Openness,
};

pub static BFI_QUESTIONS: [Question; 44] = [
    // Extraversion (8 items)
    q(1, "I see myself as someone who is talkative", Extraversion, false),
    q(6, "I see myself as someone who is reserved", Extraversion, true),
    q(11, "I see myself as someone who is full of energy", Extraversion, false),
    q(16, "I see myself as someone who generates a lot of enthusiasm", Extraversion, false),
    q(21, "I see myself as someone who tends to be quiet", Extraversion, true),
    q(26, "I see myself as someone who has an assertive personality", Extraversion, false),
    q(31, "I see myself as someone who is sometimes shy, inhibited", Extraversion, true),
    q(36, "I see myself as someone who is outgoing, sociable", Extraversion, false),
    // Agreeableness (9 items)
    q(2, "I see myself as someone who tends to find fault with others", Agreeableness, true),
    q(7, "I see myself as someone who is helpful and unselfish with others", Agreeableness, false),
    q(12, "I see myself as someone who starts quarrels with others", Agreeableness, true),
    q(17, "I see myself as someone who has a forgiving nature", Agreeableness, false),
    q(22, "I see myself as someone who is generally trusting", Agreeableness, false),
    q(27, "I see myself as someone who can be cold and aloof", Agreeableness, true),
    q(32, "I see myself as someone who is considerate and kind to almost everyone", Agreeableness, false),
    q(37, "I see myself as someone who is sometimes rude to others", Agreeableness, true),
    q(42, "I see myself as someone who likes to cooperate with others", Agreeableness, false),
    // Conscientiousness (9 items)
    q(3, "I see myself as someone who does a thorough job", Conscientiousness, false),
    q(8, "I see myself as someone who can be somewhat careless", Conscientiousness, true),
    q(13, "I see myself as someone who is a reliable worker", Conscientiousness, false),
    q(18, "I see myself as someone who tends to be disorganized", Conscientiousness, true),
    q(23, "I see myself as someone who tends to be lazy", Conscientiousness, true),
    q(28, "I see myself as someone who perseveres until the task is finished", Conscientiousness, false),
    q(33, "I see myself as someone who does things efficiently", Conscientiousness, false),
    q(38, "I see myself as someone who makes plans and follows through with them", Conscientiousness, false),
    q(43, "I see myself as someone who is easily distracted", Conscientiousness, true),
    // Neuroticism (8 items)
    q(4, "I see myself as someone who is depressed, blue", Neuroticism, false),
    q(9, "I see myself as someone who is relaxed, handles stress well", Neuroticism, true),
    q(14, "I see myself as someone who can be tense", Neuroticism, false),
    q(19, "I see myself as someone who worries a lot", Neuroticism, false),
    q(24, "I see myself as someone who is emotionally stable, not easily upset", Neuroticism, true),
    q(29, "I see myself as someone who can be moody", Neuroticism, false),
    q(34, "I see myself as someone who remains calm in tense situations", Neuroticism, true),
    q(39, "I see myself as someone who gets nervous easily", Neuroticism, false),
    // Openness (10 items)
    q(5, "I see myself as someone who is original, comes up with new ideas", Openness, false),
    q(10, "I see myself as someone who is curious about many different things", Openness, false),
    q(15, "I see myself as someone who is ingenious, a deep thinker", Openness, false),
    q(20, "I see myself as someone who has an active imagination", Openness, false),
    q(25, "I see myself as someone who is inventive", Openness, false),
    q(30, "I see myself as someone who values artistic, aesthetic experiences", Openness, false),
    q(35, "I see myself as someone who prefers work that is routine", Openness, true),
    q(40, "I see myself as someone who likes to reflect, play with ideas", Openness, false),
    q(41, "I see myself as someone who has few artistic interests", Openness, true),
    q(44, "I see myself as someone who is sophisticated in art, music, or literature", Openness, false),
];

/// One Likert scale option presented to the user.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LikertOption {
    pub value: u8,
    pub label: &'static str,
}

pub static LIKERT_SCALE: [LikertOption; 5] = [
    LikertOption { value: 1, label: "Strongly Disagree" },
    LikertOption { value: 2, label: "Disagree" },
    LikertOption { value: 3, label: "Neutral" },
    LikertOption { value: 4, label: "Agree" },
    LikertOption { value: 5, label: "Strongly Agree" },
];

/// All questions measuring the given trait, in bank order.
pub fn questions_for(trait_: BigFiveTrait) -> impl Iterator<Item = &'static Question> {
    BFI_QUESTIONS.iter().filter(move |q| q.trait_ == trait_)
}

/// Looks up a question by id. Unknown ids return None.
pub fn find_question(id: u8) -> Option<&'static Question> {
    BFI_QUESTIONS.iter().find(|q| q.id == id)
}
