//! Onboarding flow for new users.
//!
//! Nine steps: welcome, name, age range, gender, current mood, goals
//! (multi-select), prior experience, first weekly goal, and a summary. Built
//! on the generic wizard engine; completion yields an [`OnboardingRecord`]
//! the caller can serialize or hand to the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wizard::{Answer, ChoiceOption, StepKind, Wizard, WizardStep};

/// Suggested first weekly goals, offered alongside a free-text alternative.
pub const FIRST_GOAL_SUGGESTIONS: &[&str] = &[
    "Check in daily for 7 days",
    "Complete 3 therapy lessons",
    "Journal 5 times",
    "Chat with your twin when feeling down",
    "Try one new coping skill",
];

fn opt(id: &str, label: &str, emoji: &str) -> ChoiceOption {
    ChoiceOption::new(id, label).with_emoji(emoji)
}

/// Build the onboarding wizard.
pub fn build_wizard() -> Wizard {
    let steps = vec![
        WizardStep::new(
            "welcome",
            "Welcome & Introduction",
            "I'm your fox twin. We're about to embark on a path to better mental \
             wellness—together. Let's get to know each other first.",
            StepKind::Info,
        ),
        WizardStep::new(
            "name",
            "Your Name",
            "What should I call you?",
            StepKind::FreeText {
                placeholder: Some("Your name or nickname".to_string()),
                required: true,
            },
        ),
        WizardStep::new(
            "age",
            "Age Range",
            "How many trips around the sun?",
            StepKind::SingleChoice {
                options: vec![
                    opt("13-17", "13-17", "🌱"),
                    opt("18-24", "18-24", "🌿"),
                    opt("25-34", "25-34", "🌳"),
                    opt("35-44", "35-44", "🌲"),
                    opt("45-54", "45-54", "🍃"),
                    opt("55+", "55+", "🌾"),
                ],
            },
        ),
        WizardStep::new(
            "gender",
            "Gender",
            "How do you identify?",
            StepKind::SingleChoice {
                options: vec![
                    opt("male", "Male", "👨"),
                    opt("female", "Female", "👩"),
                    opt("non-binary", "Non-binary", "✨"),
                    opt("prefer-not-to-say", "Prefer not to say", "🦊"),
                    opt("other", "Other", "🌈"),
                ],
            },
        ),
        WizardStep::new(
            "mood",
            "How Are You Doing",
            "How have things been lately?",
            StepKind::SingleChoice {
                options: vec![
                    opt("good", "Pretty Good", "😊"),
                    opt("updown", "Up and Down", "😐"),
                    opt("struggling", "Struggling", "😔"),
                    opt("rough", "Really Rough", "😢"),
                ],
            },
        ),
        WizardStep::new(
            "goals",
            "Your Goals",
            "What would you like to work on? Pick as many as you like.",
            StepKind::MultiChoice {
                options: vec![
                    opt("anxiety", "Anxiety & Stress", "☁️"),
                    opt("depression", "Depression & Low Mood", "😔"),
                    opt("sleep", "Sleep Issues", "😴"),
                    opt("thoughts", "Negative Thoughts", "💭"),
                    opt("anger", "Anger & Frustration", "😤"),
                    opt("relationships", "Relationships & Connection", "🤝"),
                    opt("focus", "Focus & Motivation", "🎯"),
                    opt("growth", "General Self-Growth", "🌱"),
                ],
                require_all: false,
            },
        ),
        WizardStep::new(
            "experience",
            "Your Experience",
            "Have you explored mental wellness tools before?",
            StepKind::SingleChoice {
                options: vec![
                    opt("new", "New to This", "🌱"),
                    opt("some", "Some Experience", "🌿"),
                    opt("experienced", "Experienced", "🌲"),
                ],
            },
        ),
        WizardStep::new(
            "first_goal",
            "First Weekly Goal",
            "What's one small goal for the next week?",
            StepKind::SingleChoice {
                options: FIRST_GOAL_SUGGESTIONS
                    .iter()
                    .map(|g| ChoiceOption::new(*g, *g))
                    .collect(),
            },
        ),
        WizardStep::new(
            "summary",
            "Meet Your Twin",
            "Your twin is ready. Let's head to your dashboard.",
            StepKind::Info,
        ),
    ];
    Wizard::new(steps).expect("onboarding step list is non-empty")
}

/// What the completed onboarding produces.
///
/// A plain serializable value; persistence is the caller's concern. The two
/// check-in flags are the only state this crate writes to disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingRecord {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub mood: String,
    pub goals: Vec<String>,
    pub experience: String,
    pub first_goal: String,
    pub completed_at: DateTime<Utc>,
}

impl OnboardingRecord {
    /// Assemble the record from a completed wizard's answers.
    ///
    /// Missing optional fields collapse to empty values; the wizard's own
    /// gating guarantees required steps were answered before completion.
    pub fn from_wizard(wizard: &Wizard) -> Self {
        let text = |id: &str| match wizard.answer(id) {
            Some(Answer::Text(t)) => t.trim().to_string(),
            Some(Answer::Choice(c)) => c.clone(),
            _ => String::new(),
        };
        let goals = match wizard.answer("goals") {
            Some(Answer::Selections(sel)) => sel.clone(),
            _ => Vec::new(),
        };
        Self {
            name: text("name"),
            age: text("age"),
            gender: text("gender"),
            mood: text("mood"),
            goals,
            experience: text("experience"),
            first_goal: text("first_goal"),
            completed_at: Utc::now(),
        }
    }
}
