//! Daily check-in flow and once-per-day gating.
//!
//! The check-in is a five-question survey (mood, energy, stress, focus, free
//! text) driven by the generic wizard engine. Completion writes two local
//! flags -- the calendar day and the recorded mood -- which gate the flow to
//! once per day and feed the avatar's mood display.

use serde::{Deserialize, Serialize};

use crate::error::FlagsError;
use crate::storage::{FlagStore, LocalFlags};
use crate::wizard::{Answer, StepKind, Wizard, WizardStep};

/// Mood shown when no check-in happened today.
pub const FALLBACK_MOOD: &str = "okay";

/// Category of a check-in question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Mood,
    Energy,
    Stress,
    Focus,
    Text,
}

/// A selectable answer for a check-in question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInOption {
    pub label: String,
    pub emoji: String,
    /// The recorded value -- a mood/stress/focus keyword or an energy level.
    pub value: Answer,
}

/// One question in the check-in sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInQuestion {
    pub id: String,
    /// 1-based ordinal within the flow.
    pub step: u32,
    pub question_type: QuestionType,
    pub question: String,
    pub emoji: String,
    pub options: Vec<CheckInOption>,
    /// For text inputs.
    pub placeholder: Option<String>,
    /// Background gradient for the step.
    pub gradient: Option<String>,
}

fn option(label: &str, emoji: &str, value: Answer) -> CheckInOption {
    CheckInOption {
        label: label.to_string(),
        emoji: emoji.to_string(),
        value,
    }
}

fn choice(label: &str, emoji: &str, value: &str) -> CheckInOption {
    option(label, emoji, Answer::Choice(value.to_string()))
}

/// The ordered check-in question sequence.
pub fn check_in_questions() -> Vec<CheckInQuestion> {
    vec![
        CheckInQuestion {
            id: "mood".to_string(),
            step: 1,
            question_type: QuestionType::Mood,
            question: "How do you feel this morning?".to_string(),
            emoji: "💭".to_string(),
            options: vec![
                choice("Amazing", "😁", "happy"),
                choice("Good", "🙂", "okay"),
                choice("Meh", "😕", "meh"),
                choice("Down", "😢", "sad"),
                choice("Stressed", "😠", "angry"),
            ],
            placeholder: None,
            gradient: Some("from-primary/20 via-accent/10 to-background".to_string()),
        },
        CheckInQuestion {
            id: "energy".to_string(),
            step: 2,
            question_type: QuestionType::Energy,
            question: "How much energy do you wake up with?".to_string(),
            emoji: "🔋".to_string(),
            options: vec![
                option("Empty", "🪫", Answer::Number(1)),
                option("Low", "🔋", Answer::Number(2)),
                option("Medium", "🔋", Answer::Number(3)),
                option("High", "⚡", Answer::Number(4)),
                option("Full", "⚡", Answer::Number(5)),
            ],
            placeholder: None,
            gradient: Some("from-success/20 via-primary/10 to-background".to_string()),
        },
        CheckInQuestion {
            id: "stress".to_string(),
            step: 3,
            question_type: QuestionType::Stress,
            question: "What's stressing you out the most today?".to_string(),
            emoji: "😰".to_string(),
            options: vec![
                choice("School", "📚", "school"),
                choice("Work", "💼", "work"),
                choice("Family", "🏠", "family"),
                choice("Friends", "👥", "friends"),
                choice("Nothing", "😊", "none"),
            ],
            placeholder: None,
            gradient: Some("from-warning/20 via-accent/10 to-background".to_string()),
        },
        CheckInQuestion {
            id: "focus".to_string(),
            step: 4,
            question_type: QuestionType::Focus,
            question: "What's your main focus for today?".to_string(),
            emoji: "🎯".to_string(),
            options: vec![
                choice("Rest", "🛏️", "rest"),
                choice("Connect", "💬", "connect"),
                choice("Move", "🧘", "move"),
                choice("Create", "🎨", "create"),
                choice("Learn", "📚", "learn"),
            ],
            placeholder: None,
            gradient: Some("from-accent/20 via-primary/10 to-background".to_string()),
        },
        CheckInQuestion {
            id: "notes".to_string(),
            step: 5,
            question_type: QuestionType::Text,
            question: "Anything else on your mind?".to_string(),
            emoji: "✍️".to_string(),
            options: Vec::new(),
            placeholder: Some("Type here... (optional)".to_string()),
            gradient: Some("from-primary/10 via-accent/5 to-background".to_string()),
        },
    ]
}

/// Total number of check-in steps.
pub fn total_steps() -> usize {
    check_in_questions().len()
}

/// Build the check-in wizard from the question table.
///
/// Choice questions gate on a recorded answer; the free-text notes step is
/// optional by design, so a blank submission still completes the flow.
pub fn build_wizard() -> Wizard {
    let steps: Vec<WizardStep> = check_in_questions()
        .into_iter()
        .map(|q| {
            let kind = match q.question_type {
                QuestionType::Text => StepKind::FreeText {
                    placeholder: q.placeholder.clone(),
                    required: false,
                },
                _ => StepKind::SingleChoice {
                    options: q
                        .options
                        .iter()
                        .map(|o| {
                            crate::wizard::ChoiceOption::new(o.value.as_display(), &o.label)
                                .with_emoji(&o.emoji)
                        })
                        .collect(),
                },
            };
            WizardStep::new(q.id, format!("Step {}", q.step), q.question, kind)
        })
        .collect();
    // The table is non-empty, so construction cannot fail.
    Wizard::new(steps).expect("check-in question table is non-empty")
}

/// Emoji for a mood keyword, for avatar display.
pub fn mood_emoji(mood: &str) -> &'static str {
    match mood {
        "happy" => "😁",
        "okay" => "🙂",
        "meh" => "😕",
        "sad" => "😢",
        "angry" => "😠",
        "calm" => "🙂",
        "neutral" => "😐",
        "anxious" => "😰",
        _ => "🙂",
    }
}

/// Today's calendar-day string in local time.
pub fn today_string() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// The once-per-day check-in gate over the local flag store.
///
/// Date identity is a calendar-day string comparison, so completing at 23:59
/// and checking at 00:01 the next day correctly reads as not completed. The
/// reference "today" is an explicit parameter; use the `*_today` wrappers for
/// the local calendar date.
#[derive(Debug, Clone)]
pub struct DailyCheckIn {
    store: FlagStore,
}

impl DailyCheckIn {
    /// Gate backed by the default flag file.
    pub fn open() -> Result<Self, FlagsError> {
        Ok(Self {
            store: FlagStore::open()?,
        })
    }

    /// Gate backed by an explicit store (used by tests).
    pub fn with_store(store: FlagStore) -> Self {
        Self { store }
    }

    /// Whether a check-in was completed on the given day.
    ///
    /// An absent flag is the expected "not yet completed" state.
    pub fn has_completed(&self, today: &str) -> Result<bool, FlagsError> {
        let flags = self.store.load()?;
        Ok(flags.last_check_in.as_deref() == Some(today))
    }

    /// Record a completion for the given day, with the mood if one was picked.
    pub fn mark_completed(&self, today: &str, mood: Option<&str>) -> Result<(), FlagsError> {
        let mut flags = self.store.load()?;
        flags.last_check_in = Some(today.to_string());
        if let Some(mood) = mood {
            flags.today_mood = Some(mood.to_string());
        }
        self.store.save(&flags)
    }

    /// The mood recorded for the given day, or the fallback if the check-in
    /// has not happened on that day.
    pub fn mood(&self, today: &str) -> Result<String, FlagsError> {
        let flags = self.store.load()?;
        if flags.last_check_in.as_deref() == Some(today) {
            return Ok(flags
                .today_mood
                .unwrap_or_else(|| FALLBACK_MOOD.to_string()));
        }
        Ok(FALLBACK_MOOD.to_string())
    }

    /// `has_completed` for the local calendar date.
    pub fn has_completed_today(&self) -> Result<bool, FlagsError> {
        self.has_completed(&today_string())
    }

    /// `mark_completed` for the local calendar date.
    pub fn mark_completed_today(&self, mood: Option<&str>) -> Result<(), FlagsError> {
        self.mark_completed(&today_string(), mood)
    }

    /// `mood` for the local calendar date.
    pub fn today_mood(&self) -> Result<String, FlagsError> {
        self.mood(&today_string())
    }

    pub fn flags(&self) -> Result<LocalFlags, FlagsError> {
        self.store.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Advance;

    fn temp_gate(dir: &tempfile::TempDir) -> DailyCheckIn {
        DailyCheckIn::with_store(FlagStore::with_path(dir.path().join("state.toml")))
    }

    #[test]
    fn test_question_table_shape() {
        let questions = check_in_questions();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions[0].id, "mood");
        assert_eq!(questions[4].question_type, QuestionType::Text);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.step as usize, i + 1);
        }
    }

    #[test]
    fn test_not_completed_without_flag() {
        let dir = tempfile::tempdir().unwrap();
        let gate = temp_gate(&dir);
        assert!(!gate.has_completed("2026-08-30").unwrap());
        assert_eq!(gate.mood("2026-08-30").unwrap(), FALLBACK_MOOD);
    }

    #[test]
    fn test_mark_then_query_same_day() {
        let dir = tempfile::tempdir().unwrap();
        let gate = temp_gate(&dir);
        gate.mark_completed("2026-08-30", Some("happy")).unwrap();
        assert!(gate.has_completed("2026-08-30").unwrap());
        assert_eq!(gate.mood("2026-08-30").unwrap(), "happy");
    }

    #[test]
    fn test_day_rollover_resets_gate() {
        let dir = tempfile::tempdir().unwrap();
        let gate = temp_gate(&dir);
        gate.mark_completed("2026-08-30", Some("happy")).unwrap();
        // Next calendar day: gate reopens and mood falls back.
        assert!(!gate.has_completed("2026-08-31").unwrap());
        assert_eq!(gate.mood("2026-08-31").unwrap(), FALLBACK_MOOD);
    }

    #[test]
    fn test_completion_without_mood_keeps_previous() {
        let dir = tempfile::tempdir().unwrap();
        let gate = temp_gate(&dir);
        gate.mark_completed("2026-08-29", Some("sad")).unwrap();
        gate.mark_completed("2026-08-30", None).unwrap();
        assert_eq!(gate.mood("2026-08-30").unwrap(), "sad");
    }

    #[test]
    fn test_wizard_requires_choice_steps_only() {
        let mut w = build_wizard();
        assert_eq!(w.step_count(), 5);

        // Mood step blocks until answered.
        assert!(!w.can_advance());
        w.record_answer("mood", Answer::Choice("sad".to_string()));
        assert!(matches!(w.advance(), Advance::Moved(1)));

        w.record_answer("energy", Answer::Number(3));
        w.advance();
        w.record_answer("stress", Answer::Choice("work".to_string()));
        w.advance();
        w.record_answer("focus", Answer::Choice("rest".to_string()));
        assert!(matches!(w.advance(), Advance::Moved(4)));

        // Free-text notes step is optional: blank still completes.
        assert_eq!(w.advance(), Advance::Completed);
    }

    #[test]
    fn test_mood_emoji_fallback() {
        assert_eq!(mood_emoji("happy"), "😁");
        assert_eq!(mood_emoji("unknown"), "🙂");
    }
}
