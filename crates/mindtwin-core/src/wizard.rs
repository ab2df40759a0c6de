//! Generic step-wizard engine.
//!
//! Every guided flow in the app -- onboarding, the daily check-in, and the
//! lesson flows -- is the same shape: an ordered, finite sequence of steps,
//! rendered one at a time, with per-step validity gating forward navigation
//! and answers accumulating into a map. This module implements that shape
//! once; each flow supplies only its step list.
//!
//! ## State machine
//!
//! ```text
//! step 0 <-> step 1 <-> ... <-> step N-1 -> complete
//! ```
//!
//! `advance()` is conditional on the current step's validity; `retreat()` is
//! always allowed except at index 0. Advancing from the last step completes
//! the wizard exactly once. Rather than failing silently on a blocked
//! advance, `advance()` returns a discriminated [`Advance`] so callers can
//! disable the forward control or show corrective feedback.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A recorded answer for a single step.
///
/// Recording is last-write-wins per step id; no validation happens at record
/// time. Validation happens only when advancing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Free-form text (may be empty).
    Text(String),
    /// A single selected option value.
    Choice(String),
    /// A numeric option value (e.g. energy level 1-5).
    Number(i64),
    /// A set of selected option ids for multi-choice steps.
    Selections(Vec<String>),
}

impl Answer {
    /// The answer as a display string.
    pub fn as_display(&self) -> String {
        match self {
            Answer::Text(s) | Answer::Choice(s) => s.clone(),
            Answer::Number(n) => n.to_string(),
            Answer::Selections(v) => v.join(", "),
        }
    }
}

/// A selectable option within a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Option identifier (also the recorded value for quiz steps).
    pub id: String,
    /// Display label.
    pub label: String,
    /// Display emoji (optional).
    pub emoji: Option<String>,
}

impl ChoiceOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            emoji: None,
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }
}

/// What kind of interaction a step asks for, and what makes it valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Narration only. Always advanceable.
    Info,
    /// Free-form text input. Optional unless `required`, in which case the
    /// trimmed input must be non-empty.
    FreeText {
        placeholder: Option<String>,
        required: bool,
    },
    /// Pick exactly one option. Advanceable once any answer is recorded.
    SingleChoice { options: Vec<ChoiceOption> },
    /// Pick one or more options. Advanceable when the selection is non-empty,
    /// or when every option is selected if `require_all` is set (the
    /// tap-every-thought mini-game).
    MultiChoice {
        options: Vec<ChoiceOption>,
        require_all: bool,
    },
    /// Pick the designated correct option. A wrong pick shows `feedback` and
    /// allows retry but does not advance.
    Quiz {
        options: Vec<ChoiceOption>,
        correct: String,
        feedback: Option<String>,
    },
}

/// One step in a wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardStep {
    /// Unique identifier, used as the answer key.
    pub id: String,
    /// Step title (e.g. "Hook", "Boss Challenge").
    pub title: String,
    /// Prompt or narration text.
    pub body: String,
    /// Interaction kind and validity rule.
    pub kind: StepKind,
}

impl WizardStep {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: StepKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            kind,
        }
    }
}

/// Why a forward navigation was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// No answer recorded for a required step.
    MissingAnswer,
    /// Multi-choice selection is empty.
    EmptySelection,
    /// Multi-choice step requires every option selected.
    IncompleteSelection,
    /// Quiz answer does not match the designated correct option.
    IncorrectAnswer,
    /// The wizard already completed; the terminal state has no outgoing
    /// transitions.
    AlreadyComplete,
}

/// Outcome of an `advance()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to the given step index.
    Moved(usize),
    /// Navigation rejected; the wizard stays on the current step.
    Blocked(BlockReason),
    /// The last step was advanced past; the wizard is now complete.
    Completed,
}

/// Error type for wizard construction and answer access.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum WizardError {
    /// A wizard needs at least one step.
    #[error("Wizard has no steps")]
    EmptySteps,
    /// Step id not present in this wizard.
    #[error("Unknown step: {0}")]
    UnknownStep(String),
}

/// A linear, validated, step-by-step flow instance.
///
/// Owns its answer map exclusively; nothing outlives the wizard except what
/// the caller extracts from [`Wizard::answers`] at completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wizard {
    steps: Vec<WizardStep>,
    current: usize,
    answers: HashMap<String, Answer>,
    completed: bool,
}

impl Wizard {
    /// Create a wizard from an ordered step list.
    pub fn new(steps: Vec<WizardStep>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::EmptySteps);
        }
        Ok(Self {
            steps,
            current: 0,
            answers: HashMap::new(),
            completed: false,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &WizardStep {
        &self.steps[self.current]
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[WizardStep] {
        &self.steps
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Whether the current step is the terminal reward/summary step.
    pub fn at_last_step(&self) -> bool {
        self.current == self.steps.len() - 1
    }

    pub fn answers(&self) -> &HashMap<String, Answer> {
        &self.answers
    }

    pub fn answer(&self, step_id: &str) -> Option<&Answer> {
        self.answers.get(step_id)
    }

    /// 0.0 .. 100.0 progress across the flow, counting the current step.
    pub fn progress_pct(&self) -> f64 {
        (self.current + 1) as f64 / self.steps.len() as f64 * 100.0
    }

    /// Whether forward navigation from the current step is allowed.
    pub fn can_advance(&self) -> bool {
        self.check_advance().is_none()
    }

    /// The reason the current step blocks, if it does.
    fn check_advance(&self) -> Option<BlockReason> {
        if self.completed {
            return Some(BlockReason::AlreadyComplete);
        }
        let step = &self.steps[self.current];
        let answer = self.answers.get(&step.id);
        match &step.kind {
            StepKind::Info => None,
            StepKind::FreeText { required, .. } => {
                if !required {
                    return None;
                }
                match answer {
                    Some(Answer::Text(t)) if !t.trim().is_empty() => None,
                    _ => Some(BlockReason::MissingAnswer),
                }
            }
            StepKind::SingleChoice { .. } => match answer {
                Some(_) => None,
                None => Some(BlockReason::MissingAnswer),
            },
            StepKind::MultiChoice {
                options,
                require_all,
            } => match answer {
                Some(Answer::Selections(sel)) if sel.is_empty() => {
                    Some(BlockReason::EmptySelection)
                }
                Some(Answer::Selections(sel)) => {
                    if *require_all && sel.len() < options.len() {
                        Some(BlockReason::IncompleteSelection)
                    } else {
                        None
                    }
                }
                _ => Some(BlockReason::EmptySelection),
            },
            StepKind::Quiz { correct, .. } => match answer {
                Some(Answer::Choice(c)) if c == correct => None,
                Some(_) => Some(BlockReason::IncorrectAnswer),
                None => Some(BlockReason::MissingAnswer),
            },
        }
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Record an answer for a step. Last write wins; no validation here.
    pub fn record_answer(&mut self, step_id: &str, value: Answer) {
        self.answers.insert(step_id.to_string(), value);
    }

    /// Toggle an option in a multi-choice step's selection set.
    ///
    /// Has no effect on steps that are not multi-choice.
    pub fn toggle_selection(&mut self, step_id: &str, option_id: &str) {
        let is_multi = self
            .steps
            .iter()
            .find(|s| s.id == step_id)
            .map(|s| matches!(s.kind, StepKind::MultiChoice { .. }))
            .unwrap_or(false);
        if !is_multi {
            return;
        }
        let entry = self
            .answers
            .entry(step_id.to_string())
            .or_insert_with(|| Answer::Selections(Vec::new()));
        if let Answer::Selections(sel) = entry {
            if let Some(pos) = sel.iter().position(|s| s == option_id) {
                sel.remove(pos);
            } else {
                sel.push(option_id.to_string());
            }
        }
    }

    /// Move forward one step, or complete the wizard from the last step.
    ///
    /// Returns [`Advance::Blocked`] without changing state when the current
    /// step's validity check fails or the wizard already completed. The index
    /// never exceeds `step_count() - 1`.
    pub fn advance(&mut self) -> Advance {
        if let Some(reason) = self.check_advance() {
            return Advance::Blocked(reason);
        }
        if self.current == self.steps.len() - 1 {
            self.completed = true;
            return Advance::Completed;
        }
        self.current += 1;
        Advance::Moved(self.current)
    }

    /// Move back one step. Always allowed except at index 0, where it is a
    /// no-op. Answers for revisited steps are preserved, not cleared.
    ///
    /// The terminal state has no outgoing transitions, so retreating from a
    /// completed wizard is also a no-op.
    ///
    /// Returns the new index.
    pub fn retreat(&mut self) -> usize {
        if self.completed {
            return self.current;
        }
        if self.current > 0 {
            self.current -= 1;
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn three_step_wizard() -> Wizard {
        Wizard::new(vec![
            WizardStep::new("intro", "Welcome", "hello", StepKind::Info),
            WizardStep::new(
                "pick",
                "Pick one",
                "choose",
                StepKind::SingleChoice {
                    options: vec![ChoiceOption::new("a", "A"), ChoiceOption::new("b", "B")],
                },
            ),
            WizardStep::new("reward", "Reward", "done", StepKind::Info),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_steps_rejected() {
        assert_eq!(Wizard::new(vec![]).unwrap_err(), WizardError::EmptySteps);
    }

    #[test]
    fn test_info_step_always_advances() {
        let mut w = three_step_wizard();
        assert!(w.can_advance());
        assert_eq!(w.advance(), Advance::Moved(1));
    }

    #[test]
    fn test_single_choice_blocks_until_answered() {
        let mut w = three_step_wizard();
        w.advance();
        assert_eq!(w.advance(), Advance::Blocked(BlockReason::MissingAnswer));
        assert_eq!(w.current_index(), 1);

        w.record_answer("pick", Answer::Choice("a".into()));
        assert_eq!(w.advance(), Advance::Moved(2));
    }

    #[test]
    fn test_retreat_at_zero_is_noop() {
        let mut w = three_step_wizard();
        assert_eq!(w.retreat(), 0);
    }

    #[test]
    fn test_retreat_preserves_answers() {
        let mut w = three_step_wizard();
        w.advance();
        w.record_answer("pick", Answer::Choice("b".into()));
        w.advance();
        assert_eq!(w.retreat(), 1);
        assert_eq!(w.answer("pick"), Some(&Answer::Choice("b".into())));
        // Re-advancing works because the answer survived.
        assert_eq!(w.advance(), Advance::Moved(2));
    }

    #[test]
    fn test_completes_exactly_once() {
        let mut w = three_step_wizard();
        w.advance();
        w.record_answer("pick", Answer::Choice("a".into()));
        w.advance();
        assert_eq!(w.advance(), Advance::Completed);
        assert!(w.is_complete());
        assert_eq!(w.advance(), Advance::Blocked(BlockReason::AlreadyComplete));
        assert_eq!(w.current_index(), 2);
    }

    #[test]
    fn test_last_write_wins() {
        let mut w = three_step_wizard();
        w.record_answer("mood", Answer::Choice("sad".into()));
        w.record_answer("mood", Answer::Choice("happy".into()));
        assert_eq!(w.answer("mood"), Some(&Answer::Choice("happy".into())));
    }

    #[test]
    fn test_required_free_text_needs_content() {
        let mut w = Wizard::new(vec![
            WizardStep::new(
                "name",
                "Your name",
                "who are you",
                StepKind::FreeText {
                    placeholder: None,
                    required: true,
                },
            ),
            WizardStep::new("done", "Done", "", StepKind::Info),
        ])
        .unwrap();

        assert_eq!(w.advance(), Advance::Blocked(BlockReason::MissingAnswer));
        w.record_answer("name", Answer::Text("   ".into()));
        assert_eq!(w.advance(), Advance::Blocked(BlockReason::MissingAnswer));
        w.record_answer("name", Answer::Text("Alex".into()));
        assert_eq!(w.advance(), Advance::Moved(1));
    }

    #[test]
    fn test_optional_free_text_advances_blank() {
        let mut w = Wizard::new(vec![
            WizardStep::new(
                "notes",
                "Notes",
                "anything else",
                StepKind::FreeText {
                    placeholder: Some("Type here... (optional)".into()),
                    required: false,
                },
            ),
            WizardStep::new("done", "Done", "", StepKind::Info),
        ])
        .unwrap();
        assert_eq!(w.advance(), Advance::Moved(1));
    }

    #[test]
    fn test_multi_choice_selection_set() {
        let mut w = Wizard::new(vec![
            WizardStep::new(
                "goals",
                "Goals",
                "pick some",
                StepKind::MultiChoice {
                    options: vec![
                        ChoiceOption::new("anxiety", "Anxiety & Stress"),
                        ChoiceOption::new("sleep", "Sleep Issues"),
                        ChoiceOption::new("focus", "Focus & Motivation"),
                    ],
                    require_all: false,
                },
            ),
            WizardStep::new("done", "Done", "", StepKind::Info),
        ])
        .unwrap();

        assert_eq!(w.advance(), Advance::Blocked(BlockReason::EmptySelection));

        w.toggle_selection("goals", "anxiety");
        assert!(w.can_advance());

        w.toggle_selection("goals", "sleep");
        assert!(w.can_advance());

        // Deselect one of two: still non-empty.
        w.toggle_selection("goals", "anxiety");
        assert!(w.can_advance());

        // Remove the last selection: blocked again.
        w.toggle_selection("goals", "sleep");
        assert_eq!(w.advance(), Advance::Blocked(BlockReason::EmptySelection));
    }

    #[test]
    fn test_multi_choice_require_all() {
        let mut w = Wizard::new(vec![
            WizardStep::new(
                "tap",
                "Tap them all",
                "catch every thought",
                StepKind::MultiChoice {
                    options: vec![ChoiceOption::new("t0", "one"), ChoiceOption::new("t1", "two")],
                    require_all: true,
                },
            ),
            WizardStep::new("done", "Done", "", StepKind::Info),
        ])
        .unwrap();

        w.toggle_selection("tap", "t0");
        assert_eq!(
            w.advance(),
            Advance::Blocked(BlockReason::IncompleteSelection)
        );
        w.toggle_selection("tap", "t1");
        assert_eq!(w.advance(), Advance::Moved(1));
    }

    #[test]
    fn test_quiz_gates_on_correct_answer() {
        let mut w = Wizard::new(vec![
            WizardStep::new(
                "boss",
                "Boss Challenge",
                "what do you say",
                StepKind::Quiz {
                    options: vec![
                        ChoiceOption::new("A", "Guess I'll give up then"),
                        ChoiceOption::new("B", "Nah, I've bounced back before. Let's try again"),
                    ],
                    correct: "B".into(),
                    feedback: Some("Hold up -- that thought is lying to you.".into()),
                },
            ),
            WizardStep::new("done", "Done", "", StepKind::Info),
        ])
        .unwrap();

        w.record_answer("boss", Answer::Choice("A".into()));
        assert_eq!(w.advance(), Advance::Blocked(BlockReason::IncorrectAnswer));
        assert_eq!(w.current_index(), 0);

        // Retry with the right answer.
        w.record_answer("boss", Answer::Choice("B".into()));
        assert_eq!(w.advance(), Advance::Moved(1));
    }

    #[test]
    fn test_toggle_on_non_multi_step_is_noop() {
        let mut w = three_step_wizard();
        w.toggle_selection("pick", "a");
        assert_eq!(w.answer("pick"), None);
    }

    proptest! {
        /// retreat() from i > 0 always yields i - 1 and never underflows.
        #[test]
        fn prop_retreat_decrements_or_stays(moves in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut w = three_step_wizard();
            w.record_answer("pick", Answer::Choice("a".into()));
            for forward in moves {
                let before = w.current_index();
                if forward {
                    w.advance();
                    prop_assert!(w.current_index() <= w.step_count() - 1);
                } else {
                    let after = w.retreat();
                    if w.is_complete() || before == 0 {
                        prop_assert_eq!(after, before);
                    } else {
                        prop_assert_eq!(after, before - 1);
                    }
                }
            }
        }
    }
}
