//! Lesson flow definitions.
//!
//! Three lessons get bespoke five-stage flows (Hook → Learn → Practice →
//! Boss Challenge → Reward) with correctness-gated quiz stages; every other
//! lesson id gets a generic ungated detail flow. All of them are just step
//! lists fed to the wizard engine.

use indoc::indoc;

use crate::content::{lesson_by_id, Lesson};
use crate::wizard::{ChoiceOption, StepKind, Wizard, WizardStep};

fn opt(id: &str, label: &str, emoji: &str) -> ChoiceOption {
    ChoiceOption::new(id, label).with_emoji(emoji)
}

fn quiz(options: Vec<ChoiceOption>, correct: &str, feedback: &str) -> StepKind {
    StepKind::Quiz {
        options,
        correct: correct.to_string(),
        feedback: Some(feedback.to_string()),
    }
}

/// Lesson 1: "Vibe Check: Small Wins Hit Different".
pub fn small_wins_flow() -> Wizard {
    let steps = vec![
        WizardStep::new(
            "hook",
            "Hook",
            indoc! {"
                Meet Alex.
                Alex had a rough week. Everything feels heavy, and even getting
                out of bed is a win nobody seems to notice.
            "},
            StepKind::Info,
        ),
        WizardStep::new(
            "learn",
            "Learn",
            "Two thoughts show up after a setback. Which one helps Alex grow?",
            quiz(
                vec![
                    ChoiceOption::new("wrong", "\"I'm trash at everything\""),
                    ChoiceOption::new("right", "\"I'm learning and that's okay\""),
                ],
                "right",
                "That thought piles on. Try the one that leaves room to grow.",
            ),
        ),
        WizardStep::new(
            "practice",
            "Practice",
            "On hard days, SMALL wins = BIG mood boost. What's ONE micro-win from today?",
            StepKind::SingleChoice {
                options: vec![
                    opt("food", "Had something good to eat", "🍕"),
                    opt("meme", "Sent a funny meme", "😂"),
                    opt("shower", "Took a shower", "🚿"),
                    opt("text", "Texted someone back", "📱"),
                    opt("anything", "Literally did anything", "✅"),
                ],
            },
        ),
        WizardStep::new(
            "boss",
            "Boss Challenge",
            "Setback time: the thing Alex tried didn't work. What's the comeback line?",
            quiz(
                vec![
                    ChoiceOption::new("A", "\"Guess I'll give up then\""),
                    ChoiceOption::new(
                        "B",
                        "\"Nah, I've bounced back before. Let's try again\"",
                    ),
                ],
                "B",
                "That's the spiral talking. Pick the line that keeps you in the game.",
            ),
        ),
        WizardStep::new(
            "reward",
            "Reward",
            "You crushed it! Celebrating small stuff rewires your brain for positivity. +50 XP",
            StepKind::Info,
        ),
    ];
    Wizard::new(steps).expect("lesson flow step list is non-empty")
}

/// Lesson 2: "Catch & Yeet: Anxious Thought Edition".
pub fn catch_and_yeet_flow() -> Wizard {
    let steps = vec![
        WizardStep::new(
            "hook",
            "Hook",
            indoc! {"
                2 AM. Alex's brain:
                \"What if tomorrow goes wrong? What if everyone notices? What if...\"
                Sound familiar? Anxious thoughts love the night shift.
            "},
            StepKind::Info,
        ),
        WizardStep::new(
            "learn",
            "Learn",
            "Which of these thoughts is the anxious intruder?",
            quiz(
                vec![
                    ChoiceOption::new("A", "\"I should prepare for my exam\""),
                    ChoiceOption::new("B", "\"Everyone secretly hates me\""),
                ],
                "B",
                "That one's a plan, not a spiral. The anxious thought is the mind-reader.",
            ),
        ),
        WizardStep::new(
            "practice",
            "Practice",
            "Catch & yeet! Tap every thought as it floats by.",
            StepKind::MultiChoice {
                options: vec![
                    opt("t0", "I'm gonna fail", "💭"),
                    opt("t1", "Nobody likes me", "💭"),
                    opt("t2", "I can try my best", "💭"),
                    opt("t3", "Everything is falling apart", "💭"),
                    opt("t4", "I've handled tough stuff before", "💭"),
                ],
                require_all: true,
            },
        ),
        WizardStep::new(
            "boss",
            "Boss Challenge",
            "Big exam tomorrow. Which reframe do you hand Alex?",
            quiz(
                vec![
                    ChoiceOption::new("A", "\"I'll probably bomb it. Why even try?\""),
                    ChoiceOption::new(
                        "B",
                        "\"I'm nervous, but I've prepared. Even if I stumble, it's not the end of the world.\"",
                    ),
                ],
                "B",
                "I feel you, that fear is real. But pick the reframe that keeps the fear in proportion.",
            ),
        ),
        WizardStep::new(
            "reward",
            "Reward",
            "Thoughts caught and yeeted. Your twin sleeps easier tonight. +60 XP",
            StepKind::Info,
        ),
    ];
    Wizard::new(steps).expect("lesson flow step list is non-empty")
}

/// Lesson 3: "Energy Bar Check: Recharge Mode".
pub fn energy_check_flow() -> Wizard {
    let steps = vec![
        WizardStep::new(
            "hook",
            "Hook",
            indoc! {"
                Alex has been grinding nonstop.
                Homework, group chats, practice, more homework. The battery icon
                is deep in the red and nobody scheduled a recharge.
            "},
            StepKind::Info,
        ),
        WizardStep::new(
            "learn",
            "Learn",
            indoc! {"
                Energy as a resource: you're not lazy, you're just running on
                empty. Your energy has 4 tanks: Physical, Mental, Emotional,
                Social. Which tank feels most empty for you right now?
            "},
            StepKind::SingleChoice {
                options: vec![
                    opt("Physical", "Physical", "💪"),
                    opt("Mental", "Mental", "🧠"),
                    opt("Emotional", "Emotional", "💖"),
                    opt("Social", "Social", "👥"),
                ],
            },
        ),
        WizardStep::new(
            "practice",
            "Practice",
            "Pick a recharge move for tonight.",
            StepKind::SingleChoice {
                options: vec![
                    opt("nap", "Nap & do nothing", "🛏️"),
                    opt("game", "Play a chill game", "🎮"),
                    opt("walk", "Go for a walk", "🚶"),
                    opt("friend", "Call a friend", "💬"),
                ],
            },
        ),
        WizardStep::new(
            "boss",
            "Boss Challenge",
            "It's midnight, you're drained, and a friend asks for homework help. What do you do?",
            quiz(
                vec![
                    ChoiceOption::new("A", "Stay up and help even though I'm drained"),
                    ChoiceOption::new(
                        "B",
                        "Say \"I need to rest, but I'll help in the morning\" and mute the chat",
                    ),
                ],
                "B",
                "Running on empty helps nobody. Boundaries are how you keep showing up.",
            ),
        ),
        WizardStep::new(
            "reward",
            "Reward",
            "Recharge scheduled. Protecting your energy is self-care, not selfishness. +80 XP",
            StepKind::Info,
        ),
    ];
    Wizard::new(steps).expect("lesson flow step list is non-empty")
}

/// Generic detail flow for lessons without a bespoke one. No gating: every
/// stage advances freely and the reflection is optional.
pub fn generic_lesson_flow(lesson: &Lesson) -> Wizard {
    let steps = vec![
        WizardStep::new("hook", "Hook", lesson.description.clone(), StepKind::Info),
        WizardStep::new(
            "learn",
            "Learn",
            format!(
                "Take {} for this {} exercise. Find a comfortable spot and follow along.",
                lesson.duration, lesson.module
            ),
            StepKind::Info,
        ),
        WizardStep::new(
            "reflect",
            "Practice",
            "What did you discover?",
            StepKind::FreeText {
                placeholder: Some("Write a few words... (optional)".to_string()),
                required: false,
            },
        ),
        WizardStep::new(
            "reward",
            "Reward",
            format!("Nice work. +{} XP", lesson.xp_reward),
            StepKind::Info,
        ),
    ];
    Wizard::new(steps).expect("lesson flow step list is non-empty")
}

/// The flow for a lesson id: bespoke for ids 1-3, generic for any other known
/// lesson, `None` for unknown ids (callers render "lesson not found").
pub fn for_lesson(id: &str) -> Option<Wizard> {
    match id {
        "1" => Some(small_wins_flow()),
        "2" => Some(catch_and_yeet_flow()),
        "3" => Some(energy_check_flow()),
        other => lesson_by_id(other).map(|l| generic_lesson_flow(&l)),
    }
}
