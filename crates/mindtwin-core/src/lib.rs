//! # MindTwin Core Library
//!
//! Core logic for the MindTwin mental-wellness demo. The app is a set of
//! presentational screens over static sample data; what this crate provides
//! is the structured logic underneath them:
//!
//! - **Step Wizard**: the one recurring interaction pattern -- a linear,
//!   validated step sequence with answer accumulation and a terminal reward
//!   step -- implemented once and parameterized by each flow's step list
//! - **Keyword Chat**: the twin assistant's ordered keyword→reply lookup
//! - **Daily Check-in**: once-per-calendar-day gating over two local flags,
//!   the only state that outlives a screen
//! - **Content Tables**: the lessons, badges, and therapy-library sample data
//! - **Routes**: the path→screen table with the lesson special cases
//!
//! ## Key Components
//!
//! - [`Wizard`]: generic step-wizard state machine
//! - [`ChatSession`]: transcript over the keyword lookup
//! - [`DailyCheckIn`]: check-in gate and mood flag
//! - [`FlagStore`]: TOML-backed local flag file

pub mod celebration;
pub mod chat;
pub mod checkin;
pub mod content;
pub mod error;
pub mod flows;
pub mod journal;
pub mod onboarding;
pub mod routes;
pub mod storage;
pub mod wizard;

pub use celebration::Celebration;
pub use chat::{twin_reply, ChatMessage, ChatSession};
pub use checkin::{CheckInOption, CheckInQuestion, DailyCheckIn, QuestionType};
pub use content::{Badge, Lesson, LessonStatus, LessonType, Mood, TherapyModule, UserProfile};
pub use error::{CoreError, FlagsError, Result, ValidationError};
pub use journal::JournalEntry;
pub use onboarding::OnboardingRecord;
pub use routes::{LessonRoute, Route};
pub use storage::{FlagStore, LocalFlags};
pub use wizard::{Advance, Answer, BlockReason, StepKind, Wizard, WizardStep};
