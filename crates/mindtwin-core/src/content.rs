//! Static content tables.
//!
//! All user-facing content -- the sample profile, badges, lessons, and
//! therapy library -- is constant in-memory data describing a fresh start.
//! XP, streaks, and progress values are display numbers here; nothing in
//! this crate accrues or derives them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A mood value as shown on the avatar and check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Okay,
    Meh,
    Sad,
    Angry,
    Neutral,
    Anxious,
    Calm,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Okay => "okay",
            Mood::Meh => "meh",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
            Mood::Neutral => "neutral",
            Mood::Anxious => "anxious",
            Mood::Calm => "calm",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "happy" => Ok(Mood::Happy),
            "okay" => Ok(Mood::Okay),
            "meh" => Ok(Mood::Meh),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "neutral" => Ok(Mood::Neutral),
            "anxious" => Ok(Mood::Anxious),
            "calm" => Ok(Mood::Calm),
            other => Err(ValidationError::InvalidValue {
                field: "mood".to_string(),
                message: format!("unknown mood '{other}'"),
            }),
        }
    }
}

/// Self-reported wellbeing gauges, each 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentalStats {
    pub anxiety: u8,
    pub energy: u8,
    pub sleep: u8,
    pub mindfulness: u8,
}

/// An achievement badge. Fixed at load; the demo never flips one to earned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub earned: bool,
    pub earned_date: Option<String>,
}

/// The displayed user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next_level: u32,
    pub growth_streak: u32,
    pub compassion_streak: u32,
    pub highest_streak: u32,
    pub badges: Vec<Badge>,
    pub mood: Mood,
    /// Mood from today's check-in, if one happened.
    pub today_mood: Option<Mood>,
    pub mental_stats: MentalStats,
}

/// Lesson activity type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Cbt,
    Mindfulness,
    Breathing,
    Journal,
    Exercise,
}

/// Lesson availability. Purely descriptive in the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LessonStatus {
    Locked,
    Available,
    InProgress,
    Completed,
}

/// One lesson in the journey path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub module: String,
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
    pub description: String,
    pub duration: String,
    pub xp_reward: u32,
    pub status: LessonStatus,
    pub order: u32,
}

/// Rough time commitment for a therapy module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimatedTime {
    Short,
    Medium,
    Deep,
}

/// A module in the therapy library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapyModule {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub estimated_time: EstimatedTime,
    pub icon: String,
    pub lessons_count: u32,
    /// 0-100.
    pub progress: u8,
    pub recommended: bool,
}

fn badge(id: &str, name: &str, description: &str, icon: &str) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        earned: false,
        earned_date: None,
    }
}

/// The fresh-start user record.
pub fn fresh_user() -> UserProfile {
    UserProfile {
        name: "You".to_string(),
        email: String::new(),
        level: 1,
        xp: 0,
        xp_to_next_level: 100,
        growth_streak: 0,
        compassion_streak: 0,
        highest_streak: 0,
        badges: vec![
            badge("1", "First Steps", "Complete your first lesson", "🌱"),
            badge("2", "Week Warrior", "Achieve a 7 day streak", "🔥"),
            badge("3", "Mindful Master", "Complete 10 mindfulness exercises", "🧘"),
            badge("4", "Journal Keeper", "Make 20 journal entries", "📔"),
            badge("5", "Peak Performer", "Reach level 10", "⭐"),
        ],
        mood: Mood::Neutral,
        today_mood: None,
        mental_stats: MentalStats {
            anxiety: 50,
            energy: 50,
            sleep: 50,
            mindfulness: 50,
        },
    }
}

fn lesson(
    id: &str,
    title: &str,
    module: &str,
    lesson_type: LessonType,
    description: &str,
    duration: &str,
    xp_reward: u32,
    order: u32,
) -> Lesson {
    Lesson {
        id: id.to_string(),
        title: title.to_string(),
        module: module.to_string(),
        lesson_type,
        description: description.to_string(),
        duration: duration.to_string(),
        xp_reward,
        status: LessonStatus::Available,
        order,
    }
}

/// The full lesson table, in journey order.
pub fn all_lessons() -> Vec<Lesson> {
    vec![
        lesson(
            "1",
            "Vibe Check: Small Wins Hit Different",
            "Depression/Low Mood",
            LessonType::Cbt,
            "Meet Alex and learn how small wins boost your mood",
            "10 min",
            50,
            1,
        ),
        lesson(
            "2",
            "Catch & Yeet: Anxious Thought Edition",
            "Anxiety Basics",
            LessonType::Cbt,
            "Managing anxious/intrusive thoughts with interactive tapping mini-game",
            "15 min",
            60,
            2,
        ),
        lesson(
            "3",
            "Energy Bar Check: Recharge Mode",
            "Self-Care",
            LessonType::Journal,
            "Self-care, energy management, preventing burnout with decision-tree scenarios",
            "12 min",
            80,
            3,
        ),
        lesson(
            "4",
            "Body Scan Meditation",
            "Mindfulness",
            LessonType::Mindfulness,
            "Connect with your body",
            "12 min",
            60,
            4,
        ),
        lesson(
            "5",
            "Touch Grass: The 5-4-3-2-1 Method 🌿",
            "Mindfulness",
            LessonType::Journal,
            "Cultivate appreciation",
            "8 min",
            40,
            5,
        ),
        lesson(
            "6",
            "Progressive Relaxation",
            "Mindfulness",
            LessonType::Exercise,
            "Release physical tension",
            "10 min",
            50,
            6,
        ),
        lesson(
            "7",
            "Understanding Triggers",
            "Trauma Support",
            LessonType::Cbt,
            "Identify your emotional triggers",
            "20 min",
            100,
            7,
        ),
        lesson(
            "8",
            "Safe Space Visualization",
            "Trauma Support",
            LessonType::Mindfulness,
            "Create your mental sanctuary",
            "15 min",
            75,
            8,
        ),
    ]
}

/// Look up a lesson by id. Unknown ids are not an error -- callers render a
/// "lesson not found" state.
pub fn lesson_by_id(id: &str) -> Option<Lesson> {
    all_lessons().into_iter().find(|l| l.id == id)
}

fn module(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    estimated_time: EstimatedTime,
    icon: &str,
    lessons_count: u32,
    recommended: bool,
) -> TherapyModule {
    TherapyModule {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        estimated_time,
        icon: icon.to_string(),
        lessons_count,
        progress: 0,
        recommended,
    }
}

/// The therapy library table.
pub fn therapy_modules() -> Vec<TherapyModule> {
    vec![
        module(
            "1",
            "Anxiety Management",
            "CBT",
            "Learn to understand and manage anxiety effectively",
            EstimatedTime::Medium,
            "🧠",
            12,
            true,
        ),
        module(
            "2",
            "Mindfulness Practice",
            "Mindfulness",
            "Develop present-moment awareness and peace",
            EstimatedTime::Short,
            "🧘",
            8,
            true,
        ),
        module(
            "3",
            "Trauma Healing",
            "Trauma",
            "Gentle support for processing difficult experiences",
            EstimatedTime::Deep,
            "💚",
            15,
            false,
        ),
        module(
            "4",
            "Identity & Purpose",
            "Self-Discovery",
            "Explore who you are and what matters to you",
            EstimatedTime::Medium,
            "✨",
            10,
            true,
        ),
        module(
            "5",
            "Better Sleep",
            "Sleep",
            "Improve sleep quality through evidence-based techniques",
            EstimatedTime::Short,
            "😴",
            6,
            false,
        ),
        module(
            "6",
            "Social Confidence",
            "Social Skills",
            "Build confidence in social situations",
            EstimatedTime::Medium,
            "👥",
            9,
            false,
        ),
    ]
}
