//! Keyword-matched twin chat.
//!
//! The in-app assistant is a static keyword-to-reply lookup, not an inference
//! call: lowercase the input, scan an *ordered* keyword table, return the
//! reply for the first keyword that appears as a substring, or a designated
//! default. Declaration order is the tie-break contract -- an input matching
//! several keywords resolves to the earliest-declared one -- so the table is
//! a slice, not a map.
//!
//! Simulated typing latency before displaying a reply belongs to the calling
//! UI layer, not to the lookup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum accepted message length in characters.
pub const MAX_MESSAGE_LEN: usize = 500;

/// Opening message the twin greets with.
pub const GREETING: &str = "Hey bestie! 👋 I'm your digital twin, here to support you through whatever you're going through. What's on your mind today?";

/// Reply used when no keyword matches.
pub const DEFAULT_REPLY: &str = "I'm listening. Tell me more about what's on your mind 💭";

/// One-tap prompts offered in the chat UI.
pub const QUICK_REPLIES: &[&str] = &[
    "I'm anxious 😰",
    "I need motivation 💪",
    "Reflect on today 🤔",
    "I'm feeling great! ✨",
];

/// Ordered keyword→reply table. First substring match wins.
const TWIN_RESPONSES: &[(&str, &str)] = &[
    ("anxious", "Ugh anxiety is the actual worst. What's making you feel this way? Sometimes just naming it helps 💙"),
    ("bad day", "I'm sorry today was rough. Want to talk about it or should we do something to help you feel better? I'm here either way"),
    ("tired", "That's so valid. Rest is productive too, no cap. How's your sleep been?"),
    ("proud", "YESSS! As you should be! Tell me what you did 👑"),
    ("help", "I got you. What do you need right now? We can do a breathing exercise, journal, or just talk it out"),
    ("thanks", "Always! That's what I'm here for. You deserve support 💕"),
    ("sad", "I see you and I'm here with you. It's okay to not be okay. Want to share what's going on? 🫂"),
    ("stressed", "Stress is tough but you're tougher. Let's work through this together. What's weighing on you?"),
    ("happy", "Love this energy! What's got you feeling good today? Let's celebrate it ✨"),
    ("motivation", "You're stronger than you think! Every small step counts. What's one thing you can do right now? 💪"),
    ("reflect", "Let's take a moment. What went well today? What challenged you? Both are part of growth 🌱"),
    ("great", "That's what I love to see! Keep riding that wave. What made today special? ✨"),
];

/// Look up the canned reply for a user message.
///
/// Pure function of the input and the static table.
pub fn twin_reply(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    for (keyword, reply) in TWIN_RESPONSES {
        if lower.contains(keyword) {
            return reply;
        }
    }
    DEFAULT_REPLY
}

/// Who sent a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// An in-memory chat transcript with the twin.
///
/// Owns its message list exclusively; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a session seeded with the twin's greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Assistant, GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send a user message and get the twin's reply.
    ///
    /// The input is trim-and-checked before any state mutation: empty or
    /// over-length messages are rejected and the transcript is untouched.
    pub fn send(&mut self, input: &str) -> Result<&'static str, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyContent("chat message".to_string()));
        }
        let len = trimmed.chars().count();
        if len > MAX_MESSAGE_LEN {
            return Err(ValidationError::TooLong {
                len,
                max: MAX_MESSAGE_LEN,
            });
        }
        let reply = twin_reply(trimmed);
        self.messages.push(ChatMessage::new(Role::User, trimmed));
        self.messages.push(ChatMessage::new(Role::Assistant, reply));
        Ok(reply)
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
