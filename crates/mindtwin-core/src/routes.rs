//! Client-side route table.
//!
//! Maps URL paths to screens. Lesson ids 1-3 route to their bespoke flows,
//! every other `/lesson/{id}` to the generic detail screen (which renders a
//! "lesson not found" state for unknown ids rather than crashing). Anything
//! unmatched falls through to `NotFound`.

use serde::{Deserialize, Serialize};

/// Which bespoke or generic lesson flow a `/lesson/{id}` path resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonRoute {
    /// `/lesson/1` — "Vibe Check: Small Wins Hit Different".
    SmallWins,
    /// `/lesson/2` — "Catch & Yeet: Anxious Thought Edition".
    CatchAndYeet,
    /// `/lesson/3` — "Energy Bar Check: Recharge Mode".
    EnergyCheck,
    /// Any other id, handled by the generic detail screen.
    Detail(String),
}

impl LessonRoute {
    /// The lesson id this route refers to.
    pub fn lesson_id(&self) -> &str {
        match self {
            LessonRoute::SmallWins => "1",
            LessonRoute::CatchAndYeet => "2",
            LessonRoute::EnergyCheck => "3",
            LessonRoute::Detail(id) => id,
        }
    }
}

/// A resolved screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Login,
    Onboarding,
    Dashboard,
    Lessons,
    Lesson(LessonRoute),
    Journal,
    Library,
    Profile,
    Settings,
    NotFound,
}

/// Resolve a path to a screen.
pub fn resolve(path: &str) -> Route {
    let trimmed = path.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    match trimmed {
        "/" => Route::Landing,
        "/login" => Route::Login,
        "/onboarding" => Route::Onboarding,
        "/dashboard" => Route::Dashboard,
        "/lessons" => Route::Lessons,
        "/journal" => Route::Journal,
        "/library" => Route::Library,
        "/profile" => Route::Profile,
        "/settings" => Route::Settings,
        other => match other.strip_prefix("/lesson/") {
            Some("1") => Route::Lesson(LessonRoute::SmallWins),
            Some("2") => Route::Lesson(LessonRoute::CatchAndYeet),
            Some("3") => Route::Lesson(LessonRoute::EnergyCheck),
            Some(id) if !id.is_empty() && !id.contains('/') => {
                Route::Lesson(LessonRoute::Detail(id.to_string()))
            }
            _ => Route::NotFound,
        },
    }
}

/// Whether the always-on overlays (global nav, floating chat button, quick
/// actions) are shown on a screen. Hidden on the pre-app screens.
pub fn shows_overlays(route: &Route) -> bool {
    !matches!(
        route,
        Route::Landing | Route::Login | Route::Onboarding | Route::NotFound
    )
}
