pub mod chat;
pub mod checkin;
pub mod journal;
pub mod lesson;
pub mod library;
pub mod onboarding;
pub mod profile;
pub mod route;
