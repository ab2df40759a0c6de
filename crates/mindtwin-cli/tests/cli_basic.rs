//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Only commands
//! that leave the local flag file untouched are exercised here.

use std::process::Command;

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "mindtwin-cli", "--"])
        .args(args)
        .env("MINDTWIN_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_chat_send() {
    let (stdout, _, code) = run_cli(&["chat", "send", "--no-delay", "I'm feeling anxious"]);
    assert_eq!(code, 0, "Chat send failed");
    assert!(stdout.contains("anxiety"));
}

#[test]
fn test_chat_send_empty_rejected() {
    let (_, stderr, code) = run_cli(&["chat", "send", "--no-delay", "   "]);
    assert_eq!(code, 1, "Empty chat message should be rejected");
    assert!(stderr.contains("error:"));
}

#[test]
fn test_chat_quick_replies() {
    let (stdout, _, code) = run_cli(&["chat", "quick-replies"]);
    assert_eq!(code, 0, "Quick replies failed");
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn test_checkin_questions() {
    let (stdout, _, code) = run_cli(&["checkin", "questions"]);
    assert_eq!(code, 0, "Checkin questions failed");
    assert_eq!(stdout.lines().count(), 5);
}

#[test]
fn test_checkin_questions_json() {
    let (stdout, _, code) = run_cli(&["checkin", "questions", "--json"]);
    assert_eq!(code, 0, "Checkin questions JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 5);
}

#[test]
fn test_lesson_list() {
    let (stdout, _, code) = run_cli(&["lesson", "list"]);
    assert_eq!(code, 0, "Lesson list failed");
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn test_lesson_list_json() {
    let (stdout, _, code) = run_cli(&["lesson", "list", "--json"]);
    assert_eq!(code, 0, "Lesson list JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 8);
}

#[test]
fn test_lesson_show() {
    let (stdout, _, code) = run_cli(&["lesson", "show", "2"]);
    assert_eq!(code, 0, "Lesson show failed");
    assert!(stdout.contains("Catch & Yeet"));
}

#[test]
fn test_lesson_show_unknown() {
    let (_, stderr, code) = run_cli(&["lesson", "show", "99"]);
    assert_eq!(code, 1, "Unknown lesson should fail");
    assert!(stderr.contains("error:"));
}

#[test]
fn test_lesson_flow() {
    let (stdout, _, code) = run_cli(&["lesson", "flow", "1"]);
    assert_eq!(code, 0, "Lesson flow failed");
    assert!(stdout.contains("[quiz]"));
}

#[test]
fn test_library_list() {
    let (stdout, _, code) = run_cli(&["library", "list"]);
    assert_eq!(code, 0, "Library list failed");
    assert_eq!(stdout.lines().count(), 6);
}

#[test]
fn test_onboarding_steps() {
    let (stdout, _, code) = run_cli(&["onboarding", "steps"]);
    assert_eq!(code, 0, "Onboarding steps failed");
    assert_eq!(stdout.lines().count(), 9);
    assert!(stdout.contains("free-text (required)"));
}

#[test]
fn test_journal_add() {
    let (stdout, _, code) = run_cli(&["journal", "add", "today was alright", "--mood", "okay"]);
    assert_eq!(code, 0, "Journal add failed");
    assert!(stdout.contains("+20 XP"));
}

#[test]
fn test_journal_add_empty_rejected() {
    let (_, stderr, code) = run_cli(&["journal", "add", "   "]);
    assert_eq!(code, 1, "Empty journal entry should be rejected");
    assert!(stderr.contains("error:"));
}

#[test]
fn test_profile_show() {
    let (stdout, _, code) = run_cli(&["profile", "show"]);
    assert_eq!(code, 0, "Profile show failed");
    assert!(stdout.contains("level 1"));
}

#[test]
fn test_route_resolve() {
    let (stdout, _, code) = run_cli(&["route", "resolve", "/lesson/3"]);
    assert_eq!(code, 0, "Route resolve failed");
    assert!(stdout.contains("EnergyCheck"));
}

#[test]
fn test_route_resolve_not_found() {
    let (stdout, _, code) = run_cli(&["route", "resolve", "/nowhere"]);
    assert_eq!(code, 2, "Unmatched path should exit 2");
    assert!(stdout.contains("NotFound"));
}
