//! End-to-end daily check-in scenario.
//!
//! Walks the five-step check-in wizard the way the UI does -- answer each
//! required step, leave the optional notes blank, complete, write the local
//! flags, start the reward overlay -- and verifies the gate across a day
//! rollover.

use mindtwin_core::celebration::{Celebration, CHECKIN_REWARD_MS};
use mindtwin_core::checkin::{self, DailyCheckIn, FALLBACK_MOOD};
use mindtwin_core::storage::FlagStore;
use mindtwin_core::wizard::{Advance, Answer};

#[test]
fn complete_checkin_and_gate_until_tomorrow() {
    let dir = tempfile::tempdir().unwrap();
    let gate = DailyCheckIn::with_store(FlagStore::with_path(dir.path().join("state.toml")));

    // Gate is open before any check-in.
    assert!(!gate.has_completed("2026-08-30").unwrap());

    let mut wizard = checkin::build_wizard();
    assert_eq!(wizard.step_count(), 5);

    // Answer the four choice steps.
    wizard.record_answer("mood", Answer::Choice("happy".to_string()));
    assert_eq!(wizard.advance(), Advance::Moved(1));
    wizard.record_answer("energy", Answer::Number(4));
    assert_eq!(wizard.advance(), Advance::Moved(2));
    wizard.record_answer("stress", Answer::Choice("none".to_string()));
    assert_eq!(wizard.advance(), Advance::Moved(3));
    wizard.record_answer("focus", Answer::Choice("create".to_string()));
    assert_eq!(wizard.advance(), Advance::Moved(4));

    // The free-text notes step is optional: completing with it blank works.
    assert_eq!(wizard.advance(), Advance::Completed);
    assert!(wizard.is_complete());

    // Completion side effects: flags written, reward overlay started.
    let mood = match wizard.answer("mood") {
        Some(Answer::Choice(m)) => m.clone(),
        other => panic!("unexpected mood answer: {other:?}"),
    };
    gate.mark_completed("2026-08-30", Some(&mood)).unwrap();

    let overlay = Celebration::start_at(0, CHECKIN_REWARD_MS);
    assert!(overlay.is_active(2_999));
    assert!(!overlay.is_active(3_000));

    // Same day: gated, mood readable.
    assert!(gate.has_completed("2026-08-30").unwrap());
    assert_eq!(gate.mood("2026-08-30").unwrap(), "happy");

    // Next calendar day: gate reopens, mood falls back.
    assert!(!gate.has_completed("2026-08-31").unwrap());
    assert_eq!(gate.mood("2026-08-31").unwrap(), FALLBACK_MOOD);
}

#[test]
fn retreating_through_checkin_preserves_answers() {
    let mut wizard = checkin::build_wizard();

    wizard.record_answer("mood", Answer::Choice("meh".to_string()));
    wizard.advance();
    wizard.record_answer("energy", Answer::Number(2));
    wizard.advance();

    // Back up to the mood step and change the answer: last write wins.
    wizard.retreat();
    wizard.retreat();
    assert_eq!(wizard.current_index(), 0);
    wizard.record_answer("mood", Answer::Choice("okay".to_string()));

    // Energy answer survived the retreat, so both steps advance again.
    assert_eq!(wizard.advance(), Advance::Moved(1));
    assert_eq!(wizard.advance(), Advance::Moved(2));
    assert_eq!(
        wizard.answer("mood"),
        Some(&Answer::Choice("okay".to_string()))
    );
}
