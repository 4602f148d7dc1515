//! Unit tests for the `math_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical session transcript |
//! | Session flow | Tier selection, turn lifecycle, feedback advancement |
//! | Idempotency | Double submission is a no-op; events outside their phase are ignored |
//! | Win condition | Reward goal ends the session; no problems after a win |
//! | Reset | Fresh state, stale advance tokens discarded |
//! | Input | Typed-answer parsing, malformed input scores as incorrect |
//! | Modality | Multiple choice below 900 reward, typed at or above |
//! | Speech | Question text per locale, compliments only on correct answers |
//! | View adapter | Field mapping, answer hidden until the turn resolves |
//!
//! Operand-rule, penalty-band, and distractor coverage lives next to the
//! code in the `quiz_engine` sub-modules.

use std::cell::RefCell;
use std::rc::Rc;

use crate::quiz_engine::{
    DifficultyTier, InputMode, Locale, Phase, SessionController, SpeechService, Submission,
    TurnOutcome, Verdict, COMPLIMENTS, REWARD_GOAL,
};
use crate::view_adapter::to_view_state;

// ── helpers ──────────────────────────────────────────────────────────────────

/// Speech sink that records every line it is asked to say.
#[derive(Clone, Default)]
struct RecordingSpeech(Rc<RefCell<Vec<String>>>);

impl RecordingSpeech {
    fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl SpeechService for RecordingSpeech {
    fn speak(&self, text: &str) {
        self.0.borrow_mut().push(text.to_string());
    }
}

/// Submit the correct answer for the problem currently on screen.
fn answer_correctly<S: SpeechService>(session: &mut SessionController<S>) -> TurnOutcome {
    let answer = session.problem().expect("no problem on screen").answer;
    session
        .submit_answer(Submission::Value(i64::from(answer)))
        .expect("submission was ignored")
}

/// Submit a value guaranteed to be wrong (0 is never a product of operands ≥ 1).
fn answer_wrongly<S: SpeechService>(session: &mut SessionController<S>) -> TurnOutcome {
    session
        .submit_answer(Submission::Value(0))
        .expect("submission was ignored")
}

// ── session flow ─────────────────────────────────────────────────────────────

#[test]
fn tier_selection_presents_the_first_problem() {
    let mut s = SessionController::seeded(1);
    assert_eq!(s.phase(), Phase::SelectingTier);
    assert!(s.problem().is_none());

    s.select_tier(DifficultyTier::Moderate);
    assert_eq!(s.phase(), Phase::AwaitingAnswer);

    let p = s.progression().expect("progression missing after tier selection");
    assert_eq!(p.reward_score, 0);
    assert_eq!(p.difficulty_level, 2, "Moderate starts at level 2");

    let q = s.problem().expect("no first problem");
    assert_eq!(q.answer, q.operand1 * q.operand2);
    assert!(q.options.contains(&q.answer));
}

#[test]
fn correct_answer_resolves_and_advances_to_a_new_problem() {
    let mut s = SessionController::seeded(2);
    s.select_tier(DifficultyTier::Easy);
    let first = s.problem().unwrap().operands();

    let outcome = answer_correctly(&mut s);
    assert_eq!(outcome.verdict, Verdict::Correct);
    assert!(!outcome.won);
    assert_eq!(s.phase(), Phase::Resolved);
    assert_eq!(s.progression().unwrap().reward_score, 5);

    let token = outcome.advance.expect("non-winning turn must hand out a token");
    assert!(s.advance_turn(token));
    assert_eq!(s.phase(), Phase::AwaitingAnswer);

    let second = s.problem().unwrap().operands();
    assert!(
        !crate::quiz_engine::models::same_pair(first, second),
        "consecutive problems repeated the pair {first:?}"
    );
}

#[test]
fn second_submission_for_the_same_turn_is_ignored() {
    let mut s = SessionController::seeded(3);
    s.select_tier(DifficultyTier::Easy);

    answer_wrongly(&mut s);
    let snapshot = *s.progression().unwrap();

    assert!(s.submit_answer(Submission::Value(999)).is_none());
    assert_eq!(*s.progression().unwrap(), snapshot, "double submission mutated state");
    assert_eq!(s.phase(), Phase::Resolved);
}

#[test]
fn submission_before_tier_selection_is_ignored() {
    let mut s = SessionController::seeded(4);
    assert!(s.submit_answer(Submission::Value(1)).is_none());
    assert_eq!(s.phase(), Phase::SelectingTier);
}

#[test]
fn tier_selection_mid_session_is_ignored() {
    let mut s = SessionController::seeded(5);
    s.select_tier(DifficultyTier::Hard);
    let before = s.problem().unwrap().clone();

    s.select_tier(DifficultyTier::Easy);
    assert_eq!(s.tier(), Some(DifficultyTier::Hard));
    assert_eq!(*s.problem().unwrap(), before, "re-selection replaced the problem");
}

#[test]
fn advance_token_is_single_use() {
    let mut s = SessionController::seeded(6);
    s.select_tier(DifficultyTier::Easy);

    let token = answer_correctly(&mut s).advance.unwrap();
    assert!(s.advance_turn(token));
    assert!(!s.advance_turn(token), "token redeemed twice");

    // The session is awaiting an answer; redeeming must not have skipped it.
    assert_eq!(s.phase(), Phase::AwaitingAnswer);
}

// ── win condition ────────────────────────────────────────────────────────────

#[test]
fn reaching_the_reward_goal_wins_the_session() {
    let mut s = SessionController::seeded(7);
    s.select_tier(DifficultyTier::Easy);

    let mut turns = 0u32;
    loop {
        turns += 1;
        let outcome = answer_correctly(&mut s);
        let score = s.progression().unwrap().reward_score;
        assert!(score <= REWARD_GOAL, "reward {score} exceeded the goal");

        if outcome.won {
            assert_eq!(score, REWARD_GOAL);
            assert!(outcome.advance.is_none(), "a won turn must not hand out a token");
            break;
        }
        assert_eq!(score, turns * 5);
        s.advance_turn(outcome.advance.unwrap());
    }

    assert_eq!(turns, 200, "200 correct answers at +5 each reach 1000");
    assert_eq!(s.phase(), Phase::Won);

    // Terminal: no scoring, no new problems.
    assert!(s.submit_answer(Submission::Value(1)).is_none());
    assert_eq!(s.phase(), Phase::Won);
}

#[test]
fn hard_tier_serves_high_factors_until_the_override_takes_over() {
    let mut s = SessionController::seeded(8);
    s.select_tier(DifficultyTier::Hard);

    while s.progression().unwrap().reward_score < 800 {
        let (a, b) = s.problem().unwrap().operands();
        assert!(
            (6..=9).contains(&a) && (6..=9).contains(&b),
            "hard-tier pair ({a}, {b}) outside 6..9 at reward {}",
            s.progression().unwrap().reward_score
        );
        let outcome = answer_correctly(&mut s);
        s.advance_turn(outcome.advance.unwrap());
    }

    // From 800 on, one operand may reach 12.
    let (a, b) = s.problem().unwrap().operands();
    assert!((6..=12).contains(&a) && (6..=12).contains(&b));
}

// ── reset & stale timers ─────────────────────────────────────────────────────

#[test]
fn reset_returns_to_tier_selection_with_fresh_state() {
    let mut s = SessionController::seeded(9);
    s.select_tier(DifficultyTier::Moderate);
    answer_correctly(&mut s);

    s.reset();
    assert_eq!(s.phase(), Phase::SelectingTier);
    assert!(s.tier().is_none());
    assert!(s.problem().is_none());
    assert!(s.progression().is_none());

    // A new session starts cleanly.
    s.select_tier(DifficultyTier::Easy);
    assert_eq!(s.progression().unwrap().reward_score, 0);
    assert_eq!(s.phase(), Phase::AwaitingAnswer);
}

#[test]
fn stale_advance_token_is_discarded_after_reset() {
    let mut s = SessionController::seeded(10);
    s.select_tier(DifficultyTier::Easy);
    let token = answer_correctly(&mut s).advance.unwrap();

    // Reset fires while the host's feedback timer is still pending.
    s.reset();
    assert!(!s.advance_turn(token), "stale token mutated a reset session");
    assert_eq!(s.phase(), Phase::SelectingTier);
    assert!(s.problem().is_none());

    // Even after the new session starts, the old token stays dead.
    s.select_tier(DifficultyTier::Easy);
    let before = s.problem().unwrap().clone();
    assert!(!s.advance_turn(token));
    assert_eq!(*s.problem().unwrap(), before);
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_and_events_produce_the_same_transcript() {
    let transcript = |seed: u64| -> Vec<(u32, u32, [u32; 4])> {
        let mut s = SessionController::seeded(seed);
        s.select_tier(DifficultyTier::Moderate);
        let mut out = Vec::new();
        for _ in 0..25 {
            let q = s.problem().unwrap().clone();
            out.push((q.operand1, q.operand2, q.options));
            let outcome = answer_correctly(&mut s);
            s.advance_turn(outcome.advance.unwrap());
        }
        out
    };
    assert_eq!(transcript(123), transcript(123));
    assert_ne!(transcript(123), transcript(124));
}

// ── input handling ───────────────────────────────────────────────────────────

#[test]
fn typed_input_parses_integers_and_tolerates_whitespace() {
    assert_eq!(Submission::from_typed("42"), Submission::Value(42));
    assert_eq!(Submission::from_typed("  42 "), Submission::Value(42));
    assert_eq!(Submission::from_typed("-7"), Submission::Value(-7));
    assert_eq!(Submission::from_typed(""), Submission::Invalid);
    assert_eq!(Submission::from_typed("4x2"), Submission::Invalid);
    assert_eq!(Submission::from_typed("forty-two"), Submission::Invalid);
}

#[test]
fn malformed_typed_answer_scores_as_a_normal_incorrect_turn() {
    let mut s = SessionController::seeded(11);
    s.select_tier(DifficultyTier::Easy);

    let outcome = s.submit_answer(Submission::from_typed("not a number")).unwrap();
    assert_eq!(outcome.verdict, Verdict::Incorrect);
    assert_eq!(s.phase(), Phase::Resolved);
    let p = s.progression().unwrap();
    assert_eq!(p.wrong_streak, 1);
    assert_eq!(p.reward_score, 0, "penalty clamps at 0");
}

#[test]
fn input_mode_starts_as_multiple_choice() {
    let mut s = SessionController::seeded(12);
    assert_eq!(s.input_mode(), InputMode::MultipleChoice);
    s.select_tier(DifficultyTier::Easy);
    assert_eq!(s.input_mode(), InputMode::MultipleChoice);
}

// ── speech ───────────────────────────────────────────────────────────────────

#[test]
fn presenting_a_problem_speaks_its_text() {
    let speech = RecordingSpeech::default();
    let mut s = SessionController::seeded_with_speech(13, speech.clone());
    s.select_tier(DifficultyTier::Easy);

    let q = s.problem().unwrap();
    let lines = speech.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], format!("{} times {}", q.operand1, q.operand2));
}

#[test]
fn locale_switch_changes_the_spoken_template() {
    let speech = RecordingSpeech::default();
    let mut s = SessionController::seeded_with_speech(14, speech.clone());
    s.select_language(Locale::Russian);
    s.select_tier(DifficultyTier::Easy);

    let q = s.problem().unwrap();
    assert_eq!(
        speech.lines()[0],
        format!("{} умножить на {}", q.operand1, q.operand2)
    );
}

#[test]
fn compliments_are_spoken_only_on_correct_answers() {
    let speech = RecordingSpeech::default();
    let mut s = SessionController::seeded_with_speech(15, speech.clone());
    s.select_tier(DifficultyTier::Easy);

    answer_wrongly(&mut s);
    assert_eq!(speech.lines().len(), 1, "a wrong answer must not be complimented");

    let outcome = s.submit_answer(Submission::Value(1)).map(|_| ());
    assert!(outcome.is_none(), "turn already resolved");

    // Next turn, answered correctly.
    let mut s = SessionController::seeded_with_speech(16, speech.clone());
    s.reset();
    s.select_tier(DifficultyTier::Easy);
    answer_correctly(&mut s);
    let last = speech.lines().pop().unwrap();
    assert!(
        COMPLIMENTS.contains(&last.as_str()),
        "expected a compliment, got {last:?}"
    );
}

// ── view adapter ─────────────────────────────────────────────────────────────

#[test]
fn view_state_maps_phase_reward_and_options() {
    let mut s = SessionController::seeded(17);
    let v = to_view_state(&s);
    assert_eq!(v["phase"], "selecting_difficulty");
    assert_eq!(v["question"], serde_json::Value::Null);
    assert_eq!(v["reward"]["score"], 0);
    assert_eq!(v["reward"]["goal"], 1000);

    s.select_tier(DifficultyTier::Moderate);
    let v = to_view_state(&s);
    assert_eq!(v["phase"], "playing");
    assert_eq!(v["tier"], "Moderate");
    assert_eq!(v["input_mode"], "multiple_choice");
    assert_eq!(v["question"]["options"].as_array().unwrap().len(), 4);
    assert!(
        v["question"].get("answer").is_none(),
        "answer leaked to the client mid-turn"
    );
}

#[test]
fn view_state_reveals_the_answer_once_resolved() {
    let mut s = SessionController::seeded(18);
    s.select_tier(DifficultyTier::Easy);
    let answer = s.problem().unwrap().answer;

    answer_wrongly(&mut s);
    let v = to_view_state(&s);
    assert_eq!(v["phase"], "resolved");
    assert_eq!(v["question"]["answer"], answer);
}
