//! End-to-end demo of one quiz session.
//!
//! Run with: `cargo run --example demo`
//!
//! A scripted player works through a Moderate session with a fixed seed, so
//! the output is deterministic and reproducible:
//!
//! - every 4th turn is answered wrong (option next to the correct one), the
//!   rest are answered correctly — showing reward gains, banded penalties,
//!   streaks, and the wrong-streak difficulty decay;
//! - the speech seam is wired to stdout, so you can see exactly what a TTS
//!   backend would be asked to say and when;
//! - the feedback delay is skipped: the demo redeems each advance token
//!   immediately instead of sleeping 1250 ms.

use math_drill_gen::{
    DifficultyTier, InputMode, SessionController, SpeechService, Submission,
};

/// Speech sink that prints instead of synthesizing audio.
struct StdoutSpeech;

impl SpeechService for StdoutSpeech {
    fn speak(&self, text: &str) {
        println!("      ♪ speech: \"{text}\"");
    }
}

fn main() {
    let mut session = SessionController::seeded_with_speech(2024, StdoutSpeech);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  math_drill_gen demo — Moderate tier, seed 2024");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    session.select_tier(DifficultyTier::Moderate);

    for turn in 1..=24u32 {
        let problem = session.problem().expect("a problem should be on screen").clone();
        let p = *session.progression().expect("session is running");

        let mode = match session.input_mode() {
            InputMode::MultipleChoice => "options",
            InputMode::Typed          => "typed",
        };
        println!();
        println!(
            "  turn {turn:>2}  reward {:>3}  level {}  streak +{}/-{}  [{mode}]",
            p.reward_score, p.difficulty_level, p.correct_streak, p.wrong_streak
        );
        println!("      Q: {problem} = ?   options: {:?}", problem.options);

        // Every 4th turn the player picks the wrong option.
        let submission = if turn % 4 == 0 {
            let wrong = problem
                .options
                .iter()
                .copied()
                .find(|&o| o != problem.answer)
                .expect("options always contain 3 distractors");
            Submission::Value(i64::from(wrong))
        } else {
            Submission::Value(i64::from(problem.answer))
        };

        let outcome = session.submit_answer(submission).expect("turn is open");
        if outcome.verdict.is_correct() {
            println!("      ✓ correct");
        } else {
            println!("      ✗ wrong — the answer was {}", outcome.correct_answer);
        }

        if outcome.won {
            println!();
            println!("  Session won at reward {}!", math_drill_gen::REWARD_GOAL);
            break;
        }

        // A real host sleeps FEEDBACK_DELAY here before advancing.
        session.advance_turn(outcome.advance.expect("non-winning turn"));
    }

    println!();
    println!("  Final view-model for the UI:");
    let view = math_drill_gen::to_view_state(&session);
    println!("{}", serde_json::to_string_pretty(&view).expect("view state serializes"));
}
