//! # math_drill_gen
//!
//! An adaptive multiplication-quiz engine.
//!
//! The engine generates multiplication problems, tunes their difficulty in
//! response to player performance, scores answers, and drives a reward meter
//! that ends the session at a fixed goal of 1000. Rendering, localization
//! beyond the spoken question templates, and actual speech synthesis stay
//! outside the crate behind small seams.
//!
//! ## How it works
//!
//! 1. Create a [`SessionController`] (optionally seeded, optionally with a
//!    [`SpeechService`]) and feed it the player's tier choice via
//!    [`SessionController::select_tier`].
//! 2. Render the current [`Problem`] and [`ProgressionState`]; the input
//!    widget follows [`SessionController::input_mode`] — option buttons
//!    below a reward score of 900, typed input from there on.
//! 3. Pass the player's answer to [`SessionController::submit_answer`].
//!    Correct answers add 5 to the reward; wrong ones cost 2–8 depending on
//!    how high the meter already is, and three misses in a row lower the
//!    dynamic difficulty.
//! 4. Show the returned verdict for [`FEEDBACK_DELAY`], then redeem the
//!    outcome's advance token with [`SessionController::advance_turn`] to
//!    get the next problem. At a reward score of 1000 the session is won.
//!
//! ## Key features
//!
//! - **Deterministic**: seed the controller (or call [`generate_problem`]
//!   with your own `StdRng`) to reproduce an exact session — useful for
//!   tests and replays.
//! - **Adaptive**: operand ranges follow the chosen tier, correct streaks,
//!   the dynamic difficulty level, and a high-reward override that serves
//!   hard table rows once the meter passes 800.
//! - **Duplicate-safe**: consecutive problems never repeat an operand pair,
//!   and the 4 displayed options are always distinct.
//!
//! ## Quick start
//!
//! ```rust
//! use math_drill_gen::{DifficultyTier, Phase, SessionController, Submission};
//!
//! let mut session = SessionController::seeded(42);
//! session.select_tier(DifficultyTier::Moderate);
//!
//! let problem = session.problem().unwrap().clone();
//! println!("Q: {problem} = ?  options: {:?}", problem.options);
//!
//! let outcome = session
//!     .submit_answer(Submission::Value(problem.answer as i64))
//!     .unwrap();
//! assert!(outcome.verdict.is_correct());
//!
//! // Host shows feedback for FEEDBACK_DELAY, then:
//! if let Some(token) = outcome.advance {
//!     session.advance_turn(token);
//!     assert_eq!(session.phase(), Phase::AwaitingAnswer);
//! }
//! ```

pub mod quiz_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `math_drill_gen::SessionController`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    generate_problem, problem_text, AdvanceToken, DifficultyTier, InputMode, Locale,
    NullSpeech, Phase, Problem, ProgressionState, SessionController, SpeechService,
    Submission, TurnOutcome, Verdict, FEEDBACK_DELAY, HIGH_SCORE_OVERRIDE, REWARD_GOAL,
    TYPED_INPUT_THRESHOLD,
};
pub use view_adapter::to_view_state;

#[cfg(test)]
mod tests;
