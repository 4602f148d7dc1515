//! Core quiz engine — problem generation, scoring, and session control.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | All shared types: tiers, problems, progression state, phases |
//! | `distractor`  | Plausible wrong options for a given answer |
//! | `generator`   | Adaptive operand selection and problem assembly |
//! | `progression` | Scoring transitions, penalty bands, difficulty decay |
//! | `speech`      | Speech seam, locale templates, compliments |
//! | `session`     | The turn-lifecycle state machine |

pub mod distractor;
pub mod generator;
pub mod models;
pub mod progression;
pub mod session;
pub mod speech;

// Re-export the public API surface so callers can use
// `quiz_engine::generate_problem` without reaching into sub-modules.
pub use generator::{generate_problem, HIGH_SCORE_OVERRIDE};
pub use models::{
    DifficultyTier, InputMode, Locale, Phase, Problem, ProgressionState, Submission, Verdict,
};
pub use progression::{penalty_for, CORRECT_REWARD, REWARD_GOAL, TYPED_INPUT_THRESHOLD};
pub use session::{AdvanceToken, SessionController, TurnOutcome, FEEDBACK_DELAY};
pub use speech::{compliment, problem_text, NullSpeech, SpeechService, COMPLIMENTS};
