use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Difficulty & locale
// ---------------------------------------------------------------------------

/// Difficulty tier chosen by the player at session start.
///
/// The tier is fixed for the whole session; the *effective* difficulty still
/// moves around it via [`ProgressionState::difficulty_level`] and the
/// high-score override in the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    Moderate,
    Hard,
}

impl DifficultyTier {
    /// Starting value of `difficulty_level` for this tier.
    pub fn initial_level(self) -> u32 {
        match self {
            DifficultyTier::Easy     => 0,
            DifficultyTier::Moderate => 2,
            DifficultyTier::Hard     => 5,
        }
    }

    /// Base operand ceiling used by the default progression rule.
    pub fn base_operand_max(self) -> u32 {
        match self {
            DifficultyTier::Easy     => 4,
            DifficultyTier::Moderate => 7,
            DifficultyTier::Hard     => 10,
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyTier::Easy     => write!(f, "Easy"),
            DifficultyTier::Moderate => write!(f, "Moderate"),
            DifficultyTier::Hard     => write!(f, "Hard"),
        }
    }
}

/// Language used for spoken question text. Game logic is locale-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    English,
    Hebrew,
    Russian,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => write!(f, "English"),
            Locale::Hebrew  => write!(f, "Hebrew"),
            Locale::Russian => write!(f, "Russian"),
        }
    }
}

// ---------------------------------------------------------------------------
// Problem
// ---------------------------------------------------------------------------

/// One multiplication question, immutable once produced.
///
/// `options` always holds exactly 4 distinct positive values, one of which is
/// `answer`. Their order is randomized at generation time and carries no
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub operand1: u32,
    pub operand2: u32,
    pub answer: u32,
    pub options: [u32; 4],
}

impl Problem {
    /// The operand pair, in display order.
    pub fn operands(&self) -> (u32, u32) {
        (self.operand1, self.operand2)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.operand1, self.operand2)
    }
}

/// Order-insensitive operand-pair equality, used for repeat avoidance.
pub fn same_pair(a: (u32, u32), b: (u32, u32)) -> bool {
    a == b || a == (b.1, b.0)
}

// ---------------------------------------------------------------------------
// Progression
// ---------------------------------------------------------------------------

/// Per-session performance state, mutated only by the scoring and
/// tier-selection transitions in `progression.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionState {
    /// Reward meter, clamped to `[0, REWARD_GOAL]`. The session is won the
    /// moment it reaches the goal.
    pub reward_score: u32,
    /// Consecutive correct answers since the last mistake.
    pub correct_streak: u32,
    /// Consecutive incorrect answers since the last correct one.
    pub wrong_streak: u32,
    /// Total correct answers this session.
    pub correct_count: u32,
    /// Dynamic difficulty level, floored at 0.
    pub difficulty_level: u32,
}

/// Outcome of scoring one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

// ---------------------------------------------------------------------------
// Answer submission
// ---------------------------------------------------------------------------

/// A player answer as received from the presentation layer.
///
/// Option taps arrive as `Value`. Typed input goes through
/// [`Submission::from_typed`], which maps anything non-numeric to `Invalid` —
/// an answer that can never match, so it scores as a normal incorrect
/// submission rather than producing a separate error state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Submission {
    Value(i64),
    Invalid,
}

impl Submission {
    /// Parse raw typed input. Whitespace is tolerated; anything that is not
    /// an integer becomes `Invalid`.
    pub fn from_typed(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(v)  => Submission::Value(v),
            Err(_) => Submission::Invalid,
        }
    }

    /// Does this submission equal the correct answer?
    pub fn matches(self, answer: u32) -> bool {
        match self {
            Submission::Value(v) => v == i64::from(answer),
            Submission::Invalid  => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Session phase & input mode
// ---------------------------------------------------------------------------

/// Lifecycle phase of a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the player to pick a difficulty tier.
    SelectingTier,
    /// A problem is being generated and handed to the presentation layer.
    /// Transient: the controller moves on to `AwaitingAnswer` in the same
    /// call, immediately after dispatching the speech request.
    Presenting,
    /// A problem is on screen, waiting for exactly one submission.
    AwaitingAnswer,
    /// The turn is scored; correctness feedback is on screen until the host
    /// advances past the feedback delay.
    Resolved,
    /// Reward goal reached. Terminal until an explicit reset.
    Won,
}

/// How the player enters an answer. Purely presentational, but the switch
/// point is a contract the core exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputMode {
    /// Pick one of the 4 rendered options.
    MultipleChoice,
    /// Type the numeric answer.
    Typed,
}
