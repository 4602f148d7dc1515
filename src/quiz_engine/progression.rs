//! Scoring transitions and difficulty progression.
//!
//! [`ProgressionState`] is only ever mutated here: [`ProgressionState::new`]
//! at tier selection and [`ProgressionState::score`] once per resolved turn.
//! Keeping the transitions in two functions removes the ordering hazards of
//! the per-field reactive model this replaces — in particular the
//! wrong-streak difficulty decay fires inside the incorrect-answer
//! transition itself, so no caller can observe (or skip) a state where the
//! streak advanced but the decay did not.

use crate::quiz_engine::models::{
    DifficultyTier, InputMode, ProgressionState, Submission, Verdict,
};

/// Reward score that ends the session.
pub const REWARD_GOAL: u32 = 1000;

/// Reward granted per correct answer.
pub const CORRECT_REWARD: u32 = 5;

/// At or above this reward score the player types answers instead of
/// picking from options.
pub const TYPED_INPUT_THRESHOLD: u32 = 900;

/// Every this many consecutive wrong answers, the difficulty level drops
/// one step.
const WRONG_STREAK_DECAY: u32 = 3;

/// Penalty for an incorrect answer, scaled so a near-win stays tense.
pub fn penalty_for(reward_score: u32) -> u32 {
    if reward_score >= 930 {
        8
    } else if reward_score >= 800 {
        5
    } else if reward_score >= 700 {
        4
    } else {
        2
    }
}

impl ProgressionState {
    /// Fresh state for a newly selected tier.
    pub fn new(tier: DifficultyTier) -> Self {
        ProgressionState {
            reward_score: 0,
            correct_streak: 0,
            wrong_streak: 0,
            correct_count: 0,
            difficulty_level: tier.initial_level(),
        }
    }

    /// Score one submission against the correct answer.
    ///
    /// This is the only transition that touches the counters after tier
    /// selection. `reward_score` stays within `[0, REWARD_GOAL]`.
    pub fn score(&mut self, submission: Submission, answer: u32) -> Verdict {
        if submission.matches(answer) {
            self.apply_correct();
            Verdict::Correct
        } else {
            self.apply_incorrect();
            Verdict::Incorrect
        }
    }

    fn apply_correct(&mut self) {
        self.reward_score = (self.reward_score + CORRECT_REWARD).min(REWARD_GOAL);
        self.correct_streak += 1;
        self.correct_count += 1;
        self.wrong_streak = 0;
    }

    fn apply_incorrect(&mut self) {
        self.reward_score = self.reward_score.saturating_sub(penalty_for(self.reward_score));
        self.correct_streak = 0;
        self.wrong_streak += 1;
        self.decay_difficulty_on_wrong_streak();
    }

    /// Reaction to the wrong-streak increment: every time the streak hits a
    /// positive multiple of [`WRONG_STREAK_DECAY`], the difficulty level
    /// drops one step, floored at 0.
    fn decay_difficulty_on_wrong_streak(&mut self) {
        if self.wrong_streak > 0 && self.wrong_streak % WRONG_STREAK_DECAY == 0 {
            self.difficulty_level = self.difficulty_level.saturating_sub(1);
        }
    }

    /// Reached the reward goal?
    pub fn has_won(&self) -> bool {
        self.reward_score >= REWARD_GOAL
    }

    /// Which input widget the presentation layer should render.
    pub fn input_mode(&self) -> InputMode {
        if self.reward_score >= TYPED_INPUT_THRESHOLD {
            InputMode::Typed
        } else {
            InputMode::MultipleChoice
        }
    }
}
