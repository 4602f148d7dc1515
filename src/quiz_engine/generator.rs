//! Adaptive problem generation.
//!
//! Operand selection walks a fixed priority ladder: the high-reward override
//! first, then the tier-specific rules, then the dynamic progression rule.
//! The first matching rule wins on every draw, so performance signals
//! (reward score, streaks, difficulty level) steer each individual problem
//! rather than a whole block of them.

use rand::Rng;

use crate::quiz_engine::{
    distractor,
    models::{same_pair, DifficultyTier, Problem, ProgressionState},
};

/// At or above this reward score, operand selection ignores the tier and
/// serves hard table rows regardless of what the player picked.
pub const HIGH_SCORE_OVERRIDE: u32 = 800;

/// Reward score at which the dynamic rule gains a flat level bonus.
const REWARD_BONUS_THRESHOLD: u32 = 500;

/// Number of correct answers the Easy warm-up rule stays active for.
const EASY_WARMUP_CORRECT: u32 = 30;

/// Hard cap on repeat-avoidance redraws. Every tier rule spans well over
/// two distinct pairs, so the cap is practically unreachable; it exists to
/// bound the loop rather than to be hit.
const MAX_REDRAWS: u32 = 64;

const HIGH_FACTORS: [u32; 4] = [6, 7, 8, 9];
const MODERATE_FACTORS: [u32; 4] = [4, 5, 6, 7];

fn pick<R: Rng>(rng: &mut R, pool: &[u32]) -> u32 {
    pool[rng.gen_range(0..pool.len())]
}

/// One evaluation of the full rule ladder.
fn draw_operands<R: Rng>(
    rng: &mut R,
    tier: DifficultyTier,
    progression: &ProgressionState,
) -> (u32, u32) {
    // Priority 1: high-reward override. Supersedes the chosen tier.
    if progression.reward_score >= HIGH_SCORE_OVERRIDE {
        let mut a = pick(rng, &HIGH_FACTORS);
        let mut b = rng.gen_range(6..=12u32);
        if rng.gen_bool(0.5) {
            std::mem::swap(&mut a, &mut b);
        }
        return (a, b);
    }

    // Priority 2: tier rules.
    match tier {
        DifficultyTier::Hard => {
            return (pick(rng, &HIGH_FACTORS), pick(rng, &HIGH_FACTORS));
        }
        DifficultyTier::Moderate => {
            let mut a = pick(rng, &MODERATE_FACTORS);
            let mut b = rng.gen_range(1..=10u32);
            if rng.gen_bool(0.5) {
                std::mem::swap(&mut a, &mut b);
            }
            return (a, b);
        }
        DifficultyTier::Easy if progression.correct_count < EASY_WARMUP_CORRECT => {
            // Warm-up: stay on the 2 and 3 times tables.
            let f1 = if rng.gen_bool(0.5) { 2 } else { 3 };
            let f2 = rng.gen_range(1..=10u32);
            return if rng.gen_bool(0.5) { (f1, f2) } else { (f2, f1) };
        }
        DifficultyTier::Easy => {}
    }

    // Priority 3: dynamic progression. Streaks and reward push the operand
    // ceilings up; the second operand trails the first by two levels.
    let base = tier.base_operand_max();
    let streak_bonus = progression.correct_streak / 3;
    let reward_bonus = if progression.reward_score >= REWARD_BONUS_THRESHOLD { 2 } else { 0 };
    let level = progression.difficulty_level + streak_bonus + reward_bonus;

    let a = rng.gen_range(1..=base + level);
    let mut b = rng.gen_range(1..=base + level.saturating_sub(2));
    if a == 1 && b == 1 {
        // 1 x 1 teaches nothing; redraw the second operand.
        b = rng.gen_range(2..=10u32);
    }
    (a, b)
}

/// Generate the next [`Problem`].
///
/// `last` is the previous turn's operand pair; a freshly drawn pair that
/// matches it in either order is rejected and the whole rule ladder is
/// re-evaluated, up to a hard cap of 64 redraws.
pub fn generate_problem<R: Rng>(
    rng: &mut R,
    tier: DifficultyTier,
    progression: &ProgressionState,
    last: Option<(u32, u32)>,
) -> Problem {
    let mut pair = draw_operands(rng, tier, progression);
    if let Some(prev) = last {
        let mut redraws = 0;
        while same_pair(pair, prev) && redraws < MAX_REDRAWS {
            pair = draw_operands(rng, tier, progression);
            redraws += 1;
        }
    }

    let (operand1, operand2) = pair;
    let answer = operand1 * operand2;
    let wrong = distractor::synthesize(rng, answer, operand1, operand2);

    let mut options = [answer, wrong[0], wrong[1], wrong[2]];
    // Fisher-Yates shuffle
    for i in (1..options.len()).rev() {
        let j = rng.gen_range(0..=i);
        options.swap(i, j);
    }

    Problem { operand1, operand2, answer, options }
}
