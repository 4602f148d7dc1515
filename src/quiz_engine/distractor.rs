//! Plausible wrong answers for a multiplication problem.
//!
//! Distractors are built around the real answer so they look believable:
//! the primary proposal is `answer + offset * multiplier` where the
//! multiplier is one of the problem's own operands, which lands the wrong
//! option on a nearby row of the same times table.

use rand::Rng;

/// Produce 3 distractors, all positive, distinct from each other and from
/// `answer`.
///
/// Proposal order per attempt:
/// 1. `answer + offset * multiplier`, offset uniform in `[-5, 4]`,
///    multiplier uniform in `{op1, op2}`.
/// 2. If that equals the answer or is non-positive:
///    `answer + size * sign * (k + 1)`, k uniform in `[1, 3]`, random sign,
///    where `size` counts the options collected so far (answer included).
/// 3. If still invalid: walk upward from `answer + size + 1` past any value
///    already collected. This last resort is always positive and always
///    fresh, so the collection loop terminates.
///
/// Duplicates from steps 1 and 2 are rejected and the attempt repeats.
pub fn synthesize<R: Rng>(rng: &mut R, answer: u32, op1: u32, op2: u32) -> [u32; 3] {
    let answer = i64::from(answer);
    // Insertion-ordered set; 4 entries at most, so a linear scan is enough.
    let mut collected: Vec<i64> = vec![answer];

    while collected.len() < 4 {
        let offset: i64 = rng.gen_range(-5..=4);
        let multiplier = i64::from(if rng.gen_bool(0.5) { op1 } else { op2 });
        let mut candidate = answer + offset * multiplier;

        if candidate == answer || candidate <= 0 {
            let size = collected.len() as i64;
            let sign: i64 = if rng.gen_bool(0.5) { 1 } else { -1 };
            let k: i64 = rng.gen_range(1..=3);
            candidate = answer + size * sign * (k + 1);

            if candidate <= 0 || candidate == answer {
                candidate = answer + size + 1;
                while collected.contains(&candidate) {
                    candidate += 1;
                }
            }
        }

        if candidate > 0 && !collected.contains(&candidate) {
            collected.push(candidate);
        }
    }

    [
        collected[1] as u32,
        collected[2] as u32,
        collected[3] as u32,
    ]
}
