//! Session orchestration — the turn-lifecycle state machine.
//!
//! One controller owns one session: it asks the progression state for the
//! current parameters, has the generator produce a problem, hands the
//! problem to the presentation layer, scores the single submission it
//! accepts per turn, and checks the win condition. Turns are strictly
//! sequential; the only decoupled activity is the speech dispatch, which is
//! fire-and-forget through [`SpeechService`].
//!
//! ## The feedback delay
//!
//! After a turn resolves, the UI shows correctness feedback for
//! [`FEEDBACK_DELAY`] before the next problem appears. The engine does not
//! own a timer: `submit_answer` returns an [`AdvanceToken`] and the host
//! calls [`SessionController::advance_turn`] with it once the delay has
//! elapsed. The token pins the session epoch and turn number, so a timer
//! that fires after a reset presents nothing — the stale token no longer
//! matches and is discarded.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    generator,
    models::{
        DifficultyTier, InputMode, Locale, Phase, Problem, ProgressionState, Submission,
        Verdict,
    },
    speech::{self, NullSpeech, SpeechService},
};

/// How long correctness feedback stays on screen before the next problem.
pub const FEEDBACK_DELAY: Duration = Duration::from_millis(1250);

/// Proof that a specific turn of a specific session resolved.
///
/// Returned by [`SessionController::submit_answer`]; redeemed by
/// [`SessionController::advance_turn`] after the feedback delay. A reset
/// invalidates all outstanding tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvanceToken {
    epoch: u64,
    turn: u64,
}

/// Result of scoring one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    pub verdict: Verdict,
    /// The true answer, so the UI can display it when a typed answer missed.
    pub correct_answer: u32,
    /// The session reached the reward goal on this turn.
    pub won: bool,
    /// `None` exactly when `won` — a won session presents no further
    /// problems. Otherwise, redeem after [`FEEDBACK_DELAY`].
    pub advance: Option<AdvanceToken>,
}

/// The quiz session state machine.
pub struct SessionController<S: SpeechService = NullSpeech> {
    rng: StdRng,
    speech: S,
    locale: Locale,
    phase: Phase,
    tier: Option<DifficultyTier>,
    progression: Option<ProgressionState>,
    problem: Option<Problem>,
    last_operands: Option<(u32, u32)>,
    /// Bumped on every reset; outstanding [`AdvanceToken`]s from the old
    /// session stop matching.
    epoch: u64,
    /// Turn counter within the current epoch.
    turn: u64,
}

impl SessionController<NullSpeech> {
    /// Silent session with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self::with_speech(NullSpeech)
    }

    /// Silent session with a fixed seed — fully deterministic.
    pub fn seeded(seed: u64) -> Self {
        Self::seeded_with_speech(seed, NullSpeech)
    }
}

impl Default for SessionController<NullSpeech> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SpeechService> SessionController<S> {
    pub fn with_speech(speech: S) -> Self {
        Self::build(StdRng::from_entropy(), speech)
    }

    pub fn seeded_with_speech(seed: u64, speech: S) -> Self {
        Self::build(StdRng::seed_from_u64(seed), speech)
    }

    fn build(rng: StdRng, speech: S) -> Self {
        SessionController {
            rng,
            speech,
            locale: Locale::English,
            phase: Phase::SelectingTier,
            tier: None,
            progression: None,
            problem: None,
            last_operands: None,
            epoch: 0,
            turn: 0,
        }
    }

    // -- events from the presentation layer --------------------------------

    /// Switch the speech locale. Allowed at any time; affects only the text
    /// handed to the speech service from here on.
    pub fn select_language(&mut self, locale: Locale) {
        self.locale = locale;
    }

    /// Start the session: initialize progression for `tier` and present the
    /// first problem. Ignored outside `SelectingTier`.
    pub fn select_tier(&mut self, tier: DifficultyTier) {
        if self.phase != Phase::SelectingTier {
            return;
        }
        self.tier = Some(tier);
        self.progression = Some(ProgressionState::new(tier));
        self.present_next();
    }

    /// Score the player's answer for the current problem.
    ///
    /// Returns `None` when there is nothing to score — before the first
    /// problem, after the session is won, or when this turn already
    /// resolved (a second submission is a no-op, not an error).
    pub fn submit_answer(&mut self, submission: Submission) -> Option<TurnOutcome> {
        if self.phase != Phase::AwaitingAnswer {
            return None;
        }
        let answer = self.problem.as_ref()?.answer;
        let progression = self.progression.as_mut()?;

        let verdict = progression.score(submission, answer);
        let won = progression.has_won();
        self.phase = if won { Phase::Won } else { Phase::Resolved };

        if verdict.is_correct() {
            let line = speech::compliment(&mut self.rng);
            self.speech.speak(line);
        }

        Some(TurnOutcome {
            verdict,
            correct_answer: answer,
            won,
            advance: (!won).then_some(AdvanceToken {
                epoch: self.epoch,
                turn: self.turn,
            }),
        })
    }

    /// Move from feedback to the next problem. The host calls this after
    /// [`FEEDBACK_DELAY`]; a token minted before a reset no longer matches
    /// and is dropped. Returns whether a new problem was presented.
    pub fn advance_turn(&mut self, token: AdvanceToken) -> bool {
        if self.phase != Phase::Resolved
            || token.epoch != self.epoch
            || token.turn != self.turn
        {
            return false;
        }
        self.present_next();
        true
    }

    /// Tear the session down to tier selection. Reward returns to 0, the
    /// tier is cleared, and any outstanding advance token goes stale.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.turn = 0;
        self.phase = Phase::SelectingTier;
        self.tier = None;
        self.progression = None;
        self.problem = None;
        self.last_operands = None;
    }

    // -- snapshot for the presentation layer --------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tier(&self) -> Option<DifficultyTier> {
        self.tier
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// The problem currently on screen, if any.
    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    pub fn progression(&self) -> Option<&ProgressionState> {
        self.progression.as_ref()
    }

    /// Which input widget to render. Multiple choice before a session
    /// starts.
    pub fn input_mode(&self) -> InputMode {
        self.progression
            .map(|p| p.input_mode())
            .unwrap_or(InputMode::MultipleChoice)
    }

    // -- internals -----------------------------------------------------------

    fn present_next(&mut self) {
        let (tier, progression) = match (self.tier, self.progression) {
            (Some(t), Some(p)) => (t, p),
            _ => return,
        };
        self.phase = Phase::Presenting;

        let problem = generator::generate_problem(&mut self.rng, tier, &progression, self.last_operands);
        self.last_operands = Some(problem.operands());
        self.turn += 1;

        let text = speech::problem_text(problem.operand1, problem.operand2, self.locale);
        self.speech.speak(&text);

        self.problem = Some(problem);
        self.phase = Phase::AwaitingAnswer;
    }
}
