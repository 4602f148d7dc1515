//! Speech seam and spoken-text templates.
//!
//! Speech synthesis lives outside the engine. The controller hands plain
//! text to a [`SpeechService`] and moves on; whether the implementation
//! calls a TTS backend, queues audio, or drops the request entirely is
//! invisible to gameplay.

use rand::Rng;

use crate::quiz_engine::models::Locale;

/// Fire-and-forget speech capability.
///
/// Implementations must return promptly — dispatch any real synthesis work
/// to a background task. Failures are swallowed: a missing credential or a
/// dead network must never stall or alter a turn.
pub trait SpeechService {
    fn speak(&self, text: &str);
}

/// Speech sink for hosts without audio. Does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSpeech;

impl SpeechService for NullSpeech {
    fn speak(&self, _text: &str) {}
}

/// Spoken form of a question in the given locale.
pub fn problem_text(op1: u32, op2: u32, locale: Locale) -> String {
    match locale {
        Locale::English => format!("{op1} times {op2}"),
        Locale::Hebrew  => format!("{op1} כפול {op2}"),
        Locale::Russian => format!("{op1} умножить на {op2}"),
    }
}

/// Lines spoken after a correct answer.
pub const COMPLIMENTS: [&str; 5] = [
    "Good!",
    "Excellent!",
    "Great job!",
    "You are doing well!",
    "You are amazing!",
];

/// Pick one compliment at random.
pub fn compliment<R: Rng>(rng: &mut R) -> &'static str {
    COMPLIMENTS[rng.gen_range(0..COMPLIMENTS.len())]
}
