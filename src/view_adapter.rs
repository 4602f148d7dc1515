//! Maps a session snapshot to the JSON view-model a web client renders.
//!
//! The client never computes game logic from this payload: the answer is
//! withheld while a turn is open and only revealed once the turn has
//! resolved, so the UI can show "Correct answer: 42" after a typed miss.

use serde_json::{json, Value};

use crate::quiz_engine::{
    models::{InputMode, Phase, Problem},
    progression::REWARD_GOAL,
    session::SessionController,
    speech::SpeechService,
};

/// Phase tag in the client's naming convention.
fn phase_str(phase: Phase) -> &'static str {
    match phase {
        Phase::SelectingTier  => "selecting_difficulty",
        Phase::Presenting     => "presenting",
        Phase::AwaitingAnswer => "playing",
        Phase::Resolved       => "resolved",
        Phase::Won            => "won",
    }
}

fn input_mode_str(mode: InputMode) -> &'static str {
    match mode {
        InputMode::MultipleChoice => "multiple_choice",
        InputMode::Typed          => "typed",
    }
}

/// Build the option button entries. Omitted entirely in typed mode — the
/// client renders a numeric input instead.
fn option_slots(problem: &Problem) -> Value {
    let slots: Vec<Value> = problem
        .options
        .iter()
        .enumerate()
        .map(|(id, value)| json!({ "id": id, "value": value }))
        .collect();
    Value::Array(slots)
}

/// Build the question block. `revealed` controls whether the answer ships
/// to the client.
fn question_block(problem: &Problem, mode: InputMode, revealed: bool) -> Value {
    let mut q = json!({
        "text": problem.to_string(),
        "operand1": problem.operand1,
        "operand2": problem.operand2,
    });
    if mode == InputMode::MultipleChoice {
        q["options"] = option_slots(problem);
    }
    if revealed {
        q["answer"] = json!(problem.answer);
    }
    q
}

/// Map a [`SessionController`] snapshot to the client view-model.
pub fn to_view_state<S: SpeechService>(session: &SessionController<S>) -> Value {
    let phase = session.phase();
    let mode = session.input_mode();
    let revealed = matches!(phase, Phase::Resolved | Phase::Won);

    let question = session
        .problem()
        .map(|p| question_block(p, mode, revealed))
        .unwrap_or(Value::Null);

    let progression = session
        .progression()
        .map(|p| {
            json!({
                "correct_streak": p.correct_streak,
                "wrong_streak": p.wrong_streak,
                "correct_count": p.correct_count,
                "difficulty_level": p.difficulty_level,
            })
        })
        .unwrap_or(Value::Null);

    json!({
        "view": "QuizSession",
        "phase": phase_str(phase),
        "locale": session.locale().to_string(),
        "tier": session.tier().map(|t| t.to_string()),
        "reward": {
            "score": session.progression().map(|p| p.reward_score).unwrap_or(0),
            "goal": REWARD_GOAL,
        },
        "input_mode": input_mode_str(mode),
        "question": question,
        "progression": progression,
    })
}
