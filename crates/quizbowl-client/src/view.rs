//! Plain-text rendering of a [`GameState`], one screen per phase.

use std::fmt::Write;

use quizbowl_protocol::{AnswerLetter, Round};

use crate::{GameState, Phase, config::ACCEPTED_JOIN_CODE};

const RULE: &str = "----------------------------------------";

/// Formats seconds as the countdown clock, `00:SS`.
pub fn format_time(seconds: u32) -> String {
    format!("00:{seconds:02}")
}

/// Renders the screen for `state`.
pub fn render(state: &GameState) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "QUIZ BOWL");
    let _ = writeln!(out, "{RULE}");

    match state.phase {
        Phase::Welcome => render_welcome(&mut out, state),
        Phase::Lobby => render_lobby(&mut out, state),
        Phase::Intro => render_intro(&mut out, state),
        Phase::Question => render_question(&mut out, state),
        Phase::Reveal => render_reveal(&mut out, state),
        Phase::Complete => render_complete(&mut out, state),
    }
    out
}

fn render_welcome(out: &mut String, state: &GameState) {
    let _ = writeln!(out, "WELCOME");
    let _ = writeln!(out, "ENTER NAME: {}", state.team_name);
    let _ = writeln!(out, "ENTER CODE: {}", state.code_input);
    if let Some(helper) = &state.helper_message {
        let _ = writeln!(out, "{helper}");
    }
}

fn render_lobby(out: &mut String, state: &GameState) {
    let status = if state.ready { "READY" } else { "UNREADY" };
    let _ = writeln!(out, "WAITING FOR HOST TO START...");
    let _ = writeln!(out, "PARTICIPANTS");
    let _ = writeln!(out, "{:<24}{}", "TEAM", "STATUS");
    let _ = writeln!(out, "{:<24}{}", display_team(state), status);
    let _ = writeln!(out, "[{status}]");
}

fn render_intro(out: &mut String, state: &GameState) {
    let Some(round) = &state.round else {
        let _ = writeln!(out, "Loading round...");
        return;
    };
    let label = round_label(round);
    let plural = if round.points == 1 { "POINT" } else { "POINTS" };
    let _ = writeln!(out, "DIFFICULTY {label}");
    let _ = writeln!(out, "{label} ROUND");
    // Before the first question this is the limit the countdown starts from.
    let _ = writeln!(
        out,
        "{} QUESTIONS, {} {plural} EACH. YOU WILL BE GIVEN {} SECONDS TO ANSWER",
        round.len(),
        round.points,
        state.time_remaining,
    );
}

fn render_question(out: &mut String, state: &GameState) {
    let room = state.joined_room.as_deref().unwrap_or(ACCEPTED_JOIN_CODE);
    let _ = writeln!(out, "ROOM {room}");
    let _ = writeln!(out, "TIME REMAINING {}", format_time(state.time_remaining));
    let _ = writeln!(out, "QUESTION");

    let Some(question) = state.current_question() else {
        let _ = writeln!(out, "Loading question...");
        return;
    };

    let _ = writeln!(out, "{}", question.prompt);
    let _ = writeln!(out, "SELECT ANSWER");
    for (letter, option) in AnswerLetter::ALL.iter().zip(&question.options) {
        let marker = if state.selected == Some(*letter) { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {letter}. {option}");
    }

    if let Some(round) = &state.round {
        let _ = writeln!(
            out,
            "[MODE] MULTIPLAYER  [LEVEL] {}  [QUESTION] {:02}/{:02}",
            round_label(round),
            state.question_index + 1,
            round.len(),
        );
    }
}

fn render_reveal(out: &mut String, state: &GameState) {
    let _ = writeln!(out, "CORRECT ANSWER");
    if let Some(question) = state.current_question() {
        let text = question.correct_option().unwrap_or_default();
        let _ = writeln!(out, "{}. {text}", question.answer);
    }
}

fn render_complete(out: &mut String, state: &GameState) {
    let label = state.round.as_ref().map(round_label).unwrap_or_default();
    let _ = writeln!(out, "{label} ROUND COMPLETE");
    let _ = writeln!(out, "WAITING FOR THE NEXT ROUND...");
}

fn display_team(state: &GameState) -> &str {
    match state.team_name.trim() {
        "" => "YOUR TEAM",
        name => name,
    }
}

fn round_label(round: &Round) -> String {
    round.id.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Event, Machine, fallback_round};
    use quizbowl_timer::TimerKind;

    fn play(events: Vec<Event>) -> GameState {
        let m = Machine::default();
        events
            .into_iter()
            .fold(m.initial_state(), |state, event| m.transition(state, event).0)
    }

    fn joined() -> Vec<Event> {
        vec![
            Event::RoundLoaded(fallback_round()),
            Event::TeamNameChanged("  Night Owls ".into()),
            Event::SubmitCode("qz-7hk".into()),
        ]
    }

    #[test]
    fn test_format_time_pads_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(15), "00:15");
    }

    #[test]
    fn test_render_welcome_shows_helper_message() {
        let state = play(vec![Event::SubmitCode("nope".into())]);
        let screen = render(&state);
        assert!(screen.contains("WELCOME"));
        assert!(screen.contains("Invalid code. Please use QZ-7HK."));
    }

    #[test]
    fn test_render_lobby_shows_trimmed_team_and_status() {
        let screen = render(&play(joined()));
        assert!(screen.contains("WAITING FOR HOST TO START..."));
        assert!(screen.contains("PARTICIPANTS"));
        assert!(screen.contains("Night Owls"));
        assert!(screen.contains("UNREADY"));
    }

    #[test]
    fn test_render_lobby_without_name_shows_placeholder() {
        let state = play(vec![Event::SubmitCode("QZ-7HK".into())]);
        assert!(render(&state).contains("YOUR TEAM"));
    }

    #[test]
    fn test_render_intro_describes_round() {
        let mut events = joined();
        events.push(Event::ToggleReady);
        let screen = render(&play(events));
        assert!(screen.contains("DIFFICULTY EASY"));
        assert!(screen.contains(
            "2 QUESTIONS, 1 POINT EACH. YOU WILL BE GIVEN 15 SECONDS TO ANSWER"
        ));
    }

    #[test]
    fn test_render_intro_zero_limit_shows_default_countdown() {
        let mut round = fallback_round();
        round.time_limit_seconds = 0;
        let screen = render(&play(vec![
            Event::RoundLoaded(round),
            Event::SubmitCode("QZ-7HK".into()),
            Event::ToggleReady,
        ]));
        assert!(screen.contains("YOU WILL BE GIVEN 15 SECONDS TO ANSWER"));
    }

    #[test]
    fn test_render_question_marks_selection_and_footer() {
        let mut events = joined();
        events.extend([
            Event::ToggleReady,
            Event::TimerFired(TimerKind::Intro),
            Event::TimerFired(TimerKind::Tick),
            Event::SelectOption(0),
        ]);
        let screen = render(&play(events));

        assert!(screen.contains("ROOM QZ-7HK"));
        assert!(screen.contains("TIME REMAINING 00:14"));
        assert!(screen.contains("What does CPU stand for?"));
        assert!(screen.contains("> A. Central Processing Unit"));
        assert!(screen.contains("  B. Computer Personal Unit"));
        assert!(screen.contains("[QUESTION] 01/02"));
    }

    #[test]
    fn test_render_question_without_round_shows_loading() {
        let state = play(vec![
            Event::SubmitCode("QZ-7HK".into()),
            Event::ToggleReady,
            Event::TimerFired(TimerKind::Intro),
        ]);
        let screen = render(&state);
        assert!(screen.contains("Loading question..."));
        assert!(screen.contains("TIME REMAINING 00:15"));
    }

    #[test]
    fn test_render_reveal_shows_correct_option() {
        let mut state = play(joined());
        state.phase = Phase::Reveal;
        state.question_index = 1;
        state.revealed = true;
        let screen = render(&state);
        assert!(screen.contains("CORRECT ANSWER"));
        assert!(screen.contains("C. Keyboard"));
    }

    #[test]
    fn test_render_complete_names_round() {
        let mut state = play(joined());
        state.phase = Phase::Complete;
        let screen = render(&state);
        assert!(screen.contains("EASY ROUND COMPLETE"));
        assert!(screen.contains("WAITING FOR THE NEXT ROUND..."));
    }
}
