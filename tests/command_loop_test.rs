//! Tests for the interactive command loop over a scripted console.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;
use tictactoe::{CommandLoop, Flow, IoConsole};
use tictactoe_engine::{COORDINATES_PROMPT, OCCUPIED_MESSAGE, ScriptedConsole, SessionRng};

type Shared = Rc<RefCell<ScriptedConsole>>;

fn session(lines: &[&str], seed: u64) -> (Shared, CommandLoop<Shared>) {
    let console = Rc::new(RefCell::new(ScriptedConsole::new(lines.iter().copied())));
    let session = CommandLoop::new(console.clone(), SessionRng::new(seed), true);
    (console, session)
}

fn output(console: &Shared) -> Vec<String> {
    console.borrow().output().to_vec()
}

#[test]
fn test_invalid_command_is_reported() {
    let (console, mut session) = session(&["foo", "exit"], 0);
    session.run().unwrap();
    assert_eq!(output(&console), ["Invalid command"]);
    assert_eq!(session.matches_played(), 0);
}

#[test]
fn test_unknown_kind_is_bad_parameters() {
    let (console, mut session) = session(&["start easy bad", "exit"], 0);
    session.run().unwrap();
    assert_eq!(output(&console), ["Bad parameters"]);
    assert_eq!(session.matches_played(), 0);
}

#[test]
fn test_exit_stops_reading() {
    let (console, mut session) = session(&["exit", "start easy easy"], 0);
    session.run().unwrap();
    assert!(output(&console).is_empty());
    assert_eq!(console.borrow().remaining(), 1);
}

#[test]
fn test_end_of_input_ends_session() {
    let (_console, mut session) = session(&[], 0);
    session.run().unwrap();
    assert_eq!(session.matches_played(), 0);
}

#[test]
fn test_bot_match_prints_boards_and_result() {
    let (console, mut session) = session(&["start easy easy", "exit"], 11);
    session.run().unwrap();
    assert_eq!(session.matches_played(), 1);

    let lines = output(&console);
    assert_eq!(lines[0], "---------\n|       |\n|       |\n|       |\n---------");
    assert_eq!(lines[1], "Making move level \"easy\"");
    let result = lines.last().unwrap();
    assert!(
        ["X wins", "O wins", "Draw"].contains(&result.as_str()),
        "unexpected result line {result:?}"
    );
}

#[test]
fn test_same_seed_replays_same_session() {
    let script = ["start easy medium", "start medium easy", "exit"];
    let (first, mut a) = session(&script, 5);
    let (second, mut b) = session(&script, 5);
    a.run().unwrap();
    b.run().unwrap();
    assert_eq!(output(&first), output(&second));
}

#[test]
fn test_user_never_beats_hard() {
    // Offer every cell in turn; occupied ones are refused and asked again.
    let mut script = Vec::new();
    for _ in 0..5 {
        script.extend(["1 3", "2 3", "3 3", "1 2", "2 2", "3 2", "1 1", "2 1", "3 1"]);
    }
    let (console, mut session) = session(&script, 0);

    assert_eq!(session.execute("start user hard").unwrap(), Flow::Continue);
    assert_eq!(session.matches_played(), 1);

    let lines = output(&console);
    assert!(lines.contains(&OCCUPIED_MESSAGE.to_string()));
    let result = lines.last().unwrap();
    assert!(result == "O wins" || result == "Draw", "{result:?}");
    assert!(console.borrow().prompts().iter().any(|p| p == COORDINATES_PROMPT));
}

#[test]
fn test_input_closing_mid_match_exits() {
    let (console, mut session) = session(&["start user easy"], 0);
    session.run().unwrap();
    assert_eq!(session.matches_played(), 0);
    assert_eq!(console.borrow().prompts(), ["", COORDINATES_PROMPT]);
}

type ByteConsole = Rc<RefCell<IoConsole<Cursor<Vec<u8>>, Vec<u8>>>>;

fn byte_session(input: &[u8]) -> (ByteConsole, CommandLoop<ByteConsole>) {
    let console = Rc::new(RefCell::new(IoConsole::new(Cursor::new(input.to_vec()), Vec::new())));
    let session = CommandLoop::new(console.clone(), SessionRng::new(1), true);
    (console, session)
}

fn written(console: &ByteConsole) -> String {
    String::from_utf8(console.borrow().writer().clone()).unwrap()
}

#[test]
fn test_non_utf8_command_is_invalid_not_fatal() {
    let (console, mut session) = byte_session(b"\xff\xfe\nexit\n");
    session.run().unwrap();
    assert_eq!(written(&console), "Invalid command\n");
}

#[test]
fn test_non_utf8_coordinates_are_retried() {
    let mut input = b"start user easy\n\xff 1\n".to_vec();
    for _ in 0..5 {
        input.extend_from_slice(b"2 2\n1 3\n2 3\n3 3\n1 2\n3 2\n1 1\n2 1\n3 1\n");
    }
    let (console, mut session) = byte_session(&input);

    session.run().unwrap();
    assert_eq!(session.matches_played(), 1);
    let text = written(&console);
    assert!(text.contains("Enter the coordinates: You should enter numbers!\n"), "{text}");
    assert!(
        ["X wins\n", "O wins\n", "Draw\n"].iter().any(|result| text.contains(result)),
        "{text}"
    );
}
