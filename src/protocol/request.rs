//! Host request parser.
//!
//! The host application talks to the bridge binary with one JSON object per
//! line. This module turns raw lines into `Request` values the main loop can
//! dispatch on, and defines the `Response` objects written back.

use serde::{Deserialize, Serialize};

use crate::board::Player;
use crate::bridge::Outcome;

/// A parsed host-to-bridge request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Request {
    /// Synchronization ping; the bridge replies `{"ok":true}`.
    #[serde(rename = "isready", alias = "is_ready")]
    IsReady,

    /// Set a configuration option by name.
    SetOption {
        name: String,
        #[serde(default)]
        value: Option<String>,
    },

    /// Compute the computer's move. `player` is the symbol the computer plays.
    BestMove {
        board: Vec<Vec<String>>,
        difficulty: u32,
        player: Player,
    },

    /// Ask whether `player` has won, lost, or neither.
    IsWinner {
        board: Vec<Vec<String>>,
        player: Player,
    },

    /// Terminate the bridge process.
    Quit,
}

/// A bridge-to-host response line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Response {
    Board { board: Vec<Vec<String>> },
    Outcome { outcome: Outcome },
    Ok { ok: bool },
    Error { error: String },
}

/// Parses a single line of input into a `Request`.
///
/// Returns `None` for empty lines. Lines that are not valid requests also
/// return `None` after logging to stderr.
pub fn parse_request(line: &str) -> Option<Request> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Request>(trimmed) {
        Ok(req) => Some(req),
        Err(e) => {
            eprintln!("malformed request: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_line() {
        assert_eq!(parse_request(""), None);
        assert_eq!(parse_request("   "), None);
    }

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_request(r#"{"cmd":"isready"}"#), Some(Request::IsReady));
        assert_eq!(parse_request(r#"{"cmd":"is_ready"}"#), Some(Request::IsReady));
        assert_eq!(parse_request(r#" {"cmd":"quit"} "#), Some(Request::Quit));
    }

    #[test]
    fn parse_best_move() {
        let line = r#"{"cmd":"best_move","board":[["X","X",""],["O","O",""],["","",""]],"difficulty":3,"player":"X"}"#;
        match parse_request(line) {
            Some(Request::BestMove {
                board,
                difficulty,
                player,
            }) => {
                assert_eq!(board.len(), 3);
                assert_eq!(board[0], vec!["X", "X", ""]);
                assert_eq!(difficulty, 3);
                assert_eq!(player, Player::X);
            }
            other => panic!("expected BestMove, got {:?}", other),
        }
    }

    #[test]
    fn parse_is_winner_lowercase_player() {
        let line = r#"{"cmd":"is_winner","board":[["o"]],"player":"o"}"#;
        assert_eq!(
            parse_request(line),
            Some(Request::IsWinner {
                board: vec![vec!["o".to_string()]],
                player: Player::O,
            })
        );
    }

    #[test]
    fn parse_set_option_without_value() {
        assert_eq!(
            parse_request(r#"{"cmd":"set_option","name":"Verbose"}"#),
            Some(Request::SetOption {
                name: "Verbose".to_string(),
                value: None,
            })
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(parse_request("best_move"), None);
        assert_eq!(parse_request(r#"{"cmd":"fly"}"#), None);
        assert_eq!(parse_request(r#"{"cmd":"best_move","board":[]}"#), None);
        assert_eq!(
            parse_request(r#"{"cmd":"is_winner","board":[[""]],"player":"Z"}"#),
            None
        );
    }

    #[test]
    fn responses_serialize_flat() {
        let r = Response::Outcome {
            outcome: Outcome::Won,
        };
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"outcome":"won"}"#);
        let r = Response::Error {
            error: "no legal move available".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&r).unwrap(),
            r#"{"error":"no legal move available"}"#
        );
        let r = Response::Board {
            board: vec![vec!["X".to_string(), String::new()]],
        };
        assert_eq!(serde_json::to_string(&r).unwrap(), r#"{"board":[["X",""]]}"#);
    }
}
