//! Player symbols and their host/engine spellings.

use serde::{Deserialize, Serialize};

/// One of the two players. A board cell is `Option<Player>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    #[serde(alias = "x")]
    X,
    #[serde(alias = "o")]
    O,
}

/// Both players in a fixed order.
pub const ALL_PLAYERS: [Player; 2] = [Player::X, Player::O];

impl Player {
    /// Returns the opponent.
    pub const fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the symbol the host application uses ("X" or "O").
    pub const fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }

    /// Returns the atom the logic engine uses ("x" or "o").
    pub const fn token(self) -> &'static str {
        match self {
            Player::X => "x",
            Player::O => "o",
        }
    }

    /// Parses a host symbol or engine token, ignoring case.
    pub fn from_symbol(s: &str) -> Option<Player> {
        match s {
            "X" | "x" => Some(Player::X),
            "O" | "o" => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
