//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A player's mark.
///
/// X is always the human and moves first; O is always the computer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// The human player (goes first).
    X,
    /// The computer player.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are `Copy`; the search explores hypothetical moves on copies and
/// never touches the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at `index` exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, sq)| **sq == Square::Empty)
            .map(|(i, _)| i)
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// The mark whose turn it is, judged by piece counts (X moves first).
    pub fn mark_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// The caller guarantees `index` is an empty cell.
    pub fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        debug_assert!(self.is_empty(index), "cell {index} is not empty");
        self.squares[index] = Square::Occupied(mark);
        self
    }

    /// Places `mark` at `index` in place. Validation is the caller's job.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        self.squares[index] = Square::Occupied(mark);
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based keypad number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Compact one-line form, `_` for empty squares.
    pub fn to_compact(&self) -> String {
        self.squares
            .iter()
            .map(|sq| match sq {
                Square::Empty => '_',
                Square::Occupied(Mark::X) => 'X',
                Square::Occupied(Mark::O) => 'O',
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The input did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character was not a mark or an empty-cell marker.
    #[display("Invalid cell character {:?} at index {}", character, index)]
    InvalidCell {
        /// Offending character.
        character: char,
        /// Cell index of the character.
        index: usize,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells: `X`/`O` (any case) for marks, `_`, `.`, `-` or a
    /// space for empty. `|`, `/` and newlines are ignored as row separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !matches!(c, '|' | '/' | '\n' | '\r'))
            .collect();
        if cells.len() != Self::CELLS {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (index, character) in cells.into_iter().enumerate() {
            board.squares[index] = match character {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '_' | '.' | '-' | ' ' => Square::Empty,
                _ => return Err(BoardParseError::InvalidCell { character, index }),
            };
        }
        Ok(board)
    }
}

/// Outcome-level status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
