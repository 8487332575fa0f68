use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::ReplayError;


// Piece placement of the classic starting position. Shown before anything has been decoded.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

// Game as transmitted in a URL. The decoding service is the only one who knows what's inside,
// so no validation happens on our side: even an empty string is forwarded as is.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompressedNotation(String);

// One ply in the form produced by the decoder, e.g. "a2a4" or "c7d8Q".
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(String);

// Board state in FEN.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(String);

macro_rules! impl_string_newtype {
    ($name:ident) => {
        impl $name {
            pub fn new(s: impl Into<String>) -> Self { $name(s.into()) }
            pub fn as_str(&self) -> &str { &self.0 }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self { $name(s.to_owned()) }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self { $name(s) }
        }
    };
}

impl_string_newtype!(CompressedNotation);
impl_string_newtype!(Move);
impl_string_newtype!(Position);

impl Position {
    pub fn starting() -> Self { Position::from(STARTING_POSITION_FEN) }
}


// Decoded game: `positions[0]` is the position before the first move and `positions[i]` is the
// position after `moves[i - 1]`. Thus there is always exactly one more position than moves.
//
// Immutable once built. Decoding another game produces another record.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameRecord {
    moves: Vec<Move>,
    positions: Vec<Position>,
}

impl GameRecord {
    pub fn new(moves: Vec<Move>, positions: Vec<Position>) -> Result<Self, ReplayError> {
        if positions.len() != moves.len() + 1 {
            return Err(ReplayError::MalformedPayload(format!(
                "expected {} positions for {} moves, got {}",
                moves.len() + 1,
                moves.len(),
                positions.len()
            )));
        }
        Ok(GameRecord { moves, positions })
    }

    // What the viewer shows while there is no game yet: the starting position and no moves.
    pub fn placeholder() -> Self {
        GameRecord {
            moves: Vec::new(),
            positions: vec![Position::starting()],
        }
    }

    // Bypasses the length check. Only for exercising the controller's own validation.
    #[cfg(test)]
    pub(crate) fn new_unchecked(moves: Vec<Move>, positions: Vec<Position>) -> Self {
        GameRecord { moves, positions }
    }

    pub fn moves(&self) -> &[Move] { &self.moves }
    pub fn positions(&self) -> &[Position] { &self.positions }
    pub fn num_moves(&self) -> usize { self.moves.len() }
    pub fn num_positions(&self) -> usize { self.positions.len() }

    pub fn position(&self, index: usize) -> Option<&Position> { self.positions.get(index) }

    // The move that produced `positions[index]`. None for the starting position.
    pub fn move_leading_to(&self, index: usize) -> Option<&Move> {
        index.checked_sub(1).and_then(|i| self.moves.get(i))
    }

    // Compact move list for logs, e.g. "a2a4, h7h6, a4a5".
    pub fn moves_string(&self) -> String { self.moves.iter().join(", ") }
}
