// Test utilities shared by unit tests and the "tests" folder.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;

use crate::decode::DecodingService;
use crate::envelope::{DecodedGamePayload, ServiceEnvelope};
use crate::record::{GameRecord, Move, Position};


// First positions of "a2a4 h7h6 a4a5 b7b5 a5b6 h6h5 b6c7 h5h4 g2g3 h4g3 c7d8Q".
pub const SAMPLE_MOVES: [&str; 3] = ["a2a4", "h7h6", "a4a5"];
pub const SAMPLE_FENS: [&str; 4] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
    "rnbqkbnr/pppppppp/8/8/P7/8/1PPPPPPP/RNBQKBNR",
    "rnbqkbnr/ppppppp1/7p/8/P7/8/1PPPPPPP/RNBQKBNR",
    "rnbqkbnr/ppppppp1/7p/P7/8/8/1PPPPPPP/RNBQKBNR",
];

// Record with `num_moves` synthetic moves and positions "fen-0", "fen-1", ...
pub fn sample_game_record(num_moves: usize) -> GameRecord {
    let moves = (1..=num_moves).map(|i| Move::new(format!("move-{i}"))).collect();
    let positions = (0..=num_moves).map(|i| Position::new(format!("fen-{i}"))).collect();
    GameRecord::new(moves, positions).unwrap()
}

enum DecodeBehavior {
    Respond(String),
    Unreachable(String),
}

// In-memory decoding service with canned responses. Records every request.
pub struct ScriptedDecodingService {
    init_result: Result<(), String>,
    decode: DecodeBehavior,
    fens: HashMap<String, String>,
    init_attempts: Cell<usize>,
    decode_requests: RefCell<Vec<String>>,
}

impl ScriptedDecodingService {
    pub fn with_raw_response(json: impl Into<String>) -> Self {
        ScriptedDecodingService {
            init_result: Ok(()),
            decode: DecodeBehavior::Respond(json.into()),
            fens: HashMap::new(),
            init_attempts: Cell::new(0),
            decode_requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_game(moves: &[&str], fens: &[&str]) -> Self {
        let payload = DecodedGamePayload {
            vec_of_moves: moves.iter().map(|&m| Move::from(m)).collect(),
            vec_of_fen: fens.iter().map(|&f| Position::from(f)).collect(),
        };
        Self::with_raw_response(ServiceEnvelope::ok(payload.to_json()).to_json())
    }

    pub fn with_sample_game() -> Self { Self::with_game(&SAMPLE_MOVES, &SAMPLE_FENS) }

    pub fn rejecting(message: &str) -> Self {
        Self::with_raw_response(ServiceEnvelope::err(message).to_json())
    }

    pub fn unreachable(reason: &str) -> Self {
        ScriptedDecodingService {
            decode: DecodeBehavior::Unreachable(reason.to_owned()),
            ..Self::with_raw_response("")
        }
    }

    pub fn failing_init(mut self, reason: &str) -> Self {
        self.init_result = Err(reason.to_owned());
        self
    }

    pub fn with_fen(mut self, game_config: &str, fen: &str) -> Self {
        self.fens.insert(game_config.to_owned(), fen.to_owned());
        self
    }

    pub fn init_attempts(&self) -> usize { self.init_attempts.get() }
    pub fn decode_requests(&self) -> Vec<String> { self.decode_requests.borrow().clone() }
}

#[async_trait(?Send)]
impl DecodingService for ScriptedDecodingService {
    async fn initialize(&self) -> Result<(), String> {
        self.init_attempts.set(self.init_attempts.get() + 1);
        self.init_result.clone()
    }

    async fn decode_moves(&self, compressed: &str) -> Result<String, String> {
        self.decode_requests.borrow_mut().push(compressed.to_owned());
        match &self.decode {
            DecodeBehavior::Respond(json) => Ok(json.clone()),
            DecodeBehavior::Unreachable(reason) => Err(reason.clone()),
        }
    }

    async fn get_fen(&self, game_config: &str) -> Result<String, String> {
        let envelope = match self.fens.get(game_config) {
            Some(fen) => ServiceEnvelope::ok(fen.clone()),
            None => ServiceEnvelope::err(format!("unknown game config: {game_config}")),
        };
        Ok(envelope.to_json())
    }
}
