// Wire format of the decoding service.
//
// Every call returns an envelope `{"is_ok": bool, "value": string}`. For `decode_moves` the
// value of a successful envelope is itself JSON, see `DecodedGamePayload`. For `get_fen` it is
// a bare FEN. For failures it is a human-readable message.
//
// The envelope is converted to a `Result` right here, so that the rest of the code never looks
// at `is_ok` again.

use serde::{Deserialize, Serialize};

use crate::error::ReplayError;
use crate::record::{GameRecord, Move, Position};


#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ServiceEnvelope {
    pub is_ok: bool,
    pub value: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DecodedGamePayload {
    pub vec_of_moves: Vec<Move>,
    pub vec_of_fen: Vec<Position>,
}

impl ServiceEnvelope {
    pub fn ok(value: impl Into<String>) -> Self {
        ServiceEnvelope { is_ok: true, value: value.into() }
    }
    pub fn err(message: impl Into<String>) -> Self {
        ServiceEnvelope { is_ok: false, value: message.into() }
    }

    pub fn parse(json: &str) -> Result<Self, ReplayError> {
        serde_json::from_str(json)
            .map_err(|err| ReplayError::MalformedPayload(format!("invalid envelope: {err}")))
    }

    pub fn to_json(&self) -> String {
        // Serializing a struct of a bool and a string cannot fail.
        serde_json::to_string(self).unwrap()
    }

    // Failure envelopes become `ServiceRejected` with the service message.
    pub fn into_result(self) -> Result<String, ReplayError> {
        if self.is_ok { Ok(self.value) } else { Err(ReplayError::ServiceRejected(self.value)) }
    }
}

impl DecodedGamePayload {
    pub fn parse(json: &str) -> Result<Self, ReplayError> {
        serde_json::from_str(json)
            .map_err(|err| ReplayError::MalformedPayload(format!("invalid game payload: {err}")))
    }

    pub fn to_json(&self) -> String { serde_json::to_string(self).unwrap() }

    pub fn into_record(self) -> Result<GameRecord, ReplayError> {
        GameRecord::new(self.vec_of_moves, self.vec_of_fen)
    }
}

// Full response handling for `decode_moves`.
pub fn parse_decode_response(json: &str) -> Result<GameRecord, ReplayError> {
    let payload = ServiceEnvelope::parse(json)?.into_result()?;
    DecodedGamePayload::parse(&payload)?.into_record()
}

// Full response handling for `get_fen`.
pub fn parse_fen_response(json: &str) -> Result<Position, ReplayError> {
    let fen = ServiceEnvelope::parse(json)?.into_result()?;
    if fen.trim().is_empty() {
        return Err(ReplayError::MalformedPayload("empty FEN".to_owned()));
    }
    Ok(Position::new(fen))
}
