use std::rc::Rc;

use async_trait::async_trait;

use crate::envelope::{parse_decode_response, parse_fen_response};
use crate::error::ReplayError;
use crate::init_gate::InitGate;
use crate::record::{CompressedNotation, GameRecord, Position};


// Transport to the engine that turns compressed notation into moves and positions.
//
// All methods return the raw envelope JSON (see `envelope.rs`) on success. `Err` means the
// call itself failed: the engine could not be loaded or reached.
//
// Not `Send`: the browser implementation wraps JS objects.
#[async_trait(?Send)]
pub trait DecodingService {
    async fn initialize(&self) -> Result<(), String>;
    async fn decode_moves(&self, compressed: &str) -> Result<String, String>;
    async fn get_fen(&self, game_config: &str) -> Result<String, String>;
}

pub struct DecodeAdapter {
    service: Rc<dyn DecodingService>,
    init: InitGate,
}

impl DecodeAdapter {
    pub fn new(service: Rc<dyn DecodingService>) -> Self {
        let init = InitGate::new({
            let service = Rc::clone(&service);
            async move { service.initialize().await }
        });
        DecodeAdapter { service, init }
    }

    // Gate for other code paths that depend on the decoder (e.g. hiding the "no decoder"
    // warning). Awaiting it never triggers a second initialization.
    pub fn init_gate(&self) -> &InitGate { &self.init }

    // Single attempt: no caching, no retries. Any returned record satisfies the
    // "one more position than moves" invariant.
    pub async fn decode(&self, compressed: &CompressedNotation) -> Result<GameRecord, ReplayError> {
        log::info!("Decoding match in compressed notation: {compressed}");
        self.init.wait().await?;
        let response = self
            .service
            .decode_moves(compressed.as_str())
            .await
            .map_err(ReplayError::ServiceUnavailable)?;
        log::debug!("Decoding service responded with {} bytes", response.len());
        match parse_decode_response(&response) {
            Ok(record) => {
                log::info!("Decoded {} moves: {}", record.num_moves(), record.moves_string());
                Ok(record)
            }
            Err(err) => {
                log::warn!("Decompression error: {err}");
                Err(err)
            }
        }
    }

    // Position resulting from a move-list configuration, computed by the service.
    pub async fn position_for(&self, game_config: &str) -> Result<Position, ReplayError> {
        self.init.wait().await?;
        let response = self
            .service
            .get_fen(game_config)
            .await
            .map_err(ReplayError::ServiceUnavailable)?;
        parse_fen_response(&response).inspect_err(|err| log::warn!("Cannot compute FEN: {err}"))
    }
}
