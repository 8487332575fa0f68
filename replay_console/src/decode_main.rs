// Non-interactive access to the decoding service: print a decoded game or a single position.

use std::rc::Rc;

use itertools::Itertools;

use chess_replay::envelope::DecodedGamePayload;
use chess_replay::{DecodeAdapter, GameRecord, ReplayConfig};

use crate::http_decoder::HttpDecodingService;


pub struct DecodeConfig {
    pub decoder_url: String,
    pub game: Option<String>,
    pub json: bool,
}

pub struct FenConfig {
    pub decoder_url: String,
    pub game_config: String,
}

fn adapter(decoder_url: &str) -> anyhow::Result<DecodeAdapter> {
    Ok(DecodeAdapter::new(Rc::new(HttpDecodingService::new(decoder_url)?)))
}

// One line per position: index, the move that led to it and the FEN.
pub fn format_record(record: &GameRecord) -> String {
    record
        .positions()
        .iter()
        .enumerate()
        .map(|(index, position)| {
            let mv = record.move_leading_to(index).map_or("", |m| m.as_str());
            format!("{index:>3} {mv:<6} {position}")
        })
        .join("\n")
}

pub fn run_decode(config: DecodeConfig) -> anyhow::Result<()> {
    let adapter = adapter(&config.decoder_url)?;
    let replay_config = ReplayConfig::with_game(config.game);
    let record = async_std::task::block_on(adapter.decode(&replay_config.game))?;
    if config.json {
        let payload = DecodedGamePayload {
            vec_of_moves: record.moves().to_vec(),
            vec_of_fen: record.positions().to_vec(),
        };
        println!("{}", payload.to_json());
    } else {
        println!("{}", format_record(&record));
    }
    Ok(())
}

pub fn run_fen(config: FenConfig) -> anyhow::Result<()> {
    let adapter = adapter(&config.decoder_url)?;
    let position = async_std::task::block_on(adapter.position_for(&config.game_config))?;
    println!("{position}");
    Ok(())
}
