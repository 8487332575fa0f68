#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod bootstrap;
pub mod config;
pub mod decode;
pub mod display;
pub mod envelope;
pub mod error;
pub mod init_gate;
pub mod record;
pub mod replay;
pub mod test_util;

pub use bootstrap::start_replay;
pub use config::{DEFAULT_COMPRESSED_GAME, ReplayConfig};
pub use decode::{DecodeAdapter, DecodingService};
pub use display::{DisplaySink, MessageLog};
pub use error::ReplayError;
pub use record::{CompressedNotation, GameRecord, Move, Position};
pub use replay::{NavigationCommand, ReplayController, ReplayUpdate};
