// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod console_config;
mod decode_main;
mod http_decoder;
mod tui;
mod viewer_main;

use clap::{Arg, ArgMatches, Command, arg};
use console_config::ConsoleConfig;


fn game_arg() -> Arg {
    arg!([game] "Game in compressed notation; the built-in sample game if omitted")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stdout)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Chess replay")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Replays chess games given in compressed notation")
        .subcommand_required(true)
        .arg(arg!(
            --"config" <config_file> "Path to the yaml-serialized ConsoleConfig file."
        ))
        .arg(arg!(--"decoder" <url> "Decoding service base URL").global(true))
        .subcommand(
            Command::new("view")
                .about("Step through a game interactively")
                .arg(game_arg()),
        )
        .subcommand(
            Command::new("decode")
                .about("Print all moves and positions of a game")
                .arg(game_arg())
                .arg(arg!(--"json" "Print the decoded payload as JSON")),
        )
        .subcommand(
            Command::new("fen")
                .about("Print the position resulting from a move list")
                .arg(arg!(<game_config> "Move list, e.g. \"a2-a4,g8-f6\"")),
        )
        .get_matches();

    let file_config = match matches.get_one::<String>("config") {
        Some(filename) => ConsoleConfig::read_file(filename)?,
        None => ConsoleConfig::default(),
    };
    let config_for = |sub_matches: &ArgMatches| {
        file_config.clone().override_with(
            sub_matches.get_one::<String>("decoder").cloned(),
            sub_matches.try_get_one::<String>("game").ok().flatten().cloned(),
        )
    };

    match matches.subcommand() {
        Some(("view", sub_matches)) => {
            let config = config_for(sub_matches);
            viewer_main::run(viewer_main::ViewerConfig {
                decoder_url: config.decoder_url().to_owned(),
                game: config.game,
            })
        }
        Some(("decode", sub_matches)) => {
            let config = config_for(sub_matches);
            decode_main::run_decode(decode_main::DecodeConfig {
                decoder_url: config.decoder_url().to_owned(),
                game: config.game,
                json: sub_matches.get_flag("json"),
            })
        }
        Some(("fen", sub_matches)) => {
            let config = config_for(sub_matches);
            decode_main::run_fen(decode_main::FenConfig {
                decoder_url: config.decoder_url().to_owned(),
                game_config: sub_matches.get_one::<String>("game_config").unwrap().clone(),
            })
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
