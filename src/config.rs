use crate::record::CompressedNotation;


// Shown when the page is opened without a game. Decodes to
// "d2d3, g7g6, c1e3, f8g7, b1c3, g8f6, d1d2, e8h8, e1a1".
pub const DEFAULT_COMPRESSED_GAME: &str = "TuCU2BS-tDL8_EA";

pub const GAME_QUERY_PARAM: &str = "game";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ReplayConfig {
    pub game: CompressedNotation,
}

impl Default for ReplayConfig {
    fn default() -> Self { ReplayConfig::with_game(None) }
}

impl ReplayConfig {
    // An explicitly given game is taken verbatim, even if empty: the decoding service decides
    // whether it is valid.
    pub fn with_game(game: Option<String>) -> Self {
        let game = game.unwrap_or_else(|| DEFAULT_COMPRESSED_GAME.to_owned());
        ReplayConfig { game: CompressedNotation::new(game) }
    }

    // Accepts a query string with or without the leading '?', e.g. `location.search`.
    // A missing or empty `game` parameter means the default game.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let game = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == GAME_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
            .filter(|game| !game.is_empty());
        ReplayConfig::with_game(game)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn game_from_query(query: &str) -> String {
        ReplayConfig::from_query(query).game.as_str().to_owned()
    }

    #[test]
    fn game_from_query_string() {
        assert_eq!(game_from_query("?game=Y3vghpnyfWW7Q"), "Y3vghpnyfWW7Q");
        assert_eq!(game_from_query("lang=en&game=IY-tYgxhgp2upx92"), "IY-tYgxhgp2upx92");
    }

    #[test]
    fn url_safe_alphabet_survives_query_parsing() {
        assert_eq!(game_from_query("game=x4Q8_-"), "x4Q8_-");
    }

    #[test]
    fn query_falls_back_to_default() {
        assert_eq!(game_from_query(""), DEFAULT_COMPRESSED_GAME);
        assert_eq!(game_from_query("?lang=en"), DEFAULT_COMPRESSED_GAME);
        assert_eq!(game_from_query("?game="), DEFAULT_COMPRESSED_GAME);
        assert_eq!(ReplayConfig::default().game.as_str(), DEFAULT_COMPRESSED_GAME);
    }

    #[test]
    fn explicit_empty_game_is_kept() {
        assert_eq!(ReplayConfig::with_game(Some(String::new())).game.as_str(), "");
        assert_eq!(ReplayConfig::with_game(None).game.as_str(), DEFAULT_COMPRESSED_GAME);
    }
}
