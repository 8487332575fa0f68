use console::Style;
use itertools::Itertools;

use chess_replay::display::{DisplaySink, MessageLog, progress_label};
use chess_replay::Position;


const BOARD_SIZE: usize = 8;
const MAX_MESSAGES: usize = 5;

// Latest state pushed by the replay controller, rendered on demand by the event loop.
pub struct TerminalDisplay {
    position: Position,
    progress: String,
}

impl TerminalDisplay {
    pub fn new() -> Self {
        TerminalDisplay {
            position: Position::starting(),
            progress: progress_label(0, 0),
        }
    }

    pub fn render(&self) -> String {
        format!("{}\n{}", render_position(&self.position), self.progress)
    }
}

impl DisplaySink for TerminalDisplay {
    fn set_position(&mut self, fen: &Position) { self.position = fen.clone(); }
    fn set_progress(&mut self, played: usize, total: usize) {
        self.progress = progress_label(played, total);
    }
}

// Newest first, like the message panel on the web page.
#[derive(Default)]
pub struct TerminalMessages {
    messages: Vec<String>,
}

impl TerminalMessages {
    pub fn render(&self) -> String { self.messages.iter().rev().take(MAX_MESSAGES).join("\n") }
}

impl MessageLog for TerminalMessages {
    fn show_message(&mut self, text: &str) {
        log::info!("{text}");
        self.messages.push(text.to_owned());
    }
}

// Piece placement (the first FEN field) as rows from rank 8 to rank 1.
// None if the placement doesn't describe an 8x8 board.
fn parse_placement(fen: &str) -> Option<Vec<Vec<Option<char>>>> {
    let placement = fen.split_whitespace().next()?;
    let rows = placement
        .split('/')
        .map(|row| {
            let mut squares = Vec::with_capacity(BOARD_SIZE);
            for ch in row.chars() {
                match ch.to_digit(10) {
                    Some(n) => squares.extend((0..n).map(|_| None)),
                    None => squares.push(Some(ch)),
                }
            }
            squares
        })
        .collect_vec();
    if rows.len() != BOARD_SIZE || rows.iter().any(|r| r.len() != BOARD_SIZE) {
        return None;
    }
    Some(rows)
}

fn piece_to_pictogram(piece: char) -> char {
    match piece {
        'K' => '♔',
        'Q' => '♕',
        'R' => '♖',
        'B' => '♗',
        'N' => '♘',
        'P' => '♙',
        'k' => '♚',
        'q' => '♛',
        'r' => '♜',
        'b' => '♝',
        'n' => '♞',
        'p' => '♟',
        other => other,
    }
}

fn format_square(ch: char) -> String { format!(" {} ", ch) }

// White at the bottom. Positions the decoder produced but we cannot parse are shown verbatim:
// the FEN is still useful, and validating it isn't our job.
pub fn render_position(position: &Position) -> String {
    let Some(rows) = parse_placement(position.as_str()) else {
        return format!("{position}\n");
    };
    let colors = [
        Style::new().color256(233).on_color256(222),
        Style::new().color256(233).on_color256(230),
    ];
    let files = "abcdefgh";
    let mut ret = String::new();
    for (row_idx, row) in rows.iter().enumerate() {
        let rank = BOARD_SIZE - row_idx;
        ret.push_str(&format_square(char::from_digit(rank as u32, 10).unwrap_or('?')));
        for (col_idx, square) in row.iter().enumerate() {
            let color_idx = (row_idx + col_idx) % 2;
            let pictogram = square.map_or(' ', piece_to_pictogram);
            ret.push_str(&colors[color_idx].apply_to(format_square(pictogram)).to_string());
        }
        ret.push('\n');
    }
    ret.push_str(&format_square(' '));
    ret.push_str(&files.chars().map(format_square).join(""));
    ret.push('\n');
    ret
}
