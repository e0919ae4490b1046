use serde::Deserialize;

use crate::game::board::{Board, Color, Kind, Piece};
use crate::game::square::Square;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyphs {
    #[default]
    Unicode,
    Ascii,
}

impl Glyphs {
    pub fn symbol(self, piece: Piece) -> char {
        match self {
            Glyphs::Unicode => match (piece.color, piece.kind) {
                (Color::White, Kind::Pawn) => '♙',
                (Color::White, Kind::Rook) => '♖',
                (Color::White, Kind::Knight) => '♘',
                (Color::White, Kind::Bishop) => '♗',
                (Color::White, Kind::Queen) => '♕',
                (Color::White, Kind::King) => '♔',
                (Color::Black, Kind::Pawn) => '♟',
                (Color::Black, Kind::Rook) => '♜',
                (Color::Black, Kind::Knight) => '♞',
                (Color::Black, Kind::Bishop) => '♝',
                (Color::Black, Kind::Queen) => '♛',
                (Color::Black, Kind::King) => '♚',
            },
            Glyphs::Ascii => {
                let ch = match piece.kind {
                    Kind::Pawn => 'p',
                    Kind::Rook => 'r',
                    Kind::Knight => 'n',
                    Kind::Bishop => 'b',
                    Kind::Queen => 'q',
                    Kind::King => 'k',
                };
                match piece.color {
                    Color::White => ch.to_ascii_uppercase(),
                    Color::Black => ch,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub glyphs: Glyphs,
    pub coordinates: bool,
    /// Square drawn in brackets, usually the current selection.
    pub highlight: Option<Square>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            glyphs: Glyphs::Unicode,
            coordinates: true,
            highlight: None,
        }
    }
}

/// Simple text renderer for the board. Rank 8 is printed first.
pub struct BoardRenderer;

impl BoardRenderer {
    pub fn render(board: &Board, options: &RenderOptions) -> String {
        let mut output = String::new();
        for rank in (0..8).rev() {
            if options.coordinates {
                output.push_str(&format!("{} |", rank + 1));
            }
            for file in 0..8 {
                let ch = board
                    .get_piece(rank, file)
                    .map_or('.', |p| options.glyphs.symbol(p));
                let highlighted = options
                    .highlight
                    .is_some_and(|sq| sq.indices() == (file as i32, rank as i32));
                if highlighted {
                    output.push('[');
                    output.push(ch);
                    output.push(']');
                } else {
                    output.push(' ');
                    output.push(ch);
                    output.push(' ');
                }
            }
            output.push('\n');
        }
        if options.coordinates {
            output.push_str("  +------------------------\n");
            output.push_str("    a  b  c  d  e  f  g  h\n");
        }
        output
    }
}
