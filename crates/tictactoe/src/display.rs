//! ASCII-art rendering of the board.

use derive_more::{Display, Error};
use tictactoe_engine::{Board, Square};
use tracing::instrument;

const GLYPH_WIDTH: usize = 5;
const BORDER_THICKNESS: usize = 2;
const BORDER: char = '=';

/// Five-line glyphs: an empty square, then pieces 0 through 6.
static GLYPHS: [[&str; 5]; 8] = [
    ["     ", "     ", "     ", "     ", "     "],
    ["X   X", " X X ", "  X  ", " X X ", "X   X"],
    [" OOO ", "O   O", "O   O", "O   O", " OOO "],
    ["  1  ", " 11  ", "  1  ", "  1  ", " 111 "],
    [" 222 ", "2   2", "  22 ", " 2   ", "22222"],
    ["3333 ", "    3", " 333 ", "    3", "3333 "],
    ["4  4 ", "4  4 ", "44444", "   4 ", "   4 "],
    ["55555", "5    ", "5555 ", "    5", "5555 "],
];

/// A piece without a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Piece {} has no glyph (only pieces 0 to 6 can be drawn)", piece)]
pub struct UnknownGlyph {
    /// The offending piece id.
    pub piece: u32,
}

fn glyph(square: Square) -> Result<&'static [&'static str; 5], UnknownGlyph> {
    let symbol = match square {
        Square::Empty => 0,
        Square::Occupied(piece) => piece.id() as usize + 1,
    };
    GLYPHS.get(symbol).ok_or(UnknownGlyph {
        piece: symbol.saturating_sub(1) as u32,
    })
}

/// Renders the board framed by `=` borders.
#[instrument(skip(board), fields(size = board.size()))]
pub fn render(board: &Board) -> Result<String, UnknownGlyph> {
    let size = board.size();
    let width = BORDER_THICKNESS + size * (GLYPH_WIDTH + BORDER_THICKNESS);
    let border_row = BORDER.to_string().repeat(width);
    let border_cell = BORDER.to_string().repeat(BORDER_THICKNESS);

    let mut out = String::new();
    for _ in 0..BORDER_THICKNESS {
        out.push_str(&border_row);
        out.push('\n');
    }

    for row in board.squares().chunks(size) {
        let glyphs = row
            .iter()
            .map(|square| glyph(*square))
            .collect::<Result<Vec<_>, _>>()?;

        for line in 0..GLYPHS[0].len() {
            out.push_str(&border_cell);
            for glyph in &glyphs {
                out.push_str(glyph[line]);
                out.push_str(&border_cell);
            }
            out.push('\n');
        }

        for _ in 0..BORDER_THICKNESS {
            out.push_str(&border_row);
            out.push('\n');
        }
    }

    Ok(out)
}
