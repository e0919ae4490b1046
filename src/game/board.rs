// Board state: an 8x8 array of optional pieces, indexed [rank][file].
// Whose turn it is lives in the session, not here.

use std::fmt;

use crate::game::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns of this color advance in.
    pub fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Zero-based rank pawns of this color start on.
    pub fn pawn_rank(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: Kind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: Kind, color: Color) -> Self {
        Piece { kind, color }
    }
}

const BACK_RANK: [Kind; 8] = [
    Kind::Rook,
    Kind::Knight,
    Kind::Bishop,
    Kind::Queen,
    Kind::King,
    Kind::Bishop,
    Kind::Knight,
    Kind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut squares = [[None; 8]; 8];
        for (file, kind) in BACK_RANK.iter().enumerate() {
            squares[0][file] = Some(Piece::new(*kind, Color::White));
            squares[1][file] = Some(Piece::new(Kind::Pawn, Color::White));
            squares[6][file] = Some(Piece::new(Kind::Pawn, Color::Black));
            squares[7][file] = Some(Piece::new(*kind, Color::Black));
        }
        Board { squares }
    }

    /// A board with no pieces at all, for building positions by hand.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Return the piece at a given rank/file (0-indexed). Returns None if empty
    /// or off the board.
    pub fn get_piece(&self, rank: usize, file: usize) -> Option<Piece> {
        if rank < 8 && file < 8 {
            self.squares[rank][file]
        } else {
            None
        }
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.y() as usize][square.x() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put `piece` on `square`, returning whatever was there before.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(
            &mut self.squares[square.y() as usize][square.x() as usize],
            piece,
        )
    }

    /// Occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
