use std::fmt;
use std::str::FromStr;

use crate::game::mv::MoveError;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A board square as zero-based (x, y): x is the file (a = 0), y is the
/// rank minus one (rank 1 = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    x: u8,
    y: u8,
}

impl Square {
    /// Build a square from indices, rejecting anything off the board.
    pub fn from_indices(x: i32, y: i32) -> Result<Self, MoveError> {
        if !(0..8).contains(&x) || !(0..8).contains(&y) {
            return Err(MoveError::InvalidSquare(format!("({x}, {y})")));
        }
        Ok(Square {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Parse a two-character label such as `e4`. Files are lowercase only.
    pub fn parse(label: &str) -> Result<Self, MoveError> {
        let invalid = || MoveError::InvalidSquare(label.to_string());
        let mut chars = label.chars();
        let (file, rank) = match (chars.next(), chars.next(), chars.next()) {
            (Some(f), Some(r), None) => (f, r),
            _ => return Err(invalid()),
        };
        let x = FILES.iter().position(|&f| f == file).ok_or_else(invalid)?;
        let y = match rank.to_digit(10) {
            Some(r @ 1..=8) => r - 1,
            _ => return Err(invalid()),
        };
        Square::from_indices(x as i32, y as i32)
    }

    pub fn x(self) -> i32 {
        self.x as i32
    }

    pub fn y(self) -> i32 {
        self.y as i32
    }

    pub fn indices(self) -> (i32, i32) {
        (self.x(), self.y())
    }

    pub fn label(self) -> String {
        self.to_string()
    }

    /// The square `(dx, dy)` away, or `None` when that leaves the board.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        Square::from_indices(self.x() + dx, self.y() + dy).ok()
    }

    /// All 64 squares, a1, b1, ... h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|y| (0..8u8).map(move |x| Square { x, y }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILES[self.x as usize], self.y + 1)
    }
}

impl FromStr for Square {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::parse(s)
    }
}

/// Label to zero-based (x, y).
pub fn to_indices(label: &str) -> Result<(i32, i32), MoveError> {
    Square::parse(label).map(Square::indices)
}

/// Zero-based (x, y) to label.
pub fn to_label(x: i32, y: i32) -> Result<String, MoveError> {
    Square::from_indices(x, y).map(Square::label)
}
