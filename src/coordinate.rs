//! Cell addressing: a row letter `A`..`J` and a column number `1`..`10`,
//! held as zero-based ordinals.
//!
//! A `Coordinate` may be out of range. Parsing only checks the token shape,
//! so `K1` or `A11` come through intact and the board decides whether the
//! cell exists.

use core::fmt;
use core::str::FromStr;

use crate::config::BOARD_SIZE;

/// A cell address as `(row, column)` ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    /// Build from zero-based ordinals.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Build from a row letter and a one-based column number.
    pub fn from_label(letter: char, number: i32) -> Self {
        let row = letter.to_ascii_uppercase() as i32 - 'A' as i32;
        Self::new(row, number - 1)
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Row letter, if the row ordinal maps onto `A`..`Z`.
    pub fn letter(&self) -> Option<char> {
        u8::try_from(self.row)
            .ok()
            .filter(|r| *r < 26)
            .map(|r| (b'A' + r) as char)
    }

    /// One-based column number.
    pub fn number(&self) -> i32 {
        self.col + 1
    }

    /// `true` when both ordinals fall inside the board.
    pub fn in_bounds(&self) -> bool {
        let size = BOARD_SIZE as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Grid indices for an in-bounds coordinate.
    pub fn index(&self) -> Option<(usize, usize)> {
        if self.in_bounds() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// Order two endpoints so that `low` has the smaller row and column
    /// ordinals. For an aligned pair this is a swap at most; a diagonal pair
    /// stays diagonal.
    pub fn normalize(a: Self, b: Self) -> (Self, Self) {
        (
            Self::new(a.row.min(b.row), a.col.min(b.col)),
            Self::new(a.row.max(b.row), a.col.max(b.col)),
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter() {
            Some(letter) => write!(f, "{}{}", letter, self.number()),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Token did not have the `<Letter><Number>` shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseCoordinateError;

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a row letter followed by a column number (e.g. A5)")
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .filter(char::is_ascii_alphabetic)
            .ok_or(ParseCoordinateError)?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseCoordinateError);
        }
        let number: i32 = digits.parse().map_err(|_| ParseCoordinateError)?;
        Ok(Self::from_label(letter, number))
    }
}
