//! Board coordinates
//!
//! A [`Position`] is an explicit (column, row) pair, always on the board.
//! Offsets go through [`Position::offset`], which returns `None` when the
//! result would leave the board, so no arithmetic can wrap from one edge
//! to the other.
//!
//! The textual form is the column letter followed by the row number:
//! `a1`, `e9`, `i10`.

use crate::constants::{BOARD_COLUMNS, BOARD_ROWS, COLUMN_LETTERS};
use crate::error::PositionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    column: u8,
    row: u8,
}

impl Position {
    /// Build a position from zero-based column and row indices
    pub fn new(column: u8, row: u8) -> Option<Self> {
        if column < BOARD_COLUMNS && row < BOARD_ROWS {
            Some(Self { column, row })
        } else {
            None
        }
    }

    /// Compile-time constructor from a column letter and a one-based row,
    /// e.g. `Position::at(b'e', 9)`. Only used for fixed tables.
    pub(crate) const fn at(letter: u8, rank: u8) -> Self {
        Self {
            column: letter - b'a',
            row: rank - 1,
        }
    }

    /// Zero-based column (0 = `a`)
    #[inline]
    pub fn column(self) -> u8 {
        self.column
    }

    /// Zero-based row (0 = row `1`)
    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    /// Index into row-major cell storage
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.row as usize * BOARD_COLUMNS as usize + self.column as usize
    }

    /// Shift by (`dc`, `dr`), or `None` if that leaves the board
    pub fn offset(self, dc: i8, dr: i8) -> Option<Self> {
        let column = u8::try_from(i16::from(self.column) + i16::from(dc)).ok()?;
        let row = u8::try_from(i16::from(self.row) + i16::from(dr)).ok()?;
        Self::new(column, row)
    }

    /// Signed (column, row) displacement from `self` to `to`
    #[inline]
    pub fn delta(self, to: Position) -> (i8, i8) {
        (
            to.column as i8 - self.column as i8,
            to.row as i8 - self.row as i8,
        )
    }

    /// King-move distance: the larger of the column and row gaps
    pub fn chebyshev_distance(self, to: Position) -> u8 {
        let (dc, dr) = self.delta(to);
        dc.unsigned_abs().max(dr.unsigned_abs())
    }

    /// Squares strictly between `self` and `to` on a shared row, column or
    /// 45-degree diagonal, nearest first. `None` when the two are not
    /// aligned that way. Whether a diagonal is actually walkable is a palace
    /// question answered by the caller.
    pub fn between(self, to: Position) -> Option<Vec<Position>> {
        let (dc, dr) = self.delta(to);
        let aligned = dc == 0 || dr == 0 || dc.abs() == dr.abs();
        if !aligned || (dc == 0 && dr == 0) {
            return None;
        }

        let step = (dc.signum(), dr.signum());
        let steps = dc.abs().max(dr.abs());
        let mut squares = Vec::with_capacity(steps as usize);
        let mut current = self;
        for _ in 1..steps {
            current = current.offset(step.0, step.1)?;
            squares.push(current);
        }
        Some(squares)
    }

    /// Every position on the board, row-major from `a1`
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLUMNS).map(move |column| Position { column, row }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMN_LETTERS[self.column as usize], self.row + 1)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(|| PositionError::Malformed {
            input: s.to_owned(),
        })?;
        let digits = chars.as_str();

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PositionError::Malformed { input: s.to_owned() });
        }

        let column = COLUMN_LETTERS
            .iter()
            .position(|&c| c == letter.to_ascii_lowercase())
            .ok_or(PositionError::InvalidColumn { column: letter })?;

        // "e09" and "e0" are not valid row spellings
        let rank: u8 = match digits.parse() {
            Ok(rank) if !digits.starts_with('0') && (1..=BOARD_ROWS).contains(&rank) => rank,
            _ => return Err(PositionError::InvalidRow { input: s.to_owned() }),
        };

        Ok(Self {
            column: column as u8,
            row: rank - 1,
        })
    }
}

impl TryFrom<String> for Position {
    type Error = PositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(value: Position) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display_corners() {
        for text in ["a1", "i1", "a10", "i10", "e2", "e9"] {
            assert_eq!(pos(text).to_string(), text);
        }
        assert_eq!(pos("a1"), Position::new(0, 0).unwrap());
        assert_eq!(pos("i10"), Position::new(8, 9).unwrap());
    }

    #[test]
    fn test_parse_accepts_uppercase_column() {
        assert_eq!(pos("E9"), pos("e9"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "".parse::<Position>(),
            Err(PositionError::Malformed { .. })
        ));
        assert!(matches!(
            "e".parse::<Position>(),
            Err(PositionError::Malformed { .. })
        ));
        assert!(matches!(
            "j5".parse::<Position>(),
            Err(PositionError::InvalidColumn { column: 'j' })
        ));
        assert!(matches!(
            "e0".parse::<Position>(),
            Err(PositionError::InvalidRow { .. })
        ));
        assert!(matches!(
            "e11".parse::<Position>(),
            Err(PositionError::InvalidRow { .. })
        ));
        assert!(matches!(
            "e09".parse::<Position>(),
            Err(PositionError::InvalidRow { .. })
        ));
        assert!(matches!(
            "e-1".parse::<Position>(),
            Err(PositionError::Malformed { .. })
        ));
    }

    #[test]
    fn test_offset_stays_on_board() {
        //! Offsets at the edges must fail rather than wrap to the next row
        assert_eq!(pos("i5").offset(1, 0), None);
        assert_eq!(pos("a5").offset(-1, 0), None);
        assert_eq!(pos("e1").offset(0, -1), None);
        assert_eq!(pos("e10").offset(0, 1), None);
        assert_eq!(pos("h4").offset(1, 2), Some(pos("i6")));
    }

    #[test]
    fn test_offset_extreme_displacement() {
        //! Displacements far outside the board return None instead of
        //! overflowing
        assert_eq!(pos("i1").offset(i8::MAX, 0), None);
        assert_eq!(pos("a1").offset(i8::MIN, i8::MIN), None);
        assert_eq!(pos("i10").offset(i8::MAX, i8::MAX), None);
        assert_eq!(pos("e5").offset(0, i8::MIN), None);
    }

    #[test]
    fn test_all_positions_count_and_order() {
        let all: Vec<Position> = Position::all().collect();
        assert_eq!(all.len(), 90);
        assert_eq!(all[0], pos("a1"));
        assert_eq!(all[8], pos("i1"));
        assert_eq!(all[9], pos("a2"));
        assert_eq!(all[89], pos("i10"));
        assert!(all.iter().enumerate().all(|(i, p)| p.index() == i));
    }

    #[test]
    fn test_between_lines() {
        assert_eq!(pos("a1").between(pos("a4")), Some(vec![pos("a2"), pos("a3")]));
        assert_eq!(pos("e5").between(pos("b5")), Some(vec![pos("d5"), pos("c5")]));
        assert_eq!(pos("d1").between(pos("f3")), Some(vec![pos("e2")]));
        assert_eq!(pos("d1").between(pos("e2")), Some(vec![]));
        assert_eq!(pos("c1").between(pos("d3")), None);
        assert_eq!(pos("c1").between(pos("c1")), None);
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&pos("e9")).unwrap();
        assert_eq!(json, "\"e9\"");
        let back: Position = serde_json::from_str("\"i10\"").unwrap();
        assert_eq!(back, pos("i10"));
        assert!(serde_json::from_str::<Position>("\"z3\"").is_err());
    }
}
