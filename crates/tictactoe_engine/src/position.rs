//! User-facing `(x, y)` coordinates.
//!
//! Columns `x` run 1-3 left to right, rows `y` run 1-3 bottom to top, so
//! `(1, 1)` is the bottom-left cell and `(3, 3)` the top-right one.

use derive_more::{Display, Error};
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Why a coordinate string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CoordinateError {
    /// Input was not two integers.
    #[display("You should enter numbers!")]
    NotNumbers,
    /// An axis was outside 1-3.
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,
}

/// A validated coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("({}, {})", x, y)]
pub struct Coordinates {
    x: u8,
    y: u8,
}

impl Coordinates {
    /// Validates both axes are in 1-3.
    pub fn new(x: i64, y: i64) -> Result<Self, CoordinateError> {
        let axis = |v: i64| u8::try_from(v).ok().filter(|v| (1..=3).contains(v));
        match (axis(x), axis(y)) {
            (Some(x), Some(y)) => Ok(Self { x, y }),
            _ => Err(CoordinateError::OutOfRange),
        }
    }

    /// Column, 1-3.
    pub fn x(self) -> u8 {
        self.x
    }

    /// Row counted from the bottom, 1-3.
    pub fn y(self) -> u8 {
        self.y
    }

    /// Board index: `(x - 1) + 3 * (3 - y)`.
    pub fn to_index(self) -> usize {
        usize::from(self.x - 1) + 3 * usize::from(3 - self.y)
    }

    /// Inverse of [`Coordinates::to_index`].
    #[cfg(test)]
    fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self {
            x: (index % 3) as u8 + 1,
            y: 3 - (index / 3) as u8,
        })
    }
}

impl FromStr for Coordinates {
    type Err = CoordinateError;

    /// Parses `"x y"`: exactly two whitespace-separated integers.
    ///
    /// Integers too large for any axis are out of range rather than
    /// non-numeric; a non-numeric word wins over an oversized one.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<Result<i64, ParseIntError>> =
            s.split_whitespace().map(str::parse::<i64>).collect();
        let [x, y] = words.as_slice() else {
            return Err(CoordinateError::NotNumbers);
        };
        match (axis(x), axis(y)) {
            (Ok(x), Ok(y)) => Self::new(x, y),
            (Err(CoordinateError::NotNumbers), _) | (_, Err(CoordinateError::NotNumbers)) => {
                Err(CoordinateError::NotNumbers)
            }
            _ => Err(CoordinateError::OutOfRange),
        }
    }
}

fn axis(word: &Result<i64, ParseIntError>) -> Result<i64, CoordinateError> {
    match word {
        Ok(value) => Ok(*value),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(CoordinateError::OutOfRange)
        }
        Err(_) => Err(CoordinateError::NotNumbers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_and_center_mapping() {
        assert_eq!(Coordinates::new(1, 1).unwrap().to_index(), 6);
        assert_eq!(Coordinates::new(3, 3).unwrap().to_index(), 2);
        assert_eq!(Coordinates::new(2, 2).unwrap().to_index(), 4);
        assert_eq!(Coordinates::new(1, 3).unwrap().to_index(), 0);
        assert_eq!(Coordinates::new(3, 1).unwrap().to_index(), 8);
    }

    #[test]
    fn test_from_index_inverts_mapping() {
        for index in 0..9 {
            let coords = Coordinates::from_index(index).unwrap();
            assert_eq!(coords.to_index(), index);
        }
        assert_eq!(Coordinates::from_index(9), None);
    }

    #[test]
    fn test_parse_valid() {
        let coords: Coordinates = " 2  3 ".parse().unwrap();
        assert_eq!((coords.x(), coords.y()), (2, 3));
        assert_eq!(coords.to_index(), 1);
    }

    #[test]
    fn test_parse_not_numbers() {
        assert_eq!("a b".parse::<Coordinates>(), Err(CoordinateError::NotNumbers));
        assert_eq!("1".parse::<Coordinates>(), Err(CoordinateError::NotNumbers));
        assert_eq!("1 2 3".parse::<Coordinates>(), Err(CoordinateError::NotNumbers));
        assert_eq!("".parse::<Coordinates>(), Err(CoordinateError::NotNumbers));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!("0 1".parse::<Coordinates>(), Err(CoordinateError::OutOfRange));
        assert_eq!("2 4".parse::<Coordinates>(), Err(CoordinateError::OutOfRange));
        assert_eq!("-1 2".parse::<Coordinates>(), Err(CoordinateError::OutOfRange));
    }

    #[test]
    fn test_parse_oversized_numbers_are_out_of_range() {
        assert_eq!(
            "99999999999999999999 1".parse::<Coordinates>(),
            Err(CoordinateError::OutOfRange)
        );
        assert_eq!(
            "1 -99999999999999999999".parse::<Coordinates>(),
            Err(CoordinateError::OutOfRange)
        );
        assert_eq!(
            "99999999999999999999 a".parse::<Coordinates>(),
            Err(CoordinateError::NotNumbers)
        );
        assert_eq!(
            "99999999999999999999 1 1".parse::<Coordinates>(),
            Err(CoordinateError::NotNumbers)
        );
    }
}
