// Wordgrid – A word search generator
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

// Words only ever run forwards: left to right, top to bottom or
// diagonally down and to the right.

//  H H H
//  V D .
//  V . D

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Horizontal,
    Vertical,
    Diagonal,
}

pub const N_DIRECTIONS: usize = 3;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UnknownDirection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::UnknownDirection(name) => {
                write!(f, "unknown direction “{}”", name)
            },
        }
    }
}

impl std::error::Error for Error {}

impl Direction {
    pub const ALL: [Direction; N_DIRECTIONS] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Direction::Horizontal => "HORIZONTAL",
            Direction::Vertical => "VERTICAL",
            Direction::Diagonal => "DIAGONAL",
        }
    }

    // Row and column offset of one step
    pub fn offset(self) -> (u32, u32) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (1, 1),
        }
    }

    pub fn step(self, row: u32, col: u32) -> (u32, u32) {
        let (row_off, col_off) = self.offset();

        (row.wrapping_add(row_off), col.wrapping_add(col_off))
    }

    // Position of the letter at `index` along a line that starts at
    // (row, col). Positions past the integer maximum wrap around so
    // that the caller only needs to compare against the grid size.
    pub fn cell(self, row: u32, col: u32, index: u32) -> (u32, u32) {
        let (row_off, col_off) = self.offset();

        (
            row.wrapping_add(row_off.wrapping_mul(index)),
            col.wrapping_add(col_off.wrapping_mul(index)),
        )
    }

    pub fn cells(self, row: u32, col: u32, length: u32) -> Cells {
        Cells {
            row,
            col,
            direction: self,
            remaining: length,
        }
    }
}

pub struct Cells {
    row: u32,
    col: u32,
    direction: Direction,
    remaining: u32,
}

impl Iterator for Cells {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<(u32, u32)> {
        if self.remaining == 0 {
            return None;
        }

        let pos = (self.row, self.col);

        (self.row, self.col) = self.direction.step(self.row, self.col);
        self.remaining -= 1;

        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Direction, Error> {
        Direction::ALL.iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| Error::UnknownDirection(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn step_all_directions() {
        assert_eq!(Direction::Horizontal.step(1, 2), (1, 3));
        assert_eq!(Direction::Vertical.step(1, 2), (2, 2));
        assert_eq!(Direction::Diagonal.step(1, 2), (2, 3));
    }

    #[test]
    fn cells() {
        assert_eq!(
            &Direction::Diagonal.cells(0, 1, 3).collect::<Vec<_>>(),
            &[(0, 1), (1, 2), (2, 3)],
        );
        assert_eq!(
            &Direction::Vertical.cells(4, 0, 2).collect::<Vec<_>>(),
            &[(4, 0), (5, 0)],
        );
        assert!(Direction::Horizontal.cells(4, 4, 0).next().is_none());
    }

    #[test]
    fn cell_matches_cells() {
        for dir in Direction::ALL {
            for (i, pos) in dir.cells(3, 5, 6).enumerate() {
                assert_eq!(dir.cell(3, 5, i as u32), pos);
            }
        }
    }

    #[test]
    fn overflow() {
        // Running off the end of the integer range wraps around so
        // that a single comparison against the grid size catches it.
        assert_eq!(Direction::Horizontal.step(0, u32::MAX), (0, 0));
        assert_eq!(Direction::Vertical.cell(u32::MAX - 1, 0, 3), (1, 0));
    }

    #[test]
    fn names() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }

        assert_eq!("diagonal".parse::<Direction>().unwrap(),
                   Direction::Diagonal);
        assert_eq!(
            &"UP_LEFT".parse::<Direction>().unwrap_err().to_string(),
            "unknown direction “UP_LEFT”",
        );
    }

    #[test]
    fn json() {
        assert_eq!(
            &serde_json::to_string(&Direction::Horizontal).unwrap(),
            "\"HORIZONTAL\"",
        );
        assert_eq!(
            serde_json::from_str::<Direction>("\"VERTICAL\"").unwrap(),
            Direction::Vertical,
        );
        assert!(serde_json::from_str::<Direction>("\"ANTIDIAGONAL\"").is_err());
    }
}
