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

use std::fmt;
use std::str::FromStr;
use super::grid::Grid;
use super::directions::Direction;
use super::puzzle_data::Placement;

pub struct Finder {
    letters: Vec<char>,
}

impl Finder {
    pub fn new() -> Finder {
        Finder {
            letters: Vec::new(),
        }
    }

    fn find_from_position(
        &self,
        grid: &Grid,
        row: u32,
        col: u32,
        direction: Direction,
    ) -> bool {
        self.letters.iter().enumerate().all(|(i, &letter)| {
            let (row, col) = direction.cell(row, col, i as u32);

            grid.contains(row, col) && grid.at(row, col) == letter
        })
    }

    // Search the grid for the first line that spells the word. Noise
    // letters can spell a word by accident so this isn’t necessarily
    // the placement recorded in the answer key.
    pub fn find(&mut self, grid: &Grid, word: &str) -> Option<Placement> {
        self.letters.clear();
        self.letters.extend(word.chars());

        if self.letters.is_empty() {
            return None;
        }

        for row in 0..grid.size() {
            for col in 0..grid.size() {
                if grid.at(row, col) != self.letters[0] {
                    continue;
                }

                for direction in Direction::ALL {
                    if self.find_from_position(grid, row, col, direction) {
                        return Some(Placement {
                            word: word.to_string(),
                            row,
                            col,
                            direction,
                        });
                    }
                }
            }
        }

        None
    }
}

// Read the letters on the straight line from `start` to `end`
// inclusive. The line can run in any of the eight directions so that
// a player dragging backwards still gets a result.
pub fn read_selection(
    grid: &Grid,
    start: (u32, u32),
    end: (u32, u32),
) -> Option<String> {
    if !grid.contains(start.0, start.1) || !grid.contains(end.0, end.1) {
        return None;
    }

    let row_delta = end.0 as i64 - start.0 as i64;
    let col_delta = end.1 as i64 - start.1 as i64;

    if row_delta != 0 && col_delta != 0 && row_delta.abs() != col_delta.abs() {
        return None;
    }

    let length = row_delta.abs().max(col_delta.abs());

    Some((0..=length).map(|i| {
        let row = start.0 as i64 + row_delta.signum() * i;
        let col = start.1 as i64 + col_delta.signum() * i;
        grid.at(row as u32, col as u32)
    }).collect())
}

// A selection given on the command line as “row,col,row,col”
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: (u32, u32),
    pub end: (u32, u32),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SelectionError {
    WrongNumberOfCoordinates,
    InvalidCoordinate,
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SelectionError::WrongNumberOfCoordinates => {
                write!(f, "selection needs four coordinates")
            },
            SelectionError::InvalidCoordinate => {
                write!(f, "invalid coordinate")
            },
        }
    }
}

impl std::error::Error for SelectionError {}

impl FromStr for Selection {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Selection, SelectionError> {
        let coords = s.split(',')
            .map(|part| {
                part.trim().parse::<u32>()
                    .map_err(|_| SelectionError::InvalidCoordinate)
            })
            .collect::<Result<Vec<u32>, SelectionError>>()?;

        let &[start_row, start_col, end_row, end_col] = coords.as_slice()
        else {
            return Err(SelectionError::WrongNumberOfCoordinates);
        };

        Ok(Selection {
            start: (start_row, start_col),
            end: (end_row, end_col),
        })
    }
}
