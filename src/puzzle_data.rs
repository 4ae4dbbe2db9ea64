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
use serde::{Serialize, Deserialize};
use super::grid::Grid;
use super::directions::{Cells, Direction};
use super::word_finder;

#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub row: u32,
    pub col: u32,
    pub direction: Direction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    #[serde(with = "grid_rows")]
    pub grid: Grid,
    // The words that were asked for. Some of them might be missing
    // from the solution if they couldn’t be placed.
    pub words: Vec<String>,
    pub solution: Vec<Placement>,
}

impl Placement {
    pub fn len(&self) -> u32 {
        self.word.chars().count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn cells(&self) -> Cells {
        self.direction.cells(self.row, self.col, self.len())
    }

    // The last cell covered by the word
    pub fn end(&self) -> (u32, u32) {
        self.direction.cell(
            self.row,
            self.col,
            self.len().saturating_sub(1),
        )
    }

    // Read the letters back out of the grid along the placement
    pub fn read(&self, grid: &Grid) -> Option<String> {
        self.cells().map(|(row, col)| {
            grid.contains(row, col).then(|| grid.at(row, col))
        }).collect()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}) {}",
            self.word,
            self.row,
            self.col,
            self.direction,
        )
    }
}

impl Puzzle {
    pub fn placement(&self, word: &str) -> Option<&Placement> {
        self.solution.iter().find(|p| p.word == word)
    }

    pub fn missing_words(&self) -> impl Iterator<Item = &str> {
        self.words.iter()
            .map(String::as_str)
            .filter(move |&word| self.placement(word).is_none())
    }

    // If the straight line between the two cells spells one of the
    // puzzle’s words, return it.
    pub fn check_selection(
        &self,
        start: (u32, u32),
        end: (u32, u32),
    ) -> Option<&str> {
        let selected = word_finder::read_selection(&self.grid, start, end)?;

        self.words.iter()
            .find(|&word| word == &selected)
            .map(String::as_str)
    }
}

// Grids are stored as a list of rows of one-letter strings
mod grid_rows {
    use serde::{Serialize, Deserialize, Serializer, Deserializer};
    use serde::de::Error as _;
    use super::Grid;

    pub fn serialize<S: Serializer>(
        grid: &Grid,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        grid.rows().collect::<Vec<&[char]>>().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Grid, D::Error> {
        let rows = Vec::<Vec<char>>::deserialize(deserializer)?;

        Grid::from_rows(rows).map_err(D::Error::custom)
    }
}
