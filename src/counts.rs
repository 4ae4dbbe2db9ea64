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

// How many words of the answer key begin on or cross each cell

use super::grid::{index, n_cells};

#[derive(Debug)]
pub struct GridCounts {
    values: Box<[CellCounts]>,
    size: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellCounts {
    pub starts: u8,
    pub visits: u8,
}

impl GridCounts {
    pub fn new(size: u32) -> GridCounts {
        GridCounts {
            values: vec![CellCounts::default(); n_cells(size)]
                .into_boxed_slice(),
            size,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.size && col < self.size
    }

    pub fn at(&self, row: u32, col: u32) -> &CellCounts {
        assert!(col < self.size);

        &self.values[index(self.size, row, col)]
    }

    pub fn at_mut(&mut self, row: u32, col: u32) -> &mut CellCounts {
        assert!(col < self.size);

        &mut self.values[index(self.size, row, col)]
    }

    // Number of cells shared by more than one word
    pub fn crossings(&self) -> usize {
        self.values.iter().filter(|counts| counts.visits > 1).count()
    }
}
