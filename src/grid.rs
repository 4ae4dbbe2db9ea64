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
use rand::Rng;

// Marks a cell that no word has claimed yet. It can never be a
// letter of a word or of the noise.
pub const BLANK: char = ' ';

pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    values: Box<[char]>,
    size: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    NotSquare,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotSquare => write!(f, "grid is not square"),
        }
    }
}

impl std::error::Error for Error {}

// Number of cells in a grid of the given size. Sizes above 65535
// would overflow a u32.
pub fn n_cells(size: u32) -> usize {
    size as usize * size as usize
}

pub(crate) fn index(size: u32, row: u32, col: u32) -> usize {
    row as usize * size as usize + col as usize
}

impl Grid {
    pub fn new(size: u32) -> Grid {
        Grid {
            values: vec![BLANK; n_cells(size)].into_boxed_slice(),
            size,
        }
    }

    // Rebuild a grid from rows of letters, for example the rows of a
    // puzzle that was loaded from JSON. No rows at all gives a grid
    // of size zero, which is what Grid::new(0) writes out.
    pub fn from_rows<I, R>(rows: I) -> Result<Grid, Error>
        where I: IntoIterator<Item = R>,
              R: AsRef<[char]>
    {
        let mut values = Vec::new();
        let mut height = 0;

        for row in rows {
            values.extend_from_slice(row.as_ref());
            height += 1;
        }

        if values.len() != height * height {
            return Err(Error::NotSquare);
        }

        Ok(Grid {
            values: values.into_boxed_slice(),
            size: height as u32,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.size && col < self.size
    }

    pub fn at(&self, row: u32, col: u32) -> char {
        assert!(col < self.size);

        self.values[index(self.size, row, col)]
    }

    pub fn set(&mut self, row: u32, col: u32, letter: char) {
        assert!(col < self.size);

        self.values[index(self.size, row, col)] = letter;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() panics on a zero size
        self.values.chunks(self.size.max(1) as usize)
    }

    pub fn is_filled(&self) -> bool {
        !self.values.contains(&BLANK)
    }

    // Replace every blank cell with a random letter. The letters may
    // happen to spell other words.
    pub fn fill_noise<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let alphabet = ALPHABET.as_bytes();

        for value in self.values.iter_mut() {
            if *value == BLANK {
                *value = alphabet[rng.gen_range(0..alphabet.len())] as char;
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (row_num, row) in self.rows().enumerate() {
            if row_num > 0 {
                writeln!(f)?;
            }

            for (col, &letter) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn new_grid_is_blank() {
        let grid = Grid::new(12);

        assert_eq!(grid.size(), 12);

        for row in 0..12 {
            for col in 0..12 {
                assert_eq!(grid.at(row, col), BLANK);
            }
        }

        assert!(!grid.is_filled());
    }

    #[test]
    fn set() {
        let mut grid = Grid::new(3);

        grid.set(2, 1, 'Q');

        assert_eq!(grid.at(2, 1), 'Q');
        assert_eq!(grid.at(1, 2), BLANK);
        assert!(grid.contains(2, 2));
        assert!(!grid.contains(3, 0));
        assert!(!grid.contains(0, u32::MAX));
    }

    #[test]
    fn noise() {
        let mut grid = Grid::new(5);
        grid.set(0, 0, '4');

        grid.fill_noise(&mut StdRng::seed_from_u64(7));

        assert!(grid.is_filled());
        assert_eq!(grid.at(0, 0), '4');

        for row in grid.rows() {
            for &letter in &row[..] {
                assert!(letter == '4' || letter.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn from_rows() {
        let grid = Grid::from_rows([['A', 'B'], ['C', 'D']]).unwrap();

        assert_eq!(grid.size(), 2);
        assert_eq!(grid.at(1, 0), 'C');
        assert_eq!(&grid.to_string(), "A B\nC D");

        let empty = Grid::from_rows(Vec::<Vec<char>>::new()).unwrap();
        assert_eq!(empty.size(), 0);
        assert_eq!(empty, Grid::new(0));
        assert_eq!(&empty.to_string(), "");

        assert_eq!(
            Grid::from_rows([vec!['A', 'B'], vec!['C']]).unwrap_err(),
            Error::NotSquare,
        );
        assert_eq!(&Error::NotSquare.to_string(), "grid is not square");
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn cell_count_does_not_overflow() {
        assert_eq!(n_cells(0), 0);
        assert_eq!(n_cells(12), 144);
        assert_eq!(n_cells(70_000), 4_900_000_000usize);
        assert_eq!(index(70_000, 69_999, 69_999), 4_899_999_999usize);
    }
}
