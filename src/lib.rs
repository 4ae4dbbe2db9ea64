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

pub mod grid;
pub mod directions;
pub mod counts;
pub mod build;
pub mod catalog;
pub mod puzzle_data;
pub mod word_finder;
pub mod log;

pub use build::{Generator, GeneratorConfig};
pub use catalog::{Catalog, WordSource};
pub use directions::Direction;
pub use grid::Grid;
pub use puzzle_data::{Placement, Puzzle};
