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

use super::grid::{Grid, BLANK};
use super::directions::{Direction, N_DIRECTIONS};
use super::counts::GridCounts;
use super::catalog::WordSource;
use super::puzzle_data::{Placement, Puzzle};
use rand::Rng;
use rand::seq::SliceRandom;
use log::{debug, warn};

pub const GRID_SIZE: u32 = 12;
pub const WORDS_PER_PUZZLE: usize = 10;
pub const MAX_ATTEMPTS: u32 = 100;
pub const MAX_RETRIES: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub size: u32,
    // Random positions tried for each word before giving up on it
    pub max_attempts: u32,
    // Number of times the whole grid is thrown away and started again
    // when not every word could be placed
    pub max_retries: u32,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            size: GRID_SIZE,
            max_attempts: MAX_ATTEMPTS,
            max_retries: MAX_RETRIES,
        }
    }
}

// Whether the word can be written starting at (row, col) without
// leaving the grid or changing a letter that is already there.
// Crossing another word on the same letter is allowed.
pub fn fits(
    grid: &Grid,
    word: &str,
    row: u32,
    col: u32,
    direction: Direction,
) -> bool {
    word.chars().enumerate().all(|(i, letter)| {
        let (row, col) = direction.cell(row, col, i as u32);

        if !grid.contains(row, col) {
            return false;
        }

        let existing = grid.at(row, col);

        existing == BLANK || existing == letter
    })
}

fn write_word(
    grid: &mut Grid,
    word: &str,
    row: u32,
    col: u32,
    direction: Direction,
) {
    for (letter, (row, col)) in word.chars()
        .zip(direction.cells(row, col, u32::MAX))
    {
        grid.set(row, col, letter);
    }
}

// Try random positions until the word fits. Nothing that is already
// in the grid is ever moved to make room.
pub fn place_word<R: Rng + ?Sized>(
    grid: &mut Grid,
    word: &str,
    max_attempts: u32,
    rng: &mut R,
) -> Option<Placement> {
    let size = grid.size();

    if size == 0 || word.is_empty() {
        return None;
    }

    for _ in 0..max_attempts {
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        let direction = Direction::ALL[rng.gen_range(0..N_DIRECTIONS)];

        if fits(grid, word, row, col, direction) {
            write_word(grid, word, row, col, direction);

            return Some(Placement {
                word: word.to_string(),
                row,
                col,
                direction,
            });
        }
    }

    None
}

// One pass over the words in the order given. Words that can’t be
// placed are left out of the result.
pub fn place_words<I, T, R>(
    grid: &mut Grid,
    words: I,
    max_attempts: u32,
    rng: &mut R,
) -> Vec<Placement>
    where I: IntoIterator<Item = T>,
          T: AsRef<str>,
          R: Rng + ?Sized
{
    let mut placements = Vec::new();

    for word in words {
        let word = word.as_ref();

        match place_word(grid, word, max_attempts, rng) {
            Some(placement) => placements.push(placement),
            None => warn!(
                "Could not place word {} after {} attempts",
                word,
                max_attempts,
            ),
        }
    }

    placements
}

// Pick up to `count` different entries from the list in a random
// order
pub fn select_words<R: Rng + ?Sized>(
    words: &[String],
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut words = words.to_vec();
    let count = count.min(words.len());

    let (selected, _) = words.partial_shuffle(rng, count);

    selected.to_vec()
}

pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Generator {
        Generator { config }
    }

    // Returns the grid before the noise is added, the placements and
    // how many passes were made
    fn place_with_retries<R: Rng + ?Sized>(
        &self,
        words: &[String],
        rng: &mut R,
    ) -> (Grid, Vec<Placement>, u32) {
        let mut grid = Grid::new(self.config.size);
        let mut solution = place_words(
            &mut grid,
            words,
            self.config.max_attempts,
            rng,
        );

        let mut retry_count = 0;

        // Start again from an empty grid rather than trying to repair
        // the one that failed
        while solution.len() < words.len() &&
            retry_count < self.config.max_retries
        {
            retry_count += 1;

            warn!(
                "Retrying word placement (attempt {}), placed {} of {} words",
                retry_count,
                solution.len(),
                words.len(),
            );

            grid = Grid::new(self.config.size);
            solution = place_words(
                &mut grid,
                words,
                self.config.max_attempts,
                rng,
            );
        }

        if solution.len() < words.len() {
            warn!(
                "Giving up after {} retries with {} of {} words placed",
                retry_count,
                solution.len(),
                words.len(),
            );
        } else {
            debug!(
                "Placed {} words after {} retries",
                solution.len(),
                retry_count,
            );
        }

        (grid, solution, retry_count + 1)
    }

    // Empty words are dropped from the list because they have nowhere
    // to go.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        mut words: Vec<String>,
        rng: &mut R,
    ) -> Puzzle {
        words.retain(|word| !word.is_empty());

        let (mut grid, solution, _) = self.place_with_retries(&words, rng);

        grid.fill_noise(rng);

        Puzzle { grid, words, solution }
    }

    pub fn generate_for_topic<S, R>(
        &self,
        source: &S,
        topic: &str,
        count: usize,
        rng: &mut R,
    ) -> Puzzle
        where S: WordSource + ?Sized,
              R: Rng + ?Sized
    {
        let candidates = source.words(topic);

        if candidates.is_empty() {
            warn!("Topic “{}” has no words", topic);
        }

        let words = select_words(candidates, count, rng);

        debug!("Selected words for “{}”: {}", topic, words.join(", "));

        self.generate(words, rng)
    }
}

impl Default for Generator {
    fn default() -> Generator {
        Generator::new(GeneratorConfig::default())
    }
}

pub fn count_visits<'a, I>(size: u32, solution: I) -> GridCounts
    where I: IntoIterator<Item = &'a Placement>
{
    let mut counts = GridCounts::new(size);

    for placement in solution {
        for (i, (row, col)) in placement.cells().enumerate() {
            if !counts.contains(row, col) {
                break;
            }

            let cell = counts.at_mut(row, col);

            if i == 0 {
                cell.starts += 1;
            }

            cell.visits += 1;
        }
    }

    counts
}
