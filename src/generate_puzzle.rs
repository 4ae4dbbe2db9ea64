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

use std::{process::ExitCode, ffi::OsString};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use wordgrid::build::{self, Generator, GeneratorConfig};
use wordgrid::catalog::Catalog;
use wordgrid::counts::GridCounts;
use wordgrid::puzzle_data::Puzzle;

#[derive(Parser)]
#[command(name = "Generate puzzle")]
struct Cli {
    #[arg(short, long, value_name = "TOPIC", default_value = "Technology")]
    topic: String,
    #[arg(short = 'n', long, value_name = "COUNT",
          default_value_t = build::WORDS_PER_PUZZLE)]
    count: usize,
    #[arg(short, long, value_name = "SIZE", default_value_t = build::GRID_SIZE,
          value_parser = clap::value_parser!(u32).range(1..=64))]
    size: u32,
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
    #[arg(short, long, value_name = "FILE", conflicts_with = "stored")]
    catalog: Option<OsString>,
    // Use the topics the database version of the game was seeded with
    #[arg(long)]
    stored: bool,
    #[arg(short, long)]
    list_topics: bool,
    #[arg(short = 'H', long)]
    human_readable: bool,
    #[arg(short, long)]
    verbose: bool,
}

// Shows the letters of the answer key and hides the noise. Cells
// where words cross are marked with ‘*’ underneath.
fn print_answers(puzzle: &Puzzle, counts: &GridCounts) {
    for row in 0..counts.size() {
        for col in 0..counts.size() {
            let letter = if counts.at(row, col).visits > 0 {
                puzzle.grid.at(row, col)
            } else {
                '.'
            };

            print!(" {} ", letter);
        }

        println!();

        for col in 0..counts.size() {
            let cell = counts.at(row, col);

            if cell.visits > 1 {
                print!(" * ");
            } else {
                print!("   ");
            }
        }

        println!();
    }
}

fn print_word_list(words: &[String]) {
    let mut x = 0;

    for word in words.iter() {
        let length = word.chars().count();
        let mut spaces = (x != 0) as usize;

        if x + spaces + length > 80 {
            println!();
            x = 0;
            spaces = 0;
        } else if spaces > 0 {
            print!(" ");
        }

        print!("{}", word);

        x += length + spaces;
    }

    println!();
}

fn print_human_readable(puzzle: &Puzzle) {
    println!("{}", puzzle.grid);

    println!("\nWords\n");
    print_word_list(&puzzle.words);

    let counts = build::count_visits(puzzle.grid.size(), &puzzle.solution);

    println!("\nAnswers\n");
    print_answers(puzzle, &counts);

    println!();

    for placement in puzzle.solution.iter() {
        println!("{}", placement);
    }

    let missing = puzzle.missing_words().collect::<Vec<_>>();

    if !missing.is_empty() {
        println!("\nNot placed\n");

        for word in missing {
            println!("{}", word);
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    wordgrid::log::init_logger(cli.verbose);

    let catalog = match cli.catalog {
        Some(ref filename) => match Catalog::load(filename) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{}: {}", filename.to_string_lossy(), e);
                return ExitCode::FAILURE;
            },
        },
        None if cli.stored => Catalog::stored(),
        None => Catalog::builtin(),
    };

    if cli.list_topics {
        for name in catalog.topic_names() {
            println!("{}", name);
        }

        return ExitCode::SUCCESS;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = Generator::new(GeneratorConfig {
        size: cli.size,
        ..GeneratorConfig::default()
    });

    let puzzle = generator.generate_for_topic(
        &catalog,
        &cli.topic,
        cli.count,
        &mut rng,
    );

    if cli.human_readable {
        print_human_readable(&puzzle);
    } else {
        match serde_json::to_string(&puzzle) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    }

    ExitCode::SUCCESS
}
