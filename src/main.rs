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

// Reads a puzzle in the JSON format written by generate-puzzle from
// stdin and reports where each of its words can be found.

use std::process::ExitCode;
use clap::Parser;
use wordgrid::puzzle_data::Puzzle;
use wordgrid::word_finder::{Finder, Selection};

#[derive(Parser)]
#[command(name = "Find words")]
struct Cli {
    #[arg(long, value_name = "ROW,COL,ROW,COL")]
    select: Option<Selection>,
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    wordgrid::log::init_logger(cli.verbose);

    let puzzle = match serde_json::from_reader::<_, Puzzle>(std::io::stdin()) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("stdin: {}", e);
            return ExitCode::FAILURE;
        },
    };

    if let Some(selection) = cli.select {
        return match puzzle.check_selection(selection.start, selection.end) {
            Some(word) => {
                println!("{}", word);
                ExitCode::SUCCESS
            },
            None => {
                eprintln!("selection doesn’t spell any of the words");
                ExitCode::FAILURE
            },
        };
    }

    let mut finder = Finder::new();
    let mut all_found = true;

    for word in puzzle.words.iter() {
        match finder.find(&puzzle.grid, word) {
            Some(placement) => {
                if puzzle.placement(word) != Some(&placement) {
                    log::debug!("{} also appears by chance", word);
                }
                println!("{}", placement);
            },
            None => {
                println!("{} not found", word);
                all_found = false;
            },
        }
    }

    for placement in puzzle.solution.iter() {
        if placement.read(&puzzle.grid).as_deref() != Some(placement.word.as_str()) {
            log::warn!("Answer key entry “{}” doesn’t match the grid", placement);
            all_found = false;
        }
    }

    if all_found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
