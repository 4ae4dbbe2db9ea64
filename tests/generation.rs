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

use std::collections::HashMap;
use rand::{SeedableRng, rngs::StdRng};
use wordgrid::build::{self, Generator, GeneratorConfig};
use wordgrid::catalog::{self, Catalog, WordSource};
use wordgrid::grid::BLANK;
use wordgrid::word_finder::Finder;
use wordgrid::{Direction, Puzzle};

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

fn check_puzzle(puzzle: &Puzzle) {
    let size = puzzle.grid.size();

    for row in puzzle.grid.rows() {
        for &letter in row.iter() {
            assert_ne!(letter, BLANK);
            assert!(letter.is_ascii_uppercase() || letter.is_ascii_digit());
        }
    }

    let mut claimed = HashMap::new();

    for placement in puzzle.solution.iter() {
        assert!(puzzle.words.contains(&placement.word));
        assert_eq!(
            placement.read(&puzzle.grid).as_deref(),
            Some(placement.word.as_str()),
        );

        for ((row, col), letter) in placement.cells()
            .zip(placement.word.chars())
        {
            assert!(row < size && col < size);

            let previous = claimed.insert((row, col), letter);
            assert!(previous.is_none() || previous == Some(letter));
        }
    }
}

#[test]
fn lion_and_tiger() {
    let mut rng = StdRng::seed_from_u64(12);
    let puzzle = Generator::default().generate(
        words(&["LION", "TIGER"]),
        &mut rng,
    );

    assert_eq!(puzzle.grid.size(), 12);
    assert_eq!(&puzzle.words, &["LION", "TIGER"]);
    assert_eq!(
        &puzzle.solution.iter().map(|p| p.word.as_str()).collect::<Vec<_>>(),
        &["LION", "TIGER"],
    );
    check_puzzle(&puzzle);
}

#[test]
fn empty_topic() {
    let mut rng = StdRng::seed_from_u64(13);
    let catalog = Catalog::builtin();

    let puzzle = Generator::default().generate_for_topic(
        &catalog,
        "Knitting",
        10,
        &mut rng,
    );

    assert!(puzzle.words.is_empty());
    assert!(puzzle.solution.is_empty());
    assert!(puzzle.grid.is_filled());
    check_puzzle(&puzzle);
}

#[test]
fn word_longer_than_grid() {
    let mut rng = StdRng::seed_from_u64(14);
    let generator = Generator::new(GeneratorConfig {
        size: 8,
        ..GeneratorConfig::default()
    });

    let puzzle = generator.generate(
        words(&["OWL", "HIPPOPOTAMUS", "EMU"]),
        &mut rng,
    );

    assert_eq!(puzzle.words.len(), 3);
    assert!(puzzle.placement("HIPPOPOTAMUS").is_none());
    assert_eq!(&puzzle.missing_words().collect::<Vec<_>>(), &["HIPPOPOTAMUS"]);
    check_puzzle(&puzzle);
}

#[test]
fn full_length_word() {
    let mut rng = StdRng::seed_from_u64(15);

    for _ in 0..10 {
        let puzzle = Generator::default().generate(
            words(&["INTERSTELLAR"]),
            &mut rng,
        );

        check_puzzle(&puzzle);

        for placement in puzzle.solution.iter() {
            match placement.direction {
                Direction::Diagonal => {
                    assert_eq!((placement.row, placement.col), (0, 0));
                },
                Direction::Horizontal => assert_eq!(placement.col, 0),
                Direction::Vertical => assert_eq!(placement.row, 0),
            }
        }
    }
}

#[test]
fn same_seed_same_puzzle() {
    let catalog = Catalog::builtin();
    let generator = Generator::default();

    let a = generator.generate_for_topic(
        &catalog,
        "Movies",
        10,
        &mut StdRng::seed_from_u64(42),
    );
    let b = generator.generate_for_topic(
        &catalog,
        "Movies",
        10,
        &mut StdRng::seed_from_u64(42),
    );

    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap(),
    );
}

#[test]
fn every_builtin_topic() {
    let catalog = Catalog::builtin();
    let generator = Generator::default();
    let mut rng = StdRng::seed_from_u64(16);
    let mut finder = Finder::new();

    for topic in catalog.topic_names() {
        let puzzle = generator.generate_for_topic(
            &catalog,
            topic,
            build::WORDS_PER_PUZZLE,
            &mut rng,
        );

        assert_eq!(puzzle.words.len(), build::WORDS_PER_PUZZLE);

        let mut selected = puzzle.words.clone();
        selected.sort_unstable();
        selected.dedup();
        assert_eq!(selected.len(), puzzle.words.len());
        assert!(puzzle.words.iter().all(|w| catalog.words(topic).contains(w)));

        check_puzzle(&puzzle);

        let counts = build::count_visits(puzzle.grid.size(), &puzzle.solution);

        for placement in puzzle.solution.iter() {
            assert!(finder.find(&puzzle.grid, &placement.word).is_some());
            assert!(counts.at(placement.row, placement.col).starts >= 1);

            let end = placement.end();
            assert_eq!(
                puzzle.check_selection((placement.row, placement.col), end),
                Some(placement.word.as_str()),
            );
        }
    }
}

#[test]
fn json_round_trip() {
    let mut rng = StdRng::seed_from_u64(17);
    let puzzle = Generator::default().generate(
        words(&["MERCURY", "VENUS", "EARTH"]),
        &mut rng,
    );

    let json = serde_json::to_string(&puzzle).unwrap();
    let parsed = serde_json::from_str::<Puzzle>(&json).unwrap();

    assert_eq!(parsed, puzzle);
}

#[test]
fn word_list_file() {
    let dir = std::env::temp_dir()
        .join(format!("wordgrid-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let named = dir.join("capitals.txt");
    std::fs::write(&named, "london\nparis\n\ntokyo\n").unwrap();

    let titled = dir.join("nba.txt");
    std::fs::write(&titled, "# NBA Teams\nLAKERS\nBULLS\n").unwrap();

    let mut catalog = Catalog::new();
    catalog::add_word_list_file(&mut catalog, &named).unwrap();
    catalog::add_word_list_file(&mut catalog, &titled).unwrap();

    assert_eq!(
        &catalog.topic_names().collect::<Vec<_>>(),
        &["capitals", "NBA Teams"],
    );
    assert_eq!(catalog.words("capitals"), &["LONDON", "PARIS", "TOKYO"]);

    let err = catalog::add_word_list_file(
        &mut catalog,
        dir.join("missing.txt"),
    ).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn stored_sitcoms() {
    let catalog = Catalog::stored();
    let generator = Generator::default();
    let mut rng = StdRng::seed_from_u64(18);

    for _ in 0..5 {
        let puzzle = generator.generate_for_topic(
            &catalog,
            "Sitcoms",
            10,
            &mut rng,
        );

        assert_eq!(puzzle.grid.size(), 12);
        assert_eq!(puzzle.words.len(), 10);
        assert!(puzzle.words.iter().any(|w| w == "HOWIMETYOURMOTHER"));
        assert!(puzzle.placement("HOWIMETYOURMOTHER").is_none());
        assert!(puzzle.missing_words().any(|w| w == "HOWIMETYOURMOTHER"));
        check_puzzle(&puzzle);
    }
}

#[test]
fn empty_grid_round_trip() {
    let mut rng = StdRng::seed_from_u64(19);
    let generator = Generator::new(GeneratorConfig {
        size: 0,
        ..GeneratorConfig::default()
    });

    let puzzle = generator.generate(words(&["CAT"]), &mut rng);

    assert!(puzzle.solution.is_empty());

    let json = serde_json::to_string(&puzzle).unwrap();
    assert!(json.contains("\"grid\":[]"));

    let parsed = serde_json::from_str::<Puzzle>(&json).unwrap();

    assert_eq!(parsed, puzzle);
}
