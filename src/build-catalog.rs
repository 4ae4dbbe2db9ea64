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

use std::process::ExitCode;
use std::io::{BufWriter, Write};
use std::fs::File;
use std::ffi::OsString;
use clap::Parser;
use wordgrid::build::GRID_SIZE;
use wordgrid::catalog::{self, Catalog, WordSource};

#[derive(Parser)]
#[command(name = "Build catalog")]
struct Cli {
    #[arg(value_name = "WORD_LIST")]
    word_lists: Vec<OsString>,
    #[arg(short, long, value_name = "FILE")]
    output: OsString,
    // Also include the topics that are built in to generate-puzzle
    #[arg(short, long)]
    builtin: bool,
    // Also include the topics the database version was seeded with
    #[arg(short, long)]
    stored: bool,
    #[arg(short, long)]
    verbose: bool,
}

// Words longer than the default grid can never be placed, but they are
// still kept in case the catalog is used with a bigger grid.
fn report_long_words(catalog: &Catalog) {
    for name in catalog.topic_names() {
        let Some(topic) = catalog.topic(name)
        else {
            continue;
        };

        for word in topic.words.iter() {
            if word.chars().count() > GRID_SIZE as usize {
                log::warn!(
                    "{}: “{}” is longer than {} letters",
                    name,
                    word,
                    GRID_SIZE,
                );
            }
        }
    }
}

// Both built-in sets have a “Sitcoms” topic. The first one added wins.
fn merge_topics(catalog: &mut Catalog, other: &Catalog) {
    for name in other.topic_names() {
        if let Err(e) = catalog.add_topic(name, other.words(name)) {
            log::warn!("Skipping topic: {}", e);
        }
    }
}

fn write_catalog(catalog: &Catalog, filename: &OsString) -> Result<(), catalog::Error> {
    let mut writer = BufWriter::new(File::create(filename)?);

    catalog.write(&mut writer)?;
    writeln!(&mut writer)?;
    writer.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    wordgrid::log::init_logger(cli.verbose);

    let mut catalog = Catalog::new();

    if cli.builtin {
        merge_topics(&mut catalog, &Catalog::builtin());
    }

    if cli.stored {
        merge_topics(&mut catalog, &Catalog::stored());
    }

    for filename in cli.word_lists.iter() {
        if let Err(e) = catalog::add_word_list_file(&mut catalog, filename) {
            match e {
                // I/O errors already mention the filename
                catalog::Error::Io(_) => eprintln!("{}", e),
                _ => eprintln!("{}: {}", filename.to_string_lossy(), e),
            }
            return ExitCode::FAILURE;
        }
    }

    report_long_words(&catalog);

    if let Err(e) = write_catalog(&catalog, &cli.output) {
        eprintln!("{}: {}", cli.output.to_string_lossy(), e);
        return ExitCode::FAILURE;
    }

    log::info!("Wrote {} topics", catalog.len());

    ExitCode::SUCCESS
}
