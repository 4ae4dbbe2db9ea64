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
use std::path::Path;
use std::io::{BufRead, BufReader, Read, Write};
use serde::{Serialize, Deserialize};

// Anything that can turn a topic name into its list of words. Unknown
// topics give an empty list.
pub trait WordSource {
    fn words(&self, topic: &str) -> &[String];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub words: Vec<String>,
}

// Topics are kept in a list rather than a map so that they are listed
// in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    topics: Vec<Topic>,
}

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Json(serde_json::Error),
    EmptyTopicName,
    DuplicateTopic(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => e.fmt(f),
            Error::Json(e) => e.fmt(f),
            Error::EmptyTopicName => write!(f, "empty topic name"),
            Error::DuplicateTopic(name) => {
                write!(f, "duplicate topic “{}”", name)
            },
        }
    }
}

impl std::error::Error for Error {}

static BUILTIN_TOPICS: [(&str, &[&str]); 4] = [
    (
        "Technology",
        &[
            "PYTHON", "FLASK", "STREAMLIT", "AIRFLOW", "PANDAS", "SQL",
            "SNOWFLAKE", "DASH", "TABLEAU", "NUMPY", "MACHINE", "LEARNING",
            "PIPELINE", "KUBERNETES",
        ],
    ),
    (
        "Sports",
        &[
            "FOOTBALL", "BASKETBALL", "TENNIS", "BASEBALL", "HOCKEY",
            "SOCCER", "CRICKET", "GOLF", "RUGBY", "WRESTLING", "BOXING",
            "MOTORSPORT", "SWIMMING", "CYCLING",
        ],
    ),
    (
        "Movies",
        &[
            "INCEPTION", "TITANIC", "AVENGERS", "GLADIATOR", "JOKER",
            "MATRIX", "STARWARS", "INTERSTELLAR", "GODFATHER", "BATMAN",
            "SUPERMAN", "HOBBIT", "JURASSIC", "ALIEN",
        ],
    ),
    (
        "Sitcoms",
        &[
            "FRIENDS", "SEINFELD", "BIGBANG", "OFFICE", "BROOKLYN",
            "CHEERS", "SCRUBS", "SIMPSONS", "FAMILYGUY", "HOWIMET", "PARKS",
            "MASH", "MODERNFAMILY", "ARRESTED",
        ],
    ),
];

// Topics that the older, database backed version of the game was
// seeded with
static STORED_TOPICS: [(&str, &[&str]); 9] = [
    (
        "Planets",
        &[
            "MERCURY", "VENUS", "EARTH", "MARS", "JUPITER", "SATURN",
            "URANUS", "NEPTUNE", "PLUTO", "ASTEROID",
        ],
    ),
    (
        "World Capitals",
        &[
            "LONDON", "PARIS", "TOKYO", "OTTAWA", "MOSCOW", "BERLIN", "ROME",
            "MADRID", "BEIJING", "DELHI",
        ],
    ),
    (
        "Famous Scientists",
        &[
            "EINSTEIN", "NEWTON", "TESLA", "CURIE", "DARWIN", "GALILEO",
            "PASTEUR", "HYPATIA", "ARCHIMEDES", "HAWKING",
        ],
    ),
    (
        "NBA Teams",
        &[
            "LAKERS", "BULLS", "CELTICS", "HEAT", "WARRIORS", "SPURS",
            "RAPTORS", "NETS", "KNICKS", "SUNS",
        ],
    ),
    (
        "NFL Teams",
        &[
            "COWBOYS", "PATRIOTS", "STEELERS", "PACKERS", "49ERS", "EAGLES",
            "SEAHAWKS", "BRONCOS", "RAVENS", "CHIEFS",
        ],
    ),
    (
        "Sitcoms",
        &[
            "FRIENDS", "SEINFELD", "OFFICE", "SCRUBS", "PARKS", "FRASIER",
            "BROOKLYN99", "MASH", "MODERNFAMILY", "HOWIMETYOURMOTHER",
        ],
    ),
    (
        "Marvel Characters",
        &[
            "SPIDERMAN", "IRONMAN", "THOR", "HULK", "LOKI", "BLACKWIDOW",
            "WOLVERINE", "STORM", "GAMORA", "DRSTRANGE",
        ],
    ),
    (
        "Harry Potter",
        &[
            "HOGWARTS", "VOLDEMORT", "HERMIONE", "RON", "DUMBLEDORE",
            "HAGRID", "SNAPE", "MALFOY", "QUIDDITCH", "GRYFFINDOR",
        ],
    ),
    (
        "Oscar Best Pictures",
        &[
            "TITANIC", "GLADIATOR", "MOONLIGHT", "GREENBOOK", "ARGO",
            "CHICAGO", "FORRESTGUMP", "BRAVEHEART", "BENHUR", "CASABLANCA",
        ],
    ),
];

fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim();

    (!word.is_empty()).then(|| word.to_uppercase())
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    fn from_static(topics: &[(&str, &[&str])]) -> Catalog {
        Catalog {
            topics: topics.iter().map(|&(name, words)| {
                Topic {
                    name: name.to_string(),
                    words: words.iter().map(|w| w.to_string()).collect(),
                }
            }).collect(),
        }
    }

    pub fn builtin() -> Catalog {
        Catalog::from_static(&BUILTIN_TOPICS)
    }

    pub fn stored() -> Catalog {
        Catalog::from_static(&STORED_TOPICS)
    }

    pub fn add_topic<I, T>(&mut self, name: &str, words: I) -> Result<(), Error>
        where I: IntoIterator<Item = T>,
              T: AsRef<str>
    {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::EmptyTopicName);
        }

        if self.topic(name).is_some() {
            return Err(Error::DuplicateTopic(name.to_string()));
        }

        self.topics.push(Topic {
            name: name.to_string(),
            words: words.into_iter()
                .filter_map(|w| normalize_word(w.as_ref()))
                .collect(),
        });

        Ok(())
    }

    pub fn topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.name == name)
    }

    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|topic| topic.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    // The JSON form is a list of {"name", "words"} objects. The
    // topics go through the same checks as add_topic.
    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, Error> {
        let topics = serde_json::from_reader::<_, Vec<Topic>>(reader)?;
        let mut catalog = Catalog::new();

        for topic in topics.into_iter() {
            catalog.add_topic(&topic.name, topic.words)?;
        }

        Ok(catalog)
    }

    pub fn load<P: AsRef<Path>>(filename: P) -> Result<Catalog, Error> {
        let file = std::fs::File::open(filename)?;

        Catalog::from_reader(BufReader::new(file))
    }

    pub fn write<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, self)?;

        Ok(())
    }
}

impl WordSource for Catalog {
    fn words(&self, topic: &str) -> &[String] {
        self.topic(topic).map(|t| t.words.as_slice()).unwrap_or(&[])
    }
}

// A word list has one word per line. Blank lines and lines starting
// with ‘#’ are ignored, except that if the first line with any text
// looks like “# Title” then it names the topic.
pub fn read_word_list<R: BufRead>(
    reader: R,
) -> Result<(Option<String>, Vec<String>), std::io::Error> {
    let mut title = None;
    let mut words = Vec::new();
    let mut seen_text = false;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(comment) = line.strip_prefix('#') {
            let comment = comment.trim();

            if !seen_text && !comment.is_empty() {
                title = Some(comment.to_string());
            }
        } else if let Some(word) = normalize_word(line) {
            words.push(word);
        }

        seen_text = true;
    }

    Ok((title, words))
}

// Add a topic from a word list file. Without a title line the topic
// is named after the file.
pub fn add_word_list_file<P: AsRef<Path>>(
    catalog: &mut Catalog,
    filename: P,
) -> Result<(), Error> {
    let filename = filename.as_ref();

    let add_context = |e: std::io::Error| {
        std::io::Error::new(
            e.kind(),
            format!("{}: {}", filename.to_string_lossy(), e),
        )
    };

    let file = std::fs::File::open(filename).map_err(add_context)?;
    let (title, words) = read_word_list(BufReader::new(file))
        .map_err(add_context)?;

    let name = match title {
        Some(title) => title,
        None => filename.file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    catalog.add_topic(&name, words)
}
