use serde::de::DeserializeOwned;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::store::{Error, Result};

const BOUNDARY: &str = "---";

/// A content file split into its YAML front matter and its markdown body.
#[derive(Debug)]
pub struct Document<T> {
    pub front_matter: T,
    pub body: String,
}

pub fn read<T: DeserializeOwned>(path: &Path) -> Result<Document<T>> {
    let file = std::fs::OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|error| Error::IO {
            error,
            path: PathBuf::from(path),
        })?;

    parse(std::io::BufReader::new(file), path)
}

/// The front matter starts on the first line and ends on the next `---`
/// line, trailing whitespace on the boundaries is ignored.
pub fn parse<T, R>(reader: R, path: &Path) -> Result<Document<T>>
where
    T: DeserializeOwned,
    R: BufRead,
{
    let missing = |reason: &str| Error::Deserialize {
        error: String::from(reason),
        path: PathBuf::from(path),
    };
    let mut lines = reader.lines().map(|line| {
        line.map_err(|error| Error::IO {
            error,
            path: PathBuf::from(path),
        })
    });

    match lines.next().transpose()? {
        Some(line) if line.trim_end() == BOUNDARY => (),
        _ => return Err(missing("front matter is missing")),
    }

    let mut front_matter = String::new();
    let mut is_closed = false;
    for line in lines.by_ref() {
        let line = line?;
        if line.trim_end() == BOUNDARY {
            is_closed = true;
            break;
        }
        front_matter.push_str(&line);
        front_matter.push('\n');
    }
    if !is_closed {
        return Err(missing("front matter is not terminated"));
    }

    let mut body = String::new();
    for line in lines {
        body.push_str(&line?);
        body.push('\n');
    }

    let front_matter =
        serde_yml::from_str(&front_matter).map_err(|error| Error::Deserialize {
            error: format!("front matter is not valid YAML: {}", error),
            path: PathBuf::from(path),
        })?;

    Ok(Document { front_matter, body })
}
