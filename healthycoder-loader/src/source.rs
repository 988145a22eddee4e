use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use healthycoder_model::person::Person;
use log::{debug, info};

use crate::table::parse_table;
use crate::LoaderError;

#[mockall::automock]
pub trait PersonSource: Send + Sync {
    fn load(&self) -> Result<Vec<Person>, LoaderError>;
}

/// Table stored in a file, usually with a header line.
pub struct FileSource {
    path: PathBuf,
    skip_lines: usize,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, skip_lines: usize) -> Self {
        Self {
            path: path.into(),
            skip_lines,
        }
    }
}

impl PersonSource for FileSource {
    fn load(&self) -> Result<Vec<Person>, LoaderError> {
        let file = File::open(&self.path)?;
        let people = parse_table(BufReader::new(file), self.skip_lines)?;

        info!(
            "Loaded {} people from {}",
            people.len(),
            self.path.display()
        );
        debug!("Loaded people: {:?}", people);
        Ok(people)
    }
}

/// Table given as literal text, one `weight,height` pair per line.
pub struct InlineSource {
    table: String,
}

impl InlineSource {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

impl PersonSource for InlineSource {
    fn load(&self) -> Result<Vec<Person>, LoaderError> {
        parse_table(self.table.as_bytes(), 0)
    }
}
