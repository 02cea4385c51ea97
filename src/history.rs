use chrono::prelude::*;
use directories::ProjectDirs;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// One finished game, as it lands in the log.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub rounds: usize,
    pub score: u32,
    pub word_list: String,
}

/// Append a record to the log under the config dir. Silently does nothing
/// when no config dir can be resolved.
pub fn append(record: &GameRecord) -> io::Result<()> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "jumbl") {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        append_to(&config_dir.join("log.csv"), record)?;
    }
    Ok(())
}

/// Append a record to an explicit path, emitting the CSV header on the
/// first write.
pub fn append_to(path: &Path, record: &GameRecord) -> io::Result<()> {
    let needs_header = !path.exists();

    let mut log_file = OpenOptions::new()
        .write(true)
        .append(true)
        .create(true)
        .open(path)?;

    if needs_header {
        writeln!(log_file, "date,rounds,score,word_list")?;
    }

    writeln!(
        log_file,
        "{},{},{},{}",
        Local::now().format("%c"),
        record.rounds,
        record.score,
        record.word_list,
    )
}
