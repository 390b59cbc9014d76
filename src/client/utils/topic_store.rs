//! Persisted topic preference. A single small file under the data
//! directory holds the last topic the user analyzed; results views read
//! it back on later launches.

use std::fs;
use std::path::{Path, PathBuf};

const TOPIC_FILE: &str = "topic.txt";

fn topic_path() -> PathBuf {
    let dir = std::env::var("GAPFINDER_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    Path::new(&dir).join(TOPIC_FILE)
}

/// Read the last analyzed topic, if a previous session saved one.
pub fn load_topic() -> Option<String> {
    read_topic(&topic_path())
}

/// Persist the topic so later sessions pick it up.
pub fn save_topic(topic: &str) -> anyhow::Result<()> {
    write_topic(&topic_path(), topic)
}

fn read_topic(path: &Path) -> Option<String> {
    let contents = fs::read_to_string(path).ok()?;
    let topic = contents.trim();
    if topic.is_empty() {
        None
    } else {
        Some(topic.to_string())
    }
}

fn write_topic(path: &Path, topic: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, topic)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trips_saved_topic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs").join(TOPIC_FILE);

        write_topic(&path, "machine learning").unwrap();
        assert_eq!(read_topic(&path).as_deref(), Some("machine learning"));
    }

    #[test]
    fn test_missing_file_yields_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_topic(&dir.path().join(TOPIC_FILE)), None);
    }

    #[test]
    fn test_blank_contents_yield_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOPIC_FILE);
        fs::write(&path, "  \n").unwrap();
        assert_eq!(read_topic(&path), None);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOPIC_FILE);
        fs::write(&path, "  Rust \n").unwrap();
        assert_eq!(read_topic(&path).as_deref(), Some("Rust"));
    }
}
