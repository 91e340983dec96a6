// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_exclude_file(dir: &Path, words: &[&str]) -> Result<()> {
    let content = words.join("\n");
    create_test_file(dir, "exclude.txt", &content)
}

pub fn read_output(dir: &Path, name: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(dir.join("Output").join(name))?;
    Ok(content.lines().map(String::from).collect())
}

pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(
        temp_dir.path(),
        "story.txt",
        "The quick brown fox jumps over the lazy dog.\nThe dog sleeps!",
    )?;

    create_test_file(
        temp_dir.path(),
        "notes.txt",
        "Quick notes; brown paper, 3 pencils?\r\nthe end",
    )?;

    create_test_file(temp_dir.path(), "empty.txt", "")?;

    create_test_file(temp_dir.path(), "readme.md", "The markdown is ignored")?;

    create_test_file(temp_dir.path(), "archive/old.txt", "Archived text is ignored")?;

    Ok(temp_dir)
}
