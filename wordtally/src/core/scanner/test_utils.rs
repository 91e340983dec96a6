use anyhow::Result;
use std::fs::{self, File};
use std::io::Write as _;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_file(dir: &TempDir, name: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.path().join(name);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(&file_path)?;
    file.write_all(content.as_bytes())?;
    Ok(file_path)
}

pub fn setup_test_directory() -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(&dir, "file1.txt", "Hello World")?;
    create_test_file(&dir, "file2.txt", "Hello GitHub")?;
    create_test_file(&dir, "mixed.txt", "Apple, banana; APPLE!\n42 cherries?\r\n")?;

    create_test_file(&dir, "exclude.txt", "hello\n")?;
    create_test_file(&dir, "notes.md", "Not part of the corpus")?;
    create_test_file(&dir, "nested/deep.txt", "Never read")?;

    Ok(dir)
}
