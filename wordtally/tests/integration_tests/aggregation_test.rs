// tests/integration_tests/aggregation_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;
use wordtally::{Aggregator, FrequencyTable, Settings, discover_corpus};

#[test]
fn test_aggregates_discovered_corpus() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let files = discover_corpus(temp_dir.path(), &Settings::default())?;
    assert_eq!(files.len(), 3, "Only top-level .txt files are counted");

    let table = Aggregator::default().aggregate(&files)?;

    assert_eq!(table.get("the"), Some(4));
    assert_eq!(table.get("quick"), Some(2));
    assert_eq!(table.get("dog"), Some(2));
    assert_eq!(table.get("3"), Some(1));
    assert_eq!(table.get("markdown"), None);
    assert_eq!(table.get("archived"), None);

    Ok(())
}

#[test]
fn test_multi_file_counts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "testFile1.txt", "Hello World")?;
    create_test_file(temp_dir.path(), "testFile2.txt", "Hello GitHub")?;

    let files = discover_corpus(temp_dir.path(), &Settings::default())?;
    let table = Aggregator::new(2).aggregate(&files)?;

    assert_eq!(table.get("hello"), Some(2));
    assert_eq!(table.get("world"), Some(1));
    assert_eq!(table.get("github"), Some(1));

    Ok(())
}

#[test]
fn test_many_files_on_small_pool() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for index in 0..64 {
        create_test_file(
            temp_dir.path(),
            &format!("part{index:02}.txt"),
            "alpha beta\nbeta gamma gamma\n",
        )?;
    }

    let files = discover_corpus(temp_dir.path(), &Settings::default())?;
    let table = Aggregator::new(3).aggregate(&files)?;

    assert_eq!(table.get("alpha"), Some(64));
    assert_eq!(table.get("beta"), Some(128));
    assert_eq!(table.get("gamma"), Some(128));

    Ok(())
}

#[test]
fn test_shared_table_under_concurrent_writers() {
    let table = Arc::new(FrequencyTable::new());
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let table = Arc::clone(&table);
            thread::spawn(move || {
                for _ in 0..1_000 {
                    table.increment("same");
                    table.increment(&format!("own{worker}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("writer thread panicked");
    }

    assert_eq!(table.get("same"), Some(4_000));
    for worker in 0..4 {
        assert_eq!(table.get(&format!("own{worker}")), Some(1_000));
    }
    assert_eq!(table.snapshot().len(), 5);
}
