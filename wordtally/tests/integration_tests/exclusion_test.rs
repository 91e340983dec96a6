// tests/integration_tests/exclusion_test.rs
use super::common::{create_exclude_file, read_output, setup_test_directory};
use anyhow::Result;
use wordtally::{Aggregator, Settings, discover_corpus, filter, process_files};

#[test]
fn test_excluded_words_move_with_their_counts() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_exclude_file(temp_dir.path(), &["the", "dog", "unicorn"])?;

    let files = discover_corpus(temp_dir.path(), &Settings::default())?;
    let table = Aggregator::default().aggregate(&files)?;
    let excluded = filter(&table, &temp_dir.path().join("exclude.txt"))?;

    assert_eq!(excluded.get("the"), Some(4));
    assert_eq!(excluded.get("dog"), Some(2));
    assert_eq!(excluded.get("unicorn"), None, "Absent words produce no entry");
    assert_eq!(excluded.len(), 2);

    assert_eq!(table.get("the"), None);
    assert_eq!(table.get("dog"), None);
    for (word, _) in excluded.iter() {
        assert_eq!(table.get(word), None, "{word} must not be in both tables");
    }

    Ok(())
}

#[test]
fn test_exclusion_file_is_not_counted() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_exclude_file(temp_dir.path(), &["zebra"])?;

    process_files(temp_dir.path())?;

    assert!(read_output(temp_dir.path(), "FILE_Z.txt")?.is_empty());
    assert!(read_output(temp_dir.path(), "excluded_words.txt")?.is_empty());

    Ok(())
}

#[test]
fn test_excluded_report_written() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_exclude_file(temp_dir.path(), &["brown", "  quick  ", "brown"])?;

    let report = process_files(temp_dir.path())?;

    assert_eq!(report.excluded_words, 2);
    assert_eq!(
        read_output(temp_dir.path(), "excluded_words.txt")?,
        vec!["brown 2", "quick 2"]
    );
    assert!(read_output(temp_dir.path(), "FILE_B.txt")?.is_empty());
    assert!(read_output(temp_dir.path(), "FILE_Q.txt")?.is_empty());

    Ok(())
}
