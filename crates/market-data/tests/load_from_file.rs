use std::io::Write;

use market_data::{Error, load_series_from_path};
use tempfile::tempdir;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn loads_a_series_from_disk() {
    let dir = tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "prices.csv",
        "Date,Open,High,Low,Close,Volume\n\
         2024-01-03,10,11,9,10.5,1000\n\
         2024-01-02,9,10,8,9.5,800\n",
    );

    let series = load_series_from_path(&path, 2).unwrap();

    assert_eq!(series.len(), 2);
    // Rows come back sorted even when the file is not.
    assert_eq!(series.bars()[0].date.to_string(), "2024-01-02");
    assert_eq!(series.bars()[1].date.to_string(), "2024-01-03");
}

#[test]
fn missing_file_surfaces_as_io_error() {
    let dir = tempdir().unwrap();
    let err = load_series_from_path(dir.path().join("nope.csv"), 1).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}
