//! End-to-end tests for reading review files from disk and mapping them to
//! reviews.

use std::io::Write;

use camino::Utf8PathBuf;
use reviewgrid::{Coerced, LoadError, ReviewGrid, map_records, read_rows};
use rstest::rstest;
use tempfile::NamedTempFile;

const HEADER: &str = "review_id,product_id,review_date,author,rating,helpful,image_available,title,review,link,author_profile";

fn write_review_file(contents: &str) -> (NamedTempFile, Utf8PathBuf) {
    let mut file = NamedTempFile::new()
        .unwrap_or_else(|error| panic!("failed to create temporary file: {error}"));
    file.write_all(contents.as_bytes())
        .unwrap_or_else(|error| panic!("failed to write temporary file: {error}"));
    let path = Utf8PathBuf::try_from(file.path().to_path_buf())
        .unwrap_or_else(|error| panic!("temporary path is not UTF-8: {error}"));
    (file, path)
}

#[rstest]
#[case::unix_newlines("\n")]
#[case::windows_newlines("\r\n")]
fn reviews_load_in_source_order(#[case] newline: &str) {
    let contents = [
        HEADER,
        "R1,B01,\"April 8, 2018\",Anton,5,3,0,Great,Works well,/review/R1,/gp/profile/A1",
        "R2,B01,\"May 1, 2018\",Bea,2,none,1,Meh,\"Broke, twice\",/review/R2,/gp/profile/A2",
        "",
    ]
    .join(newline);
    let (_file, path) = write_review_file(&contents);

    let rows = read_rows(&path, b',').unwrap_or_else(|error| panic!("load failed: {error}"));
    let reviews = map_records(&rows);

    assert_eq!(reviews.len(), 2);
    let ids: Vec<_> = reviews.iter().map(|review| review.review_id()).collect();
    assert_eq!(ids, vec![Some("R1"), Some("R2")]);
    assert_eq!(reviews.first().map(|review| review.rating()), Some(Coerced::new(5)));
    assert_eq!(
        reviews.get(1).and_then(|review| review.review()),
        Some("Broke, twice")
    );
    assert_eq!(
        reviews.get(1).and_then(|review| review.link()),
        Some("https://www.amazon.com/review/R2")
    );
    assert!(
        reviews
            .get(1)
            .is_some_and(|review| review.helpful().is_not_a_number())
    );
}

#[test]
fn files_without_a_final_newline_lose_their_last_review() {
    let contents = format!(
        "{HEADER}\nR1,B01,d,a,5,0,0,t,r,/review/R1,/p\nR2,B01,d,a,4,0,0,t,r,/review/R2,/p"
    );
    let (_file, path) = write_review_file(&contents);

    let rows = read_rows(&path, b',').unwrap_or_else(|error| panic!("load failed: {error}"));
    let reviews = map_records(&rows);

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews.first().and_then(|review| review.review_id()), Some("R1"));
}

#[test]
fn tab_separated_files_load_with_a_tab_delimiter() {
    let contents = format!(
        "{}\nR1\tB01\td\ta\t3\t0\t0\tt\tr\t/review/R1\t/p\n",
        HEADER.replace(',', "\t")
    );
    let (_file, path) = write_review_file(&contents);

    let rows = read_rows(&path, b'\t').unwrap_or_else(|error| panic!("load failed: {error}"));
    let mut grid = ReviewGrid::new();
    grid.load(map_records(&rows));

    assert!(grid.is_loaded());
    assert_eq!(grid.visible_records().len(), 1);
}

#[test]
fn short_rows_become_partial_reviews() {
    let contents = format!("{HEADER}\nR1,B01,d\n");
    let (_file, path) = write_review_file(&contents);

    let rows = read_rows(&path, b',').unwrap_or_else(|error| panic!("load failed: {error}"));
    let reviews = map_records(&rows);

    assert_eq!(reviews.len(), 1);
    let review = reviews
        .first()
        .unwrap_or_else(|| panic!("expected one review"));
    assert_eq!(review.review_date(), Some("d"));
    assert_eq!(review.author(), None);
    assert_eq!(review.link(), None);
}

#[test]
fn missing_files_report_the_path() {
    let dir = tempfile::tempdir()
        .unwrap_or_else(|error| panic!("failed to create temporary directory: {error}"));
    let path = Utf8PathBuf::try_from(dir.path().join("absent.csv"))
        .unwrap_or_else(|error| panic!("temporary path is not UTF-8: {error}"));

    let result = read_rows(&path, b',');

    assert!(
        matches!(&result, Err(LoadError::Io { path: reported, .. }) if reported == path.as_str()),
        "unexpected result: {result:?}"
    );
}
