mod common;
use common::{count, record, rows_for, temp_db, ymd};

use price_store::db::connection::connect_sqlite;
use price_store::store::{SaveReport, save_records};
use quote_ingestor::parse::parse_price_lines;

#[test]
fn single_row_end_to_end_is_saved_once() {
    let db = temp_db();
    let lines = [
        "Date,Open,High,Low,Close,Volume,Adj Close",
        "2012-03-02,10.5,11.0,10.0,10.75,120300,10.70",
    ];
    let records = parse_price_lines("ABC", &lines).unwrap();

    let first = save_records(&records, &db.path).expect("save #1");
    assert_eq!(first, SaveReport { inserted: 1, duplicates: 0 });

    let second = save_records(&records, &db.path).expect("save #2");
    assert_eq!(second, SaveReport { inserted: 0, duplicates: 1 });

    let mut conn = connect_sqlite(&db.path).unwrap();
    let rows = rows_for(&mut conn, "ABC");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, ymd(2012, 3, 2));
    assert_eq!(rows[0].close, 10.75);
}

#[test]
fn saving_the_same_batch_twice_is_idempotent() {
    let db = temp_db();
    let records: Vec<_> = ["AAA", "BBB", "CCC"]
        .iter()
        .flat_map(|s| (1..=5).map(move |d| record(s, ymd(2013, 1, d), 10.0 + d as f64)))
        .collect();

    let first = save_records(&records, &db.path).unwrap();
    assert_eq!(first.inserted, 15);

    let mut conn = connect_sqlite(&db.path).unwrap();
    let before = count(&mut conn, "TimeSeries");

    let second = save_records(&records, &db.path).unwrap();
    assert_eq!(second, SaveReport { inserted: 0, duplicates: 15 });
    assert_eq!(count(&mut conn, "TimeSeries"), before);
}

#[test]
fn first_accepted_row_wins_on_conflict() {
    let db = temp_db();
    let day = ymd(2014, 6, 2);

    save_records(&[record("XYZ", day, 10.0)], &db.path).unwrap();
    let report = save_records(&[record("XYZ", day, 99.0)], &db.path).unwrap();
    assert_eq!(report, SaveReport { inserted: 0, duplicates: 1 });

    let mut conn = connect_sqlite(&db.path).unwrap();
    let rows = rows_for(&mut conn, "XYZ");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].close, 10.0);
}

#[test]
fn duplicates_are_skipped_row_by_row() {
    let db = temp_db();
    save_records(&[record("XYZ", ymd(2014, 6, 3), 3.0)], &db.path).unwrap();

    // The conflicting row sits in the middle of the batch.
    let batch = [
        record("XYZ", ymd(2014, 6, 2), 2.0),
        record("XYZ", ymd(2014, 6, 3), 30.0),
        record("XYZ", ymd(2014, 6, 4), 4.0),
        record("XYZ", ymd(2014, 6, 4), 40.0),
    ];
    let report = save_records(&batch, &db.path).unwrap();
    assert_eq!(report, SaveReport { inserted: 2, duplicates: 2 });
    assert_eq!(report.total(), batch.len());

    let mut conn = connect_sqlite(&db.path).unwrap();
    let closes: Vec<f64> = rows_for(&mut conn, "XYZ").iter().map(|r| r.close).collect();
    assert_eq!(closes, vec![2.0, 3.0, 4.0]);
}

#[test]
fn same_date_for_different_symbols_is_not_a_conflict() {
    let db = temp_db();
    let day = ymd(2015, 1, 2);
    let report = save_records(&[record("AAA", day, 1.0), record("BBB", day, 2.0)], &db.path).unwrap();
    assert_eq!(report.inserted, 2);
}

#[test]
fn empty_batch_still_creates_the_database() {
    let db = temp_db();
    let report = save_records(&[], &db.path).unwrap();
    assert_eq!(report, SaveReport::default());
    assert!(db.path.exists());

    let mut conn = connect_sqlite(&db.path).unwrap();
    assert_eq!(count(&mut conn, "TimeSeries"), 0);
}
