#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::{BigInt, Integer, Text};
use price_store::models::PriceRow;
use quote_ingestor::models::price_record::PriceRecord;
use tempfile::TempDir;

#[derive(QueryableByName)]
struct Cnt {
    #[diesel(sql_type = BigInt)]
    cnt: i64,
}
#[derive(QueryableByName)]
struct Name {
    #[diesel(sql_type = Text)]
    name: String,
}
#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}
#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer, column_name = "timeout")]
    busy_timeout: i32,
}

pub struct TestDb {
    _dir: TempDir,     // keep alive for the life of the test
    pub path: PathBuf, // <tmpdir>/stocks.db, not created yet
}

pub fn temp_db() -> TestDb {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("stocks.db");
    TestDb { _dir: dir, path }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record(symbol: &str, date: NaiveDate, close: f64) -> PriceRecord {
    PriceRecord {
        symbol: symbol.to_string(),
        date,
        open: close - 0.5,
        high: close + 1.0,
        low: close - 1.0,
        close,
        volume: 1000.0,
        adjclose: close,
    }
}

pub fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
    sql_query(format!("SELECT COUNT(*) AS cnt FROM {table};"))
        .get_result::<Cnt>(conn)
        .unwrap()
        .cnt
}

pub fn count_sql(conn: &mut SqliteConnection, sql: &str) -> i64 {
    sql_query(sql).get_result::<Cnt>(conn).unwrap().cnt
}

pub fn table_names(conn: &mut SqliteConnection) -> Vec<String> {
    sql_query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name;")
        .load::<Name>(conn)
        .unwrap()
        .into_iter()
        .map(|n| n.name)
        .collect()
}

pub fn rows_for(conn: &mut SqliteConnection, sym: &str) -> Vec<PriceRow> {
    use price_store::schema::time_series::dsl::*;
    time_series
        .filter(symbol.eq(sym))
        .order(date.asc())
        .select(PriceRow::as_select())
        .load(conn)
        .unwrap()
}

pub fn assert_sqlite_pragmas(conn: &mut SqliteConnection) {
    let jm: JournalMode = sql_query("PRAGMA journal_mode;").get_result(conn).unwrap();
    assert_eq!(jm.journal_mode.to_lowercase(), "wal"); // WAL is persistent per DB file

    let bt: BusyTimeout = sql_query("PRAGMA busy_timeout;").get_result(conn).unwrap();
    assert_eq!(bt.busy_timeout, 5000);
}
