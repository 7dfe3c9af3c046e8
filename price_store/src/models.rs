//! Diesel models mapping [`PriceRecord`]s to [`crate::schema::time_series`] rows.

use chrono::NaiveDate;
use diesel::prelude::*;
use quote_ingestor::models::price_record::PriceRecord;

use crate::schema::time_series;

/// A row in [`crate::schema::time_series`], as read back from the database.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = time_series, check_for_backend(diesel::sqlite::Sqlite))]
pub struct PriceRow {
    /// Instrument symbol.
    pub symbol: String,
    /// Trading day.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Daily high.
    pub high: f64,
    /// Daily low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Volume traded.
    pub volume: f64,
    /// Split/dividend adjusted close.
    pub adjclose: f64,
}

/// Insertable view of a [`PriceRecord`], borrowing its symbol.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = time_series)]
pub struct NewPriceRow<'a> {
    /// Instrument symbol.
    pub symbol: &'a str,
    /// Trading day.
    pub date: NaiveDate,
    /// Opening price.
    pub open: f64,
    /// Daily high.
    pub high: f64,
    /// Daily low.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Volume traded.
    pub volume: f64,
    /// Split/dividend adjusted close.
    pub adjclose: f64,
}

impl<'a> From<&'a PriceRecord> for NewPriceRow<'a> {
    fn from(r: &'a PriceRecord) -> Self {
        Self {
            symbol: &r.symbol,
            date: r.date,
            open: r.open,
            high: r.high,
            low: r.low,
            close: r.close,
            volume: r.volume,
            adjclose: r.adjclose,
        }
    }
}

impl From<PriceRow> for PriceRecord {
    fn from(row: PriceRow) -> Self {
        Self {
            symbol: row.symbol,
            date: row.date,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
            adjclose: row.adjclose,
        }
    }
}
