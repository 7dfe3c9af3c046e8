//! Row-level statements against `TimeSeries`.

use diesel::prelude::*;
use quote_ingestor::models::price_record::PriceRecord;
use tracing::debug;

use crate::{models::NewPriceRow, schema::time_series, store::SaveReport};

/// Inserts each record, skipping those whose `(symbol, date)` already exists.
///
/// Uses `INSERT .. ON CONFLICT (symbol, date) DO NOTHING`, so a duplicate costs
/// one statement and never aborts the surrounding transaction.
pub fn insert_prices(
    conn: &mut SqliteConnection,
    records: &[PriceRecord],
) -> QueryResult<SaveReport> {
    let mut report = SaveReport::default();

    for record in records {
        let affected = diesel::insert_into(time_series::table)
            .values(NewPriceRow::from(record))
            .on_conflict((time_series::symbol, time_series::date))
            .do_nothing()
            .execute(conn)?;

        if affected == 0 {
            debug!(symbol = %record.symbol, date = %record.date, "duplicate row skipped");
            report.duplicates += 1;
        } else {
            report.inserted += affected;
        }
    }

    Ok(report)
}
