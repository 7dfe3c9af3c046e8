//! Diesel table definitions for the price database.
//!
//! `TimeSeries` has no primary key in SQLite; `(symbol, date)` is declared here
//! so Diesel can address rows, and is backed by the unique index created in
//! [`crate::db::create`]. `Assets` and `GicsSectors` are created with the
//! database but nothing writes to them yet.

diesel::table! {
    /// Daily prices, unique on `(symbol, date)`.
    #[sql_name = "TimeSeries"]
    time_series (symbol, date) {
        /// Instrument symbol.
        symbol -> Text,
        /// Trading day.
        date -> Date,
        /// Opening price.
        open -> Double,
        /// Daily high.
        high -> Double,
        /// Daily low.
        low -> Double,
        /// Closing price.
        close -> Double,
        /// Volume traded.
        volume -> Double,
        /// Split/dividend adjusted close.
        adjclose -> Double,
    }
}

diesel::table! {
    /// Instrument metadata.
    #[sql_name = "Assets"]
    assets (symbol) {
        /// Instrument symbol.
        symbol -> Text,
        /// Display name.
        name -> Nullable<Text>,
        /// GICS sector reference.
        sector_id -> Nullable<Integer>,
    }
}

diesel::table! {
    /// GICS sector lookup.
    #[sql_name = "GicsSectors"]
    gics_sectors (id) {
        /// Sector code.
        id -> Integer,
        /// Sector name.
        name -> Nullable<Text>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(assets, gics_sectors, time_series);
