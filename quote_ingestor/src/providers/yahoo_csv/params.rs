use chrono::{Datelike, NaiveDate};
use reqwest::Url;

use crate::models::request_params::QuoteRequest;

/// Builds the `(name, value)` query pairs for `request`, in the order the endpoint documents them.
///
/// The endpoint counts months from zero (January is `0`); days and years are
/// sent as-is. `y=0` and `ignore=.csv` are fixed flags.
pub fn construct_params(request: &QuoteRequest) -> Vec<(&'static str, String)> {
    let (a, b, c) = date_parts(request.range.start);
    let (d, e, f) = date_parts(request.range.end);

    vec![
        ("s", request.symbol.clone()),
        ("a", a),
        ("b", b),
        ("c", c),
        ("d", d),
        ("e", e),
        ("f", f),
        ("y", "0".to_string()),
        ("g", request.period.code().to_string()),
        ("ignore", ".csv".to_string()),
    ]
}

/// Full request URL for `request` against `endpoint`.
///
/// Existing query pairs on `endpoint` are kept and the request pairs are appended.
pub fn request_url(endpoint: &Url, request: &QuoteRequest) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .extend_pairs(construct_params(request));
    url
}

fn date_parts(date: NaiveDate) -> (String, String, String) {
    (
        date.month0().to_string(),
        date.day().to_string(),
        date.year().to_string(),
    )
}
