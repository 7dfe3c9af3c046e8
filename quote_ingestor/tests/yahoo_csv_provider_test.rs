//! Exercises `YahooCsvProvider` against a one-shot HTTP server on localhost.

use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::mpsc,
    thread,
};

use chrono::NaiveDate;
use quote_ingestor::{
    errors::Error,
    fetch_prices,
    models::{date_range::DateRange, period::Period, request_params::QuoteRequest},
    providers::{ProviderError, QuoteProvider, yahoo_csv::YahooCsvProvider},
};

const BODY: &str = "Date,Open,High,Low,Close,Volume,Adj Close\r\n\
2012-12-31,10.0,11.0,9.5,10.5,1000,10.4\r\n\
2012-12-28,9.0,10.0,8.5,9.5,900\r\n\
2012-12-27,8.0,9.0,7.5,8.5,800,8.4\r\n";

/// Serves exactly one response and hands back the request line it received.
fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut chunk).expect("read");
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
        }
        let request = String::from_utf8_lossy(&buf);
        let request_line = request.lines().next().unwrap_or_default().to_string();
        tx.send(request_line).expect("send");

        let response = format!(
            "{status_line}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write");
    });

    (format!("http://{addr}/table.csv"), rx)
}

fn provider(endpoint: &str) -> YahooCsvProvider {
    let client = reqwest::Client::builder().no_proxy().build().expect("client");
    YahooCsvProvider::with_client(client, endpoint).expect("provider")
}

fn request() -> QuoteRequest {
    QuoteRequest::new(
        "ABC",
        DateRange::new(
            NaiveDate::from_ymd_opt(2012, 12, 1).unwrap(),
            NaiveDate::from_ymd_opt(2012, 12, 31).unwrap(),
        ),
        Period::Weekly,
    )
}

#[tokio::test]
async fn fetches_lines_with_zero_indexed_months() {
    let (endpoint, rx) = serve_once("HTTP/1.1 200 OK", BODY);

    let lines = provider(&endpoint).fetch_lines(&request()).await.unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Date,Open,High,Low,Close,Volume,Adj Close");

    let request_line = rx.recv().unwrap();
    assert_eq!(
        request_line,
        "GET /table.csv?s=ABC&a=11&b=1&c=2012&d=11&e=31&f=2012&y=0&g=w&ignore=.csv HTTP/1.1"
    );
}

#[tokio::test]
async fn fetch_prices_skips_short_rows() {
    let (endpoint, _rx) = serve_once("HTTP/1.1 200 OK", BODY);

    let records = fetch_prices(&provider(&endpoint), &request()).await.unwrap();
    let closes: Vec<f64> = records.iter().map(|r| r.close).collect();
    assert_eq!(closes, vec![10.5, 8.5]);
}

#[tokio::test]
async fn non_success_status_is_an_api_error() {
    let (endpoint, _rx) = serve_once("HTTP/1.1 404 Not Found", "no such symbol");

    let err = fetch_prices(&provider(&endpoint), &request()).await.unwrap_err();
    match err {
        Error::Provider(ProviderError::Api { status, message, .. }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "no such symbol");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
#[ignore]
async fn live_endpoint_returns_a_header() {
    // Needs network access and a live `table.csv` endpoint.
    let provider = YahooCsvProvider::new(
        quote_ingestor::providers::yahoo_csv::DEFAULT_ENDPOINT,
        Some(std::time::Duration::from_secs(30)),
    )
    .expect("provider");

    let lines = provider.fetch_lines(&request()).await;
    assert!(lines.is_ok(), "fetch_lines returned an error: {:?}", lines.err());
}
