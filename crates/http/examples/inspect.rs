//! Reads a raw header block from stdin and prints it as JSON, together with the
//! query parameters of the request target or `Location` header, if any.
//!
//! ```text
//! printf 'GET /search?q=rust&tag=a&tag=b HTTP/1.1\r\nHost: example.com\r\n\r\n' \
//!     | cargo run --example inspect
//! ```

use std::error::Error;
use std::io::{self, Read};

use micro_http_util::codec::{get_query_params, parse_headers};
use micro_http_util::protocol::{HeaderValue, HttpException};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::TRACE).with_writer(io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    if let Err(e) = run() {
        error!(status = e.http_status_code(), cause = ?e.source(), "{}", e.user_message());
        std::process::exit(1);
    }
}

fn run() -> Result<(), HttpException> {
    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw).map_err(|e| HttpException::new("failed to read stdin").with_source(e))?;

    let headers = parse_headers(&raw).map_err(HttpException::bad_request)?;
    info!(entries = headers.len(), "parsed headers");
    print_json(&headers)?;

    let target = headers.request_url().or_else(|| headers.get("Location").and_then(HeaderValue::as_str));
    if let Some(target) = target {
        let params = get_query_params(target, &[]).map_err(HttpException::bad_request)?;
        info!(params = params.len(), target, "decoded query");
        print_json(&params)?;
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), HttpException> {
    let json = serde_json::to_string_pretty(value).map_err(|e| HttpException::new("failed to render json").with_source(e))?;
    println!("{json}");
    Ok(())
}
