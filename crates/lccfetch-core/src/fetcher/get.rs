//! Single-stream HTTP GET into a local file.
//!
//! The destination is opened (truncating) only once the final response status
//! is known to be 200 and the first body bytes arrive, so failed requests
//! never create or clobber a file.

use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::{FetchError, FetchOptions};

const MAX_REDIRECTS: u32 = 10;

/// Status code from an HTTP status line (`HTTP/1.1 200 OK`), if `line` is one.
fn parse_status_line(line: &[u8]) -> Option<u32> {
    let line = std::str::from_utf8(line).ok()?;
    if !line.starts_with("HTTP/") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}

/// GETs `url` and streams a 200 body into `path`. Returns the number of bytes written.
pub(super) fn get_to_file(url: &str, path: &Path, opts: &FetchOptions) -> Result<u64, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTS)?;
    easy.buffer_size(opts.chunk_size)?;
    easy.connect_timeout(opts.timeout)?;
    // Abort if the body stalls (< 1 byte/s) for the whole timeout window.
    easy.low_speed_limit(1)?;
    easy.low_speed_time(opts.timeout)?;

    let status = Cell::new(0u32);
    let written = Cell::new(0u64);
    let file: RefCell<Option<File>> = RefCell::new(None);
    let write_err: RefCell<Option<std::io::Error>> = RefCell::new(None);

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|line| {
            // Redirect hops each send a status line; the last one wins.
            if let Some(code) = parse_status_line(line) {
                status.set(code);
            }
            true
        })?;
        transfer.write_function(|data| {
            if status.get() != 200 {
                return Ok(0);
            }
            let mut slot = file.borrow_mut();
            if slot.is_none() {
                match File::create(path) {
                    Ok(f) => *slot = Some(f),
                    Err(e) => {
                        *write_err.borrow_mut() = Some(e);
                        return Ok(0);
                    }
                }
            }
            if let Some(f) = slot.as_mut() {
                if let Err(e) = f.write_all(data) {
                    *write_err.borrow_mut() = Some(e);
                    return Ok(0);
                }
            }
            written.set(written.get() + data.len() as u64);
            Ok(data.len())
        })?;
        transfer.perform()
    };

    let code = easy.response_code().unwrap_or_else(|_| status.get());
    if let Err(e) = performed {
        if code != 0 && code != 200 {
            return Err(FetchError::Http(code));
        }
        if let Some(io) = write_err.into_inner() {
            return Err(FetchError::Io(io));
        }
        return Err(FetchError::Transfer(e));
    }
    if code != 200 {
        return Err(FetchError::Http(code));
    }

    match file.into_inner() {
        Some(mut f) => f.flush()?,
        // 200 with an empty body still yields a (zero-length) file.
        None => {
            File::create(path)?;
        }
    }
    Ok(written.get())
}
