//! Protocol I/O for JSONL request parsing and response serialization
//!
//! This module provides:
//! - `parse_request_graceful` for classifying incoming JSON lines
//! - `serialize_response` for serializing response envelopes
//! - `JsonlReader` for streaming JSONL reads
//!
//! Unlike a strict deserialize, the graceful parser never turns a bad line
//! into a stream failure: every malformed line is classified so the router
//! can answer it with an error envelope.

use std::io::{BufRead, BufReader, Read};

use tracing::debug;

use super::envelope::{Request, Response};

/// Maximum length for raw JSON in logs (prevents huge payloads in logs)
const MAX_RAW_LOG_PREVIEW: usize = 200;

/// Get a truncated preview of raw JSON for logging
///
/// Truncation backs up to the nearest char boundary so multibyte payloads
/// never split a character.
pub fn log_preview(raw: &str) -> (&str, usize) {
    let len = raw.len();
    if len > MAX_RAW_LOG_PREVIEW {
        let mut end = MAX_RAW_LOG_PREVIEW;
        while !raw.is_char_boundary(end) {
            end -= 1;
        }
        (&raw[..end], len)
    } else {
        (raw, len)
    }
}

/// Result type for graceful request parsing
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed a known request kind
    Ok(Request),
    /// Line has no "type" field
    MissingType {
        /// Correlation id, when the line carried one
        id: Option<String>,
        /// Truncated raw JSON for debugging
        raw: String,
    },
    /// Valid JSON with a "type" value we don't recognize
    UnknownType {
        request_kind: String,
        id: Option<String>,
        raw: String,
    },
    /// Known request kind but invalid payload (wrong field types, missing required fields)
    InvalidPayload {
        request_kind: String,
        id: Option<String>,
        /// Serde error message describing the problem
        error: String,
        raw: String,
    },
    /// JSON parsing failed entirely (syntax error)
    ParseError(serde_json::Error),
}

/// Parse a request line with graceful handling of unknown kinds
///
/// # Classification Logic
/// - Missing "type" field -> `MissingType`
/// - Unknown type value -> `UnknownType`
/// - Known type with invalid payload -> `InvalidPayload`
/// - Invalid JSON syntax -> `ParseError`
///
/// Parses to `serde_json::Value` once, then converts, so unknown kinds are
/// not parsed twice. The extracted `id` rides along in every classification
/// so error responses can still correlate.
pub fn parse_request_graceful(line: &str) -> ParseResult {
    let (preview, _raw_len) = log_preview(line);

    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return ParseResult::ParseError(e),
    };

    let id = value
        .get("id")
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let request_kind: String = match value.get("type").and_then(|t| t.as_str()) {
        Some(t) => t.to_string(),
        None => {
            return ParseResult::MissingType {
                id,
                raw: preview.to_string(),
            };
        }
    };

    match serde_json::from_value::<Request>(value) {
        Ok(request) => ParseResult::Ok(request),
        Err(e) => {
            let error_str = e.to_string();
            // "unknown variant" distinguishes an unrecognized kind from a
            // known kind with bad data
            if error_str.contains("unknown variant") {
                ParseResult::UnknownType {
                    request_kind,
                    id,
                    raw: preview.to_string(),
                }
            } else {
                ParseResult::InvalidPayload {
                    request_kind,
                    id,
                    error: error_str,
                    raw: preview.to_string(),
                }
            }
        }
    }
}

/// Serialize a response to JSONL format (no trailing newline)
pub fn serialize_response(response: &Response) -> Result<String, serde_json::Error> {
    serde_json::to_string(response)
}

/// JSONL reader for streaming request reads
///
/// Reuses one line buffer across reads; empty lines are skipped, everything
/// else is handed back classified.
pub struct JsonlReader<R: Read> {
    reader: BufReader<R>,
    line_buffer: String,
}

impl<R: Read> JsonlReader<R> {
    pub fn new(reader: R) -> Self {
        JsonlReader {
            reader: BufReader::new(reader),
            line_buffer: String::with_capacity(1024),
        }
    }

    /// Read and classify the next request line
    ///
    /// # Returns
    /// * `Ok(Some(ParseResult))` - next non-empty line, classified
    /// * `Ok(None)` - end of stream
    /// * `Err(e)` - IO error (never a parse error)
    pub fn next_request(&mut self) -> Result<Option<ParseResult>, std::io::Error> {
        loop {
            self.line_buffer.clear();
            match self.reader.read_line(&mut self.line_buffer)? {
                0 => {
                    debug!("Reached end of JSONL stream");
                    return Ok(None);
                }
                bytes_read => {
                    debug!(bytes_read, "Read line from JSONL stream");
                    let trimmed = self.line_buffer.trim();
                    if trimmed.is_empty() {
                        continue;
                    }
                    return Ok(Some(parse_request_graceful(trimmed)));
                }
            }
        }
    }
}
