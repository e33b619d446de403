//! JSONL request/response protocol between extensions and the host
//!
//! Requests arrive as newline-delimited JSON, each tagged by a `type` field.
//! Every request kind maps to exactly one handler and response shape; unknown
//! kinds become error responses, never crashes.
//!
//! # Request Kinds
//!
//! - `render`: validate a render tree, reply with the typed model
//! - `clipboardCopy` / `clipboardRead` / `clipboardClear`: clipboard capability
//! - `themeColor`: name -> color lookup against the theme service
//! - `themeReload`: re-read the theme file after an extension edits it
//!
//! # Module Structure
//!
//! - `envelope`: the Request/Response tagged unions
//! - `io`: JSONL parsing with graceful error classification, streaming reader
//! - `router`: dispatch to capability handlers

mod envelope;
mod io;
mod router;

pub use envelope::{Request, RequestErrorKind, Response};
pub use io::{parse_request_graceful, serialize_response, JsonlReader, ParseResult};
pub use router::{route, route_parse_result, Capabilities};
