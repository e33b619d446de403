//! Palette Host - host-side core for a launcher/command-palette app
//!
//! Extension processes talk to the host over newline-delimited JSON. This
//! library provides the two halves of that boundary:
//!
//! - `render`: validates untyped render trees into a closed, typed
//!   `RenderModel` (malformed input is a value, never a panic)
//! - `protocol`: typed request/response envelopes plus the router that
//!   dispatches each request to exactly one capability handler
//!
//! Capabilities (clipboard, theme lookup) are injected behind seams in
//! `clipboard` and `theme` so the parser and router stay pure and testable.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod render;
pub mod theme;
