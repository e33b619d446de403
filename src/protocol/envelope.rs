//! Request and response envelopes
//!
//! Both unions are discriminated by the `type` field. Requests carry an `id`
//! that is echoed in the matching response so extensions can correlate.

use serde::{Deserialize, Serialize};

use crate::render::RenderModel;

/// Typed request envelope (extension -> host)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Request {
    /// Validate a render tree into a typed model
    #[serde(rename = "render")]
    Render {
        id: String,
        tree: serde_json::Value,
    },

    /// Replace the clipboard contents
    #[serde(rename = "clipboardCopy")]
    ClipboardCopy { id: String, content: String },

    /// Read the clipboard as text
    #[serde(rename = "clipboardRead")]
    ClipboardRead { id: String },

    /// Clear the clipboard
    #[serde(rename = "clipboardClear")]
    ClipboardClear { id: String },

    /// Resolve a named theme color to its display string
    #[serde(rename = "themeColor")]
    ThemeColor { id: String, name: String },

    /// Re-read the theme file (sent when an extension edits the theme)
    #[serde(rename = "themeReload")]
    ThemeReload { id: String },
}

impl Request {
    /// Correlation id echoed in the response
    pub fn id(&self) -> &str {
        match self {
            Request::Render { id, .. }
            | Request::ClipboardCopy { id, .. }
            | Request::ClipboardRead { id }
            | Request::ClipboardClear { id }
            | Request::ThemeColor { id, .. }
            | Request::ThemeReload { id } => id,
        }
    }

    /// Wire name of the request kind
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Render { .. } => "render",
            Request::ClipboardCopy { .. } => "clipboardCopy",
            Request::ClipboardRead { .. } => "clipboardRead",
            Request::ClipboardClear { .. } => "clipboardClear",
            Request::ThemeColor { .. } => "themeColor",
            Request::ThemeReload { .. } => "themeReload",
        }
    }
}

/// Error kind carried by error responses
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum RequestErrorKind {
    /// Request kind is not recognized by this host
    UnsupportedRequest,
    /// Request line was not a well-formed envelope
    MalformedRequest,
    /// A known request reached its handler, which failed
    CapabilityFailure,
}

/// Typed response envelope (host -> extension)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Response {
    /// Result of a `render` request; carries the full model, including the
    /// `invalid` variant when the tree was malformed
    #[serde(rename = "renderModel")]
    RenderModel { id: String, model: RenderModel },

    #[serde(rename = "clipboardCopied")]
    ClipboardCopied { id: String },

    #[serde(rename = "clipboardContent")]
    ClipboardContent {
        id: String,
        content: Option<String>,
    },

    #[serde(rename = "clipboardCleared")]
    ClipboardCleared { id: String },

    #[serde(rename = "themeColorResult")]
    ThemeColorResult {
        id: String,
        name: String,
        color: String,
    },

    #[serde(rename = "themeReloaded")]
    ThemeReloaded { id: String },

    /// Error response; `id` is absent when the request was too malformed to
    /// carry one
    #[serde(rename = "error")]
    Error {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        kind: RequestErrorKind,
        message: String,
    },
}

impl Response {
    pub fn error(id: Option<String>, kind: RequestErrorKind, message: impl Into<String>) -> Self {
        Response::Error {
            id,
            kind,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}
