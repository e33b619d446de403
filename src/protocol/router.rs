//! Request routing
//!
//! `route` reads the request-kind discriminator and invokes exactly one
//! capability handler, wrapping its result in a response envelope. Unknown
//! request kinds produce an error response and never touch any capability.
//! Capabilities are injected, so the router itself holds no state; each call
//! is independent.

use tracing::{debug, warn};

use super::envelope::{Request, RequestErrorKind, Response};
use super::io::{log_preview, ParseResult};
use crate::clipboard::ClipboardCapability;
use crate::render;
use crate::theme::ThemeService;

/// Capability services the router dispatches to
///
/// `None` means the capability is disabled by configuration; requests for it
/// get a `capabilityFailure` error response.
pub struct Capabilities<'a> {
    pub clipboard: Option<&'a dyn ClipboardCapability>,
    pub theme: Option<&'a ThemeService>,
}

/// Route a typed request to its capability handler
pub fn route(request: &Request, caps: &Capabilities) -> Response {
    debug!(
        request_kind = request.kind(),
        id = request.id(),
        "Routing request"
    );

    match request {
        Request::Render { id, tree } => Response::RenderModel {
            id: id.clone(),
            model: render::parse(tree),
        },

        Request::ClipboardCopy { id, content } => match caps.clipboard {
            None => clipboard_disabled(id),
            Some(clipboard) => match clipboard.write_text(content) {
                Ok(()) => Response::ClipboardCopied { id: id.clone() },
                Err(e) => capability_failure(id, e),
            },
        },

        Request::ClipboardRead { id } => match caps.clipboard {
            None => clipboard_disabled(id),
            Some(clipboard) => match clipboard.read_text() {
                Ok(content) => Response::ClipboardContent {
                    id: id.clone(),
                    content,
                },
                Err(e) => capability_failure(id, e),
            },
        },

        Request::ClipboardClear { id } => match caps.clipboard {
            None => clipboard_disabled(id),
            Some(clipboard) => match clipboard.clear() {
                Ok(()) => Response::ClipboardCleared { id: id.clone() },
                Err(e) => capability_failure(id, e),
            },
        },

        Request::ThemeColor { id, name } => match caps.theme {
            None => Response::error(
                Some(id.clone()),
                RequestErrorKind::CapabilityFailure,
                "theme lookup capability is disabled",
            ),
            Some(theme) => match theme.lookup(name) {
                Some(color) => Response::ThemeColorResult {
                    id: id.clone(),
                    name: name.clone(),
                    color,
                },
                None => Response::error(
                    Some(id.clone()),
                    RequestErrorKind::CapabilityFailure,
                    format!("unknown theme color '{}'", name),
                ),
            },
        },

        Request::ThemeReload { id } => match caps.theme {
            None => Response::error(
                Some(id.clone()),
                RequestErrorKind::CapabilityFailure,
                "theme lookup capability is disabled",
            ),
            Some(theme) => {
                theme.reload();
                Response::ThemeReloaded { id: id.clone() }
            }
        },
    }
}

/// Route a classified parse result, turning malformed lines into error
/// envelopes instead of dropping them
pub fn route_parse_result(result: ParseResult, caps: &Capabilities) -> Response {
    match result {
        ParseResult::Ok(request) => route(&request, caps),

        ParseResult::MissingType { id, raw } => {
            let (preview, raw_len) = log_preview(&raw);
            warn!(raw_preview = %preview, raw_len, "Request missing 'type' field");
            Response::error(
                id,
                RequestErrorKind::UnsupportedRequest,
                "missing required field 'type'",
            )
        }

        ParseResult::UnknownType {
            request_kind,
            id,
            raw,
        } => {
            let (preview, raw_len) = log_preview(&raw);
            warn!(
                request_kind = %request_kind,
                raw_preview = %preview,
                raw_len,
                "Unknown request kind"
            );
            Response::error(
                id,
                RequestErrorKind::UnsupportedRequest,
                format!("unsupported request kind '{}'", request_kind),
            )
        }

        ParseResult::InvalidPayload {
            request_kind,
            id,
            error,
            raw,
        } => {
            let (preview, raw_len) = log_preview(&raw);
            warn!(
                request_kind = %request_kind,
                error = %error,
                raw_preview = %preview,
                raw_len,
                "Request with invalid payload"
            );
            Response::error(
                id,
                RequestErrorKind::MalformedRequest,
                format!("invalid payload for request kind '{}': {}", request_kind, error),
            )
        }

        ParseResult::ParseError(e) => {
            warn!(error = %e, "Malformed JSON request line");
            Response::error(
                None,
                RequestErrorKind::MalformedRequest,
                format!("invalid JSON: {}", e),
            )
        }
    }
}

fn clipboard_disabled(id: &str) -> Response {
    Response::error(
        Some(id.to_string()),
        RequestErrorKind::CapabilityFailure,
        "clipboard capability is disabled",
    )
}

fn capability_failure(id: &str, error: crate::error::HostError) -> Response {
    warn!(error = %error, "Capability handler failed");
    Response::error(
        Some(id.to_string()),
        RequestErrorKind::CapabilityFailure,
        error.to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::MemoryClipboard;
    use crate::protocol::parse_request_graceful;
    use crate::render::RenderModel;
    use crate::theme::{Theme, ThemeService};
    use serde_json::json;

    fn caps<'a>(
        clipboard: &'a MemoryClipboard,
        theme: &'a ThemeService,
    ) -> Capabilities<'a> {
        Capabilities {
            clipboard: Some(clipboard),
            theme: Some(theme),
        }
    }

    #[test]
    fn test_clipboard_copy_invokes_service_exactly_once() {
        let clipboard = MemoryClipboard::default();
        let theme = ThemeService::with_theme(Theme::default());
        let request = Request::ClipboardCopy {
            id: "1".to_string(),
            content: "hello".to_string(),
        };

        let response = route(&request, &caps(&clipboard, &theme));

        assert_eq!(
            response,
            Response::ClipboardCopied {
                id: "1".to_string()
            }
        );
        assert_eq!(*clipboard.writes.lock(), vec!["hello".to_string()]);
        assert_eq!(clipboard.call_count(), 1);
    }

    #[test]
    fn test_clipboard_read_returns_content() {
        let clipboard = MemoryClipboard::default();
        clipboard.write_text("stored").unwrap();
        let theme = ThemeService::with_theme(Theme::default());

        let request = Request::ClipboardRead {
            id: "2".to_string(),
        };
        let response = route(&request, &caps(&clipboard, &theme));

        assert_eq!(
            response,
            Response::ClipboardContent {
                id: "2".to_string(),
                content: Some("stored".to_string()),
            }
        );
    }

    #[test]
    fn test_clipboard_failure_becomes_error_response() {
        let clipboard = MemoryClipboard::failing("denied");
        let theme = ThemeService::with_theme(Theme::default());

        let request = Request::ClipboardClear {
            id: "3".to_string(),
        };
        let response = route(&request, &caps(&clipboard, &theme));

        match response {
            Response::Error { id, kind, .. } => {
                assert_eq!(id.as_deref(), Some("3"));
                assert_eq!(kind, RequestErrorKind::CapabilityFailure);
            }
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_disabled_clipboard_rejects_without_panic() {
        let theme = ThemeService::with_theme(Theme::default());
        let capabilities = Capabilities {
            clipboard: None,
            theme: Some(&theme),
        };

        let request = Request::ClipboardCopy {
            id: "4".to_string(),
            content: "x".to_string(),
        };
        let response = route(&request, &capabilities);
        assert!(response.is_error());
    }

    #[test]
    fn test_theme_color_lookup() {
        let clipboard = MemoryClipboard::default();
        let theme = ThemeService::with_theme(Theme::default());

        let request = Request::ThemeColor {
            id: "5".to_string(),
            name: "accent".to_string(),
        };
        let response = route(&request, &caps(&clipboard, &theme));

        assert_eq!(
            response,
            Response::ThemeColorResult {
                id: "5".to_string(),
                name: "accent".to_string(),
                color: "#FBBF24".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_theme_color_is_capability_failure() {
        let clipboard = MemoryClipboard::default();
        let theme = ThemeService::with_theme(Theme::default());

        let request = Request::ThemeColor {
            id: "6".to_string(),
            name: "chartreuse".to_string(),
        };
        let response = route(&request, &caps(&clipboard, &theme));

        match response {
            Response::Error { kind, message, .. } => {
                assert_eq!(kind, RequestErrorKind::CapabilityFailure);
                assert_eq!(message, "unknown theme color 'chartreuse'");
            }
            other => panic!("Expected Error, got {:?}", other),
        }
    }

    #[test]
    fn test_theme_reload_request_picks_up_file_changes() {
        let clipboard = MemoryClipboard::default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, r##"{"accent":{"selected":"#111111"}}"##).unwrap();
        let theme = ThemeService::new(path.clone());

        std::fs::write(&path, r##"{"accent":{"selected":"#222222"}}"##).unwrap();
        let reload = Request::ThemeReload {
            id: "11".to_string(),
        };
        assert_eq!(
            route(&reload, &caps(&clipboard, &theme)),
            Response::ThemeReloaded {
                id: "11".to_string()
            }
        );

        let lookup = Request::ThemeColor {
            id: "12".to_string(),
            name: "accent".to_string(),
        };
        assert_eq!(
            route(&lookup, &caps(&clipboard, &theme)),
            Response::ThemeColorResult {
                id: "12".to_string(),
                name: "accent".to_string(),
                color: "#222222".to_string(),
            }
        );
    }

    #[test]
    fn test_theme_reload_disabled_is_capability_failure() {
        let clipboard = MemoryClipboard::default();
        let capabilities = Capabilities {
            clipboard: Some(&clipboard),
            theme: None,
        };

        let request = Request::ThemeReload {
            id: "13".to_string(),
        };
        let response = route(&request, &capabilities);
        assert!(response.is_error());
    }

    #[test]
    fn test_render_request_returns_model() {
        let clipboard = MemoryClipboard::default();
        let theme = ThemeService::with_theme(Theme::default());

        let request = Request::Render {
            id: "7".to_string(),
            tree: json!({"type": "list", "items": [{"title": "One"}]}),
        };
        let response = route(&request, &caps(&clipboard, &theme));

        match response {
            Response::RenderModel { id, model } => {
                assert_eq!(id, "7");
                match model {
                    RenderModel::List { items } => assert_eq!(items.len(), 1),
                    other => panic!("Expected List, got {:?}", other),
                }
            }
            other => panic!("Expected RenderModel, got {:?}", other),
        }
    }

    #[test]
    fn test_render_request_malformed_tree_is_invalid_model_not_error() {
        let clipboard = MemoryClipboard::default();
        let theme = ThemeService::with_theme(Theme::default());

        let request = Request::Render {
            id: "8".to_string(),
            tree: json!({"no": "type"}),
        };
        let response = route(&request, &caps(&clipboard, &theme));

        match response {
            Response::RenderModel { model, .. } => assert!(model.is_invalid()),
            other => panic!("Expected RenderModel, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_request_kind_never_invokes_capabilities() {
        let clipboard = MemoryClipboard::default();
        let theme = ThemeService::with_theme(Theme::default());

        let result = parse_request_graceful(r#"{"type":"futureFeature","id":"9"}"#);
        let response = route_parse_result(result, &caps(&clipboard, &theme));

        match response {
            Response::Error { id, kind, message } => {
                assert_eq!(id.as_deref(), Some("9"));
                assert_eq!(kind, RequestErrorKind::UnsupportedRequest);
                assert_eq!(message, "unsupported request kind 'futureFeature'");
            }
            other => panic!("Expected Error, got {:?}", other),
        }
        assert_eq!(clipboard.call_count(), 0);
    }

    #[test]
    fn test_missing_type_line_is_unsupported_request() {
        let clipboard = MemoryClipboard::default();
        let theme = ThemeService::with_theme(Theme::default());

        let result = parse_request_graceful(r#"{"id":"10"}"#);
        let response = route_parse_result(result, &caps(&clipboard, &theme));

        match response {
            Response::Error { id, kind, .. } => {
                assert_eq!(id.as_deref(), Some("10"));
                assert_eq!(kind, RequestErrorKind::UnsupportedRequest);
            }
            other => panic!("Expected Error, got {:?}", other),
        }
        assert_eq!(clipboard.call_count(), 0);
    }

    #[test]
    fn test_syntax_error_line_is_malformed_request() {
        let clipboard = MemoryClipboard::default();
        let theme = ThemeService::with_theme(Theme::default());

        let result = parse_request_graceful("{{{");
        let response = route_parse_result(result, &caps(&clipboard, &theme));

        match response {
            Response::Error { id, kind, .. } => {
                assert_eq!(id, None);
                assert_eq!(kind, RequestErrorKind::MalformedRequest);
            }
            other => panic!("Expected Error, got {:?}", other),
        }
    }
}
