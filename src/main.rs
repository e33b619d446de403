//! palette-host binary
//!
//! Reads JSONL requests from stdin, routes each through the capability
//! router, and writes one JSON response envelope per line to stdout.
//!
//! ```bash
//! echo '{"type":"clipboardCopy","id":"1","content":"hello"}' | palette-host
//! echo '{"type":"render","id":"2","tree":{"type":"list","items":[]}}' | palette-host
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use tracing::info;

use palette_host::clipboard::{ClipboardCapability, SystemClipboard};
use palette_host::config;
use palette_host::error::{HostError, ResultExt};
use palette_host::logging;
use palette_host::protocol::{serialize_response, Capabilities, JsonlReader};
use palette_host::theme::ThemeService;

fn main() -> anyhow::Result<()> {
    // Guard must stay alive so logs flush on exit
    let _guard = logging::init();

    let config = config::load_config();

    let theme_path = PathBuf::from(shellexpand::tilde(&config.theme_path).as_ref());
    let theme_service = config
        .capabilities
        .theme_lookup
        .then(|| ThemeService::new(theme_path));

    let system_clipboard = SystemClipboard::new();
    let clipboard: Option<&dyn ClipboardCapability> = config
        .capabilities
        .clipboard
        .then_some(&system_clipboard as &dyn ClipboardCapability);

    let caps = Capabilities {
        clipboard,
        theme: theme_service.as_ref(),
    };

    info!(
        event_type = "host_lifecycle",
        clipboard_enabled = config.capabilities.clipboard,
        theme_lookup_enabled = config.capabilities.theme_lookup,
        "Request loop starting"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut reader = JsonlReader::new(stdin.lock());

    while let Some(parsed) = reader
        .next_request()
        .context("failed to read request from stdin")?
    {
        let response = palette_host::protocol::route_parse_result(parsed, &caps);
        // A response that fails to serialize is a host bug; drop it and keep
        // serving rather than tearing down the session
        let Some(line) = serialize_response(&response)
            .map_err(HostError::ProtocolParse)
            .log_err()
        else {
            continue;
        };

        let mut out = stdout.lock();
        writeln!(out, "{}", line).context("failed to write response to stdout")?;
        out.flush().context("failed to flush stdout")?;
    }

    info!(event_type = "host_lifecycle", action = "stopped", "Request stream ended");
    Ok(())
}
