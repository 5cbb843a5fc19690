//! Messages posted by the page script through `window.ipc.postMessage`.

use crate::types::action::ShellAction;
use crate::types::errors::IpcError;

/// A decoded page-to-host message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IpcMessage {
    /// The page script has loaded and wants the current markup.
    Ready,
    Action(ShellAction),
}

/// Decode one IPC payload.
pub fn parse_message(body: &str) -> Result<IpcMessage, IpcError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| IpcError::Malformed(e.to_string()))?;

    if value.get("cmd").and_then(|c| c.as_str()) == Some("ui_ready") {
        return Ok(IpcMessage::Ready);
    }

    serde_json::from_value::<ShellAction>(value)
        .map(IpcMessage::Action)
        .map_err(|e| IpcError::Malformed(e.to_string()))
}

/// Script that swaps the page's root element for freshly rendered markup.
pub fn render_script(markup: &str) -> String {
    // serde_json yields a valid JS string literal.
    let literal = serde_json::to_string(markup).unwrap_or_else(|_| "\"\"".to_string());
    format!("if(window.__cl_render)window.__cl_render({})", literal)
}
