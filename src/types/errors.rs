use std::fmt;

// === ConfigError ===

/// Errors related to loading the shell configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Io(String),
    /// The config file is not valid JSON for `ShellConfig`.
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// === IpcError ===

/// Errors related to messages posted from the page script.
#[derive(Debug)]
pub enum IpcError {
    /// The payload is not a recognised shell action.
    Malformed(String),
}

impl fmt::Display for IpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpcError::Malformed(msg) => write!(f, "Malformed IPC message: {}", msg),
        }
    }
}

impl std::error::Error for IpcError {}

// === UiError ===

/// Errors raised while bringing up the native window and webview.
#[derive(Debug)]
pub enum UiError {
    /// The native window could not be created.
    Window(String),
    /// The webview could not be created or attached.
    WebView(String),
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Window(msg) => write!(f, "Window creation failed: {}", msg),
            UiError::WebView(msg) => write!(f, "WebView creation failed: {}", msg),
        }
    }
}

impl std::error::Error for UiError {}
