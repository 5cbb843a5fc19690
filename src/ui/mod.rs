// ChromeLike UI layer
// Element tree, render pass and IPC decoding are headless; the webview host needs the `gui` feature.

pub mod ipc;
pub mod render;
pub mod view;

#[cfg(feature = "gui")]
pub mod webview_app;
