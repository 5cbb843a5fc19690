//! WebView host for the browser shell using `wry` + `tao`.
//!
//! Architecture:
//! - The page is served from the `chromelike://` custom protocol and always
//!   reflects the shell's current state.
//! - The page script forwards clicks on elements carrying `data-action` over
//!   `window.ipc.postMessage()`.
//! - Each decoded action is dispatched to the shell and the re-rendered root
//!   element is pushed back with `evaluate_script`.

use std::sync::{Arc, Mutex, MutexGuard};

use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoop, EventLoopBuilder};
use tao::window::WindowBuilder;
use tracing::{debug, info, warn};
use wry::WebViewBuilder;

use crate::shell::BrowserShell;
use crate::types::config::ShellConfig;
use crate::types::errors::UiError;
use crate::ui::ipc::{self, IpcMessage};

#[derive(Debug)]
enum UserEvent {
    EvalScript(String),
}

const PROTOCOL: &str = "chromelike";
const START_URL: &str = "chromelike://localhost/";

fn lock(shell: &Mutex<BrowserShell>) -> MutexGuard<'_, BrowserShell> {
    shell.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Apply one IPC payload and return the script that brings the page up to date.
fn handle_ipc(shell: &mut BrowserShell, body: &str) -> Option<UserEvent> {
    match ipc::parse_message(body) {
        Ok(IpcMessage::Ready) => {}
        Ok(IpcMessage::Action(action)) => shell.dispatch(action),
        Err(e) => {
            warn!(error = %e, "dropping IPC message");
            return None;
        }
    }
    Some(UserEvent::EvalScript(ipc::render_script(
        &shell.render().to_html(),
    )))
}

// ─── Main entry point ───

pub fn run(config: ShellConfig) -> Result<(), UiError> {
    let state = Arc::new(Mutex::new(BrowserShell::from_config(&config)));

    let event_loop: EventLoop<UserEvent> = EventLoopBuilder::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title(&config.window_title)
        .with_inner_size(tao::dpi::LogicalSize::new(
            config.window_width,
            config.window_height,
        ))
        .build(&event_loop)
        .map_err(|e| UiError::Window(e.to_string()))?;

    let page_state = state.clone();
    let ipc_state = state.clone();

    let builder = WebViewBuilder::new()
        .with_custom_protocol(PROTOCOL.into(), move |_wv_id, request| {
            debug!(path = request.uri().path(), "serving page");
            let html = lock(&page_state).page_html();
            wry::http::Response::builder()
                .header("Content-Type", "text/html; charset=utf-8")
                .body(html.into_bytes().into())
                .unwrap_or_else(|_| wry::http::Response::new(Vec::new().into()))
        })
        .with_url(START_URL)
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let body = msg.body().as_str();
            let preview: String = body.chars().take(200).collect();
            debug!(body = %preview, "ipc");
            let mut shell = lock(&ipc_state);
            if let Some(event) = handle_ipc(&mut shell, body) {
                let _ = proxy.send_event(event);
            }
        })
        .with_devtools(config.devtools || cfg!(debug_assertions));

    #[cfg(target_os = "linux")]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        let vbox = window
            .default_vbox()
            .ok_or_else(|| UiError::WebView("GTK vbox unavailable".to_string()))?;
        builder
            .build_gtk(vbox)
            .map_err(|e| UiError::WebView(e.to_string()))?
    };

    #[cfg(not(target_os = "linux"))]
    let webview = builder
        .build(&window)
        .map_err(|e| UiError::WebView(e.to_string()))?;

    info!(title = %config.window_title, "window opened");

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(tabs = lock(&state).tabs().len(), "window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(UserEvent::EvalScript(js)) => {
                if let Err(e) = webview.evaluate_script(&js) {
                    warn!(error = %e, "re-render script failed");
                }
            }

            _ => {}
        }
    });
}
