//! ChromeLike — a static browser-chrome mockup.
//!
//! Entry point: loads the optional config and opens the shell in a webview window.
//! When built without the `gui` feature, runs a console demo of the shell.

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use chromelike::services::config_loader::ConfigLoader;
use chromelike::types::config::ShellConfig;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chromelike=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_config() -> ShellConfig {
    let loader = ConfigLoader::from_env();
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            error!(path = %loader.config_path().display(), error = %e, "falling back to default config");
            ShellConfig::default()
        }
    }
}

#[cfg(feature = "gui")]
fn main() -> ExitCode {
    init_logging();
    let config = load_config();
    match chromelike::ui::webview_app::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "failed to start ChromeLike");
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(feature = "gui"))]
fn main() -> ExitCode {
    use chromelike::BrowserShell;

    init_logging();
    let config = load_config();

    println!();
    println!("ChromeLike v{} — Demo Mode", env!("CARGO_PKG_VERSION"));
    println!();

    let mut shell = BrowserShell::from_config(&config);
    print_state("mounted", &shell);

    shell.add_tab();
    print_state("add tab", &shell);

    let second = shell.add_tab();
    print_state("add tab", &shell);

    shell.select_tab(chromelike::types::tab::TabId(1));
    print_state("select tab 1", &shell);

    shell.remove_tab(second);
    print_state("close last-added tab", &shell);

    shell.toggle_extension_menu();
    print_state("toggle extension menu", &shell);

    println!();
    println!("{}", shell.page_html());
    ExitCode::SUCCESS
}

#[cfg(not(feature = "gui"))]
fn print_state(step: &str, shell: &chromelike::BrowserShell) {
    let ids: Vec<String> = shell.tabs().iter().map(|t| t.id.to_string()).collect();
    println!(
        "  {:<24} tabs = [{}], active = {}, extensions open = {}",
        step,
        ids.join(", "),
        shell.active_tab_id(),
        shell.extension_menu_open()
    );
}
