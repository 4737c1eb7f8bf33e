use calchora::{
    commands::Cli,
    libs::messages::{macros::is_debug_mode, Message},
    msg_debug,
};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "calchora=debug";

fn init_tracing() {
    if !is_debug_mode() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let description = filter.to_string();
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
    msg_debug!(Message::DebugModeEnabled(description));
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    Cli::menu()
}
