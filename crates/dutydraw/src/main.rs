//! DutyDraw: classroom duty draw with slot-machine reveals.

use dutydraw_cli::ui::print_error;
use dutydraw_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // A TUI owns the screen; log only when explicitly asked to.
    if !config.tui || std::env::var_os("RUST_LOG").is_some() {
        let level = if config.verbose {
            tracing::Level::INFO
        } else {
            tracing::Level::WARN
        };
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
            )
            .init();
    }

    if let Err(err) = app::run(&config) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
