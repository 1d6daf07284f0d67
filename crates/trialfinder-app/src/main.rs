mod app_state;
mod cli;
mod logging;

use trialfinder_common::TrialFinderError;
use winit::event_loop::EventLoop;

fn run(args: cli::Args, log: logging::LogHandle) -> trialfinder_common::Result<()> {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = trialfinder_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        trialfinder_config::TrialFinderConfig::default()
    });
    args.apply_to(&mut config);
    log.apply_config_directive(config.logging.level.directive());

    tracing::info!(
        widget = %config.widget.id,
        host = ?config.bridge.host,
        location = ?config.location.mode,
        "Config loaded"
    );

    let event_loop = EventLoop::new()
        .map_err(|e| TrialFinderError::Other(format!("failed to create event loop: {e}")))?;
    let mut app = app_state::TrialFinderApp::new(config);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| TrialFinderError::Other(format!("event loop error: {e}")))
}

fn main() {
    let args = cli::parse();
    let log = logging::init(args.log_level.as_deref());

    tracing::info!("trialfinder v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args, log) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
    tracing::info!("Shutdown complete");
}
