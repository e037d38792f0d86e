mod app_state;
mod cli;
mod uri;

use sb_common::{ConfigError, PlatformError, SbError};
use sb_config::SbConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_LOG_DIRECTIVE: &str = "sb=info";

fn main() {
    if let Err(e) = run(cli::parse()) {
        eprintln!("sb: {e}");
        std::process::exit(1);
    }
}

fn run(args: cli::Args) -> sb_common::Result<()> {
    if args.version {
        println!("{}", cli::version_line());
        return Ok(());
    }

    // Config is read before logging so `[logging] level` can apply.
    let loaded = load(&args);

    if args.dump_config {
        println!("{}", sb_config::config_to_json(&loaded?));
        return Ok(());
    }

    let log_directive = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.level.directive().to_string(),
        Err(_) => DEFAULT_LOG_DIRECTIVE.to_string(),
    });
    init_logging(&log_directive);

    tracing::info!("sb v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "Using config override");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        SbConfig::default()
    });

    let registry = sb_platform::KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());

    let first_uri = uri::initial_uri(args.uri.as_deref(), &config.general.home_page);

    let event_loop = EventLoop::new()
        .map_err(|e| PlatformError::Window(format!("failed to create event loop: {e}")))?;
    let mut app = app_state::SbApp::new(config, registry, first_uri);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| PlatformError::Window(format!("event loop error: {e}")))?;
    tracing::info!("Shutdown complete");

    if app.failed() {
        return Err(SbError::Other("window setup failed".into()));
    }
    Ok(())
}

fn load(args: &cli::Args) -> Result<SbConfig, ConfigError> {
    match &args.config {
        Some(path) => sb_config::load_config_from(path),
        None => sb_config::load_config(),
    }
}

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("invalid log directive {directive:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}
