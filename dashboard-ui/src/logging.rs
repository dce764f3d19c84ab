//! Tracing initialisation

use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Output format of the stdout layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Filter used when `RUST_LOG` is not set
pub fn default_filter() -> EnvFilter {
    if cfg!(debug_assertions) {
        EnvFilter::new("info,dashboard_client=debug,dashboard_ui=debug")
    } else {
        EnvFilter::new("warn")
    }
}

/// Install the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init(format: LogFormat) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => {
            let stdout_layer = fmt::layer()
                .with_timer(LocalTimer)
                .with_ansi(true)
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stdout);
            registry.with(stdout_layer).try_init()?;
        }
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_timer(LocalTimer)
                .with_target(true)
                .with_writer(std::io::stdout);
            registry.with(json_layer).try_init()?;
        }
    }

    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        tracing::error!(target: "panic", message = %msg, "panic occurred");
    }));

    tracing::info!(?format, "Tracing initialized");
    Ok(())
}
