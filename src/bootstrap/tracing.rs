//! Tracing configuration for formwizard
//!
//! Installs the global `tracing` subscriber: an [`EnvFilter`] that respects
//! `RUST_LOG` and a single stdout `fmt` layer with UTC timestamps.
//!
//! Output looks like:
//! `2025-01-15 10:30:45.123  INFO fw_app::usecases::wizard::controller: wizard state transition`

use std::io;

use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives, used when `RUST_LOG` is unset or invalid.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("fw_app={level}"),
        format!("fw_infra={level}"),
        "fw_core=info".to_string(),
    ]
}

/// Initialize the tracing subscriber.
///
/// Call once, before the wizard is wired:
///
/// ```ignore
/// formwizard::bootstrap::init_tracing_subscriber()?;
/// let runtime = formwizard::bootstrap::start_wizard(&config).await?;
/// ```
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    registry().with(env_filter).with(stdout_layer).try_init()?;

    Ok(())
}
