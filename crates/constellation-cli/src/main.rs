//! Constellation layout CLI
//!
//! Compose a constellation for a panel size and print the layout as JSON.

mod options;

use std::io::Write;

use constellation_layout::{LayoutResult, Panel};
use options::{CliError, Options, USAGE};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// What gets printed: the panel that was laid out and its layout.
#[derive(Debug, Serialize)]
struct Rendered<'a> {
    panel: Panel,
    layout: &'a LayoutResult,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "constellation=info,constellation_layout=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = Options::from_env()?;
    if options.help {
        println!("{USAGE}");
        return Ok(());
    }

    run(&options)?;
    Ok(())
}

fn run(options: &Options) -> Result<(), CliError> {
    let config = options.load_config()?;
    match &options.config {
        Some(path) => tracing::info!("Loaded constellation from {}", path.display()),
        None => tracing::info!("Using built-in integration preset"),
    }

    let panel = config.panel(options.render_size(config.authored));
    let layout = config.compose(Some(panel.render))?;
    tracing::info!(
        nodes = layout.nodes.len(),
        rings = layout.rings.len(),
        "Laid out {} panel at scale {:.3}",
        panel.render,
        layout.scale
    );

    let rendered = Rendered {
        panel,
        layout: &layout,
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if options.compact {
        serde_json::to_writer(&mut out, &rendered)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &rendered)?;
    }
    writeln!(out)?;

    Ok(())
}
