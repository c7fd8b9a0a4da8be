use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use funnel_core::StepId;
use gpui::Application;
use tracing::{debug, error, info};

use funnel_ui::{app, config::AppConfig, logging, open_main_window, quit, setup_app};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Sales funnel calculator.
///
/// Collects a commission target and conversion ratios one step at a time and
/// works out how many cases, appointments, prospects and initial contacts
/// are needed to reach it. Opens a window unless `--headless` or `--batch`
/// is given.
#[derive(Debug, Parser)]
struct Cli {
    /// TOML configuration file. Defaults to `sales-funnel.toml` when present.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,funnel_core=trace`.
    /// Overrides the config file; `RUST_LOG` overrides both.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Run the wizard without a window and print the report.
    #[arg(long)]
    headless: bool,

    /// Raw text for a step, e.g. `--set caseSize=7,500`. Repeatable;
    /// needs `--headless`.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = app::parse_assignment, requires = "headless")]
    set: Vec<(StepId, String)>,

    /// Compute every scenario in a CSV file and print the reports.
    #[arg(long, value_name = "CSV", conflicts_with = "headless")]
    batch: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;
    logging::init_logging(&config.logging, cli.log_level.as_deref())?;
    debug!(?config, "configuration loaded");

    let policy = config.input.policy;

    if let Some(path) = &cli.batch {
        print!("{}", app::run_batch(path, policy)?);
        return Ok(());
    }

    if cli.headless {
        let result = app::run_wizard(policy, &cli.set)?;
        println!("{}", app::render_report(&result));
        return Ok(());
    }

    info!("starting {}", logging::app_name());
    Application::new()
        .with_assets(gpui_component_assets::Assets)
        .run(move |cx| {
            setup_app(cx, config.theme);
            if let Err(e) = open_main_window(cx, &config) {
                error!(error = ?e, "cannot open main window");
                quit(&funnel_ui::Quit, cx);
            }
        });

    Ok(())
}
