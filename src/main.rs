// DataBudget - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. Offer store loading
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::ui::...` etc.
pub use databudget::app;
pub use databudget::core;
pub use databudget::platform;
pub use databudget::ui;
pub use databudget::util;

use clap::Parser;
use std::path::PathBuf;

/// DataBudget - mobile data offers that fit your budget.
///
/// Lists the offers priced at or below a budget, cheapest first, and lets
/// an administrator edit prices locally.
#[derive(Parser, Debug)]
#[command(name = "DataBudget", version, about)]
struct Cli {
    /// Run a search for this budget (FCFA) at startup.
    #[arg(short = 'b', long = "budget")]
    budget: Option<String>,

    /// Directory holding the offers storage file (overrides the platform default).
    #[arg(long = "data-dir")]
    data_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can apply; problems are
    // reported once the subscriber exists.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "DataBudget starting"
    );
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Configuration warning");
    }

    let data_dir = cli
        .data_dir
        .as_deref()
        .unwrap_or(&platform_paths.data_dir);
    let store = app::store::OfferStore::load(app::store::offers_path(data_dir));

    let mut state = app::state::AppState::new(store, &config, cli.debug);
    if let Some(first) = config_warnings.first() {
        state.status_message = format!("Configuration ignorée en partie : {first}");
    }

    if let Some(budget) = cli.budget {
        state.budget_input = budget;
        state.search();
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let (dark_mode, font_size) = (state.dark_mode, state.font_size);
    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, dark_mode, font_size);
            Ok(Box::new(gui::DataBudgetApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch DataBudget GUI: {e}");
        std::process::exit(1);
    }
}
