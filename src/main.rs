//! devops-landing - A terminal landing page with a built-in CI/CD manual.
//!
//! # Usage
//!
//! ```bash
//! devops-landing
//! devops-landing --manual
//! devops-landing --dump-manual > manual.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use devops_landing::app::App;
use devops_landing::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use devops_landing::content;
use devops_landing::perf;
use devops_landing::ui::style::{Background, set_background_mode};

const DEBUG_LOG_ENV: &str = "DEVOPS_LANDING_RENDER_DEBUG_LOG";

/// A terminal landing page for the Cloud DevOps practice project
#[derive(Parser, Debug)]
#[command(name = "devops-landing", version, about, long_about = None)]
struct Cli {
    /// Start with the manual open
    #[arg(short, long)]
    manual: bool,

    /// Do not capture the mouse (keyboard only)
    #[arg(long)]
    no_mouse: bool,

    /// Force the colour palette for a light or dark terminal
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Log timing of startup and rendering
    #[arg(long)]
    perf: bool,

    /// Write input and layout debug events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Print the rendered manual as JSON and exit
    #[arg(long)]
    dump_manual: bool,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn init_logging(perf_enabled: bool) {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if perf_enabled && let Ok(directive) = "devops_landing::perf=info".parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    init_logging(effective.perf);
    perf::set_enabled(effective.perf);
    tracing::debug!(?effective, "effective flags");

    if cli.dump_manual {
        let json = serde_json::to_string_pretty(&content::render_manual())
            .context("Failed to serialize manual")?;
        println!("{json}");
        return Ok(());
    }

    let render_debug_log_path = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os(DEBUG_LOG_ENV).map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(render_debug_log_path.as_deref()) {
        tracing::warn!(
            path = %render_debug_log_path
                .as_ref()
                .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string()),
            %err,
            "failed to initialize render debug log"
        );
    }

    match effective.theme.unwrap_or(ThemeMode::Auto) {
        ThemeMode::Auto => set_background_mode(None),
        ThemeMode::Light => set_background_mode(Some(Background::Light)),
        ThemeMode::Dark => set_background_mode(Some(Background::Dark)),
    }

    App::new()
        .with_manual_open(effective.manual)
        .with_mouse_enabled(!effective.no_mouse)
        .run()
        .context("Application error")
}
