use clap::Parser;
use modal_selector::{App, AppConfig, ScreenSize, default_items, init_logging, load_items};
use modal_selector_core::{DEFAULT_CANCEL_TEXT, DEFAULT_INIT_VALUE};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "modal-selector")]
#[command(about = "A terminal dropdown selector with sectioned options")]
struct Args {
    /// YAML item list (default: built-in fruit and vegetable list)
    #[arg(long)]
    items: Option<PathBuf>,

    /// Initial trigger label; repeat to cycle through values with `i`
    #[arg(long = "init-value", default_value = DEFAULT_INIT_VALUE)]
    init_values: Vec<String>,

    /// Label of the cancel action
    #[arg(long, default_value = DEFAULT_CANCEL_TEXT)]
    cancel_text: String,

    /// Custom trigger content shown instead of the selected label
    #[arg(long)]
    trigger: Option<String>,

    /// Path to the data directory for logs (default: ~/.modal-selector/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".modal-selector")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let items = match &args.items {
        Some(path) => load_items(path)?,
        None => default_items(),
    };
    let config = AppConfig {
        items,
        init_values: args.init_values,
        cancel_text: args.cancel_text,
        trigger_text: args.trigger,
    };

    ratatui::run(|terminal| -> color_eyre::Result<()> {
        let screen = ScreenSize::from(terminal.size()?);
        App::new(config, screen).run(terminal)
    })?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
