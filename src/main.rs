use clap::Parser;
use log::{error, info};
use nutriguide::core::config::{self, ResolvedConfig};
use nutriguide::menu::Menu;
use nutriguide::present::{ConsolePresenter, WindowPresenter};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nutriguide", version, about = "Nutrition reference for the console or a desktop window")]
struct Args {
    /// Guide file to load instead of ~/.nutriguide/guide.toml
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log destination (defaults to ~/.nutriguide/nutriguide.log)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

/// File logger only: stdout carries the guide and must stay byte-exact.
fn init_logging(path: Option<PathBuf>) {
    let Some(path) = path.or_else(|| config::app_dir().map(|d| d.join("nutriguide.log"))) else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.log_file);

    info!("Nutriguide starting up");

    let file_config = config::load_config(args.config.as_deref())?;
    let ResolvedConfig { table, wrap_width } = config::resolve(&file_config)?;

    let mut console = ConsolePresenter::stdout(wrap_width);
    let mut window = WindowPresenter::new(wrap_width);
    let outcome = Menu::new(&mut console, &mut window).run(
        &mut io::stdin().lock(),
        &mut io::stdout(),
        &table,
    );

    match outcome {
        Ok(outcome) => {
            info!("Finished: {:?}", outcome);
            Ok(())
        }
        Err(e) => {
            error!("Run failed: {}", e);
            Err(e.into())
        }
    }
}
