use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use teletipo::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "teletipo", about = "Terminal news reader with typewriter reveal")]
struct Args {
    /// Base URL of the news service
    #[arg(short, long)]
    base_url: Option<String>,

    /// Milliseconds per revealed character (smaller = faster)
    #[arg(short, long)]
    tick_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to teletipo.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("teletipo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        config::TeletipoConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        CliOverrides {
            base_url: args.base_url.as_deref(),
            tick_ms: args.tick_ms,
        },
    );

    log::info!("Teletipo starting up against {}", resolved.base_url);

    teletipo::tui::run(resolved)
}
