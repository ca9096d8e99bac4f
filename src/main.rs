use clap::Parser;
use firmdex::core::config;
use firmdex::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "firmdex", about = "Terminal company directory browser")]
struct Args {
    /// Directory endpoint base URL (overrides config file and env)
    #[arg(long)]
    base_url: Option<String>,

    /// Rows per page: 10, 20, or 50
    #[arg(long)]
    rows: Option<usize>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to firmdex.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("firmdex.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("firmdex starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            eprintln!("Warning: {e} — using defaults");
            config::FirmdexConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.base_url.as_deref(), args.rows);
    log::info!("Resolved config: {:?}", resolved);

    tui::run(resolved)
}
