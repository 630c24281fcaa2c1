use clap::Parser;
use opsdeck::core::config;
use opsdeck::tui;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "opsdeck", about = "Terminal command & control dashboard", version)]
struct Args {
    /// Screen to open at startup ("login" or "overview")
    #[arg(short, long)]
    screen: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("opsdeck: {err}");
            std::process::exit(1);
        }
    };
    let config = config::resolve(&file_config, args.screen.as_deref());

    // File logger; logging is best-effort and must never stop startup.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.level_filter(), log_config, log_file);
    }

    log::info!("opsdeck starting on screen {:?}", config.screen);

    tui::run(config)
}
