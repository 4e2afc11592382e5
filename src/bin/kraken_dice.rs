use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use tidepool::app;
use tidepool::games::DiceBattle;

/// Kraken Dice Battle: out-roll the Kraken before it drags you under
#[derive(Parser, Debug)]
#[command(name = "kraken-dice")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file (TOML format)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    app::setup_logging(cli.verbose);

    let config = match app::load_config(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
            std::process::exit(1);
        }
    };

    let game = DiceBattle::new(&config.dice_battle);
    match app::play(game).await {
        Ok(report) => {
            println!("{}", report.message);
        }
        Err(e) => {
            eprintln!("{} {}", "ERROR:".red().bold(), e);
            std::process::exit(1);
        }
    }
}
