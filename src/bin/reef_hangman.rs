use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use tidepool::app;
use tidepool::games::Hangman;
use tidepool::random::ThreadRandom;

/// Ocean Hangman: guess the word before the coral bleaches
#[derive(Parser, Debug)]
#[command(name = "reef-hangman")]
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

    let game = Hangman::new(&config.hangman, &ThreadRandom::new());
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
