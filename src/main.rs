// src/main.rs

use clap::CommandFactory;
use taskbot::cli::CliArgs;
use taskbot::errors::TaskbotError;
use taskbot::{cli, exit_code, logging, run};

#[tokio::main]
async fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.log_level) {
        eprintln!("taskbot warning: {err:?}");
    }

    match run(args).await {
        Ok(result) => std::process::exit(exit_code(&result)),
        Err(err) => {
            eprintln!("taskbot error: {err}");
            if matches!(err, TaskbotError::Usage(_)) {
                eprintln!("\n{}", CliArgs::command().render_usage());
            }
            std::process::exit(err.exit_code());
        }
    }
}
