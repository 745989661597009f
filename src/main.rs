use clap::Parser;
use rosterman::cli::{list, screen, Cli, Commands};
use rosterman::config::Config;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match Config::load_or_default(&cli.args.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };

    if let Some(database) = cli.args.database {
        config.database.path = database;
    }
    if let Some(level) = cli.args.log_level {
        config.logging.level = level;
    }

    config.init_logging();

    let result = match cli.command.unwrap_or(Commands::Screen) {
        Commands::Screen => screen::execute(config).await,
        Commands::List => list::execute(config).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}
