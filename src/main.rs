use clap::Parser;
use tracing::debug;

use fundflow::cli::output::{self, OutputConfig};
use fundflow::cli::{check, price, run, Cli, Commands};

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    let config = match cli.load_config() {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };
    config.init_logging();
    debug!(command = ?cli.command, "fundflow starting");

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args, &config),
        Commands::Check(args) => check::execute(&args.scenario),
        Commands::Price(args) => price::execute(args),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
