use clap::Parser;
use tracing_subscriber::EnvFilter;

use str_solver::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("str_solver=debug,info")
    } else {
        EnvFilter::new("str_solver=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::Identify(args) => {
            cli::identify::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Profile(args) => {
            cli::profile::run(args, cli.format)?;
        }
        cli::Commands::Count(args) => {
            cli::count::run(args, cli.format)?;
        }
        cli::Commands::Database(args) => {
            cli::database::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Shell(args) => {
            cli::shell::run(args)?;
        }
    }

    Ok(())
}
