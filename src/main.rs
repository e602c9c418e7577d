//! Ideaflow CLI - Inspect and exercise the idea evaluation workflow

use clap::Parser;
use ideaflow::cli::{Cli, Commands};
use ideaflow::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli).await;

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error [{}]: {}", e.code(), e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

async fn run(cli: Cli) -> ideaflow::Result<()> {
    match cli.command {
        Some(Commands::Init { force }) => {
            ideaflow::cli::commands::init::run(cli.cwd.as_deref(), force).await
        }
        Some(Commands::Transitions { status, json }) => {
            ideaflow::cli::commands::transitions::run(&status, json).await
        }
        Some(Commands::Check {
            current,
            target,
            comment,
        }) => {
            ideaflow::cli::commands::check::run(
                cli.cwd.as_deref(),
                &current,
                &target,
                comment.as_deref(),
            )
            .await
        }
        Some(Commands::Suggest { status, json }) => {
            ideaflow::cli::commands::suggest::run(&status, json).await
        }
        Some(Commands::Role { role, json }) => {
            ideaflow::cli::commands::role::run(&role, json).await
        }
        Some(Commands::Replay { file, json }) => {
            ideaflow::cli::commands::replay::run(cli.cwd.as_deref(), file, json).await
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
