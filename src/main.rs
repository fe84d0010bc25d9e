//! gitlabctl - Main entry point

use clap::Parser;
use log::{debug, info};

use gitlabctl::{
    run_env_command, Cli, Command, GetResource, GitlabClient, HostResolver, TokenResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting gitlabctl v{}", env!("CARGO_PKG_VERSION"));

    // An interrupt drops the pipeline future, abandoning in-flight requests;
    // no partial table is rendered.
    tokio::select! {
        result = run(&cli) => {
            if let Err(e) = result {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Interrupted");
            std::process::exit(130);
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let host = HostResolver::resolve(cli.host.as_deref())?;
    let token = TokenResolver::new(&host).resolve(cli.token.as_deref())?;
    debug!("Resolved host: {}", host);

    let client = GitlabClient::new(token, host);

    match &cli.command {
        Command::Get {
            resource: GetResource::Environment(_),
        } => run_env_command(&client, cli).await,
    }
}
