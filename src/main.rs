//! oktaswa - manage Okta SWA (Secure Web Authentication) applications

use clap::{CommandFactory, Parser};

mod apps;
mod cli;
mod client;
mod config;
mod error;
mod output;
mod secret;

use cli::args::GlobalOptions;
use cli::{AppCommands, Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins when set; otherwise warnings only, or debug for this
/// crate with `--debug`.
fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_module(env!("CARGO_CRATE_NAME"), log::LevelFilter::Debug);
    }
    builder.init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::App(app_cmd) => match app_cmd {
            AppCommands::Create {
                fields,
                visibility,
                dry_run,
            } => cli::app::create(&opts, fields, visibility, dry_run).await,
            AppCommands::Update {
                id,
                fields,
                credentials,
                dry_run,
            } => cli::app::update(&opts, &id, fields, credentials, dry_run).await,
        },
        Commands::Status => cli::status::run(&opts),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
