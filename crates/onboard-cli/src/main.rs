//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, initializes logging, builds the API
//! client via bootstrap and dispatches to a handler. Errors are printed
//! once here and turned into a sysexits-style exit code.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use onboard_cli::presentation::OutputFormat;
use onboard_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_logging(verbose: bool) {
    // RUST_LOG wins; otherwise -v turns on debug output for our crates
    let default = if verbose {
        "onboard_cli=debug,onboard_client=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // No command provided - show help
    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli)?;
    let api = bootstrap(&config)?;
    let api = api.as_ref();
    let format = OutputFormat::from_json_flag(cli.json);

    match command {
        Commands::Whoami => handlers::account::whoami(api).await,
        Commands::AccountActions => handlers::account::account_actions(api, format).await,
        Commands::Users => handlers::account::users(api, format).await,
        Commands::Orgs => handlers::account::organizations(api, format).await,
        Commands::Buildings => handlers::catalog::buildings(api, format).await,
        Commands::Tags => handlers::catalog::tags(api, format).await,
        Commands::EquipmentTypes => handlers::catalog::equipment_types(api, format).await,
        Commands::Equipment { building_id } => {
            handlers::catalog::equipment(api, *building_id, format).await
        }
        Commands::Select(args) => {
            handlers::points::select(api, &args.to_selector(), format).await
        }
        Commands::AllPoints => handlers::points::all_points(api, format).await,
        Commands::Points { ids, datasource } => {
            handlers::points::points(api, ids, datasource, format).await
        }
        Commands::PointTypes => handlers::catalog::point_types(api, format).await,
        Commands::Measurements => handlers::catalog::measurements(api, format).await,
        Commands::Units => handlers::catalog::units(api, format).await,
        Commands::Query { points, window } => {
            handlers::data::query(api, points, *window, format).await
        }
        Commands::PushUpdates { file } => handlers::data::push_updates(api, file).await,
        Commands::SendIngestStats { file } => handlers::data::send_ingest_stats(api, file).await,
        Commands::IngestStats => handlers::data::ingest_stats(api, format).await,
        Commands::Alerts => handlers::data::alerts(api, format).await,
        Commands::CopyData { map, window } => handlers::data::copy_data(api, map, *window).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads ONBOARD_*
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(CliError::exit_code_for(&err))
        }
    }
}
