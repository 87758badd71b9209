use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tradecmp_core::{Category, HttpDocumentService, Orchestrator};

use tradecmp_cli::{
    commands::{CommandOutput, compare, list, run},
    config::{BASE_URL_ENV, Overrides, load_config_or_default, resolve_settings},
    telemetry,
};

#[derive(Debug, Parser)]
#[command(
    name = "tradecmp",
    about = "Compare trade agreements against term sheets",
    version
)]
struct Cli {
    /// Path to the configuration file (defaults to ./tradecmp.toml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the document service, e.g. http://localhost:8080/api/documents
    #[arg(long, env = BASE_URL_ENV, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List trade agreements found in a folder
    Agreements(ListArgs),

    /// List term sheets found in a folder
    TermSheets(ListArgs),

    /// Compare one trade agreement with one term sheet
    Compare(CompareArgs),

    /// List both folders, pick a document of each kind and compare them
    Run(RunArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Folder to scan (falls back to the configured folder)
    #[arg(long, value_name = "PATH")]
    folder: Option<String>,
}

#[derive(Debug, Args)]
struct CompareArgs {
    /// Full path of the trade agreement
    #[arg(long, value_name = "PATH")]
    agreement: Option<String>,

    /// Full path of the term sheet
    #[arg(long, value_name = "PATH")]
    term_sheet: Option<String>,
}

#[derive(Debug, Args)]
struct RunArgs {
    #[arg(long, value_name = "PATH")]
    agreements_folder: Option<String>,

    #[arg(long, value_name = "PATH")]
    term_sheets_folder: Option<String>,

    /// File name or path of the agreement to compare (first listed by default)
    #[arg(long, value_name = "NAME")]
    agreement: Option<String>,

    /// File name or path of the term sheet to compare (first listed by default)
    #[arg(long, value_name = "NAME")]
    term_sheet: Option<String>,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let config = load_config_or_default(cli.config.as_deref())?;

    telemetry::init_telemetry_with_level(&config.log.level);

    let (agreements_folder, term_sheets_folder) = match &cli.command {
        Commands::Agreements(args) => (args.folder.clone(), None),
        Commands::TermSheets(args) => (None, args.folder.clone()),
        Commands::Run(args) => (
            args.agreements_folder.clone(),
            args.term_sheets_folder.clone(),
        ),
        Commands::Compare(_) => (None, None),
    };
    let settings = resolve_settings(
        &config,
        Overrides {
            base_url: cli.base_url,
            agreements_folder,
            term_sheets_folder,
        },
    );
    tracing::debug!(base_url = %settings.base_url, "using document service");

    let orchestrator = Orchestrator::new(HttpDocumentService::new(&settings.base_url));

    let output = match cli.command {
        Commands::Agreements(_) => {
            list::list(
                &orchestrator,
                Category::TradeAgreements,
                &settings.agreements_folder,
            )
            .await
        }
        Commands::TermSheets(_) => {
            list::list(
                &orchestrator,
                Category::TermSheets,
                &settings.term_sheets_folder,
            )
            .await
        }
        Commands::Compare(args) => {
            compare::compare(&orchestrator, args.agreement, args.term_sheet).await
        }
        Commands::Run(args) => {
            run::run(
                &orchestrator,
                run::RunArgs {
                    agreements_folder: settings.agreements_folder,
                    term_sheets_folder: settings.term_sheets_folder,
                    agreement: args.agreement,
                    term_sheet: args.term_sheet,
                },
            )
            .await
        }
    };

    report(&output);
    if output.failed {
        std::process::exit(1);
    }

    Ok(())
}

fn report(output: &CommandOutput) {
    let stdout = output.stdout();
    if !stdout.is_empty() {
        println!("{stdout}");
    }
    if let Some(message) = &output.message {
        eprintln!("{message}");
    }
}
