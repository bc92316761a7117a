use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotitab::{
    cli, config, error,
    types::{CollectionKind, TimeRange},
    utils,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch one collection and render it as a table
    Tables(TablesOptions),

    /// Fetch every collection and write JSON table files
    Export(ExportOptions),

    /// Some helper information about collections and configuration
    Info(InfoOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TablesOptions {
    /// Collection to fetch
    #[clap(long, value_enum)]
    pub collection: CollectionKind,

    /// Ranking window for the top collections
    #[clap(long, value_enum)]
    pub time_range: Option<TimeRange>,

    /// Rows requested per page from paginated endpoints
    #[clap(long, value_parser = utils::parse_positive_count)]
    pub page_size: Option<u32>,

    /// Cap on accumulated rows per collection
    #[clap(long)]
    pub max_results: Option<u32>,

    /// Request size for the bounded top-collection calls
    #[clap(long)]
    pub limit: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Output directory for the table files
    #[clap(long, default_value = "spotitab-export")]
    pub out: PathBuf,

    /// Ranking window for the top collections
    #[clap(long, value_enum)]
    pub time_range: Option<TimeRange>,
}

#[derive(Parser, Debug, Clone)]
pub struct InfoOptions {
    /// List collections and how each one is composed
    #[clap(long)]
    collections: bool,

    /// Show environment status and session defaults
    #[clap(long)]
    config: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Tables(opt) => {
            cli::tables(
                opt.collection,
                opt.time_range,
                opt.page_size,
                opt.max_results,
                opt.limit,
            )
            .await
        }

        Command::Export(opt) => cli::export(opt.out, opt.time_range).await,

        Command::Info(opt) => cli::info(opt.collections, opt.config).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
