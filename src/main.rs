use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use clowder_client::actions::{ActionRequest, Dispatcher};
use clowder_client::api::ApiClient;
use clowder_client::config::Config;
use clowder_client::logging::init_tracing;
use clowder_client::state::{ErrorState, RootState, Store};
use clowder_client::views::{
    self, Container, DatasetCard, FileView, MountGuard, ProfileView, ViewContext,
};

#[derive(Debug, Parser)]
#[command(name = "clowder-client", about = "Browse a Clowder instance from the terminal")]
struct Cli {
    /// Config file to use instead of the per-user one.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Retry once when a request fails.
    #[arg(long)]
    retry: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show a file with its metadata and previewers.
    File { id: String },
    /// List the versions of a file, newest first.
    Versions { id: String },
    /// List datasets as cards.
    Datasets {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a dataset and its files.
    Dataset { id: String },
    /// Show the signed-in user.
    Profile,
    /// List metadata definitions.
    Definitions {
        #[arg(long)]
        name: Option<String>,
    },
}

impl Command {
    /// Requests to run for commands that have no container of their own.
    fn requests(&self, page_size: u32) -> Vec<ActionRequest> {
        match self {
            Command::Versions { id } => vec![ActionRequest::FetchFileVersions {
                file_id: id.clone(),
            }],
            Command::Datasets { skip, limit } => vec![ActionRequest::FetchDatasets {
                skip: *skip,
                limit: Some(limit.unwrap_or(page_size)),
            }],
            Command::Dataset { id } => vec![
                ActionRequest::FetchDatasetAbout {
                    dataset_id: id.clone(),
                },
                ActionRequest::FetchFilesInDataset {
                    dataset_id: id.clone(),
                },
            ],
            Command::Definitions { name } => vec![ActionRequest::FetchMetadataDefinitions {
                name: name.clone(),
                skip: 0,
                limit: Some(page_size),
            }],
            Command::File { .. } | Command::Profile => Vec::new(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    config.validate().context("invalid config")?;

    let client = ApiClient::new(&config).context("failed to build HTTP client")?;
    let dispatcher = Dispatcher::new(client, Store::new());
    let ctx = ViewContext::from_config(&config);

    let guard = match &cli.command {
        Command::File { id } => views::mount::<FileView>(dispatcher.clone(), id),
        Command::Profile => views::mount::<ProfileView>(dispatcher.clone(), &()),
        other => MountGuard::mount(dispatcher.clone(), other.requests(config.api.page_size)),
    };
    guard.settle().await;

    if cli.retry && dispatcher.store().state().error.has_failed() {
        dispatcher.retry_failed().await;
    }

    let state = dispatcher.store().state();
    if state.error.has_failed() {
        print_json(&*state.error)?;
        let reason = state.error.reason.as_deref().unwrap_or("unknown error");
        match failure_hint(&state.error) {
            Some(hint) => anyhow::bail!("request failed: {} ({})", reason, hint),
            None => anyhow::bail!("request failed: {}", reason),
        }
    }

    render(&cli.command, &state, &ctx)
}

fn render(command: &Command, state: &RootState, ctx: &ViewContext) -> Result<()> {
    match command {
        Command::File { id } => print_json(&FileView::render(state, id, ctx)),
        Command::Profile => print_json(&ProfileView::render(state, &(), ctx)),
        Command::Versions { .. } => print_json(&state.file.versions),
        Command::Datasets { .. } => print_json(&DatasetCard::render_listing(state, ctx)),
        Command::Dataset { .. } => print_json(&*state.dataset),
        Command::Definitions { .. } => print_json(&state.metadata.metadata_definition_list),
    }
}

fn failure_hint(error: &ErrorState) -> Option<&'static str> {
    if error.is_not_authorized() {
        Some("check the api_key in the config file or the key environment variable")
    } else if error.is_not_found() {
        Some("no such resource on this server")
    } else {
        None
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to encode output")?;
    println!("{}", text);
    Ok(())
}
