//! Terminal entry point for the Pokedex catalog viewer.
//!
//! Each subcommand builds one view, drives its load to completion, and
//! renders the result to stdout. Logs go to stderr.
//!
//! ```text
//! Fetcher --> view (load, filter, sort) --> render (text or JSON)
//! ```

mod cli;
mod error;
mod render;

use std::io::Write;

use clap::Parser;
use pokedex_fetch::{Fetcher, FetcherConfig};
use pokedex_views::{DetailState, DetailView, GalleryView, ListView, LoadState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command, DetailArgs, GalleryArgs, ListArgs, NameArgs};
use crate::error::CliError;

/// Application entry point.
///
/// Initializes logging, loads configuration from the environment (with
/// command-line overrides), and runs the selected view.
///
/// # Errors
///
/// Returns an error if configuration is invalid, output fails, or the
/// view ends in an error state.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();
    run(cli).await?;

    Ok(())
}

/// Load configuration, build the fetcher, and run the selected view.
async fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = FetcherConfig::from_env()?;
    if cli.offline {
        config.offline = true;
    }
    info!(
        api_base_url = config.api_base_url,
        list_limit = config.list_limit,
        offline = config.offline,
        "configuration loaded"
    );

    let fetcher = Fetcher::from_config(&config)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::List(args) => {
            run_list(fetcher, config.list_limit, &args, cli.json, &mut stdout).await?;
        }
        Command::Gallery(args) => {
            run_gallery(fetcher, config.list_limit, &args, cli.json, &mut stdout).await?;
        }
        Command::Detail(args) => run_detail(fetcher, &args, cli.json, &mut stdout).await?,
        Command::Name(args) => run_name(&fetcher, &args, cli.json, &mut stdout).await?,
    }

    stdout.flush()?;
    Ok(())
}

/// Initialize structured logging on stderr.
///
/// `RUST_LOG` picks the filter (default `warn`); `POKEDEX_LOG_FORMAT=json`
/// switches to JSON lines.
fn init_logging() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_writer(std::io::stderr);

    let json = std::env::var("POKEDEX_LOG_FORMAT")
        .is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

async fn run_list(
    fetcher: Fetcher,
    limit: u32,
    args: &ListArgs,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut view = ListView::new(fetcher, limit);
    view.set_search(args.search.clone());
    view.set_sort(args.sort_option());

    if let LoadState::Failed { message } = view.load().await {
        let message = message.clone();
        render::render_failure(&message, out)?;
        return Err(CliError::LoadFailed(message));
    }

    if json {
        render::render_json(&view.visible(), out)
    } else {
        render::render_list(&view, out)
    }
}

async fn run_gallery(
    fetcher: Fetcher,
    limit: u32,
    args: &GalleryArgs,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut view = GalleryView::new(fetcher, limit);

    if let LoadState::Failed { message } = view.load().await {
        let message = message.clone();
        render::render_failure(&message, out)?;
        return Err(CliError::LoadFailed(message));
    }

    if args.all {
        view.select_all();
    }
    for type_name in &args.types {
        let wanted = type_name.trim().to_lowercase();
        if !view.select(&wanted) {
            warn!(type_name = wanted, "type not present in the loaded entries");
        }
    }

    if json {
        let body = serde_json::json!({
            "filters": view.filters(),
            "entries": view.visible(),
        });
        render::render_json(&body, out)
    } else {
        render::render_gallery(&view, out)
    }
}

async fn run_detail(
    fetcher: Fetcher,
    args: &DetailArgs,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if !args.id.is_in_catalog() {
        return Err(CliError::OutOfRange(args.id));
    }

    let mut view = DetailView::new(fetcher, args.id);
    let moved = if args.previous {
        view.go_previous()
    } else if args.next {
        view.go_next()
    } else {
        None
    };

    if moved.is_some() {
        view.finish_load().await;
    } else {
        if args.previous || args.next {
            warn!(id = %args.id, "navigation disabled at catalog boundary");
        }
        view.load().await;
    }

    if json {
        if let Some(entry) = view.state().entry() {
            render::render_json(entry, out)?;
        }
    } else {
        render::render_detail(&view, out)?;
    }

    match view.state() {
        DetailState::NotFound => Err(CliError::NotFound(view.id().to_string())),
        DetailState::Failed => Err(CliError::LoadFailed(
            pokedex_views::error::DETAIL_FAILED_MESSAGE.to_owned(),
        )),
        DetailState::Loading | DetailState::Ready(_) => Ok(()),
    }
}

async fn run_name(
    fetcher: &Fetcher,
    args: &NameArgs,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let Some(entry) = fetcher.fetch_by_name(&args.name).await else {
        writeln!(out, "{}", pokedex_views::error::NOT_FOUND_MESSAGE)?;
        return Err(CliError::NotFound(args.name.clone()));
    };

    if json {
        render::render_json(&entry, out)
    } else {
        render::render_entry(&entry, out)
    }
}
