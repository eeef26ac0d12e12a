mod render;
mod theme;

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use paccheck_core::{Error, Result};
use paccheck_scrapers::{ArchNewsScraper, ArticleStatus, CheckManager};
use paccheck_storage::FileMarkerStore;

use render::Presenter;
use theme::Theme;

/// Check the Arch Linux homepage for unseen news announcements.
///
/// Shows the newest announcement once, asks for acknowledgment, and stays
/// quiet on later runs until new content appears.
#[derive(Parser, Debug)]
#[command(name = "paccheck", author, version, about)]
struct Cli {}

fn main() -> ExitCode {
    // Quiet by default; RUST_LOG opts into diagnostics on stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    let presenter = Presenter::new(Theme::colored());
    match run(&presenter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let msg = match &err {
                Error::Scraping(detail) => format!(
                    "{detail}; the page layout probably changed, please report this as a paccheck bug"
                ),
                _ => err.to_string(),
            };
            eprintln!("{}", presenter.error_line(&msg));
            match err {
                Error::Scraping(_) => ExitCode::from(1),
                _ => ExitCode::from(2),
            }
        }
    }
}

fn run(presenter: &Presenter) -> Result<()> {
    println!("{}", presenter.banner());

    let store = Arc::new(FileMarkerStore::at_default_path());
    tracing::debug!(path = %store.path().display(), "using marker store");
    let manager = CheckManager::new(store, Box::new(ArchNewsScraper::new()));

    let report = manager.check()?;
    if report.status == ArticleStatus::Unchanged {
        return Ok(());
    }

    println!("\n{}", presenter.render(&report.article));
    print!("{}", presenter.prompt());
    io::stdout().flush()?;

    if read_token()? == "y" {
        manager.acknowledge(&report.article)?;
        tracing::info!("marker updated");
    }

    if report.missed_updates && !report.first_run {
        println!(
            "{}",
            presenter.note(
                "more than one news alert arrived while you were away; \
                 visit https://archlinux.org for the full history."
            )
        );
    }

    Ok(())
}

/// One whitespace-delimited token from standard input. A closed or
/// unreadable stdin is fatal rather than defaulting to "no".
fn read_token() -> Result<String> {
    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .map_err(|e| Error::Input(e.to_string()))?;
    if read == 0 {
        return Err(Error::Input(
            "standard input closed before the acknowledgment was read".to_string(),
        ));
    }
    Ok(first_token(&line))
}

fn first_token(line: &str) -> String {
    line.split_whitespace().next().unwrap_or_default().to_string()
}
