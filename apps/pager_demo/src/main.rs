use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_stream::StreamExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod script;
mod session;
mod simulator;

use config::{load_settings, load_settings_from, Settings};
use script::{default_script, parse_script};
use session::DemoSession;

#[derive(Parser, Debug)]
#[command(name = "pager-demo", about = "Drive a paging controller with a simulated widget")]
struct Args {
    /// Settings file; defaults to ./pager_demo.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of pages to start with.
    #[arg(long)]
    pages: Option<usize>,
    /// Scroll without animation unless a step says otherwise.
    #[arg(long)]
    no_animation: bool,
    /// Print snapshots as JSON instead of the counter label.
    #[arg(long)]
    json: bool,
    /// Comma-separated steps, e.g. `next,goto:2,add,insert:1,swipe:prev,bounce,reset`.
    #[arg(long, value_delimiter = ',')]
    script: Vec<String>,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = match &self.config {
            Some(path) => load_settings_from(path, |key| std::env::var(key).ok()),
            None => load_settings(),
        };
        if let Some(pages) = self.pages {
            settings.initial_pages = pages;
        }
        if self.no_animation {
            settings.default_animated = false;
        }
        if self.json {
            settings.print_json = true;
        }
        settings
    }
}

fn render(session: &DemoSession, print_json: bool) -> Result<String> {
    let snapshot = session.snapshot();
    if print_json {
        return serde_json::to_string(&snapshot).context("failed to encode snapshot");
    }
    Ok(format!(
        "{snapshot} [{}]",
        session.current_label().unwrap_or("empty")
    ))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = args.settings();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let steps = if args.script.is_empty() {
        default_script()
    } else {
        parse_script(&args.script)?
    };

    let mut session = DemoSession::new(&settings)?;
    let mut snapshots = session.controller().snapshot_stream();
    let observer = tokio::spawn(async move {
        while let Some(snapshot) = snapshots.next().await {
            info!(
                current_index = ?snapshot.current_index,
                total_pages = snapshot.total_pages,
                "paging state changed"
            );
        }
    });

    println!("start: {}", render(&session, settings.print_json)?);
    for step in steps {
        session.apply(step)?;
        println!("{step:?}: {}", render(&session, settings.print_json)?);
        tokio::task::yield_now().await;
    }

    drop(session);
    observer.await.context("snapshot observer panicked")?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
