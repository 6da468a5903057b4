//! One summarisation run: feed → aggregator → ranker → presenter.

use crate::cli::Cli;
use anyhow::Context;
use logwizzy_core::{
    config::{self, Config, SourceConfig},
    Aggregator, Ranker, TiePolicy,
};
use logwizzy_feeds::{file, JournalFeed};
use logwizzy_term::{Spinner, Summary, Theme, View};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Everything a run needs, after the CLI has been layered over the config.
#[derive(Debug, Clone)]
pub struct Options {
    pub since: String,
    pub view: View,
    pub policy: TiePolicy,
    pub input: Option<PathBuf>,
    pub source: SourceConfig,
    pub color: bool,
    pub spinner: bool,
    pub timestamp_format: Option<String>,
}

impl Options {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        let view = View::from_flags(
            cli.errors,
            cli.important,
            cli.all,
            cli.limit.unwrap_or(config.summary.limit),
            cli.limit.is_some(),
        );
        let policy = if cli.strict_critical {
            TiePolicy::CriticalAboveError
        } else {
            config.summary.tie_policy()
        };
        let show_timestamps = cli.timestamps || config.ui.show_timestamps;

        Self {
            since: cli.since.clone().unwrap_or_else(|| config.summary.since.clone()),
            view,
            policy,
            input: cli.input.clone(),
            source: config.source.clone(),
            color: logwizzy_term::color_enabled(config.ui.color, cli.no_color),
            spinner: config.ui.spinner,
            timestamp_format: show_timestamps.then(|| config.ui.timestamp_format.clone()),
        }
    }
}

pub async fn run(opts: Options) -> anyhow::Result<()> {
    let theme = Theme::load_or_default(&config::config_path().with_file_name("theme.toml"));
    let summary = Summary::new(&theme, opts.since.clone())
        .color(opts.color)
        .timestamps(opts.timestamp_format.clone());

    summary.render_header(&mut std::io::stdout().lock(), &opts.view)?;

    let spinner = (opts.spinner && std::io::stderr().is_terminal()).then(Spinner::start);
    let mut aggregator = Aggregator::new();
    let ingested = ingest(&opts, &mut aggregator).await;
    if let Some(spinner) = spinner {
        spinner.stop().await;
    }
    ingested?;

    let ranked = Ranker::new(opts.view.rank_mode(), opts.policy).rank(aggregator.into_groups());
    tracing::debug!(groups = ranked.len(), view = ?opts.view, "rendering summary");

    let mut out = std::io::stdout().lock();
    summary.render_groups(&mut out, &opts.view, &ranked)?;
    summary.render_footer(&mut out)?;
    out.flush()?;
    Ok(())
}

async fn ingest(opts: &Options, aggregator: &mut Aggregator) -> anyhow::Result<()> {
    match &opts.input {
        Some(path) => {
            let source = file::open(path).await?;
            logwizzy_feeds::ingest(source, aggregator).await?;
        }
        None => {
            let feed = JournalFeed::from_config(&opts.source, &opts.since);
            let prefix = format!("{} error", feed.program());
            let running = feed
                .spawn(move |line| eprintln!("\n{prefix}: {line}"))
                .context("could not start the log producer")?;
            let exit = running.run(aggregator).await?;
            tracing::debug!(status = %exit.status, stderr_lines = exit.stderr_lines, "producer finished");
        }
    }
    Ok(())
}
