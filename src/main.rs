use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;

use seqdb::{SequenceStore, StoreConfig};

mod cli;
use cli::display::Palette;
use cli::shell::{preload, Shell};
use cli::{Cli, OutputFormat};

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = StoreConfig::default().with_min_overlap(cli.min_overlap);
    let mut store = SequenceStore::with_config(config).context("invalid store configuration")?;
    log::info!("store configured: {:?}", store.config());

    if let Some(path) = &cli.preload {
        let file = File::open(path)
            .with_context(|| format!("failed to open preload file {}", path.display()))?;
        let report = preload(&mut store, BufReader::new(file))
            .with_context(|| format!("failed to read preload file {}", path.display()))?;
        log::info!(
            "preloaded {}: {} created, {} existing, {} rejected",
            path.display(),
            report.created,
            report.existing,
            report.rejected
        );
    }

    let interactive = !cli.no_prompt && atty::is(atty::Stream::Stdin);
    let palette = match cli.format {
        OutputFormat::Text => Palette::detect(),
        OutputFormat::Json => Palette::plain(),
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout(), io::stderr(), cli.format)
        .with_prompt(interactive)
        .with_palette(palette);
    shell.run()?;

    log::info!("session ended with {} sequences", shell.store().len());
    Ok(())
}
