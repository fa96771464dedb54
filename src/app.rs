// src/app.rs
use std::io::{self, Write};

use anyhow::Context as _;
use country_table_infra::{BundledDataset, FileDataset};
use country_table_ports::dataset::CountrySource;
use country_table_usecase::{Catalog, LoadCatalog, ViewSession};

use crate::{
    cli::Args,
    config::{Config, RunMode},
    interactive,
    presentation::{self, OutputWriter, PageView},
};

/// Runs one invocation end to end.
///
/// # Errors
///
/// Returns `Err` for invalid arguments, an unreadable or invalid dataset, or
/// output that cannot be written.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let config = Config::try_from(args)?;
    run_with_config(&config)
}

/// Runs with an already validated [`Config`].
///
/// # Errors
///
/// See [`run`].
pub fn run_with_config(config: &Config) -> anyhow::Result<()> {
    let catalog = load_catalog(config)?;
    tracing::debug!(mode = ?config.mode, format = ?config.format, view = ?config.view, "starting");

    match config.mode {
        RunMode::ListContinents => {
            let mut out = OutputWriter::create(config.output.as_deref());
            presentation::write_continents(&mut out, &catalog.continent_counts())?;
            out.finish()?;
        }
        RunMode::Interactive => {
            let mut session = ViewSession::new(&catalog, config.view);
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            interactive::run(&mut session, stdin.lock(), &mut stdout, config)?;
            stdout.flush()?;
        }
        RunMode::Render => {
            let page = catalog.page(&config.view);
            if page.is_empty() && page.total > 0 {
                tracing::warn!(
                    page = config.view.page.saturating_add(1),
                    pages = page.page_count(),
                    "requested page is past the last page"
                );
            }
            let mut out = OutputWriter::create(config.output.as_deref());
            presentation::render(&mut out, config.format, &PageView::new(&page, &config.view).ascii(config.ascii))?;
            out.finish()?;
        }
    }
    Ok(())
}

fn load_catalog(config: &Config) -> anyhow::Result<Catalog> {
    let source: Box<dyn CountrySource> = match &config.data {
        Some(path) => Box::new(FileDataset::new(path)),
        None => Box::new(BundledDataset),
    };
    LoadCatalog::new(source.as_ref())
        .run()
        .with_context(|| format!("failed to load dataset from {}", source.origin()))
}
