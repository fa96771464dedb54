// src/config.rs
use std::path::PathBuf;

use country_table_domain::{Filters, PageSize, ViewState};
use country_table_shared_kernel::{PresentationError, Result};

use crate::cli::Args;

/// 出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Tsv,
    Json,
    #[cfg(feature = "yaml")]
    Yaml,
    Md,
    Jsonl,
}

/// What the process does once the dataset is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RunMode {
    /// Render the requested page once.
    #[default]
    Render,
    /// Read commands from stdin and re-render after each.
    Interactive,
    ListContinents,
}

/// Validated runtime configuration built from [`Args`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub view: ViewState,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub ascii: bool,
    pub mode: RunMode,
}

impl TryFrom<&Args> for Config {
    type Error = country_table_shared_kernel::CountryTableError;

    fn try_from(args: &Args) -> Result<Self> {
        let page = zero_based_page(args.page)?;
        let page_size = if args.all_rows { PageSize::Unlimited } else { args.rows_per_page.unwrap_or_default() };

        let mode = if args.interactive {
            RunMode::Interactive
        } else if args.list_continents {
            RunMode::ListContinents
        } else {
            RunMode::Render
        };

        Ok(Self {
            view: ViewState::new(Filters::new(args.continent, args.has_states), args.sort, page, page_size),
            format: args.format.into(),
            output: args.output.clone(),
            data: args.data.clone(),
            ascii: args.ascii,
            mode,
        })
    }
}

fn zero_based_page(page: usize) -> Result<usize> {
    page.checked_sub(1).ok_or_else(|| {
        PresentationError::InvalidValue {
            flag: "--page".to_string(),
            value: page.to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use country_table_domain::{Continent, ContinentFilter, SortKey, SortSpec};
    use country_table_shared_kernel::CountryTableError;

    use super::*;

    fn config_from(argv: &[&str]) -> Result<Config> {
        let args = Args::parse_from(std::iter::once("country_table").chain(argv.iter().copied()));
        Config::try_from(&args)
    }

    #[test]
    fn page_flag_is_one_based() {
        let config = config_from(&["--page", "3"]).expect("config builds");
        assert_eq!(config.view.page, 2);
        assert_eq!(config.view.page_size, PageSize::default());
    }

    #[test]
    fn page_zero_is_rejected() {
        let err = config_from(&["--page", "0"]).unwrap_err();
        if let CountryTableError::Presentation(PresentationError::InvalidValue { flag, value, .. }) = err {
            assert_eq!(flag, "--page");
            assert_eq!(value, "0");
        } else {
            panic!("unexpected error variant: {err:?}");
        }
    }

    #[test]
    fn all_rows_disables_pagination() {
        let config = config_from(&["--all-rows"]).expect("config builds");
        assert_eq!(config.view.page_size, PageSize::Unlimited);
    }

    #[test]
    fn view_collects_filters_and_sort() {
        let config = config_from(&["--continent", "sa", "--sort", "continent"]).expect("config builds");
        assert_eq!(config.view.filters.continent, ContinentFilter::Only(Continent::SouthAmerica));
        assert_eq!(config.view.sort, Some(SortSpec::ascending(SortKey::Continent)));
        assert_eq!(config.mode, RunMode::Render);
    }

    #[test]
    fn mode_flags_select_run_mode() {
        assert_eq!(config_from(&["-i"]).unwrap().mode, RunMode::Interactive);
        assert_eq!(config_from(&["--list-continents"]).unwrap().mode, RunMode::ListContinents);
    }
}
