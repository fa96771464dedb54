// src/interactive.rs
//! Line-oriented command loop driving a [`ViewSession`].

use std::{
    io::{BufRead, Write},
    str::FromStr,
};

use country_table_domain::{ContinentFilter, HasStatesFilter, PageSize, SortKey, SortSpec, ViewEvent};
use country_table_shared_kernel::{CountryTableError, PresentationError, Result};
use country_table_usecase::ViewSession;

use crate::{
    config::Config,
    presentation::{self, PageView},
};

const HELP: &str = "\
commands:
  continent <code|name|all>   filter by continent
  states <yes|no|all>         filter by has-states
  sort <key>                  sort by name, continent or has-states (repeat to flip)
  sort <key>:<asc|desc>       sort with an explicit direction
  sort none                   dataset order
  next | prev | first | last  page navigation
  page <n>                    jump to page n (1-based)
  size <5|10|25|all>          rows per page
  reset                       clear filters and sort
  help                        this text
  quit                        leave";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Apply(ViewEvent),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CountryTableError;

    fn from_str(line: &str) -> Result<Self> {
        let mut parts = line.split_whitespace();
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let arg = parts.collect::<Vec<_>>().join(" ");

        let event = match name.as_str() {
            "continent" | "c" => ViewEvent::SetContinent(arg.parse::<ContinentFilter>()?),
            "states" | "s" => ViewEvent::SetHasStates(arg.parse::<HasStatesFilter>()?),
            "sort" => parse_sort(&arg)?,
            "next" | "n" => ViewEvent::NextPage,
            "prev" | "p" => ViewEvent::PreviousPage,
            "first" => ViewEvent::FirstPage,
            "last" => ViewEvent::LastPage,
            "page" => ViewEvent::GoToPage(parse_page(&arg)?),
            "size" => ViewEvent::SetPageSize(required("size", &arg)?.parse::<PageSize>()?),
            "reset" => ViewEvent::Reset,
            "help" | "?" => return Ok(Self::Help),
            "quit" | "q" | "exit" => return Ok(Self::Quit),
            other => {
                return Err(PresentationError::ArgumentParsing {
                    argument: other.to_string(),
                    reason: "unknown command (try `help`)".to_string(),
                }
                .into());
            }
        };
        Ok(Self::Apply(event))
    }
}

fn required<'s>(command: &str, arg: &'s str) -> Result<&'s str> {
    if arg.is_empty() {
        return Err(PresentationError::ArgumentParsing {
            argument: command.to_string(),
            reason: "missing value".to_string(),
        }
        .into());
    }
    Ok(arg)
}

/// A bare key toggles like a header click; `key:dir` sets the sort outright.
fn parse_sort(arg: &str) -> Result<ViewEvent> {
    let arg = required("sort", arg)?;
    if matches!(arg.to_ascii_lowercase().as_str(), "none" | "off") {
        return Ok(ViewEvent::SetSort(None));
    }
    if arg.contains(':') {
        return Ok(ViewEvent::SetSort(Some(arg.parse::<SortSpec>()?)));
    }
    Ok(ViewEvent::SortBy(arg.parse::<SortKey>()?))
}

fn parse_page(arg: &str) -> Result<usize> {
    let arg = required("page", arg)?;
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| {
            PresentationError::InvalidValue {
                flag: "page".to_string(),
                value: arg.to_string(),
                reason: "must be a page number starting at 1".to_string(),
            }
            .into()
        })
}

/// Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    line.parse().map(Some)
}

/// Renders the initial page, then one page per command until `quit` or end of input.
///
/// Bad commands print an `error:` line and the loop carries on.
///
/// # Errors
///
/// Fails only when reading input or writing output fails.
pub fn run<R: BufRead, W: Write>(session: &mut ViewSession<'_>, input: R, out: &mut W, config: &Config) -> Result<()> {
    render(session, out, config)?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Help)) => writeln!(out, "{HELP}")?,
            Ok(Some(Command::Apply(event))) => {
                session.apply(event);
                writeln!(out)?;
                render(session, out, config)?;
            }
            Err(e) => {
                tracing::debug!(input = %line.trim(), error = %e, "command rejected");
                writeln!(out, "error: {e}")?;
            }
        }
        out.flush()?;
    }

    tracing::info!(events = session.applied(), "interactive session finished");
    Ok(())
}

fn render<W: Write>(session: &ViewSession<'_>, out: &mut W, config: &Config) -> Result<()> {
    let page = session.page();
    let ctx = PageView::new(&page, session.state()).ascii(config.ascii);
    presentation::render(out, config.format, &ctx)
}
