//! Interactive browsing session.
//!
//! Mounting runs one unfiltered search. After that the session reads one
//! command per line from stdin. Editing a filter only changes the draft; the
//! catalog is queried again when the user asks for `search`.

use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::open_catalog;
use super::seed::format_seed_progress;
use crate::catalog::CatalogClient;
use crate::display::format_state;
use crate::error::{Result, SightseeError};
use crate::query::QueryController;
use crate::seed::default_seed_set;
use crate::types::{CATEGORIES, FilterField, LOCATIONS};

const HELP_TEXT: &str = "\
Commands:
  q <text>            set the free-text query (no value clears it)
  category <name>     set the category filter
  location <name>     set the location filter
  clear               clear every filter
  search              search with the current filters
  seed                add sample attractions (only when the list is empty)
  show                print the current results again
  help                show this help
  quit                leave";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    SetFilter(FilterField, Option<String>),
    Clear,
    Search,
    Seed,
    Show,
    Help,
    Quit,
    Nothing,
}

/// Parse one line of session input
pub fn parse_browse_line(line: &str) -> Result<BrowseCommand> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(BrowseCommand::Nothing);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let value = (!rest.is_empty()).then(|| rest.to_string());

    let command = match word.to_lowercase().as_str() {
        "clear" => BrowseCommand::Clear,
        "search" | "s" | "go" => BrowseCommand::Search,
        "seed" => BrowseCommand::Seed,
        "show" | "ls" => BrowseCommand::Show,
        "help" | "?" => BrowseCommand::Help,
        "quit" | "exit" => BrowseCommand::Quit,
        other => match other.parse::<FilterField>() {
            Ok(field) => BrowseCommand::SetFilter(field, value),
            Err(_) => {
                return Err(SightseeError::Other(format!(
                    "unknown command '{word}' (type 'help')"
                )));
            }
        },
    };
    Ok(command)
}

pub async fn cmd_browse(backend_url: Option<&str>) -> Result<()> {
    let catalog = open_catalog(backend_url)?;
    let controller = QueryController::mount(catalog).await;
    render(&controller);

    let interactive = atty::is(atty::Stream::Stdin);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        if interactive {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_browse_line(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e.to_string().red());
                continue;
            }
        };

        if !apply(&controller, command).await {
            break;
        }
    }

    Ok(())
}

/// Run one command against the controller; false means leave the session.
async fn apply<C: CatalogClient>(controller: &QueryController<C>, command: BrowseCommand) -> bool {
    match command {
        BrowseCommand::Nothing => {}
        BrowseCommand::Quit => return false,
        BrowseCommand::Help => println!("{HELP_TEXT}"),
        BrowseCommand::Show => render(controller),
        BrowseCommand::SetFilter(field, value) => {
            controller.update_filter(field, value.as_deref());
            print_filters(controller);
            if let Some(value) = value {
                warn_unknown_option(field, &value);
            }
        }
        BrowseCommand::Clear => {
            controller.clear_filters();
            print_filters(controller);
        }
        BrowseCommand::Search => {
            println!("{}", "Loading…".dimmed());
            let _ = controller.search().await;
            render(controller);
        }
        BrowseCommand::Seed => {
            if !controller.is_empty_state() {
                println!(
                    "{}",
                    "Seeding is offered only when there are no results.".dimmed()
                );
                return true;
            }
            println!("{}", "Seeding…".dimmed());
            let report = controller.seed_and_refresh(&default_seed_set()).await;
            println!("{}", format_seed_progress(&report));
            render(controller);
        }
    }
    true
}

fn render<C: CatalogClient>(controller: &QueryController<C>) {
    let state = controller.snapshot();
    println!("{}", format_state(&state));
    if state.is_empty_state() {
        println!("{}", "Type 'seed' to add sample attractions.".dimmed());
    }
}

fn print_filters<C: CatalogClient>(controller: &QueryController<C>) {
    let filters = controller.filters();
    let parts: Vec<String> = FilterField::ALL
        .iter()
        .map(|field| {
            let value = filters.get(*field).unwrap_or("-");
            format!("{}={value}", field.to_string().cyan())
        })
        .collect();
    println!("{}  {}", parts.join("  "), "(type 'search' to apply)".dimmed());
}

/// Free values are allowed; this only points out likely typos.
fn warn_unknown_option(field: FilterField, value: &str) {
    let known: &[&str] = match field {
        FilterField::Category => CATEGORIES,
        FilterField::Location => LOCATIONS,
        FilterField::Q => return,
    };
    if !known.iter().any(|k| k.eq_ignore_ascii_case(value)) {
        println!(
            "{}",
            format!("note: '{value}' is not one of {}", known.join(", ")).yellow()
        );
    }
}
