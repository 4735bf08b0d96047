use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use data_filter::{CategoryFilter, Ownership, SortKey};
use data_genai::ImageSize;
use hub_session::LookupOutcome;

use crate::util::{
    generate_with_key_prompt, provide_catalog, provide_hub, LiveHub,
};
use crate::{render, AppError, HubConfig};

const HELP: &str = "\
Commands:
  list                       show the gallery for the current filters
  categories                 list category names
  query [TEXT]               filter by text, no argument clears it
  category [NAME]            filter by category, no argument selects All
  ownership all|owned|unowned
  sort name|rarity|category
  toggle ID                  flip a badge between locked and unlocked
  show ID                    badge details
  lookup USER                load a GitHub profile and detect its badges
  clear                      forget the profile and unlock state
  ask QUESTION               quick answer
  search QUERY               web-grounded answer with sources
  strategy ID                detailed unlock walkthrough
  generate [1K|2K|4K] PROMPT create a concept badge
  history                    questions, searches and concepts so far
  help                       this text
  quit";

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "session", about = "Interactive session over one catalog")]
pub struct Session {
    #[clap(long, value_name = "FILE", help = "Badge catalog JSON file")]
    catalog: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
enum Line {
    Empty,
    List,
    Categories,
    Query(String),
    Category(CategoryFilter),
    Ownership(Ownership),
    Sort(SortKey),
    Toggle(String),
    Show(String),
    Lookup(String),
    Clear,
    Ask(String),
    Search(String),
    Strategy(String),
    Generate(ImageSize, String),
    History,
    Help,
    Quit,
}

fn required(command: &str, arg: &str) -> Result<String, String> {
    if arg.is_empty() {
        Err(format!("'{}' needs an argument, see 'help'", command))
    } else {
        Ok(arg.to_owned())
    }
}

fn parse_line(line: &str) -> Result<Line, String> {
    let line = line.trim();
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };

    let parsed = match command.to_lowercase().as_str() {
        "" => Line::Empty,
        "list" | "ls" => Line::List,
        "categories" => Line::Categories,
        "query" => Line::Query(arg.to_owned()),
        "category" if arg.is_empty() => Line::Category(CategoryFilter::All),
        "category" => Line::Category(CategoryFilter::Exact(arg.to_owned())),
        "ownership" => Line::Ownership(arg.parse()?),
        "sort" => Line::Sort(arg.parse()?),
        "toggle" => Line::Toggle(required(command, arg)?),
        "show" => Line::Show(required(command, arg)?),
        "lookup" => Line::Lookup(required(command, arg)?),
        "clear" => Line::Clear,
        "ask" => Line::Ask(required(command, arg)?),
        "search" => Line::Search(required(command, arg)?),
        "strategy" => Line::Strategy(required(command, arg)?),
        "generate" => {
            let arg = required(command, arg)?;
            match arg.split_once(char::is_whitespace) {
                Some((size, prompt)) if size.parse::<ImageSize>().is_ok() => {
                    Line::Generate(size.parse()?, prompt.trim().to_owned())
                }
                _ => Line::Generate(ImageSize::default(), arg),
            }
        }
        "history" => Line::History,
        "help" | "?" => Line::Help,
        "quit" | "exit" => Line::Quit,
        other => return Err(format!("Unknown command '{}', see 'help'", other)),
    };
    Ok(parsed)
}

impl Session {
    pub async fn run(&self, config: &HubConfig) -> Result<(), AppError> {
        let catalog = provide_catalog(config, self.catalog.as_deref())?;
        let hub = provide_hub(config, catalog)?;
        let loaded = hub.session().await.catalog.len();
        println!("{} badges loaded. Type 'help' for commands.", loaded);

        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();
        loop {
            print!("hub> ");
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                println!();
                break;
            };
            let line = match parse_line(&line?) {
                Ok(line) => line,
                Err(message) => {
                    println!("{}", message);
                    continue;
                }
            };
            if line == Line::Quit {
                break;
            }
            // One failing command should not end the session.
            if let Err(err) = execute(&hub, line).await {
                println!("{}", err);
            }
        }
        Ok(())
    }
}

async fn execute(hub: &LiveHub, line: Line) -> Result<(), AppError> {
    match line {
        Line::Empty | Line::Quit => {}
        Line::Help => println!("{}", HELP),
        Line::History => {
            let session = hub.session().await;
            println!("{}", render::transcript(&session.transcript));
        }
        Line::List => {
            let session = hub.session().await;
            let view = session.visible();
            println!("{}", render::gallery(&view, &session.tracker));
        }
        Line::Categories => {
            println!("{}", data_filter::ALL_CATEGORIES);
            for category in hub.session().await.categories() {
                println!("{}", category);
            }
        }
        Line::Query(text) => hub.session().await.query.text = text,
        Line::Category(category) => {
            hub.session().await.query.category = category
        }
        Line::Ownership(ownership) => {
            hub.session().await.query.ownership = ownership
        }
        Line::Sort(sort) => hub.session().await.query.sort = sort,
        Line::Toggle(id) => {
            let state = if hub.toggle(&id).await? {
                "unlocked"
            } else {
                "locked"
            };
            println!("{} is now {}", id, state);
        }
        Line::Show(id) => {
            let session = hub.session().await;
            let badge = session
                .catalog
                .get(&id)
                .ok_or_else(|| AppError::UnknownBadge(id.clone()))?;
            println!("{}", render::badge_detail(badge, &session.tracker));
        }
        Line::Lookup(user) => match hub.lookup_profile(&user).await {
            Some(LookupOutcome::Found { profile, detection }) => {
                println!("{}", render::profile(&profile));
                let session = hub.session().await;
                println!(
                    "\n{}",
                    render::detection(&detection, &session.catalog)
                );
            }
            Some(LookupOutcome::Failed(message)) => println!("{}", message),
            None => {}
        },
        Line::Clear => {
            hub.clear_profile().await;
            println!("Profile and unlock state cleared.");
        }
        Line::Ask(question) => {
            if let Some(answer) = hub.ask(&question).await {
                println!("{}", answer);
            }
        }
        Line::Search(query) => {
            if let Some(answer) = hub.search(&query).await {
                println!("{}", render::grounded(&answer));
            }
        }
        Line::Strategy(id) => {
            let view = hub.analyze_strategy(&id).await.map_err(|e| match e {
                data_error::HubError::UnknownBadge(id) => {
                    AppError::UnknownBadge(id)
                }
                other => AppError::from(other),
            })?;
            if let Some(view) = view {
                println!("{}", render::strategy(&view));
            }
        }
        Line::Generate(size, prompt) => {
            if let Some(outcome) =
                generate_with_key_prompt(hub, &prompt, size).await?
            {
                println!("{}", render::concept(&outcome));
            }
        }
    }
    Ok(())
}
