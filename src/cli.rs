//! Command line parsing and the terminal front end
//!
//! Parses `therapist-search search <query...> [flags]`, `stats` and `help`.
//! No arguments means "open the window".

use crate::backend::types::ProfileStats;
use crate::controller::SearchView;
use crate::query::FilterInputs;
use crate::render::{format_count, ResultsPage};

/// Parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Open the desktop window
    Gui { api_url: Option<String> },
    /// Run one search and print the cards
    Search {
        query: String,
        filters: FilterInputs,
        api_url: Option<String>,
    },
    /// Print the number of indexed profiles
    Stats { api_url: Option<String> },
    Help,
}

impl CliCommand {
    /// Parse arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let Some(first) = args.first() else {
            return Ok(CliCommand::Gui { api_url: None });
        };

        match first.as_str() {
            "search" | "s" => {
                let mut words = Vec::new();
                let mut filters = FilterInputs::default();
                let mut api_url = None;
                let mut rest = args[1..].iter();

                while let Some(arg) = rest.next() {
                    match arg.as_str() {
                        "--max-fee" => filters.max_fee = flag_value(arg, rest.next())?,
                        "--state" => filters.state = flag_value(arg, rest.next())?,
                        "--language" | "--lang" => filters.language = flag_value(arg, rest.next())?,
                        "--provider-type" | "--type" => {
                            filters.provider_type = flag_value(arg, rest.next())?
                        }
                        "--telehealth" => filters.telehealth_only = true,
                        "--api-url" => api_url = Some(flag_value(arg, rest.next())?),
                        flag if flag.starts_with("--") => {
                            return Err(format!("Unknown option: {}", flag));
                        }
                        word => words.push(word.to_string()),
                    }
                }

                Ok(CliCommand::Search {
                    query: words.join(" "),
                    filters,
                    api_url,
                })
            }
            "stats" => Ok(CliCommand::Stats {
                api_url: api_url_only(&args[1..])?,
            }),
            "gui" | "open" => Ok(CliCommand::Gui {
                api_url: api_url_only(&args[1..])?,
            }),
            "--api-url" => Ok(CliCommand::Gui {
                api_url: api_url_only(args)?,
            }),
            "help" | "--help" | "-h" => Ok(CliCommand::Help),
            other => Err(format!("Unknown command: {}", other)),
        }
    }

    /// Help text for all commands
    pub fn help_text() -> &'static str {
        r#"therapist-search - find therapists, life coaches and nutrition coaches

Usage: therapist-search [command]

Commands:
  (none), gui              Open the search window
  search <query> [options] Search and print matching providers
  stats                    Show how many profiles are indexed
  help                     Show this help message

Search options:
  --max-fee <amount>       Maximum fee per session
  --state <code>           Two-letter state, e.g. CA
  --language <name>        Spoken language, e.g. Spanish
  --provider-type <type>   therapist | life_coach | nutrition_coach
  --telehealth             Only show providers offering online sessions

Every command accepts --api-url <url> (or THERAPIST_SEARCH_API_URL).
Set RUST_LOG=debug to see request payloads."#
    }
}

fn flag_value(flag: &str, value: Option<&String>) -> Result<String, String> {
    value
        .cloned()
        .ok_or_else(|| format!("Missing value for {}", flag))
}

fn api_url_only(args: &[String]) -> Result<Option<String>, String> {
    match args {
        [] => Ok(None),
        [flag, value] if flag == "--api-url" => Ok(Some(value.clone())),
        [flag] if flag == "--api-url" => Err("Missing value for --api-url".to_string()),
        [other, ..] => Err(format!("Unexpected argument: {}", other)),
    }
}

/// Prints controller transitions to the terminal
#[derive(Debug, Default)]
pub struct TerminalView {
    /// Set when the last search ended in an error
    pub failed: bool,
}

impl SearchView for TerminalView {
    fn set_loading(&mut self, loading: bool) {
        if loading {
            eprintln!("Searching...");
        }
    }

    fn show_results(&mut self, page: &ResultsPage) {
        self.failed = false;
        print!("{}", page);
    }

    fn show_empty(&mut self) {
        self.failed = false;
        println!("No providers found. Try a broader query or fewer filters.");
    }

    fn show_error(&mut self, message: &str) {
        self.failed = true;
        eprintln!("Error: {}", message);
    }

    fn show_stats(&mut self, stats: ProfileStats) {
        println!("{} profiles indexed", format_count(stats.total_profiles));
    }
}
