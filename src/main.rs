//! therapist-search: semantic search for therapists and coaches
//!
//! Usage:
//!   therapist-search                   - Open the search window
//!   therapist-search search <query>    - Search from the terminal
//!   therapist-search stats             - Show indexed profile count
//!   therapist-search help              - Show help

mod app;

use app::SearchApp;
use iced::{window, Size};
use std::env;
use std::process::ExitCode;
use therapist_search::backend::api::BackendClient;
use therapist_search::cli::{CliCommand, TerminalView};
use therapist_search::config::Config;
use therapist_search::controller::{SearchController, Trigger};
use therapist_search::query::FilterInputs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize logging (try_init so a second call is harmless)
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match CliCommand::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Run 'therapist-search help' for usage");
            return ExitCode::FAILURE;
        }
    };

    match command {
        CliCommand::Help => {
            println!("{}", CliCommand::help_text());
            ExitCode::SUCCESS
        }
        CliCommand::Gui { api_url } => match load_config(api_url.as_deref()) {
            Some(config) => match start_gui(config) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!("Window error: {}", e);
                    ExitCode::FAILURE
                }
            },
            None => ExitCode::FAILURE,
        },
        CliCommand::Search {
            query,
            filters,
            api_url,
        } => match load_config(api_url.as_deref()) {
            Some(config) => run_search(config, &query, &filters),
            None => ExitCode::FAILURE,
        },
        CliCommand::Stats { api_url } => match load_config(api_url.as_deref()) {
            Some(config) => run_stats(config),
            None => ExitCode::FAILURE,
        },
    }
}

fn load_config(api_url: Option<&str>) -> Option<Config> {
    match Config::load(api_url) {
        Ok(config) => {
            tracing::debug!("Using API at {}", config.api_base_url);
            Some(config)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

fn runtime() -> Option<tokio::runtime::Runtime> {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => Some(rt),
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            None
        }
    }
}

fn run_search(config: Config, query: &str, filters: &FilterInputs) -> ExitCode {
    let Some(rt) = runtime() else {
        return ExitCode::FAILURE;
    };
    let backend = BackendClient::new(&config.api_base_url);
    let mut controller = SearchController::new();
    let mut view = TerminalView::default();

    rt.block_on(controller.search(&backend, &mut view, Trigger::Submit, query, filters));

    if view.failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn run_stats(config: Config) -> ExitCode {
    let Some(rt) = runtime() else {
        return ExitCode::FAILURE;
    };
    let backend = BackendClient::new(&config.api_base_url);

    match rt.block_on(backend.health_check()) {
        Ok(stats) => {
            let mut view = TerminalView::default();
            SearchController::new().apply_stats(&mut view, Ok(stats));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Stats unavailable: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn start_gui(config: Config) -> iced::Result {
    tracing::info!("Opening search window (API: {})", config.api_base_url);
    let backend = BackendClient::new(&config.api_base_url);

    iced::application("Therapist Search", SearchApp::update, SearchApp::view)
        .subscription(SearchApp::subscription)
        .theme(SearchApp::theme)
        .window(window::Settings {
            size: Size::new(960.0, 720.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        })
        .antialiasing(true)
        .run_with(move || SearchApp::new(backend))
}
