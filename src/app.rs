//! Core application state and iced wiring
//!
//! `SearchApp` owns the form values and hands them to the
//! [`SearchController`]; the controller reports back through [`Screen`],
//! which is what `view` draws.

use iced::widget::{button, column, container, row, scrollable, text, text_input, Space};
use iced::{Background, Border, Element, Length, Subscription, Task, Theme};

use therapist_search::backend::api::BackendClient;
use therapist_search::backend::types::{ProfileStats, SearchResponse};
use therapist_search::controller::{SearchController, SearchView, Trigger};
use therapist_search::error::{SearchError, StatsUnavailable};
use therapist_search::query::FilterInputs;
use therapist_search::render::{format_count, ResultsPage};
use therapist_search::ui::filters::{self, Choice, FilterField};
use therapist_search::ui::placeholder::{self, Placeholder, EXAMPLE_QUERIES, INITIAL_QUERY};
use therapist_search::ui::theme::DarkTheme;
use therapist_search::ui::{card, search_bar};

/// Which section is visible below the search bar
#[derive(Debug, Clone, Default)]
enum Panel {
    #[default]
    Welcome,
    Loading,
    Results(ResultsPage),
    Empty,
    Error(String),
}

/// Everything the controller can change on screen
#[derive(Debug, Default)]
struct Screen {
    loading: bool,
    panel: Panel,
    stats: Option<ProfileStats>,
}

impl SearchView for Screen {
    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        if loading {
            self.panel = Panel::Loading;
        }
    }

    fn show_results(&mut self, page: &ResultsPage) {
        self.panel = Panel::Results(page.clone());
    }

    fn show_empty(&mut self) {
        self.panel = Panel::Empty;
    }

    fn show_error(&mut self, message: &str) {
        self.panel = Panel::Error(message.to_string());
    }

    fn show_stats(&mut self, stats: ProfileStats) {
        self.stats = Some(stats);
    }
}

pub struct SearchApp {
    query: String,
    filters: FilterInputs,
    controller: SearchController,
    screen: Screen,
    backend: BackendClient,
    placeholder: Placeholder,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    Submit,
    QuickSearch(&'static str),
    FilterSelected(FilterField, Choice),
    TelehealthToggled(bool),
    SearchFinished(u64, Result<SearchResponse, SearchError>),
    StatsLoaded(Result<ProfileStats, StatsUnavailable>),
    PlaceholderTick,
    /// Focus state of the search box, checked on each tick
    PlaceholderFocus(bool),
}

impl SearchApp {
    /// Build the app and the startup tasks: focus the search box and load stats.
    pub fn new(backend: BackendClient) -> (Self, Task<Message>) {
        let app = Self {
            query: INITIAL_QUERY.to_string(),
            filters: FilterInputs::default(),
            controller: SearchController::new(),
            screen: Screen::default(),
            backend,
            placeholder: Placeholder::default(),
        };

        let stats_backend = app.backend.clone();
        let load_stats = Task::perform(
            async move { stats_backend.health_check().await },
            Message::StatsLoaded,
        );
        let focus = text_input::focus(search_bar::input_id());

        (app, Task::batch([focus, load_stats]))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }

            Message::Submit => self.start_search(Trigger::Submit),

            Message::QuickSearch(query) => {
                self.query = query.to_string();
                self.start_search(Trigger::QuickSearch)
            }

            Message::FilterSelected(field, choice) => {
                field.apply(&mut self.filters, choice);
                self.start_search(Trigger::FilterChanged)
            }

            Message::TelehealthToggled(on) => {
                self.filters.telehealth_only = on;
                self.start_search(Trigger::FilterChanged)
            }

            Message::SearchFinished(seq, outcome) => {
                self.controller.complete(&mut self.screen, seq, outcome);
                Task::none()
            }

            Message::StatsLoaded(outcome) => {
                self.controller.apply_stats(&mut self.screen, outcome);
                Task::none()
            }

            Message::PlaceholderTick => {
                if self.query.is_empty() {
                    search_bar::input_focused().map(Message::PlaceholderFocus)
                } else {
                    Task::none()
                }
            }

            Message::PlaceholderFocus(focused) => {
                self.placeholder.tick(self.query.is_empty(), focused);
                Task::none()
            }
        }
    }

    fn start_search(&mut self, trigger: Trigger) -> Task<Message> {
        let Some(pending) = self
            .controller
            .begin(&mut self.screen, trigger, &self.query, &self.filters)
        else {
            return Task::none();
        };

        let seq = pending.seq;
        let backend = self.backend.clone();
        Task::perform(
            async move { backend.search(&pending.request).await },
            move |outcome| Message::SearchFinished(seq, outcome),
        )
    }

    pub fn view(&self) -> Element<'_, Message> {
        let header = row![
            column![
                text("Therapist Search").size(26).color(DarkTheme::TEXT),
                text("Describe what you need in plain words")
                    .size(14)
                    .color(DarkTheme::TEXT_MUTED),
            ]
            .spacing(4),
            Space::with_width(Length::Fill),
            self.view_stats(),
        ]
        .align_y(iced::Alignment::Center);

        let search = search_bar::view(
            self.placeholder.current(),
            &self.query,
            self.screen.loading,
            Message::QueryChanged,
            Message::Submit,
        );

        let filter_bar = filters::view(&self.filters, Message::FilterSelected, Message::TelehealthToggled);

        let quick = EXAMPLE_QUERIES.iter().skip(1).fold(
            row![text("Try:").size(13).color(DarkTheme::TEXT_MUTED)]
                .spacing(8)
                .align_y(iced::Alignment::Center),
            |quick, query| {
                quick.push(
                    button(text(*query).size(12))
                        .padding([4, 10])
                        .on_press(Message::QuickSearch(*query)),
                )
            },
        );

        let content = column![
            header,
            Space::with_height(16),
            search,
            Space::with_height(10),
            filter_bar,
            Space::with_height(8),
            scrollable(quick).direction(scrollable::Direction::Horizontal(
                scrollable::Scrollbar::default()
            )),
            Space::with_height(16),
            self.view_panel(),
        ]
        .spacing(0);

        container(container(content).padding(20).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Background::Color(DarkTheme::BACKGROUND)),
                border: Border {
                    color: DarkTheme::BORDER,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_stats(&self) -> Element<'_, Message> {
        match self.screen.stats {
            Some(stats) => text(format!("{} profiles indexed", format_count(stats.total_profiles)))
                .size(13)
                .color(DarkTheme::TEXT_MUTED)
                .into(),
            None => Space::with_width(0).into(),
        }
    }

    fn view_panel(&self) -> Element<'_, Message> {
        match &self.screen.panel {
            Panel::Welcome => centered(
                text("Type to search therapists, life coaches and nutrition coaches...")
                    .size(14)
                    .color(DarkTheme::TEXT_MUTED),
            ),
            Panel::Loading => centered(text("Searching...").size(16).color(DarkTheme::TEXT_MUTED)),
            Panel::Empty => centered(
                column![
                    text("No providers found").size(18).color(DarkTheme::TEXT),
                    text("Try a broader query or fewer filters.")
                        .size(14)
                        .color(DarkTheme::TEXT_MUTED),
                ]
                .spacing(6)
                .align_x(iced::Alignment::Center),
            ),
            Panel::Error(message) => container(text(message).size(14).color(DarkTheme::ERROR))
                .padding(16)
                .width(Length::Fill)
                .style(|_theme| container::Style {
                    background: Some(Background::Color(DarkTheme::SURFACE)),
                    border: Border::default().rounded(8),
                    ..Default::default()
                })
                .into(),
            Panel::Results(page) => {
                let cards = page.cards.iter().map(|c| card::view(c));
                column![
                    text(&page.title).size(20).color(DarkTheme::TEXT),
                    text(&page.stats_line).size(13).color(DarkTheme::TEXT_MUTED),
                    Space::with_height(8),
                    scrollable(column(cards).spacing(12)).height(Length::Fill),
                ]
                .spacing(4)
                .height(Length::Fill)
                .into()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        placeholder::rotation_subscription().map(|_| Message::PlaceholderTick)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn centered<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(24)
        .into()
}
