//! Search lifecycle: Idle -> Loading -> Success | Empty | Error
//!
//! The controller owns no widgets. Every transition is reported to a
//! [`SearchView`] passed in by the caller, so the same state machine drives
//! the iced window, the terminal front end and the tests.
//!
//! Each search gets a sequence number. Only the response to the most
//! recently started search is applied; anything older is dropped.

use crate::backend::api::SearchBackend;
use crate::backend::types::{ProfileStats, SearchRequest, SearchResponse};
use crate::error::{SearchError, StatsUnavailable, ValidationError};
use crate::query::{build_request, FilterInputs};
use crate::render::{render, DisplayModel, ResultsPage};

/// Presentation handles the controller drives
pub trait SearchView {
    /// Disable the search control and show the busy indicator, or undo that.
    fn set_loading(&mut self, loading: bool);
    fn show_results(&mut self, page: &ResultsPage);
    fn show_empty(&mut self);
    fn show_error(&mut self, message: &str);
    fn show_stats(&mut self, stats: ProfileStats);
}

/// What started a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Search button or Enter in the search box
    Submit,
    /// One of the example query shortcuts
    QuickSearch,
    /// A filter control changed. Ignored while the search box is empty.
    FilterChanged,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success(SearchResponse),
    Empty,
    Error(String),
}

/// A search that has been validated and is waiting for its response
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    pub seq: u64,
    pub request: SearchRequest,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    seq: u64,
    telehealth_only: bool,
}

#[derive(Debug, Default)]
pub struct SearchController {
    state: UiState,
    next_seq: u64,
    latest: Option<InFlight>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, UiState::Loading)
    }

    /// Validate the form and enter `Loading`. Returns the request to send,
    /// or `None` when nothing should be sent.
    pub fn begin<V: SearchView>(
        &mut self,
        view: &mut V,
        trigger: Trigger,
        query: &str,
        filters: &FilterInputs,
    ) -> Option<PendingSearch> {
        if trigger == Trigger::FilterChanged && query.trim().is_empty() {
            return None;
        }

        let request = match build_request(query, filters) {
            Ok(request) => request,
            Err(err) => {
                self.fail_validation(view, err);
                return None;
            }
        };

        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest = Some(InFlight {
            seq,
            telehealth_only: filters.telehealth_only,
        });
        self.state = UiState::Loading;
        view.set_loading(true);

        tracing::info!(seq, query = %request.query, ?trigger, "Starting search");
        Some(PendingSearch { seq, request })
    }

    /// Apply the outcome of search `seq`. Returns false when the response
    /// belongs to a search that has since been superseded.
    pub fn complete<V: SearchView>(
        &mut self,
        view: &mut V,
        seq: u64,
        outcome: Result<SearchResponse, SearchError>,
    ) -> bool {
        let in_flight = match self.latest {
            Some(in_flight) if in_flight.seq == seq => in_flight,
            _ => {
                tracing::debug!(seq, latest = ?self.latest.map(|f| f.seq), "Dropping stale search response");
                return false;
            }
        };
        self.latest = None;
        view.set_loading(false);

        match outcome {
            Ok(response) => {
                let response = if in_flight.telehealth_only {
                    retain_telehealth(response)
                } else {
                    response
                };
                match render(&response) {
                    DisplayModel::Empty => {
                        tracing::info!(seq, "Search returned no results");
                        self.state = UiState::Empty;
                        view.show_empty();
                    }
                    DisplayModel::Results(page) => {
                        tracing::info!(seq, shown = page.cards.len(), total = response.total_found, "Search complete");
                        self.state = UiState::Success(response);
                        view.show_results(&page);
                    }
                }
            }
            Err(err) => {
                tracing::error!(seq, error = %err, "Search error");
                let message = err.user_message();
                view.show_error(&message);
                self.state = UiState::Error(message);
            }
        }
        true
    }

    /// Full cycle against a backend: validate, send, apply.
    pub async fn search<B, V>(
        &mut self,
        backend: &B,
        view: &mut V,
        trigger: Trigger,
        query: &str,
        filters: &FilterInputs,
    ) where
        B: SearchBackend,
        V: SearchView,
    {
        if let Some(pending) = self.begin(view, trigger, query, filters) {
            let outcome = backend.search(&pending.request).await;
            self.complete(view, pending.seq, outcome);
        }
    }

    /// Stats are independent of the search state. Failures leave the stats
    /// display hidden.
    pub fn apply_stats<V: SearchView>(&self, view: &mut V, outcome: Result<ProfileStats, StatsUnavailable>) {
        match outcome {
            Ok(stats) => view.show_stats(stats),
            Err(err) => tracing::warn!("Stats unavailable: {}", err),
        }
    }

    fn fail_validation<V: SearchView>(&mut self, view: &mut V, err: ValidationError) {
        tracing::debug!(error = %err, "Search input rejected");
        // A search still in flight is superseded by the rejected one.
        if let Some(in_flight) = self.latest.take() {
            tracing::debug!(seq = in_flight.seq, "Abandoning in-flight search");
            view.set_loading(false);
        }
        let message = err.to_string();
        view.show_error(&message);
        self.state = UiState::Error(message);
    }
}

/// Keep only telehealth providers, preserving server order.
fn retain_telehealth(mut response: SearchResponse) -> SearchResponse {
    if let Some(results) = response.results.as_mut() {
        results.retain(|r| r.telehealth_available());
    }
    response
}
