//! Application state
//!
//! Owns the input, dropdown, and history state plus the channel handles to
//! the service worker. All service traffic flows through here so request
//! ids stay consistent.

use std::sync::mpsc::{Receiver, Sender};

use crate::dropdown::{DropdownState, Suggestion};
use crate::history::HistoryState;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::service::{ServiceRequest, ServiceResponse};

/// Application state
pub struct App {
    /// Search input field
    pub input: InputState,
    /// Suggestion dropdown
    pub dropdown: DropdownState,
    /// Submitted query history
    pub history: HistoryState,
    /// Screen regions recorded during the last render
    pub layout_regions: LayoutRegions,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<ServiceRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<ServiceResponse>>,
    /// Last allocated request ID, incremented for each new request
    /// and echoed back by the worker to spot stale responses
    pub request_id: u64,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Self {
        Self {
            input: InputState::new(),
            dropdown: DropdownState::default(),
            history: HistoryState::default(),
            layout_regions: LayoutRegions::default(),
            request_tx: None,
            response_rx: None,
            request_id: 0,
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current query text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    /// Wire up the channels to the service worker thread
    pub fn set_service_channels(
        &mut self,
        request_tx: Sender<ServiceRequest>,
        response_rx: Receiver<ServiceResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Allocate the id for a new service request
    pub fn next_request_id(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.request_id
    }

    /// Hand a request to the worker thread, if one is wired up
    pub fn send_request(&mut self, request: ServiceRequest) {
        if let Some(request_tx) = &self.request_tx
            && request_tx.send(request).is_err()
        {
            log::debug!("Service worker disconnected, dropping request");
        }
    }

    /// React to the query text changing under the user's keystrokes
    ///
    /// The dropdown always closes first. A non-empty query then opens a
    /// fresh pending dropdown and requests suggestions; an empty query
    /// requests nothing.
    pub fn on_query_changed(&mut self) {
        self.close_dropdown();

        let query = self.query().to_string();
        if query.is_empty() {
            return;
        }

        let request_id = self.next_request_id();
        self.dropdown.open_pending(request_id);
        self.send_request(ServiceRequest::Suggest { query, request_id });
    }

    /// Hide the dropdown and forget any pending suggestion request
    pub fn close_dropdown(&mut self) {
        self.dropdown.close();
    }

    /// Copy the suggestion at `index` into the input and close the dropdown
    ///
    /// A programmatic edit: no suggestion fetch follows. Out-of-range
    /// indexes are ignored.
    pub fn select_dropdown_row(&mut self, index: usize) {
        let Some(suggestion) = self.dropdown.items().get(index) else {
            return;
        };

        let value = suggestion.value.clone();
        self.input.set_query(&value);
        self.close_dropdown();
    }

    /// Accept the focused suggestion
    ///
    /// Returns false when focus is still on the input, leaving Enter free
    /// to submit instead.
    pub fn accept_focused_suggestion(&mut self) -> bool {
        match self.dropdown.focused() {
            Some(index) => {
                self.select_dropdown_row(index);
                true
            }
            None => false,
        }
    }

    /// Submit the current query to be recorded in the history
    ///
    /// Empty queries are ignored. The input keeps its text and the dropdown
    /// stays put until the service answers.
    pub fn submit_query(&mut self) {
        let query = self.query().to_string();
        if query.is_empty() {
            return;
        }

        let request_id = self.next_request_id();
        self.send_request(ServiceRequest::Submit { query, request_id });
    }

    /// Ask the service to clear the recorded history
    pub fn request_clear(&mut self) {
        let request_id = self.next_request_id();
        self.send_request(ServiceRequest::Clear { request_id });
    }

    /// Drain and apply whatever responses the worker has produced
    pub fn poll_service(&mut self) {
        let Some(response_rx) = &self.response_rx else {
            return;
        };

        let responses: Vec<ServiceResponse> = response_rx.try_iter().collect();
        for response in responses {
            self.apply_service_response(response);
        }
    }

    /// Apply one worker response
    ///
    /// Suggestions only land if the dropdown is still waiting on their
    /// request id; typing since then, or closing the dropdown, retired the
    /// id and the answer is dropped. Submit and clear answers apply in
    /// arrival order.
    fn apply_service_response(&mut self, response: ServiceResponse) {
        match response {
            ServiceResponse::Suggestions {
                suggestions,
                request_id,
            } => {
                if self.dropdown.awaiting() != Some(request_id) {
                    log::debug!("Dropping stale suggestions for request {request_id}");
                    return;
                }
                let items = suggestions.into_iter().map(Suggestion::new).collect();
                self.dropdown.populate(items);
            }
            ServiceResponse::Submitted { history, .. } => {
                self.history.replace(history);
                // The field empties only once the submit answer arrives.
                self.input.clear();
            }
            ServiceResponse::Cleared { history, .. } => {
                self.history.replace(history);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
