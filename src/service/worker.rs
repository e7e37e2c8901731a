//! Service worker thread
//!
//! Runs HTTP requests in a background thread so the UI never blocks on the
//! network. Requests arrive on a channel, responses go back on another; each
//! carries the request id the main thread uses to spot stale answers.

use std::sync::mpsc::{Receiver, Sender};

use super::client::ServiceClient;

/// Request messages sent to the service worker thread
#[derive(Debug)]
pub enum ServiceRequest {
    /// Look up suggestions for the current query text
    Suggest {
        query: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
    /// Submit a query to be recorded in the history
    Submit {
        query: String,
        /// Unique ID for this request
        request_id: u64,
    },
    /// Clear the recorded history
    Clear {
        /// Unique ID for this request
        request_id: u64,
    },
}

/// Response messages received from the service worker thread
#[derive(Debug)]
pub enum ServiceResponse {
    /// Suggestions for a `Suggest` request
    Suggestions {
        suggestions: Vec<String>,
        /// ID of the request these suggestions answer
        request_id: u64,
    },
    /// Updated history after a `Submit` request
    Submitted {
        history: Vec<String>,
        /// ID of the request this history answers
        request_id: u64,
    },
    /// Remaining history after a `Clear` request
    Cleared {
        history: Vec<String>,
        /// ID of the request this history answers
        request_id: u64,
    },
}

/// Spawn the service worker thread
///
/// The worker owns the HTTP client and a single-threaded async runtime, and
/// serves requests one at a time until the request channel closes.
pub fn spawn_worker(
    client: ServiceClient,
    request_rx: Receiver<ServiceRequest>,
    response_tx: Sender<ServiceResponse>,
) {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx);
    });
}

/// Main worker loop, processes requests until the channel is closed
fn worker_loop(
    client: ServiceClient,
    request_rx: Receiver<ServiceRequest>,
    response_tx: Sender<ServiceResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            log::error!("Service worker failed to start its runtime: {e}");
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        let response = match request {
            ServiceRequest::Suggest { query, request_id } => {
                let suggestions = runtime.block_on(client.fetch_suggestions(&query));
                ServiceResponse::Suggestions {
                    suggestions,
                    request_id,
                }
            }
            ServiceRequest::Submit { query, request_id } => {
                let history = runtime.block_on(client.submit_query(&query));
                ServiceResponse::Submitted {
                    history,
                    request_id,
                }
            }
            ServiceRequest::Clear { request_id } => {
                let history = runtime.block_on(client.clear_history());
                ServiceResponse::Cleared {
                    history,
                    request_id,
                }
            }
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected, stop processing
            break;
        }
    }

    log::debug!("Service worker thread shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
