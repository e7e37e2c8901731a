mod client;
mod types;
mod worker;

pub use client::ServiceClient;
pub use types::{CLEAR_FALLBACK, SUBMIT_FALLBACK, SUGGESTION_FALLBACK};
pub use worker::{ServiceRequest, ServiceResponse, spawn_worker};
