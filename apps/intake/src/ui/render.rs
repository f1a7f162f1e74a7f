use std::fmt::Write as _;

use client_core::RequestRecord;

use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

pub const SUBMIT_SUCCESS: &str = "Service request submitted successfully!";
pub const NO_REQUESTS: &str = "No requests found.";
const ANONYMOUS: &str = "Anonymous";

pub fn render_home() -> String {
    "Home Appliance Service Requests\n\
     Easily request home appliance repair and services."
        .to_string()
}

pub fn render_about() -> String {
    "About\n\
     A free, easy-to-use desk for requesting home appliance repairs, \
     installations and maintenance."
        .to_string()
}

pub fn render_event(event: &UiEvent) -> String {
    match event {
        UiEvent::Submitted(Some(RequestRecord {
            hash: Some(hash), ..
        })) => format!("{SUBMIT_SUCCESS} Hash: {hash}"),
        UiEvent::Submitted(_) => SUBMIT_SUCCESS.to_string(),
        UiEvent::RequestsLoaded(records) if records.is_empty() => NO_REQUESTS.to_string(),
        UiEvent::RequestsLoaded(records) => render_records(records),
        UiEvent::Error(err) => render_error(err),
    }
}

fn render_records(records: &[RequestRecord]) -> String {
    let mut out = format!("All Service Requests ({})\n", records.len());
    for record in records {
        let fields = &record.fields;
        let name = if fields.name.trim().is_empty() {
            ANONYMOUS
        } else {
            fields.name.as_str()
        };
        let _ = write!(
            out,
            "\nName: {}\nContact: {}\nAppliance: {}\nIssue: {}\n",
            name, fields.contact, fields.appliance, fields.issue
        );
        if let Some(hash) = &record.hash {
            let _ = writeln!(out, "Hash: {hash}");
        }
    }
    out
}

fn render_error(err: &UiError) -> String {
    match (err.category(), err.context()) {
        (UiErrorCategory::Server, UiErrorContext::SubmitRequest) => {
            format!("Error: failed to submit request ({})", err.message())
        }
        (UiErrorCategory::Server, UiErrorContext::ListRequests) => {
            format!("Error: could not fetch requests ({})", err.message())
        }
        (UiErrorCategory::Transport, _) => format!("Error: {}", err.message()),
    }
}
