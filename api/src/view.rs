//! HTML pages for the browser-facing routes.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use kernel::model::event::Event;
use shared::error::AppError;
use std::fmt::Write;

use crate::model::form::{FormErrors, RegistrationForm};

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        body
    )
}

fn display_date(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "Date to be announced".into())
}

fn spots_label(event: &Event) -> String {
    if event.is_full() {
        "Full".into()
    } else {
        format!("{} of {} spots left", event.available_spots(), event.max_attendees)
    }
}

pub fn home(events: &[Event]) -> String {
    let mut body = String::from("<h1>Upcoming events</h1>\n");
    if events.is_empty() {
        body.push_str("<p>No events scheduled.</p>");
        return layout("Events", &body);
    }
    body.push_str("<ul>\n");
    for event in events {
        let _ = writeln!(
            body,
            "<li><a href=\"/event/{}/\">{}</a> &middot; {} &middot; {} &middot; {}</li>",
            event.id,
            escape(&event.title),
            display_date(event.date),
            escape(&event.location),
            spots_label(event),
        );
    }
    body.push_str("</ul>");
    layout("Events", &body)
}

pub fn event_detail(event: &Event) -> String {
    let mut body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<dl>\n<dt>When</dt><dd>{}</dd>\n<dt>Where</dt><dd>{}</dd>\n\
         <dt>Capacity</dt><dd>{}</dd>\n</dl>\n",
        escape(&event.title),
        escape(&event.description),
        display_date(event.date),
        escape(&event.location),
        spots_label(event),
    );
    if event.is_full() {
        body.push_str("<p>This event is already full.</p>\n");
    } else {
        let _ = writeln!(body, "<p><a href=\"/event/{}/register/\">Register</a></p>", event.id);
    }
    body.push_str("<p><a href=\"/\">All events</a></p>");
    layout(&event.title, &body)
}

fn field_errors(errors: &FormErrors, name: &str) -> String {
    errors
        .field(name)
        .iter()
        .map(|m| format!("<span class=\"error\">{}</span>", escape(m)))
        .collect()
}

pub fn registration_form(event: &Event, form: &RegistrationForm, errors: &FormErrors) -> String {
    let mut body = format!("<h1>Register for {}</h1>\n", escape(&event.title));
    if !errors.non_field.is_empty() {
        body.push_str("<ul class=\"errors\">\n");
        for message in &errors.non_field {
            let _ = writeln!(body, "<li>{}</li>", escape(message));
        }
        body.push_str("</ul>\n");
    }
    let _ = writeln!(body, "<form method=\"post\" action=\"/event/{}/register/\">", event.id);
    for (name, label, kind, value) in [
        ("first_name", "First name", "text", &form.first_name),
        ("last_name", "Last name", "text", &form.last_name),
        ("email", "Email", "email", &form.email),
        ("phone", "Phone (optional)", "tel", &form.phone),
    ] {
        let _ = writeln!(
            body,
            "<p><label for=\"{name}\">{label}</label> \
             <input id=\"{name}\" name=\"{name}\" type=\"{kind}\" value=\"{}\"> {}</p>",
            escape(value),
            field_errors(errors, name),
        );
    }
    body.push_str("<button type=\"submit\">Register</button>\n</form>\n");
    let _ = write!(body, "<p><a href=\"/event/{}/\">Back to event</a></p>", event.id);
    layout(&format!("Register for {}", event.title), &body)
}

fn not_found() -> String {
    layout("Not Found", "<h1>Not Found</h1>\n<p>The requested page was not found.</p>")
}

fn server_error() -> String {
    layout(
        "Server Error",
        "<h1>Server Error</h1>\n<p>Something went wrong. Please try again later.</p>",
    )
}

/// Error rendered as an HTML page rather than the JSON error shape.
#[derive(Debug)]
pub struct PageError(AppError);

impl From<AppError> for PageError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self.0 {
            AppError::EntityNotFound(_) => (StatusCode::NOT_FOUND, Html(not_found())).into_response(),
            e => {
                tracing::error!(error.cause_chain = ?e, error.message = %e, "page failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(server_error())).into_response()
            }
        }
    }
}
