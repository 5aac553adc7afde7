use thiserror::Error;

use crate::parser::dom::{self, Page};
use crate::parser::markers::transport;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("nothing to look up")]
    EmptyQuery,

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Upstream {
        status: reqwest::StatusCode,
        message: String,
    },
}

/// Human-readable message for a failed upstream response.
///
/// HTML error pages are searched for the service's own message; anything
/// else is shown verbatim, and an empty body falls back to `status_text`.
pub fn describe_error(body: &str, status_text: &str) -> String {
    if starts_with_declaration(body) {
        let page = Page::parse(body);
        if let Some(message) = dom::text_of(page.root(), transport::ERROR_MESSAGE) {
            return message;
        }
    }
    if body.is_empty() {
        status_text.to_string()
    } else {
        body.to_string()
    }
}

fn starts_with_declaration(body: &str) -> bool {
    body.trim_start()
        .get(..2)
        .is_some_and(|head| head == "<!" || head == "<?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_error_page_message() {
        let body = "<!doctype html><html><body><div><span class='sc_error'>Rate limited</span></div></body></html>";
        assert_eq!(describe_error(body, "Too Many Requests"), "Rate limited");
    }

    #[test]
    fn empty_body_uses_status() {
        assert_eq!(describe_error("", "Service Unavailable"), "Service Unavailable");
    }

    #[test]
    fn html_without_marker_is_verbatim() {
        let body = "<!DOCTYPE html><p>Bad gateway</p>";
        assert_eq!(describe_error(body, "Bad Gateway"), body);
    }

    #[test]
    fn blank_marker_is_verbatim() {
        let body = "<!doctype html><span class=\"sc_error\">  </span>";
        assert_eq!(describe_error(body, "x"), body);
    }

    #[test]
    fn plain_body_is_verbatim() {
        assert_eq!(describe_error("quota exceeded", "Forbidden"), "quota exceeded");
        // no declaration, so the marker is not looked for
        let fragment = "<span class='sc_error'>nope</span>";
        assert_eq!(describe_error(fragment, "Forbidden"), fragment);
    }

    #[test]
    fn upstream_error_displays_message() {
        let err = LookupError::Upstream {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            message: "Rate limited".into(),
        };
        assert_eq!(err.to_string(), "Rate limited");
    }
}
