//! Loading agenda documents from files or over HTTP.
//!
//! A load is a single attempt: no retries, and a failure is returned to the
//! caller as `ChartError::Fetch` or `ChartError::Decode`.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::AgendaDocument;
use crate::error::{ChartError, ChartResult};

/// Location of an agenda JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgendaSource {
    Url(String),
    Path(PathBuf),
}

impl AgendaSource {
    /// `http://` and `https://` inputs are URLs, anything else a file path.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(trimmed.to_owned())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }
}

impl fmt::Display for AgendaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

pub fn load_agenda(source: &AgendaSource) -> ChartResult<AgendaDocument> {
    match source {
        AgendaSource::Path(path) => read_agenda_file(path),
        AgendaSource::Url(url) => fetch_agenda(url),
    }
}

pub fn read_agenda_file(path: &Path) -> ChartResult<AgendaDocument> {
    let bytes = std::fs::read(path)?;
    let agenda = AgendaDocument::from_json_slice(&bytes)?;
    info!(path = %path.display(), days = agenda.days.len(), "loaded agenda file");
    Ok(agenda)
}

#[cfg(feature = "fetch")]
pub fn fetch_agenda(url: &str) -> ChartResult<AgendaDocument> {
    use reqwest::header::{ACCEPT, CONTENT_TYPE};
    use tracing::warn;

    info!(url, "fetching agenda");
    let host = reqwest::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned))
        .unwrap_or_else(|| url.to_owned());

    let client = reqwest::blocking::Client::builder()
        .build()
        .map_err(|e| ChartError::Fetch {
            status: None,
            message: format!("http client error: {e}"),
        })?;
    let response = client
        .get(url)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .send()
        .map_err(|e| {
            warn!(url, error = %e, "agenda request failed");
            ChartError::Fetch {
                status: e.status().map(|s| s.as_u16()),
                message: format!("Error contacting {host}: {e}"),
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));
        let body = response.text().unwrap_or_default();
        let message = error_message(&host, status.as_u16(), is_json.then_some(body.as_str()));
        warn!(url, status = status.as_u16(), %message, "agenda request rejected");
        return Err(ChartError::Fetch {
            status: Some(status.as_u16()),
            message,
        });
    }

    let bytes = response.bytes().map_err(|e| ChartError::Fetch {
        status: Some(status.as_u16()),
        message: format!("Error contacting {host}: {e}"),
    })?;
    let agenda = AgendaDocument::from_json_slice(&bytes)?;
    info!(url, days = agenda.days.len(), "fetched agenda");
    Ok(agenda)
}

#[cfg(not(feature = "fetch"))]
pub fn fetch_agenda(url: &str) -> ChartResult<AgendaDocument> {
    Err(ChartError::Fetch {
        status: None,
        message: format!("cannot fetch {url}: built without the `fetch` feature"),
    })
}

/// Message for a non-2xx response: the JSON body's `message` field when the
/// server answered with JSON, a generic one otherwise.
#[cfg_attr(not(feature = "fetch"), allow(dead_code))]
fn error_message(host: &str, status: u16, json_body: Option<&str>) -> String {
    match json_body {
        None => format!("Error contacting {host}: {status}"),
        Some(body) => serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_owned))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Error contacting {host}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_distinguishes_urls_from_paths() {
        assert_eq!(
            AgendaSource::parse("https://example.org/agenda.json"),
            AgendaSource::Url("https://example.org/agenda.json".to_owned())
        );
        assert_eq!(
            AgendaSource::parse("agenda.json"),
            AgendaSource::Path(PathBuf::from("agenda.json"))
        );
    }

    #[test]
    fn non_json_error_uses_status() {
        assert_eq!(
            error_message("example.org", 503, None),
            "Error contacting example.org: 503"
        );
    }

    #[test]
    fn json_error_prefers_message_field() {
        assert_eq!(
            error_message("example.org", 404, Some(r#"{"message": "agenda not found"}"#)),
            "agenda not found"
        );
        assert_eq!(
            error_message("example.org", 500, Some("not json")),
            "Error contacting example.org"
        );
    }
}
