//! Remote puzzle service client.
//!
//! Implements [`PuzzleClient`] against the live website: two authenticated
//! GETs per day, cookie-based auth, no other headers, no retries. A failed
//! call is surfaced immediately; re-running the tool is the retry.

use reqwest::blocking::{Client, Response};
use reqwest::header::COOKIE;
use tracing::debug;

use advent_core::{
    application::{ApplicationError, ports::PuzzleClient},
    domain::{Day, Session, Year},
    error::AdventResult,
};

/// Default host of the puzzle service.
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Blocking HTTP client for the puzzle service.
///
/// The event year and the session credential are fixed at construction,
/// so call sites only ever pass a [`Day`]. The base URL is injectable for
/// tests against a local stub server.
pub struct AocClient {
    http: Client,
    base_url: String,
    year: Year,
    session: Session,
}

impl AocClient {
    /// Client against the live service.
    pub fn new(year: Year, session: Session) -> AdventResult<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, year, session)
    }

    /// Client against an arbitrary host (test stubs).
    pub fn with_base_url(
        base_url: impl Into<String>,
        year: Year,
        session: Session,
    ) -> AdventResult<Self> {
        let base_url = base_url.into();
        let http = Client::builder().build().map_err(|e| {
            ApplicationError::Transport {
                url: base_url.clone(),
                reason: format!("failed to construct HTTP client: {e}"),
            }
        })?;
        Ok(Self {
            http,
            base_url,
            year,
            session,
        })
    }

    fn get(&self, url: &str) -> AdventResult<Response> {
        debug!(url, "GET");
        let response = self
            .http
            .get(url)
            .header(COOKIE, format!("session={}", self.session.expose()))
            .send()
            .map_err(|e| ApplicationError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        debug!(url, status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(ApplicationError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            }
            .into());
        }
        Ok(response)
    }

    fn input_url(&self, day: Day) -> String {
        format!("{}/{}/day/{}/input", self.base_url, self.year, day.get())
    }

    fn page_url(&self, day: Day) -> String {
        format!("{}/{}/day/{}", self.base_url, self.year, day.get())
    }
}

impl PuzzleClient for AocClient {
    fn fetch_input(&self, day: Day) -> AdventResult<Vec<u8>> {
        let url = self.input_url(day);
        let bytes = self
            .get(&url)?
            .bytes()
            .map_err(|e| ApplicationError::Transport {
                url,
                reason: e.to_string(),
            })?;
        Ok(bytes.to_vec())
    }

    fn fetch_page(&self, day: Day) -> AdventResult<String> {
        let url = self.page_url(day);
        self.get(&url)?
            .text()
            .map_err(|e| {
                ApplicationError::Transport {
                    url,
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
