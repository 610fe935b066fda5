//! Search loading state machine.
//!
//! `idle -> loading -> (done | invalid-session)`. Loading only ends through a
//! server status; `invalid-session` is entered through a single named
//! recovery step so re-registration is requested once per attempt.

use futureshape_core::protocol::payload::{SearchResponse, SearchStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Loading,
    Done,
    InvalidSession,
}

/// What the router must do after a status arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStep {
    /// Still loading. `entered` is true when this status started it.
    Loading { entered: bool },
    /// Result ready; leave the page.
    Navigate(String),
    /// Finished without a result url; content comes back.
    Reset,
    /// Session not authenticated; request an OAuth session.
    Recover,
    Ignore,
}

#[derive(Debug)]
pub struct SearchFlow {
    state: SearchState,
    status_cursor: usize,
}

impl Default for SearchFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFlow {
    pub fn new() -> Self {
        Self {
            state: SearchState::Idle,
            status_cursor: 0,
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Start a search. Refused while one is already loading, since responses
    /// are correlated by topic only.
    pub fn begin(&mut self) -> bool {
        if self.state == SearchState::Loading {
            return false;
        }
        self.enter_loading();
        true
    }

    /// Undo `begin` when the request never left.
    pub fn abort(&mut self) {
        if self.state == SearchState::Loading {
            self.state = SearchState::Idle;
        }
    }

    pub fn on_status(&mut self, status: SearchStatus) -> SearchStep {
        match status.response {
            SearchResponse::ProcessingRequest => {
                let entered = self.state != SearchState::Loading;
                if entered {
                    self.enter_loading();
                }
                SearchStep::Loading { entered }
            }
            // a result for a search this page is not waiting on
            SearchResponse::ProcessingFinished if self.state != SearchState::Loading => {
                SearchStep::Ignore
            }
            SearchResponse::ProcessingFinished => match status.url {
                Some(url) => {
                    self.state = SearchState::Done;
                    SearchStep::Navigate(url)
                }
                None => {
                    self.state = SearchState::Idle;
                    SearchStep::Reset
                }
            },
            SearchResponse::InvalidSession => {
                if self.state == SearchState::InvalidSession {
                    return SearchStep::Ignore;
                }
                self.state = SearchState::InvalidSession;
                SearchStep::Recover
            }
            SearchResponse::Unknown => SearchStep::Ignore,
        }
    }

    /// Next status line while loading, cycling through `messages`.
    pub fn next_status<'a>(&mut self, messages: &'a [String]) -> Option<&'a str> {
        if self.state != SearchState::Loading || messages.is_empty() {
            return None;
        }
        let msg = messages.get(self.status_cursor % messages.len())?;
        self.status_cursor += 1;
        Some(msg.as_str())
    }

    fn enter_loading(&mut self) {
        self.state = SearchState::Loading;
        self.status_cursor = 0;
    }
}
