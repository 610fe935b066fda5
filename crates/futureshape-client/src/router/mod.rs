//! Message router.
//!
//! Outgoing: intents become requests through `dispatch_request`.
//! Inbound: `on_message` resolves `(category, topic)` to a `Route` and runs
//! exactly one handler. Unknown pairs are dropped; nothing here returns an
//! error to the page.
//!
//! Responses are correlated by topic only, so two overlapping requests with
//! the same topic cannot be told apart. The search flow refuses a second
//! search while one is loading.

pub mod search;

use serde_json::Value;

use futureshape_core::protocol::payload::{
    self, AutocompleteResults, SearchRequest, SearchResponse, SearchStatus, UrlPayload,
};
use futureshape_core::protocol::{Category, Envelope, Request, Route};

use crate::config::UiSection;
use crate::intent::Intent;
use crate::transport::Transport;
use crate::view::View;

pub use search::{SearchFlow, SearchState, SearchStep};

#[derive(Debug)]
pub struct Router {
    search: SearchFlow,
    fallback_profile_image: String,
    invalid_session_notice: String,
    status_messages: Vec<String>,
}

impl Router {
    pub fn new(ui: &UiSection) -> Self {
        Self {
            search: SearchFlow::new(),
            fallback_profile_image: ui.fallback_profile_image.clone(),
            invalid_session_notice: ui.invalid_session_notice.clone(),
            status_messages: ui.status_messages.clone(),
        }
    }

    pub fn search_state(&self) -> SearchState {
        self.search.state()
    }

    pub fn is_loading(&self) -> bool {
        self.search.state() == SearchState::Loading
    }

    /// First thing after the connection opens: fetch the profile badge.
    pub fn on_connected(&mut self, transport: &Transport) {
        self.request(transport, Route::ProfileImage, None);
    }

    /// Build `{category, topic, payload ?? null}` and hand it to the transport.
    /// Failures are logged; no acknowledgement is awaited.
    pub fn dispatch_request(
        &self,
        transport: &Transport,
        category: Category,
        topic: &str,
        payload: Option<Value>,
    ) {
        self.send(transport, Request::new(category, topic, payload));
    }

    pub fn handle_intent(&mut self, transport: &Transport, view: &mut dyn View, intent: Intent) {
        match intent {
            Intent::ProfileImage => self.request(transport, Route::ProfileImage, None),
            Intent::Login => self.request(transport, Route::Register, None),
            Intent::Logout => self.request(transport, Route::Unregister, None),
            Intent::Search(req) => self.begin_search(transport, view, req),
            Intent::Autocomplete(req) => match payload::to_value(&req) {
                Ok(v) => self.request(transport, Route::Autocomplete, Some(v)),
                Err(e) => tracing::warn!(error = %e, "autocomplete request not built"),
            },
        }
    }

    pub fn on_message(&mut self, transport: &Transport, view: &mut dyn View, env: Envelope) {
        let Some(route) = Route::resolve(env.category, &env.topic) else {
            tracing::debug!(
                category = env.category.as_str(),
                topic = %env.topic,
                "unrouted message dropped"
            );
            return;
        };

        match route {
            Route::ProfileImage => self.on_profile_image(view, &env.payload),
            Route::Search => self.on_search(transport, view, &env.payload),
            Route::Autocomplete => on_autocomplete(view, &env.payload),
            Route::Register => on_register(view, &env.payload),
            Route::Unregister => tracing::debug!("unregister acknowledged"),
        }
    }

    /// Loading timer tick: rotate the status line.
    pub fn rotate_status(&mut self, view: &mut dyn View) {
        if let Some(text) = self.search.next_status(&self.status_messages) {
            view.set_status_text(text);
        }
    }

    // --------------------
    // outgoing
    // --------------------

    fn request(&self, transport: &Transport, route: Route, payload: Option<Value>) {
        self.dispatch_request(transport, route.category(), route.topic(), payload);
    }

    fn send(&self, transport: &Transport, req: Request) -> bool {
        let category = req.category;
        let topic = req.topic.clone();
        match transport.send(req) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    code = e.code().as_str(),
                    category = category.as_str(),
                    topic = %topic,
                    error = %e,
                    "request not sent"
                );
                false
            }
        }
    }

    fn begin_search(&mut self, transport: &Transport, view: &mut dyn View, req: SearchRequest) {
        let args = match payload::to_value(&req) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "search request not built");
                return;
            }
        };

        if !self.search.begin() {
            tracing::warn!("search already in flight; request ignored");
            return;
        }

        let route = Route::Search;
        if !self.send(transport, Request::new(route.category(), route.topic(), Some(args))) {
            self.search.abort();
            return;
        }

        view.set_content_visible(false);
        self.rotate_status(view);
    }

    // --------------------
    // inbound
    // --------------------

    fn on_profile_image(&self, view: &mut dyn View, raw: &Value) {
        match payload::parse::<UrlPayload>(raw) {
            Ok(Some(p)) => view.set_profile_image(&p.url),
            Ok(None) => view.set_profile_image(&self.fallback_profile_image),
            Err(e) => {
                tracing::warn!(error = %e, "profile image payload unusable; using fallback");
                view.set_profile_image(&self.fallback_profile_image);
            }
        }
    }

    fn on_search(&mut self, transport: &Transport, view: &mut dyn View, raw: &Value) {
        let status = match payload::parse::<SearchStatus>(raw) {
            Ok(Some(s)) => s,
            // null means the session is not authenticated
            Ok(None) => SearchStatus {
                response: SearchResponse::InvalidSession,
                url: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "search status dropped");
                return;
            }
        };

        match self.search.on_status(status) {
            SearchStep::Loading { entered } => {
                if entered {
                    view.set_content_visible(false);
                    self.rotate_status(view);
                }
            }
            SearchStep::Navigate(url) => view.navigate(&url),
            SearchStep::Reset => {
                tracing::warn!("search finished without a result url");
                view.set_content_visible(true);
            }
            SearchStep::Recover => self.recover_session(transport, view),
            SearchStep::Ignore => tracing::debug!("search status ignored"),
        }
    }

    /// Invalid session: bring the form back, tell the user, and ask for an
    /// OAuth session. The redirect arrives as `oauth/register`.
    fn recover_session(&self, transport: &Transport, view: &mut dyn View) {
        view.set_content_visible(true);
        view.show_notice(&self.invalid_session_notice);
        self.request(transport, Route::Register, None);
    }
}

fn on_autocomplete(view: &mut dyn View, raw: &Value) {
    match payload::parse::<AutocompleteResults>(raw) {
        Ok(Some(r)) => view.show_suggestions(&r.target, &r.results),
        Ok(None) => tracing::debug!("empty autocomplete response"),
        Err(e) => tracing::warn!(error = %e, "autocomplete payload dropped"),
    }
}

fn on_register(view: &mut dyn View, raw: &Value) {
    match payload::parse::<UrlPayload>(raw) {
        Ok(Some(p)) => view.navigate(&p.url),
        // session already valid, or provider unreachable
        Ok(None) => tracing::debug!("register returned no redirect"),
        Err(e) => tracing::warn!(error = %e, "register payload dropped"),
    }
}
