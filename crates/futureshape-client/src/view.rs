//! UI collaborator.
//!
//! The router never touches the page directly; every visible effect goes
//! through `View`. `RecordingView` keeps the effects in order (tests,
//! embedders); `TerminalView` backs the headless CLI.

/// Page regions the router can update.
pub trait View {
    /// Set the profile badge source.
    fn set_profile_image(&mut self, src: &str);
    /// Full-page navigation; the page leaves this client.
    fn navigate(&mut self, url: &str);
    /// User-visible notice.
    fn show_notice(&mut self, text: &str);
    /// Show or hide the form content (hidden while a search is loading).
    fn set_content_visible(&mut self, visible: bool);
    /// Rotating status line shown while loading.
    fn set_status_text(&mut self, text: &str);
    /// Suggestions for the input identified by `target`.
    fn show_suggestions(&mut self, target: &str, results: &[String]);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ProfileImage(String),
    Navigate(String),
    Notice(String),
    ContentVisible(bool),
    StatusText(String),
    Suggestions { target: String, results: Vec<String> },
}

#[derive(Debug, Default)]
pub struct RecordingView {
    effects: Vec<Effect>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    /// Drain recorded effects.
    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

impl View for RecordingView {
    fn set_profile_image(&mut self, src: &str) {
        self.effects.push(Effect::ProfileImage(src.to_owned()));
    }

    fn navigate(&mut self, url: &str) {
        self.effects.push(Effect::Navigate(url.to_owned()));
    }

    fn show_notice(&mut self, text: &str) {
        self.effects.push(Effect::Notice(text.to_owned()));
    }

    fn set_content_visible(&mut self, visible: bool) {
        self.effects.push(Effect::ContentVisible(visible));
    }

    fn set_status_text(&mut self, text: &str) {
        self.effects.push(Effect::StatusText(text.to_owned()));
    }

    fn show_suggestions(&mut self, target: &str, results: &[String]) {
        self.effects.push(Effect::Suggestions {
            target: target.to_owned(),
            results: results.to_vec(),
        });
    }
}

/// Prints effects for a human at a terminal.
#[derive(Debug, Default)]
pub struct TerminalView;

impl View for TerminalView {
    fn set_profile_image(&mut self, src: &str) {
        println!("profile image: {src}");
    }

    fn navigate(&mut self, url: &str) {
        println!("open in a browser: {url}");
    }

    fn show_notice(&mut self, text: &str) {
        println!("! {text}");
    }

    fn set_content_visible(&mut self, visible: bool) {
        tracing::debug!(visible, "content visibility");
    }

    fn set_status_text(&mut self, text: &str) {
        println!("... {text}");
    }

    fn show_suggestions(&mut self, target: &str, results: &[String]) {
        println!("{target}: {}", results.join(", "));
    }
}
