use serde::Deserialize;
use futureshape_core::error::{Result, ShapeError};

use crate::transport::Origin;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub version: u32,

    #[serde(default)]
    pub page: PageSection,

    #[serde(default)]
    pub transport: TransportSection,

    #[serde(default)]
    pub ui: UiSection,
}

impl ClientConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ShapeError::UnsupportedVersion);
        }

        self.page.validate()?;
        self.transport.validate()?;
        self.ui.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageSection {
    /// Origin the page was loaded from; decides host and channel security.
    #[serde(default = "default_origin")]
    pub origin: String,
}

impl Default for PageSection {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl PageSection {
    pub fn validate(&self) -> Result<()> {
        Origin::parse(&self.origin).map(|_| ())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportSection {
    #[serde(default = "default_path")]
    pub path: String,

    /// Bound of the outbound frame queue and the inbound signal queue.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for TransportSection {
    fn default() -> Self {
        Self {
            path: default_path(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

impl TransportSection {
    pub fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(ShapeError::Config("transport.path must start with '/'".into()));
        }
        if !(1..=65536).contains(&self.queue_capacity) {
            return Err(ShapeError::Config(
                "transport.queue_capacity must be between 1 and 65536".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiSection {
    #[serde(default = "default_fallback_profile_image")]
    pub fallback_profile_image: String,

    #[serde(default = "default_status_interval_ms")]
    pub status_interval_ms: u64,

    #[serde(default = "default_status_messages")]
    pub status_messages: Vec<String>,

    #[serde(default = "default_invalid_session_notice")]
    pub invalid_session_notice: String,

    #[serde(default = "default_disconnect_notice")]
    pub disconnect_notice: String,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            fallback_profile_image: default_fallback_profile_image(),
            status_interval_ms: default_status_interval_ms(),
            status_messages: default_status_messages(),
            invalid_session_notice: default_invalid_session_notice(),
            disconnect_notice: default_disconnect_notice(),
        }
    }
}

impl UiSection {
    pub fn validate(&self) -> Result<()> {
        if self.fallback_profile_image.is_empty() {
            return Err(ShapeError::Config("ui.fallback_profile_image must not be empty".into()));
        }
        if !(250..=60000).contains(&self.status_interval_ms) {
            return Err(ShapeError::Config(
                "ui.status_interval_ms must be between 250 and 60000".into(),
            ));
        }
        if self.status_messages.is_empty() {
            return Err(ShapeError::Config("ui.status_messages must not be empty".into()));
        }
        Ok(())
    }
}

fn default_origin() -> String {
    "http://127.0.0.1:5000".into()
}
fn default_path() -> String {
    "/transport".into()
}
fn default_queue_capacity() -> usize {
    256
}
fn default_fallback_profile_image() -> String {
    "../static/images/user_profile_fallback_icon.svg".into()
}
fn default_status_interval_ms() -> u64 {
    2500
}
fn default_status_messages() -> Vec<String> {
    vec![
        "Looking through colleges...".into(),
        "Comparing majors...".into(),
        "Checking state policies...".into(),
        "Scoring your matches...".into(),
        "Almost there...".into(),
    ]
}
fn default_invalid_session_notice() -> String {
    "You need to sign in before searching. Redirecting to sign-in...".into()
}
fn default_disconnect_notice() -> String {
    "Connection to the server was lost. Please reload the page.".into()
}
