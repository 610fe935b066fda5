//! Connection target derived from the page origin.
//!
//! An `https` page talks `wss`, an `http` page talks `ws`, always to the host
//! the page itself was served from. Path, query, and fragment of the origin
//! are ignored; credentials are refused.

use url::Url;

use futureshape_core::error::{Result, ShapeError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    pub secure: bool,
    /// `host[:port]`
    pub host: String,
}

impl Origin {
    pub fn parse(origin: &str) -> Result<Self> {
        let url = Url::parse(origin)
            .map_err(|e| ShapeError::Config(format!("page.origin is not a url ({origin}): {e}")))?;

        let secure = match url.scheme() {
            "https" => true,
            "http" => false,
            other => {
                return Err(ShapeError::Config(format!(
                    "page.origin scheme must be http or https, got {other}"
                )))
            }
        };

        if !url.username().is_empty() || url.password().is_some() {
            return Err(ShapeError::Config("page.origin must not carry credentials".into()));
        }

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ShapeError::Config("page.origin has no host".into()))?;

        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_owned(),
        };

        Ok(Self { secure, host })
    }

    pub fn connection_target(&self, path: &str) -> String {
        let scheme = if self.secure { "wss" } else { "ws" };
        format!("{scheme}://{}{path}", self.host)
    }
}
