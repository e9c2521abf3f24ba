// SPDX-License-Identifier: MIT
//! The color.pizza naming client.

use std::time::Duration;

use log::{debug, info};
use serde::Deserialize;

use crate::error::NamingError;

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "https://api.color.pizza";

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Query string asking for one distinct, well-known name per color.
const QUERY: &str = "noduplicates=true&goodnamesonly=true";

/// A name for one requested color.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorName {
    pub name: String,
    /// Hex of the named reference color, which may differ from the request.
    pub hex: String,
    /// The color this entry answers, when the service echoes it.
    #[serde(default)]
    pub requested_hex: Option<String>,
    /// Perceptual distance between the request and the named color.
    #[serde(default)]
    pub distance: Option<f64>,
}

/// Response body: names in request order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamesResponse {
    pub colors: Vec<ColorName>,
}

impl NamesResponse {
    /// # Errors
    ///
    /// Returns [`NamingError::Decode`] for anything but the expected JSON.
    pub fn parse(body: &str) -> Result<Self, NamingError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Anything that can name a list of hex colors, positionally.
pub trait NamingClient: Send + Sync {
    /// Names for `colors`, in the same order.
    ///
    /// # Errors
    ///
    /// Any [`NamingError`]; implementations never retry.
    fn names(&self, colors: &[String]) -> Result<Vec<ColorName>, NamingError>;
}

/// Blocking client for the color.pizza HTTP API.
#[derive(Debug, Clone)]
pub struct ColorPizza {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ColorPizza {
    /// Client for the public service with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::Transport`] if the HTTP client cannot be built.
    pub fn new() -> Result<Self, NamingError> {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Client for another deployment of the same API.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::Transport`] if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, NamingError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("swatch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request URL for `colors`: comma-separated hex without `#`.
    ///
    /// # Errors
    ///
    /// [`NamingError::EmptyRequest`] for an empty list,
    /// [`NamingError::InvalidColor`] for anything that is not `#rrggbb`
    /// or `rrggbb`.
    pub fn request_url(&self, colors: &[String]) -> Result<String, NamingError> {
        if colors.is_empty() {
            return Err(NamingError::EmptyRequest);
        }
        let hex = colors
            .iter()
            .map(|c| {
                let bare = c.strip_prefix('#').unwrap_or(c);
                if bare.len() == 6 && bare.chars().all(|ch| ch.is_ascii_hexdigit()) {
                    Ok(bare.to_ascii_lowercase())
                } else {
                    Err(NamingError::InvalidColor(c.clone()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("{}/v1/{}?{QUERY}", self.base_url, hex.join(",")))
    }
}

impl NamingClient for ColorPizza {
    fn names(&self, colors: &[String]) -> Result<Vec<ColorName>, NamingError> {
        let url = self.request_url(colors)?;
        info!("looking up names for {} colors", colors.len());
        debug!("GET {url}");

        let response = self.http.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(NamingError::Status(status.as_u16()));
        }
        let body = response.text()?;
        Ok(NamesResponse::parse(&body)?.colors)
    }
}
