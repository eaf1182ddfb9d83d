//! Page locations.

use reqwest::Url;

use crate::error::{Result, SiteStampError};

use super::detection::{detect, DetectedEnvironment};

/// The parts of a page URL the detector cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLocation {
    /// Scheme, host and port, without a trailing slash.
    pub origin: String,
    /// Hostname without port.
    pub hostname: String,
    /// URL path, always starting with `/`.
    pub pathname: String,
}

impl PageLocation {
    /// Parse an absolute page URL.
    ///
    /// ```
    /// use sitestamp::environment::PageLocation;
    ///
    /// let loc = PageLocation::parse("https://example.cloudfront.net/staging/app2").unwrap();
    /// assert_eq!(loc.hostname, "example.cloudfront.net");
    /// assert_eq!(loc.pathname, "/staging/app2");
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input).map_err(|e| SiteStampError::InvalidLocation {
            input: input.to_string(),
            message: e.to_string(),
        })?;

        let hostname = url
            .host_str()
            .ok_or_else(|| SiteStampError::InvalidLocation {
                input: input.to_string(),
                message: "URL has no host".to_string(),
            })?
            .to_string();

        Ok(Self {
            origin: url.origin().ascii_serialization(),
            hostname,
            pathname: url.path().to_string(),
        })
    }

    /// Build a location from a bare hostname and path.
    ///
    /// The origin is assumed to be `https://<hostname>`.
    pub fn from_parts(hostname: &str, pathname: &str) -> Self {
        let pathname = if pathname.starts_with('/') {
            pathname.to_string()
        } else {
            format!("/{}", pathname)
        };
        Self {
            origin: format!("https://{}", hostname),
            hostname: hostname.to_string(),
            pathname,
        }
    }

    /// Detect the environment this location belongs to.
    pub fn detect(&self) -> DetectedEnvironment {
        detect(&self.hostname, &self.pathname)
    }

    /// Absolute URL for a path on the same origin.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}
