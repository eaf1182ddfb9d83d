//! Manifest fetching.
//!
//! A single GET per page load. No retries and no explicit timeout: the
//! transport's defaults apply.

use reqwest::blocking::Client;

use crate::error::{Result, SiteStampError};

use super::schema::EcosystemManifest;

/// Somewhere an ecosystem manifest can be loaded from.
pub trait ManifestSource {
    /// Load the manifest published at `url`.
    fn fetch(&self, url: &str) -> Result<EcosystemManifest>;
}

/// Fetches manifests over HTTP/HTTPS.
pub struct HttpManifestSource {
    client: Client,
}

impl HttpManifestSource {
    /// Create a new HTTP manifest source.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("sitestamp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SiteStampError::Other(e.into()))?;
        Ok(Self { client })
    }
}

impl ManifestSource for HttpManifestSource {
    fn fetch(&self, url: &str) -> Result<EcosystemManifest> {
        let unavailable = |message: String| SiteStampError::ManifestUnavailable {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(unavailable(format!("HTTP {}", response.status())));
        }

        response
            .json::<EcosystemManifest>()
            .map_err(|e| unavailable(format!("invalid manifest: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    const MANIFEST: &str = r#"{
        "environment": "dev",
        "lifecycle": "permanent",
        "deployedAt": "2026-10-16T08:30:00Z",
        "configUrl": "https://config.example.com/dev.json",
        "apps": { "app1": { "ref": "main" }, "app2": { "ref": "main" } }
    }"#;

    #[test]
    fn fetch_decodes_manifest() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/dev/manifest.json");
            then.status(200)
                .header("content-type", "application/json")
                .body(MANIFEST);
        });

        let source = HttpManifestSource::new().unwrap();
        let manifest = source.fetch(&server.url("/dev/manifest.json")).unwrap();

        mock.assert();
        assert_eq!(manifest.environment.as_deref(), Some("dev"));
        assert_eq!(manifest.apps.len(), 2);
    }

    #[test]
    fn fetch_404_is_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/manifest.json");
            then.status(404).body("Not Found");
        });

        let source = HttpManifestSource::new().unwrap();
        let result = source.fetch(&server.url("/manifest.json"));

        let err = result.unwrap_err();
        assert!(matches!(err, SiteStampError::ManifestUnavailable { .. }));
        assert!(err.to_string().contains("404"), "Error should mention 404: {}", err);
    }

    #[test]
    fn fetch_500_is_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/manifest.json");
            then.status(500).body("Internal Server Error");
        });

        let source = HttpManifestSource::new().unwrap();
        let err = source.fetch(&server.url("/manifest.json")).unwrap_err();

        assert!(err.to_string().contains("500"), "Error should mention 500: {}", err);
    }

    #[test]
    fn fetch_invalid_json_is_unavailable() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/manifest.json");
            then.status(200).body("<html>not json</html>");
        });

        let source = HttpManifestSource::new().unwrap();
        let err = source.fetch(&server.url("/manifest.json")).unwrap_err();

        assert!(err.to_string().contains("invalid manifest"));
    }

    #[test]
    fn fetch_connection_refused_is_unavailable() {
        let source = HttpManifestSource::new().unwrap();
        // Port 9 (discard) is not expected to be listening locally.
        let result = source.fetch("http://127.0.0.1:9/manifest.json");

        assert!(matches!(
            result,
            Err(SiteStampError::ManifestUnavailable { .. })
        ));
    }
}
