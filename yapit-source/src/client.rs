use reqwest::Client;
use yapit_ir::Endpoint;
use yapit_manifest::{InterfaceDetail, InterfaceResponse, SourceSettings};

use crate::SourceError;

const INTERFACE_PATH: &str = "/api/interface/get";

/// Fetches interface documents from a YApi-compatible server.
#[derive(Debug, Clone)]
pub struct SchemaClient {
    http: Client,
    settings: SourceSettings,
}

impl SchemaClient {
    pub fn new(settings: SourceSettings) -> Result<Self, SourceError> {
        let http = Client::builder()
            .user_agent(concat!("yapit/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SourceError::Client)?;
        Ok(Self { http, settings })
    }

    /// Reuse an existing HTTP client.
    pub fn with_client(http: Client, settings: SourceSettings) -> Self {
        Self { http, settings }
    }

    pub fn settings(&self) -> &SourceSettings {
        &self.settings
    }

    /// Absolute URL of the interface lookup.
    pub fn interface_url(&self) -> String {
        format!(
            "{}{}",
            self.settings.base_url.trim_end_matches('/'),
            INTERFACE_PATH
        )
    }

    /// Fetch and lower the interface with the given id.
    pub async fn fetch_endpoint(&self, id: &str) -> Result<Endpoint, SourceError> {
        let detail = self.fetch_interface(id).await?;
        Ok(detail.to_endpoint())
    }

    /// Fetch the raw interface document, retrying transient failures.
    pub async fn fetch_interface(&self, id: &str) -> Result<InterfaceDetail, SourceError> {
        let attempts = self.settings.retries + 1;
        let mut attempt = 1;
        loop {
            match self.fetch_once(id).await {
                Err(e) if e.is_transient() && attempt < attempts => {
                    tracing::warn!(
                        interface_id = id,
                        attempt,
                        error = %e,
                        "transient failure fetching interface, retrying"
                    );
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    async fn fetch_once(&self, id: &str) -> Result<InterfaceDetail, SourceError> {
        let url = self.interface_url();
        tracing::debug!(%url, interface_id = id, "fetching interface");

        let mut request = self
            .http
            .get(&url)
            .query(&[("id", id)])
            .timeout(self.settings.timeout);
        if let Some(token) = &self.settings.token {
            request = request.query(&[("token", token)]);
        }

        let response = request.send().await.map_err(|source| SourceError::Http {
            url: url.clone(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { status });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SourceError::Http { url, source })?;
        let document: InterfaceResponse = serde_json::from_str(&body)?;
        Ok(document.into_detail()?)
    }
}
