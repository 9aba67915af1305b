use crate::utils::error::Result;
use reqwest::Client;

/// Which transport a fetch uses, keyed off the URL prefix alone. Anything
/// that is not `https://` goes down the plain-HTTP path and fails there if
/// the URL turns out to be unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Plain,
    Tls,
}

pub fn transport_for(url: &str) -> Transport {
    if url.starts_with("https://") {
        Transport::Tls
    } else {
        Transport::Plain
    }
}

/// Outbound GET fetcher shared by the relay and render endpoints.
pub struct UrlFetcher {
    client: Client,
}

impl UrlFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch `url` and buffer the whole response body as UTF-8 text.
    ///
    /// The remote status code is not inspected: a 404 or 500 from the target
    /// still resolves successfully with whatever body came back. Only
    /// transport-level failures (DNS, connect, TLS, read) are errors.
    ///
    /// No retry, no explicit timeout, no caching.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let transport = transport_for(url);
        tracing::debug!(%url, ?transport, "fetching upstream document");

        let response = self.client.get(url).send().await?;
        tracing::debug!(status = %response.status(), "upstream response received");

        let body = response.bytes().await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}
