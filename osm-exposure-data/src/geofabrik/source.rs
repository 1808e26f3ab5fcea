use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::{Client, Response};
use std::io::{self, Write};

use super::error::TransportError;
use super::types::ExtractUrl;
use super::util::to_sync_reader;

pub const DEFAULT_USER_AGENT: &str = "osm-exposure/0.1";

/// Transport seam for fetching extract payloads.
#[async_trait(?Send)]
pub trait ExtractSource {
    /// Stream the payload at `url` into `sink`, returning the byte count.
    async fn fetch(&self, url: &ExtractUrl, sink: &mut dyn Write) -> Result<u64, TransportError>;
}

/// HTTP implementation of [`ExtractSource`].
#[derive(Debug)]
pub struct HttpExtractSource {
    client: Client,
    user_agent: String,
}

impl HttpExtractSource {
    /// Construct an HTTP-backed extract source.
    #[must_use]
    pub fn new() -> Self {
        let client = Client::builder()
            .connect_timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("client builder only fails with invalid configuration");
        Self {
            client,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    /// Override the default user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    async fn call(&self, url: &str) -> Result<Response, TransportError> {
        self.client
            .get(url)
            .header(USER_AGENT, self.user_agent.as_str())
            .send()
            .await
            .map_err(|err| convert_reqwest_error(err, url))?
            .error_for_status()
            .map_err(|err| convert_reqwest_error(err, url))
    }
}

impl Default for HttpExtractSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ExtractSource for HttpExtractSource {
    async fn fetch(&self, url: &ExtractUrl, sink: &mut dyn Write) -> Result<u64, TransportError> {
        let response = self.call(url.as_ref()).await?;
        let mut reader = to_sync_reader(response);
        io::copy(&mut reader, sink).map_err(|source| TransportError::Network {
            url: url.as_ref().to_owned(),
            source,
        })
    }
}

fn convert_reqwest_error(error: reqwest::Error, url: &str) -> TransportError {
    if let Some(status) = error.status() {
        return TransportError::Http {
            url: url.to_owned(),
            status: status.as_u16(),
            message: error.to_string(),
        };
    }

    let kind = if error.is_timeout() {
        io::ErrorKind::TimedOut
    } else {
        io::ErrorKind::Other
    };
    TransportError::Network {
        url: url.to_owned(),
        source: io::Error::new(kind, error),
    }
}
