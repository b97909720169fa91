use async_trait::async_trait;
use common::ClientConfig;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    #[error("request timed out")]
    Timeout,
    #[error("invalid endpoint {0}")]
    Endpoint(String),
    #[error("{0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err.to_string())
        }
    }
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network seam of the client. Paths are relative to the service root.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BiasTransport: Send + Sync {
    async fn get(&self, path: &str) -> Result<HttpReply, TransportFailure>;

    async fn post_form(
        &self,
        path: &str,
        form: Vec<(String, String)>,
    ) -> Result<HttpReply, TransportFailure>;
}

pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportFailure> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportFailure> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| TransportFailure::Endpoint(format!("{path}: {e}")))
    }

    async fn into_reply(response: reqwest::Response) -> Result<HttpReply, TransportFailure> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpReply { status, body })
    }
}

#[async_trait]
impl BiasTransport for HttpTransport {
    async fn get(&self, path: &str) -> Result<HttpReply, TransportFailure> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        Self::into_reply(response).await
    }

    async fn post_form(
        &self,
        path: &str,
        form: Vec<(String, String)>,
    ) -> Result<HttpReply, TransportFailure> {
        let url = self.endpoint(path)?;
        debug!("POST {} ({} fields)", url, form.len());

        let response = self.client.post(url).form(&form).send().await?;
        Self::into_reply(response).await
    }
}
