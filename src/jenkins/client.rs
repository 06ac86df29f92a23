use crate::config::JenkinsConfig;
use crate::lens_error::LensError;
use base64::Engine;
use jenkins_sdk::client::AsyncClient;
use jenkins_sdk::JenkinsError;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method};
use std::time::Duration;
use tracing::debug;

const USER_AGENT_VALUE: &str = concat!("jenkins-log-lens/", env!("CARGO_PKG_VERSION"));

/// Fetch capability the query pipeline runs on.
///
/// `endpoint` is relative to the jenkins root, without a leading slash.
#[async_trait::async_trait]
pub trait JenkinsFetch: Send + Sync {
    async fn fetch(&self, method: &str, endpoint: &str) -> Result<String, LensError>;
}

/// Asynchronous Jenkins API client authentic by username and API token.
pub struct JenkinsHttpClient {
    url: String,
    username: String,
    api_token: String,
    client: Client,
}

impl JenkinsHttpClient {
    /// Creates a new asynchronous Jenkins API client.
    ///
    /// Every request is bounded by `config.timeout_secs` and never retried.
    pub fn new(config: &JenkinsConfig) -> Result<Self, LensError> {
        Ok(Self {
            url: config.url.clone(),
            username: config.username.clone(),
            api_token: config.api_token.clone(),
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()?,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn authorization(&self) -> String {
        format!(
            "Basic {}",
            base64::prelude::BASE64_STANDARD
                .encode(format!("{}:{}", self.username, self.api_token).as_bytes())
        )
    }

    async fn send(
        &self,
        method: &str,
        endpoint: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<String, LensError> {
        let url = format!("{}/{}", self.url, endpoint.trim_start_matches('/'));
        let method = method
            .parse::<Method>()
            .map_err(|_| LensError::InvalidMethod(method.to_string()))?;

        debug!("{} {}", method, url);

        let req = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, self.authorization())
            .header(USER_AGENT, USER_AGENT_VALUE);

        let resp = if let Some(p) = params {
            req.form(&p).send().await?
        } else {
            req.send().await?
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(LensError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
                url,
            });
        }

        Ok(resp.text().await?)
    }
}

#[async_trait::async_trait]
impl JenkinsFetch for JenkinsHttpClient {
    async fn fetch(&self, method: &str, endpoint: &str) -> Result<String, LensError> {
        self.send(method, endpoint, None).await
    }
}

#[async_trait::async_trait]
impl AsyncClient for JenkinsHttpClient {
    /// Sends an asynchronous HTTP request to the Jenkins server.
    async fn request(
        &self,
        method: &str,
        endpoint: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<String, JenkinsError> {
        self.send(method, endpoint, params)
            .await
            .map_err(|e| JenkinsError::RequestError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_header() {
        let client = JenkinsHttpClient::new(&JenkinsConfig::new(
            "https://jenkins.example.com/",
            "user",
            "token",
        ))
        .unwrap();

        assert_eq!(client.url(), "https://jenkins.example.com");
        assert_eq!(client.authorization(), "Basic dXNlcjp0b2tlbg==");
    }

    #[tokio::test]
    async fn test_invalid_method() {
        let client =
            JenkinsHttpClient::new(&JenkinsConfig::new("http://127.0.0.1:9", "u", "t")).unwrap();

        assert!(matches!(
            client.fetch("NOT A METHOD", "api/json").await,
            Err(LensError::InvalidMethod(_))
        ));
    }
}
