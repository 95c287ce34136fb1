//! Blocking HTTP verbs for Rono programs.
//!
//! One request per call. The response body comes back whole, whatever the
//! status code; transport failures (DNS, connect, timeout, TLS, a bad URL)
//! all collapse to `None`.

use std::io::Read as _;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use ureq::config::Config;
use ureq::Agent;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_USER_AGENT: &str = "Rono-HTTP/1.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    /// Whole-request budget: connect, send and receive.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

pub struct HttpClient {
    config: Config,
    user_agent: String,
}

impl HttpClient {
    pub fn new(settings: &HttpSettings) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(settings.timeout))
            .http_status_as_error(false)
            // One request per call: a 3xx comes back as the response.
            .max_redirects(0)
            .max_redirects_will_error(false)
            .build();
        Self {
            config,
            user_agent: settings.user_agent.clone(),
        }
    }

    /// Performs one request on a fresh agent that is dropped before
    /// returning, so nothing is pooled between calls.
    pub fn execute(&self, method: Method, url: &str, body: Option<&[u8]>) -> Result<Vec<u8>> {
        let agent = Agent::new_with_config(self.config.clone());
        let user_agent = self.user_agent.as_str();
        let body = body.unwrap_or_default();

        let resp = match method {
            Method::Get => agent.get(url).header("User-Agent", user_agent).call(),
            Method::Post => agent.post(url).header("User-Agent", user_agent).send(body),
            Method::Put => agent.put(url).header("User-Agent", user_agent).send(body),
            Method::Delete => agent.delete(url).header("User-Agent", user_agent).call(),
        }
        .with_context(|| format!("http {} {url}", method.as_str()))?;

        let mut reader = resp.into_body().into_reader();
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .context("read http response")?;
        Ok(buf)
    }

    fn request(&self, method: Method, url: &str, body: Option<&[u8]>) -> Option<Vec<u8>> {
        match self.execute(method, url, body) {
            Ok(buf) => {
                tracing::trace!(
                    method = method.as_str(),
                    url,
                    bytes = buf.len(),
                    "http request complete"
                );
                Some(buf)
            }
            Err(err) => {
                tracing::debug!(method = method.as_str(), url, error = ?err, "http request failed");
                None
            }
        }
    }

    pub fn get(&self, url: &str) -> Option<Vec<u8>> {
        self.request(Method::Get, url, None)
    }

    pub fn post(&self, url: &str, body: &[u8]) -> Option<Vec<u8>> {
        self.request(Method::Post, url, Some(body))
    }

    pub fn put(&self, url: &str, body: &[u8]) -> Option<Vec<u8>> {
        self.request(Method::Put, url, Some(body))
    }

    pub fn delete(&self, url: &str) -> Option<Vec<u8>> {
        self.request(Method::Delete, url, None)
    }
}

static ENGINE: OnceLock<HttpClient> = OnceLock::new();

/// The process-wide client, built with [`HttpSettings::default`] on first use.
pub fn init() -> &'static HttpClient {
    ENGINE.get_or_init(|| {
        let settings = HttpSettings::default();
        tracing::debug!(
            timeout_secs = settings.timeout.as_secs(),
            user_agent = %settings.user_agent,
            "initializing http engine"
        );
        HttpClient::new(&settings)
    })
}

pub fn http_get(url: &str) -> Option<Vec<u8>> {
    init().get(url)
}

pub fn http_post(url: &str, body: &[u8]) -> Option<Vec<u8>> {
    init().post(url, body)
}

pub fn http_put(url: &str, body: &[u8]) -> Option<Vec<u8>> {
    init().put(url, body)
}

pub fn http_delete(url: &str) -> Option<Vec<u8>> {
    init().delete(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_runtime_policy() {
        let settings = HttpSettings::default();
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.user_agent, "Rono-HTTP/1.0");
    }

    #[test]
    fn engine_is_built_once() {
        assert!(std::ptr::eq(init(), init()));
    }

    #[test]
    fn malformed_url_is_a_transport_failure() {
        let client = HttpClient::new(&HttpSettings::default());
        assert!(client.execute(Method::Get, "not a url", None).is_err());
        assert_eq!(client.get(""), None);
    }
}
