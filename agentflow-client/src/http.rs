//! Retrying JSON transport shared by the webhook clients.

use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::{sleep, timeout};
use tracing::warn;

use crate::error::{ClientError, Result};
use crate::retry::RetryPolicy;

/// A successful (2xx) upstream reply, body still undecoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    pub status: u16,
    pub body: String,
}

impl UpstreamResponse {
    /// Decode the body as JSON.
    pub fn json(&self) -> Result<Value> {
        serde_json::from_str(&self.body)
            .map_err(|err| ClientError::decode(format!("upstream body is not valid JSON: {err}")))
    }
}

/// Best-effort human-readable message for a non-2xx upstream body.
///
/// Precedence: a non-empty JSON `error` field, then a non-empty JSON
/// `message` field, then the trimmed raw body, then the status reason.
pub fn extract_error_message(body: &str, status: StatusCode) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(Value::String(text)) = map.get(key) {
                if !text.is_empty() {
                    return text.clone();
                }
            }
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

/// JSON POST client with per-attempt timeouts and linear backoff.
///
/// A 4xx reply fails immediately. Timeouts, network failures, and 5xx
/// replies are retried per the policy; once attempts run out the last
/// failure is wrapped in [`ClientError::ExhaustedRetries`], except under a
/// zero-retry policy where it surfaces unwrapped.
#[derive(Debug, Clone)]
pub struct RetryingClient {
    http: reqwest::Client,
    policy: RetryPolicy,
}

impl RetryingClient {
    /// Build a client with its own connection pool.
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            http: reqwest::Client::new(),
            policy,
        }
    }

    /// The policy this client paces attempts with.
    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// POST `payload` to `url`, retrying per the policy.
    pub async fn post_json(&self, url: &str, payload: &Value) -> Result<UpstreamResponse> {
        let total = self.policy.total_attempts();
        let mut last = None;

        for attempt in 0..total {
            match self.attempt(url, payload).await {
                Ok(response) => return Ok(response),
                Err(err) if err.is_retryable() => {
                    if attempt + 1 < total {
                        let delay = self.policy.delay_for(attempt);
                        warn!(
                            attempt = attempt + 1,
                            delay_ms = delay.as_millis() as u64,
                            error = %err,
                            "attempt failed, retrying"
                        );
                        sleep(delay).await;
                    }
                    last = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        let last = last.unwrap_or_else(|| ClientError::internal("no attempts were made"));
        if self.policy.max_retries == 0 {
            Err(last)
        } else {
            Err(ClientError::exhausted(total, last))
        }
    }

    /// One attempt: send, read the body, classify. The deadline covers both
    /// the request and the body read; hitting it drops the in-flight future.
    async fn attempt(&self, url: &str, payload: &Value) -> Result<UpstreamResponse> {
        let work = async {
            let response = self.http.post(url).json(payload).send().await?;
            let status = response.status();
            let body = response.text().await?;
            if status.is_success() {
                Ok(UpstreamResponse {
                    status: status.as_u16(),
                    body,
                })
            } else {
                Err(ClientError::upstream_status(
                    status.as_u16(),
                    extract_error_message(&body, status),
                ))
            }
        };

        match timeout(self.policy.timeout, work).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::timeout(format!(
                "no response within {}ms",
                self.policy.timeout.as_millis()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::time::{Duration, Instant};

    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn fast_policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            base_delay: Duration::from_millis(5),
            timeout: Duration::from_secs(1),
        }
    }

    #[tokio::test]
    async fn test_success_returns_undecoded_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .expect(1)
            .create_async()
            .await;

        let client = RetryingClient::new(fast_policy(2));
        let response = client
            .post_json(&format!("{}/hook", server.url()), &json!({"probe": 1}))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.json().unwrap(), json!({"ok": true}));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_errors_retried_until_exhaustion() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .with_status(500)
            .with_body("boom")
            .expect(3)
            .create_async()
            .await;

        let client = RetryingClient::new(fast_policy(2));
        let started = Instant::now();
        let err = client
            .post_json(&format!("{}/hook", server.url()), &json!({}))
            .await
            .unwrap_err();

        // Two waits at 5ms and 10ms sit between the three attempts.
        assert!(started.elapsed() >= Duration::from_millis(15));
        match &err {
            ClientError::ExhaustedRetries { attempts, .. } => assert_eq!(*attempts, 3),
            other => panic!("expected exhaustion, got {other}"),
        }
        assert_eq!(err.upstream_failure(), Some((500, "boom")));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_client_errors_never_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .with_status(404)
            .with_body(r#"{"error": "no such hook"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = RetryingClient::new(fast_policy(2));
        let err = client
            .post_json(&format!("{}/hook", server.url()), &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::UpstreamStatus { status: 404, ref message } if message == "no such hook"
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_deadline_fails_the_attempt() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/hook")
            .with_status(200)
            .with_chunked_body(|writer| {
                std::thread::sleep(Duration::from_millis(200));
                writer.write_all(b"{}")
            })
            .create_async()
            .await;

        let policy = RetryPolicy::single_attempt(Duration::from_millis(50));
        let client = RetryingClient::new(policy);
        let err = client
            .post_json(&format!("{}/hook", server.url()), &json!({}))
            .await
            .unwrap_err();

        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "Timeout error: no response within 50ms");
    }

    #[tokio::test]
    async fn test_zero_retry_policy_surfaces_raw_error() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let client = RetryingClient::new(RetryPolicy::single_attempt(Duration::from_secs(1)));
        let err = client
            .post_json(&format!("http://127.0.0.1:{port}/hook"), &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Network(_)));
    }

    #[tokio::test]
    async fn test_zero_retry_policy_makes_one_attempt() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/hook")
            .with_status(500)
            .with_body("down")
            .expect(1)
            .create_async()
            .await;

        let client = RetryingClient::new(RetryPolicy::single_attempt(Duration::from_secs(1)));
        let err = client
            .post_json(&format!("{}/hook", server.url()), &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::UpstreamStatus { status: 500, .. }));
        mock.assert_async().await;
    }

    #[test]
    fn test_error_message_extraction_precedence() {
        let status = StatusCode::BAD_GATEWAY;
        assert_eq!(extract_error_message(r#"{"error": "boom"}"#, status), "boom");
        assert_eq!(
            extract_error_message(r#"{"error": "", "message": "later"}"#, status),
            "later"
        );
        assert_eq!(extract_error_message("  plain text \n", status), "plain text");
        assert_eq!(extract_error_message("", status), "Bad Gateway");
        assert_eq!(
            extract_error_message(r#"{"detail": "ignored"}"#, status),
            r#"{"detail": "ignored"}"#
        );
    }
}
