//! Gemini HTTP client.

use crate::error::{GeminiError, GeminiResult};
use crate::types::*;
use campus_config::GeminiConfig;
use futures_util::StreamExt;
use reqwest::Client;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Client for the Gemini generative language API.
#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    host: String,
    api_key: String,
    model: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a new client from configuration. The API key is read from the
    /// environment variable the configuration names.
    pub fn from_config(config: &GeminiConfig) -> GeminiResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey {
                var: config.api_key_env.clone(),
            })?;

        let timeout = Duration::from_secs(config.timeout_seconds);

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GeminiError::Http)?;

        Ok(Self {
            http,
            host: config.host.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            timeout,
        })
    }

    /// Override the model for this client.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate content (non-streaming).
    pub async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.host, self.model, self.api_key
        );
        debug!("Generating with model {}", self.model);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let payload: GenerateContentResponse = response.json().await?;
        Ok(payload)
    }

    /// Generate content with streaming.
    /// Returns a channel receiver that yields text fragments as they arrive.
    pub async fn stream_content(
        &self,
        request: GenerateContentRequest,
    ) -> GeminiResult<mpsc::Receiver<String>> {
        let url = format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse&key={}",
            self.host, self.model, self.api_key
        );
        debug!("Starting streaming generation with model {}", self.model);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let (tx, rx) = mpsc::channel(100);

        // Spawn task to read the SSE stream
        tokio::spawn(async move {
            let mut stream = response.bytes_stream();
            let mut buffer = String::new();

            while let Some(chunk_result) = stream.next().await {
                match chunk_result {
                    Ok(bytes) => {
                        buffer.push_str(&String::from_utf8_lossy(&bytes));

                        // Events can span chunk boundaries; consume whole lines only
                        while let Some(newline) = buffer.find('\n') {
                            let line: String = buffer.drain(..=newline).collect();
                            if let Some(fragment) = parse_sse_line(line.trim()) {
                                if !fragment.is_empty() && tx.send(fragment).await.is_err() {
                                    return; // Receiver dropped
                                }
                            }
                        }
                    }
                    Err(e) => {
                        warn!("Stream error: {}", e);
                        return;
                    }
                }
            }
        });

        Ok(rx)
    }

    fn map_send_error(&self, error: reqwest::Error) -> GeminiError {
        if error.is_connect() {
            GeminiError::Connection {
                host: self.host.clone(),
            }
        } else if error.is_timeout() {
            GeminiError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            GeminiError::Http(error)
        }
    }
}

/// Extract the text fragment from one `data:` SSE line, if any.
fn parse_sse_line(line: &str) -> Option<String> {
    let data = line.strip_prefix("data:")?.trim();
    if data.is_empty() || data == "[DONE]" {
        return None;
    }

    match serde_json::from_str::<GenerateContentResponse>(data) {
        Ok(payload) => Some(payload.text()),
        Err(e) => {
            warn!("Failed to parse stream chunk: {}", e);
            None
        }
    }
}

/// Pull the human-readable message out of an API error body, falling back
/// to the raw body when it is not the documented envelope.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(envelope) if !envelope.error.message.is_empty() => envelope.error.message,
        _ => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_requires_the_api_key_variable() {
        let config = GeminiConfig {
            api_key_env: "CAMPUS_TEST_UNSET_KEY".to_string(),
            ..GeminiConfig::default()
        };
        std::env::remove_var("CAMPUS_TEST_UNSET_KEY");

        let client = GeminiClient::from_config(&config);
        assert!(matches!(client, Err(GeminiError::MissingApiKey { .. })));
    }

    #[test]
    fn test_from_config_rejects_blank_api_key() {
        let config = GeminiConfig {
            api_key_env: "CAMPUS_TEST_BLANK_KEY".to_string(),
            ..GeminiConfig::default()
        };
        std::env::set_var("CAMPUS_TEST_BLANK_KEY", "   ");

        let client = GeminiClient::from_config(&config);
        assert!(matches!(client, Err(GeminiError::MissingApiKey { .. })));
    }

    #[test]
    fn test_client_creation_with_key_present() {
        let config = GeminiConfig {
            api_key_env: "CAMPUS_TEST_SET_KEY".to_string(),
            ..GeminiConfig::default()
        };
        std::env::set_var("CAMPUS_TEST_SET_KEY", "test-key");

        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(client.model(), "gemini-2.0-flash-exp");
    }

    #[test]
    fn test_parse_sse_line() {
        let line = r#"data: {"candidates":[{"content":{"parts":[{"text":"Hi"}]}}]}"#;
        assert_eq!(parse_sse_line(line), Some("Hi".to_string()));

        assert_eq!(parse_sse_line(""), None);
        assert_eq!(parse_sse_line("data: [DONE]"), None);
        assert_eq!(parse_sse_line(": keepalive comment"), None);
    }

    #[test]
    fn test_api_error_message_unwraps_the_envelope() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(api_error_message(body), "Quota exceeded");

        assert_eq!(api_error_message("plain failure"), "plain failure");
    }
}
