//! Abstract text generation capability.

use crate::client::GeminiClient;
use crate::error::{GeminiError, GeminiResult};
use crate::types::GenerateContentRequest;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;

/// The model dependency of the answer pipeline.
///
/// `generate` returns the full response text; `generate_stream` returns a
/// channel of text fragments in arrival order, closed when generation ends.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> GeminiResult<String>;

    async fn generate_stream(&self, prompt: &str) -> GeminiResult<mpsc::Receiver<String>>;
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> GeminiResult<String> {
        let response = self
            .generate_content(GenerateContentRequest::new(prompt))
            .await?;

        let text = response.text();
        if text.is_empty() {
            return Err(GeminiError::EmptyResponse);
        }
        Ok(text)
    }

    async fn generate_stream(&self, prompt: &str) -> GeminiResult<mpsc::Receiver<String>> {
        self.stream_content(GenerateContentRequest::new(prompt)).await
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, prompt: &str) -> GeminiResult<String> {
        (**self).generate(prompt).await
    }

    async fn generate_stream(&self, prompt: &str) -> GeminiResult<mpsc::Receiver<String>> {
        (**self).generate_stream(prompt).await
    }
}
