//! The answer pipeline: question + document store -> generated answer.

use crate::generator::TextGenerator;
use crate::prompts;
use campus_core::{build_context, DocumentStore};
use tokio::sync::mpsc;
use tracing::{debug, error};

/// Answers student questions from the loaded documents plus the model's
/// general knowledge.
///
/// Both entry points always return a reply: blank questions get a fixed
/// guidance message without touching the model, and model failures are
/// logged and replaced with a fixed apologetic message.
pub struct Assistant<G> {
    generator: G,
    max_context_chars: usize,
}

impl<G: TextGenerator> Assistant<G> {
    pub fn new(generator: G, max_context_chars: usize) -> Self {
        Self {
            generator,
            max_context_chars,
        }
    }

    /// Answer a question in one shot.
    pub async fn answer(&self, question: &str, store: &DocumentStore) -> String {
        if question.trim().is_empty() {
            return prompts::EMPTY_QUESTION_REPLY.to_string();
        }

        let prompt = self.prompt_for(question, store);

        match self.generator.generate(&prompt).await {
            Ok(text) => text,
            Err(err) => {
                error!("Answer generation failed: {}", err);
                prompts::MODEL_FAILURE_REPLY.to_string()
            }
        }
    }

    /// Answer a question as a stream of cumulative partial answers.
    ///
    /// Each received value is the whole answer so far, so consumers replace
    /// their display with every emission; the last value is the final
    /// answer. Dropping the receiver stops forwarding promptly.
    pub async fn answer_stream(
        &self,
        question: &str,
        store: &DocumentStore,
    ) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(16);

        if question.trim().is_empty() {
            let _ = tx.send(prompts::EMPTY_QUESTION_REPLY.to_string()).await;
            return rx;
        }

        let prompt = self.prompt_for(question, store);

        match self.generator.generate_stream(&prompt).await {
            Ok(mut fragments) => {
                tokio::spawn(async move {
                    let mut answer = String::new();
                    while let Some(fragment) = fragments.recv().await {
                        answer.push_str(&fragment);
                        if tx.send(answer.clone()).await.is_err() {
                            return; // Consumer gone; drop the fragment stream too
                        }
                    }
                });
            }
            Err(err) => {
                error!("Answer generation failed: {}", err);
                let _ = tx.send(prompts::MODEL_FAILURE_REPLY.to_string()).await;
            }
        }

        rx
    }

    /// Select the template by whether any document context is available.
    fn prompt_for(&self, question: &str, store: &DocumentStore) -> String {
        let context = build_context(store, self.max_context_chars);

        if context.is_empty() {
            debug!("No documents loaded; answering from general knowledge");
            prompts::general_prompt(question)
        } else {
            debug!("Grounding answer in {} document(s)", store.len());
            prompts::grounded_prompt(&context, question)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{GeminiError, GeminiResult};
    use async_trait::async_trait;
    use campus_core::{DocumentFormat, LoadedDocument};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Echoes its prompt back, counting invocations.
    struct EchoGenerator {
        calls: AtomicUsize,
    }

    impl EchoGenerator {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, prompt: &str) -> GeminiResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("ECHO {prompt}"))
        }

        async fn generate_stream(&self, prompt: &str) -> GeminiResult<mpsc::Receiver<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let text = format!("ECHO {prompt}");
            let (tx, rx) = mpsc::channel(8);

            tokio::spawn(async move {
                let chars: Vec<char> = text.chars().collect();
                for piece in chars.chunks(7) {
                    let fragment: String = piece.iter().collect();
                    if tx.send(fragment).await.is_err() {
                        return;
                    }
                }
            });

            Ok(rx)
        }
    }

    /// Always fails, as a quota-exhausted backend would.
    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> GeminiResult<String> {
            Err(GeminiError::ApiError {
                status: 429,
                message: "Quota exceeded".to_string(),
            })
        }

        async fn generate_stream(&self, _prompt: &str) -> GeminiResult<mpsc::Receiver<String>> {
            Err(GeminiError::ApiError {
                status: 429,
                message: "Quota exceeded".to_string(),
            })
        }
    }

    fn store_of(docs: &[(&str, &str)]) -> DocumentStore {
        let mut store = DocumentStore::new();
        for (name, content) in docs {
            store.insert(LoadedDocument {
                name: name.to_string(),
                content: content.to_string(),
                format: DocumentFormat::Text,
                source_path: PathBuf::from(format!("{name}.txt")),
            });
        }
        store
    }

    async fn collect(mut rx: mpsc::Receiver<String>) -> Vec<String> {
        let mut values = Vec::new();
        while let Some(value) = rx.recv().await {
            values.push(value);
        }
        values
    }

    #[tokio::test]
    async fn blank_questions_never_reach_the_model() {
        let generator = EchoGenerator::new();
        let assistant = Assistant::new(Arc::clone(&generator), 15000);
        let store = DocumentStore::new();

        assert_eq!(
            assistant.answer("", &store).await,
            prompts::EMPTY_QUESTION_REPLY
        );
        assert_eq!(
            assistant.answer("   ", &store).await,
            prompts::EMPTY_QUESTION_REPLY
        );

        let streamed = collect(assistant.answer_stream("  \t ", &store).await).await;
        assert_eq!(streamed, vec![prompts::EMPTY_QUESTION_REPLY.to_string()]);

        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn documents_select_the_grounded_template() {
        let generator = EchoGenerator::new();
        let assistant = Assistant::new(Arc::clone(&generator), 15000);
        let store = store_of(&[("handbook", "Babcock requires a 2.0 GPA.")]);

        let answer = assistant.answer("What GPA?", &store).await;

        assert!(answer.contains("Babcock University Information:"));
        assert!(answer.contains("=== HANDBOOK INFORMATION ==="));
        assert!(answer.contains("Student Question: What GPA?"));
    }

    #[tokio::test]
    async fn empty_store_selects_the_general_template() {
        let generator = EchoGenerator::new();
        let assistant = Assistant::new(Arc::clone(&generator), 15000);
        let store = DocumentStore::new();

        let answer = assistant.answer("What is X?", &store).await;

        assert!(!answer.contains("Babcock University Information:"));
        assert!(answer.contains("Student Question: What is X?"));
    }

    #[tokio::test]
    async fn stream_grows_monotonically_and_matches_the_answer() {
        let generator = EchoGenerator::new();
        let assistant = Assistant::new(Arc::clone(&generator), 15000);
        let store = DocumentStore::new();

        let streamed = collect(assistant.answer_stream("What is X?", &store).await).await;
        assert!(!streamed.is_empty());

        for pair in streamed.windows(2) {
            assert!(pair[1].starts_with(&pair[0]));
        }

        let full = assistant.answer("What is X?", &store).await;
        assert_eq!(streamed.last().unwrap(), &full);
    }

    #[tokio::test]
    async fn model_failures_become_the_apologetic_reply() {
        let assistant = Assistant::new(FailingGenerator, 15000);
        let store = store_of(&[("handbook", "content")]);

        assert_eq!(
            assistant.answer("What GPA?", &store).await,
            prompts::MODEL_FAILURE_REPLY
        );

        let streamed = collect(assistant.answer_stream("What GPA?", &store).await).await;
        assert_eq!(streamed, vec![prompts::MODEL_FAILURE_REPLY.to_string()]);
    }
}
