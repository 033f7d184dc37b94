//! Prompt templates for the answer pipeline.

/// Reply for blank questions; the model is never invoked for these.
pub const EMPTY_QUESTION_REPLY: &str =
    "Please ask a question about Babcock University or any related topic.";

/// Reply when the model call fails; the underlying error is logged,
/// never shown to the student.
pub const MODEL_FAILURE_REPLY: &str = "I apologize, but I encountered an error while processing your question. Please try again or contact support if the issue persists.";

/// Prompt used when document context is available.
pub fn grounded_prompt(context: &str, question: &str) -> String {
    format!(
        r#"You are an intelligent assistant for Babcock University, a prestigious Seventh-day Adventist institution in Nigeria. You have access to comprehensive university information and general knowledge.

Babcock University Information:
{context}

Student Question: {question}

Instructions:
- Provide helpful, accurate answers that reflect Babcock University's excellence and values
- For university-specific questions, use the provided information
- For general academic topics or any topic (except vulgar or potentially dangerous topic), integrate your broader knowledge seamlessly
- Maintain a professional, supportive tone appropriate for a university setting
- Be comprehensive yet concise in your responses

Answer:"#
    )
}

/// Prompt used when no documents are loaded.
pub fn general_prompt(question: &str) -> String {
    format!(
        r#"You are an intelligent assistant for Babcock University, a prestigious Seventh-day Adventist institution in Nigeria.

Student Question: {question}

Please provide a helpful and accurate response using your knowledge about universities and academic topics.

Answer:"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grounded_prompt_embeds_context_and_question() {
        let prompt = grounded_prompt("=== HANDBOOK INFORMATION ===\nGPA rules", "What GPA?");

        assert!(prompt.contains("Babcock University Information:"));
        assert!(prompt.contains("=== HANDBOOK INFORMATION ==="));
        assert!(prompt.contains("Student Question: What GPA?"));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn general_prompt_carries_no_context_block() {
        let prompt = general_prompt("What is a credit unit?");

        assert!(!prompt.contains("Babcock University Information:"));
        assert!(prompt.contains("Student Question: What is a credit unit?"));
        assert!(prompt.ends_with("Answer:"));
    }
}
