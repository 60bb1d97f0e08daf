//! Prompt template and fixed sampling parameters.

/// Instructions placed in front of every question
pub const INSTRUCTIONS: &str = "You are a helpful AI assistant. Please provide a clear, \
well-structured, and insightful answer to the following question. Use formatting like \
bullet points or numbered lists if it helps clarity.";

pub const TEMPERATURE: f32 = 0.7;
pub const TOP_P: f32 = 0.95;

/// Embed the user's question into the instructional template
pub fn build_prompt(question: &str) -> String {
    format!("{INSTRUCTIONS}\n\nQuestion: {question}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_appends_question() {
        let prompt = build_prompt("What is 2+2?");
        assert!(prompt.starts_with("You are a helpful AI assistant. Please provide a clear, well-structured"));
        assert!(prompt.ends_with("if it helps clarity.\n\nQuestion: What is 2+2?"));
    }

    #[test]
    fn test_build_prompt_keeps_question_verbatim() {
        let question = "  line one\nline two  ";
        assert!(build_prompt(question).ends_with(&format!("Question: {question}")));
    }
}
