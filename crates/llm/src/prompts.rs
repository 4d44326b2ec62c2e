//! Prompt templates for chunk summaries and the final title/description

/// Upper bound on the synthesized description, in characters
pub const MAX_DESCRIPTION_LENGTH: usize = 700;

/// Prompt for summarizing a single chunk within `budget` characters
pub fn chunk_prompt(chunk: &str, budget: usize) -> String {
    format!(
        "I want you to generate a summary for the following text.\n\
         Make sure that the summary is in the same language as the text. \
         Capture the whole concept and the main idea being presented, \
         so that the summary reflects that concept.\n\
         ---\n{}\n---\n\
         Please make sure that the summary is no longer than {} characters!",
        chunk, budget
    )
}

/// Prompt asking for a JSON title/description over the joined chunk summaries
pub fn synthesis_prompt(summaries: &str) -> String {
    format!(
        "Generate a neutral and concise title and a detailed description for the transcript below. \
         The description must not be longer than {} characters.\n\
         The title and description must be derived solely from the content of the transcript \
         and must be written in the same language as the transcript.\n\
         Respond with a single JSON object and nothing else, without any markdown formatting. \
         Example response: {{\"title\": \"identified title\", \"description\": \"identified description\"}}\n\n\
         The transcript is:\n\n{}",
        MAX_DESCRIPTION_LENGTH, summaries
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_prompt_embeds_text_and_budget() {
        let prompt = chunk_prompt("the quick brown fox", 1333);
        assert!(prompt.contains("the quick brown fox"));
        assert!(prompt.contains("no longer than 1333 characters"));
    }

    #[test]
    fn test_synthesis_prompt_requests_json() {
        let prompt = synthesis_prompt("S1 S2 S3");
        assert!(prompt.ends_with("S1 S2 S3"));
        assert!(prompt.contains("\"title\""));
        assert!(prompt.contains("\"description\""));
        assert!(prompt.contains(&MAX_DESCRIPTION_LENGTH.to_string()));
    }
}
