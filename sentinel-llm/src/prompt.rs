//! Prompt template for incident summary synthesis.

/// Build the analysis prompt handed to the synthesis provider.
///
/// The template frames the model as a SOC analyst and pins the answer to
/// the retrieved log context, including the no-results sentinel when the
/// search matched nothing.
pub fn build_analysis_prompt(query: &str, log_context: &str) -> String {
    format!(
        "You are a senior SOC analyst. Your task is to analyze the following log entries \
         and provide a concise summary for a security incident report.\n\
         Based on the user's query and the retrieved logs, answer the query and summarize \
         the key findings. Be direct and factual.\n\n\
         USER QUERY: \"{query}\"\n\n\
         RETRIEVED LOGS:\n{log_context}\n\n\
         SUMMARY:\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_query_and_context() {
        let prompt = build_analysis_prompt(
            "failed logins from 10.0.0.5",
            "- auth failure for root (IP: 10.0.0.5)",
        );
        assert!(prompt.contains("USER QUERY: \"failed logins from 10.0.0.5\""));
        assert!(prompt.contains("- auth failure for root (IP: 10.0.0.5)"));
        assert!(prompt.contains("SOC analyst"));
    }

    #[test]
    fn test_prompt_carries_no_results_sentinel() {
        let prompt = build_analysis_prompt("gibberish", crate::NO_RESULTS_SENTINEL);
        assert!(prompt.contains(crate::NO_RESULTS_SENTINEL));
    }
}
