//! Prompt builders for the AI assist features.

use crate::assist::text::{RewriteAction, RewriteTarget};

pub fn compatibility_prompt(document_json: &str, job_description: &str) -> String {
    format!(
        r#"Analyze the following CV data against the provided job description.

Return a JSON object with exactly these fields:
- "score": a number from 0 to 100 representing how well the CV matches the job description
- "suggestions": an array of actionable suggestions to improve the CV for this specific job
- "keyword_match": an object with "matched" (keywords from the job description found in the CV)
  and "missing" (important keywords from the job description that are missing from the CV),
  both arrays of strings

CV Data:
{document_json}

Job Description:
{job_description}"#
    )
}

pub fn rewrite_prompt(action: RewriteAction, target: RewriteTarget, text: &str) -> String {
    let context = target.context_label();
    let instruction = match action {
        RewriteAction::Expand => format!(
            "Expand on the following {context}, adding more professional detail, metrics, and context. Keep the tone professional."
        ),
        RewriteAction::Shorten => format!(
            "Shorten the following {context} to be more concise and punchy, while retaining the key information and impact."
        ),
        RewriteAction::Rephrase => format!(
            "Rephrase the following paragraph to sound more professional and impactful for a {context}. Focus on action verbs and achievements."
        ),
    };
    format!("{instruction}\n\nParagraph:\n\"{text}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_prompt_names_the_context() {
        let prompt = rewrite_prompt(
            RewriteAction::Shorten,
            RewriteTarget::ExperienceDescription { index: 2 },
            "Built things.",
        );
        assert!(prompt.starts_with("Shorten the following CV work experience description"));
        assert!(prompt.ends_with("Paragraph:\n\"Built things.\""));

        let prompt = rewrite_prompt(RewriteAction::Rephrase, RewriteTarget::Summary, "Hi");
        assert!(prompt.contains("for a CV summary."));
    }

    #[test]
    fn test_compatibility_prompt_embeds_inputs() {
        let prompt = compatibility_prompt("{\"summary\":\"x\"}", "Rust engineer");
        assert!(prompt.contains("{\"summary\":\"x\"}"));
        assert!(prompt.ends_with("Rust engineer"));
        assert!(prompt.contains("\"keyword_match\""));
    }
}
