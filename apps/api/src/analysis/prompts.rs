// All LLM prompt constants for the Analysis module.
// All provider calls go through llm_client — no direct API calls here.

/// System prompt for bias analysis — enforces JSON-only output.
pub const ANALYSIS_SYSTEM: &str =
    "You are an expert cultural-bias auditor for the Indian employment market. \
    You identify gender, regional, caste/community, and language bias in resumes \
    and suggest neutral rewrites. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Analysis prompt template. Replace `{resume_text}` before sending.
///
/// The schema block below is the contract the validator enforces — field
/// names, the closed category and severity sets, and the 0–10 score range
/// must stay in sync with `analysis::models` and `analysis::validator`.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Audit the following resume for culturally-specific hiring bias relevant to the Indian job market: gendered language, regional or city-tier markers, caste or community signals, and language/mother-tongue markers.

Return a JSON object with this EXACT schema (no extra fields):
{
  "fairnessScore": 7,
  "summary": "One short paragraph summarizing the overall bias profile.",
  "biases": [
    {
      "category": "Gender",
      "severity": "High",
      "originalText": "the exact passage quoted from the resume",
      "reason": "why this passage is likely to trigger biased evaluation",
      "suggestion": "a neutral replacement for the passage"
    }
  ],
  "rewrittenResume": "The full resume text rewritten with all flagged passages neutralized.",
  "counterfactuals": [
    {
      "variable": "Candidate name",
      "original": "Priya Kumari",
      "simulated": "P. Sharma",
      "impact": "narrative description of the projected perception shift"
    }
  ]
}

Rules:

CATEGORY (pick exactly one per issue): "Gender", "Region", "Caste/Community", "Language", "Other".
SEVERITY (pick exactly one per issue): "Low", "Medium", "High".
fairnessScore: an INTEGER from 0 to 10, where 10 means no detectable bias.

- Quote `originalText` verbatim from the resume wherever possible.
- If the resume contains no detectable bias, return an empty `biases` array and a high fairnessScore — do NOT invent issues.
- `rewrittenResume` must preserve all factual content; neutralize only the biased framing.
- Provide 2–4 counterfactual scenarios swapping one demographic-coded attribute each (a name, a location marker, a community signal).

RESUME:
{resume_text}"#;

/// Builds the analysis prompt. Caller guarantees `resume_text` is non-empty
/// and trimmed (enforced by the analyzer before any provider call).
pub fn build_analysis_prompt(resume_text: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_verbatim() {
        let resume = "Priya Kumari, Software Engineer from Patna.";
        let prompt = build_analysis_prompt(resume);
        assert!(prompt.contains(resume));
        assert!(!prompt.contains("{resume_text}"));
    }

    #[test]
    fn test_prompt_enumerates_closed_sets() {
        let prompt = build_analysis_prompt("x");
        for cat in ["\"Gender\"", "\"Region\"", "\"Caste/Community\"", "\"Language\"", "\"Other\""]
        {
            assert!(prompt.contains(cat), "missing category {cat}");
        }
        for sev in ["\"Low\"", "\"Medium\"", "\"High\""] {
            assert!(prompt.contains(sev), "missing severity {sev}");
        }
        assert!(prompt.contains("0 to 10"));
    }

    #[test]
    fn test_prompt_names_every_required_field() {
        let prompt = build_analysis_prompt("x");
        for field in [
            "fairnessScore",
            "summary",
            "biases",
            "rewrittenResume",
            "counterfactuals",
            "originalText",
            "suggestion",
        ] {
            assert!(prompt.contains(field), "missing field {field}");
        }
    }
}
