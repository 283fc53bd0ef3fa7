//! Gemini `generateContent` wire format
//!
//! Only the subset of the REST API needed for a single-turn, image + prompt
//! request with a JSON response schema is modelled here. Parsing is kept free
//! of I/O so it can be tested against captured bodies.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use trichoscan_core::prelude::*;
use trichoscan_core::{EncodedImage, HairAnalysis};

/// Instruction sent alongside the image
pub const ANALYSIS_PROMPT: &str = "You are a trichology imaging assistant. \
Analyze this trichoscopy or macro photograph of hair and scalp. \
Score hair density, strand thickness, hydration, scalp health and overall hair health \
on a 0-100 scale where 100 is optimal. \
Name the overall condition in a few words, list the visible issues, \
give practical care recommendations, and write a concise technical summary. \
Respond only with JSON matching the provided schema.";

// ─────────────────────────────────────────────────────────────────────────────
// Request
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Build the request body for one image
pub fn build_request(image: &EncodedImage) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                Part {
                    text: None,
                    inline_data: Some(InlineData {
                        mime_type: image.mime_type().to_string(),
                        data: image.to_base64(),
                    }),
                },
                Part {
                    text: Some(ANALYSIS_PROMPT.to_string()),
                    inline_data: None,
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        },
    }
}

/// JSON schema (Gemini OpenAPI subset) describing [`HairAnalysis`]
pub fn response_schema() -> Value {
    let score = |description: &str| {
        json!({
            "type": "NUMBER",
            "description": description,
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "densityScore": score("Hair density score, 0-100"),
            "thicknessScore": score("Strand thickness score, 0-100"),
            "hydrationScore": score("Hydration score, 0-100"),
            "scalpHealthScore": score("Scalp health score, 0-100"),
            "overallHealthScore": score("Overall hair health score, 0-100"),
            "condition": { "type": "STRING", "description": "Overall condition label" },
            "detectedIssues": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Visible issues, most significant first"
            },
            "recommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Care recommendations in priority order"
            },
            "technicalSummary": { "type": "STRING", "description": "Concise technical diagnosis" }
        },
        "required": [
            "densityScore",
            "thicknessScore",
            "hydrationScore",
            "scalpHealthScore",
            "overallHealthScore",
            "condition",
            "detectedIssues",
            "recommendations",
            "technicalSummary"
        ]
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Response
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Parse a successful response body into an analysis
pub fn parse_response(body: &str) -> Result<HairAnalysis> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| Error::analysis(format!("malformed service response: {}", e)))?;

    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .map(|r| format!("request blocked: {}", r))
            .unwrap_or_else(|| "service returned no candidates".to_string());
        return Err(Error::analysis(reason));
    };

    let text: String = candidate
        .content
        .as_ref()
        .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = match candidate.finish_reason.as_deref() {
            Some(finish) if finish != "STOP" => format!("no output (finish reason {})", finish),
            _ => "response contained no text".to_string(),
        };
        return Err(Error::analysis(reason));
    }

    serde_json::from_str(strip_code_fences(&text))
        .map_err(|e| Error::analysis(format!("malformed analysis JSON: {}", e)))
}

/// Describe a non-2xx response, using the error envelope when present
pub fn describe_error_status(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => {
            let status_name = envelope.error.status.unwrap_or_default();
            if status_name.is_empty() {
                format!("HTTP {}: {}", status, envelope.error.message)
            } else {
                format!("HTTP {} {}: {}", status, status_name, envelope.error.message)
            }
        }
        Err(_) => {
            let snippet: String = body.chars().take(200).collect();
            if snippet.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, snippet.trim())
            }
        }
    }
}

/// Remove a surrounding Markdown code fence (```json ... ```) if present
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. "json") up to the first newline
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use trichoscan_core::encoded_image::test_support;

    const ANALYSIS_JSON: &str = r#"{"densityScore":70,"thicknessScore":64,"hydrationScore":55,"scalpHealthScore":80,"overallHealthScore":82,"condition":"Mild dryness","detectedIssues":["Split ends"],"recommendations":["Weekly hydrating mask","Reduce heat styling"],"technicalSummary":"Normal follicular density."}"#;

    fn wrap_text(text: &str) -> String {
        json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
        .to_string()
    }

    #[test]
    fn test_build_request_shape() {
        let image = EncodedImage::from_bytes(test_support::png(4, 4)).unwrap();
        let body = serde_json::to_value(build_request(&image)).unwrap();

        let parts = &body["contents"][0]["parts"];
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(parts[0]["inlineData"]["mimeType"], "image/png");
        assert_eq!(parts[0]["inlineData"]["data"], image.to_base64());
        assert!(parts[0].get("text").is_none());
        assert_eq!(parts[1]["text"], ANALYSIS_PROMPT);
        assert_eq!(
            body["generationConfig"]["responseMimeType"],
            "application/json"
        );
    }

    #[test]
    fn test_schema_requires_every_field() {
        let schema = response_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 9);
        for field in required {
            let name = field.as_str().unwrap();
            assert!(schema["properties"].get(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn test_parse_response_success() {
        let analysis = parse_response(&wrap_text(ANALYSIS_JSON)).unwrap();
        assert_eq!(analysis.overall_health_score, 82.0);
        assert_eq!(
            analysis.recommendations,
            vec!["Weekly hydrating mask", "Reduce heat styling"]
        );
    }

    #[test]
    fn test_parse_response_joins_split_text_parts() {
        let (head, tail) = ANALYSIS_JSON.split_at(40);
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": head }, { "text": tail }] }
            }]
        })
        .to_string();
        assert!(parse_response(&body).is_ok());
    }

    #[test]
    fn test_parse_response_strips_fences() {
        let fenced = format!("```json\n{}\n```", ANALYSIS_JSON);
        let analysis = parse_response(&wrap_text(&fenced)).unwrap();
        assert_eq!(analysis.condition, "Mild dryness");
    }

    #[test]
    fn test_parse_response_blocked_prompt() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = parse_response(body).unwrap_err();
        assert!(err.to_string().contains("request blocked: SAFETY"));
    }

    #[test]
    fn test_parse_response_no_candidates() {
        let err = parse_response("{}").unwrap_err();
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn test_parse_response_empty_text_reports_finish_reason() {
        let body = r#"{"candidates":[{"content":{"parts":[]},"finishReason":"MAX_TOKENS"}]}"#;
        let err = parse_response(body).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn test_parse_response_malformed_analysis() {
        let err = parse_response(&wrap_text(r#"{"densityScore": "high"}"#)).unwrap_err();
        assert!(matches!(err, Error::AnalysisFailed { .. }));
        assert!(err.to_string().contains("malformed analysis JSON"));
    }

    #[test]
    fn test_parse_response_not_json() {
        let err = parse_response("<html>gateway</html>").unwrap_err();
        assert!(err.to_string().contains("malformed service response"));
    }

    #[test]
    fn test_describe_error_status_with_envelope() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(
            describe_error_status(429, body),
            "HTTP 429 RESOURCE_EXHAUSTED: Quota exceeded"
        );
    }

    #[test]
    fn test_describe_error_status_plain_body() {
        assert_eq!(describe_error_status(502, "Bad gateway"), "HTTP 502: Bad gateway");
        assert_eq!(describe_error_status(500, ""), "HTTP 500");
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```json\n[1]\n```"), "[1]");
    }
}
