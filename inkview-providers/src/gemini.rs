use crate::request::{Body, HttpRequest};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use inkview_core::media::ImageFile;
use serde_json::json;

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, PartialEq, Eq)]
pub struct GeminiApiConfig {
    pub base_url: String,
    pub api_key: String,
}

impl std::fmt::Debug for GeminiApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiApiConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// `generateContent` request: one leading instruction part followed by the image
/// parts in order. Thinking is budgeted to zero; the wizard's first stage is
/// latency-bound.
pub fn build_generate_content_request(
    cfg: &GeminiApiConfig,
    model: &str,
    instruction: &str,
    images: &[ImageFile],
) -> HttpRequest {
    let mut parts = vec![json!({ "text": instruction })];
    for image in images {
        parts.push(json!({
            "inlineData": {
                "mimeType": image.mime_type,
                "data": BASE64.encode(&image.bytes),
            }
        }));
    }

    let payload = json!({
        "contents": [{ "parts": parts }],
        "generationConfig": { "thinkingConfig": { "thinkingBudget": 0 } },
    });

    HttpRequest {
        method: "POST".into(),
        url: model_url(&cfg.base_url, model, "generateContent"),
        headers: default_headers(cfg),
        body: Body::Json(payload.to_string()),
    }
}

/// `predict` request for the image model.
pub fn build_predict_request(
    cfg: &GeminiApiConfig,
    model: &str,
    prompt: &str,
    sample_count: u32,
    output_mime_type: &str,
) -> HttpRequest {
    let payload = json!({
        "instances": [{ "prompt": prompt }],
        "parameters": {
            "sampleCount": sample_count,
            "outputMimeType": output_mime_type,
        },
    });

    HttpRequest {
        method: "POST".into(),
        url: model_url(&cfg.base_url, model, "predict"),
        headers: default_headers(cfg),
        body: Body::Json(payload.to_string()),
    }
}

fn default_headers(cfg: &GeminiApiConfig) -> Vec<(String, String)> {
    vec![
        ("Content-Type".into(), "application/json".into()),
        ("x-goog-api-key".into(), cfg.api_key.clone()),
    ]
}

fn model_url(base: &str, model: &str, verb: &str) -> String {
    format!("{}/models/{}:{}", base.trim_end_matches('/'), model, verb)
}
