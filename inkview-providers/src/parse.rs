use anyhow::{Context, anyhow};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use inkview_core::media::GeneratedImage;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Text of the first candidate, all of its text parts concatenated.
pub fn parse_generate_content_text(body: &[u8]) -> anyhow::Result<String> {
    let resp: GenerateContentResponse =
        serde_json::from_slice(body).context("decode generateContent JSON")?;
    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| content.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        return Err(anyhow!("no text in prompt-construction response"));
    }
    Ok(text)
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

/// Images of a `predict` response, in order. An empty prediction list is not a
/// transport error; the caller decides what zero images means.
pub fn parse_predict_images(body: &[u8]) -> anyhow::Result<Vec<GeneratedImage>> {
    let resp: PredictResponse = serde_json::from_slice(body).context("decode predict JSON")?;

    let mut images = Vec::with_capacity(resp.predictions.len());
    for prediction in resp.predictions {
        // Some predictions carry only safety metadata; skip those.
        let Some(encoded) = prediction.bytes_base64_encoded else {
            continue;
        };
        let bytes = BASE64
            .decode(encoded.as_bytes())
            .context("decode prediction image base64")?;
        images.push(GeneratedImage {
            bytes,
            mime_type: prediction.mime_type.unwrap_or_else(|| "image/jpeg".into()),
        });
    }
    Ok(images)
}

#[derive(Debug, Deserialize)]
struct VendorErrorResponse {
    error: Option<VendorError>,
}

#[derive(Debug, Deserialize)]
struct VendorError {
    message: Option<String>,
}

/// Human-readable reason for a non-2xx vendor response, falling back to the raw body.
pub fn vendor_error_message(status: u16, body: &[u8]) -> String {
    let detail = serde_json::from_slice::<VendorErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());
    format!("vendor API error (status {status}): {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_candidate_text_parts_in_order() {
        let body = br#"{"candidates":[{"content":{"parts":[{"text":"Photorealistic "},{"text":"in-painting."}]}}]}"#;
        assert_eq!(
            parse_generate_content_text(body).unwrap(),
            "Photorealistic in-painting."
        );
    }

    #[test]
    fn missing_candidate_text_errors() {
        assert!(parse_generate_content_text(br#"{"candidates":[]}"#).is_err());
        assert!(parse_generate_content_text(br#"{}"#).is_err());
        assert!(
            parse_generate_content_text(br#"{"candidates":[{"content":{"parts":[]}}]}"#).is_err()
        );
    }

    #[test]
    fn parses_predictions_with_default_mime() {
        let body = br#"{"predictions":[{"bytesBase64Encoded":"AQID"},{"bytesBase64Encoded":"BAU=","mimeType":"image/png"}]}"#;
        let images = parse_predict_images(body).unwrap();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].bytes, vec![1, 2, 3]);
        assert_eq!(images[0].mime_type, "image/jpeg");
        assert_eq!(images[1].bytes, vec![4, 5]);
        assert_eq!(images[1].mime_type, "image/png");
    }

    #[test]
    fn empty_prediction_list_is_ok() {
        let images = parse_predict_images(br#"{"predictions":[]}"#).unwrap();
        assert!(images.is_empty());
        let images = parse_predict_images(br#"{}"#).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn metadata_only_predictions_are_skipped() {
        let body = br#"{"predictions":[{"safetyAttributes":{"blocked":true}},{"bytesBase64Encoded":"AQID"}]}"#;
        let images = parse_predict_images(body).unwrap();
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn vendor_error_prefers_structured_message() {
        let body = br#"{"error":{"code":429,"message":"Quota exceeded"}}"#;
        let msg = vendor_error_message(429, body);
        assert!(msg.contains("status 429"));
        assert!(msg.contains("Quota exceeded"));
    }

    #[test]
    fn vendor_error_falls_back_to_raw_body() {
        let msg = vendor_error_message(503, b"upstream unavailable");
        assert!(msg.contains("status 503"));
        assert!(msg.contains("upstream unavailable"));
    }
}
