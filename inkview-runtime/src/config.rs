use inkview_providers::gemini::{DEFAULT_API_BASE_URL, GeminiApiConfig};

pub const DEFAULT_PROMPT_MODEL: &str = "gemini-2.5-flash-preview-04-17";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-3.0-generate-002";

/// Vendor settings resolved from the process environment.
#[derive(Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub api_key: String,
    pub prompt_model: String,
    pub image_model: String,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &"[REDACTED]")
            .field("prompt_model", &self.prompt_model)
            .field("image_model", &self.image_model)
            .finish()
    }
}

impl Settings {
    pub fn api_config(&self) -> GeminiApiConfig {
        GeminiApiConfig {
            base_url: self.api_base_url.clone(),
            api_key: self.api_key.clone(),
        }
    }
}

/// Reads `GEMINI_API_KEY` (required), `GEMINI_API_BASE`,
/// `INKVIEW_PROMPT_MODEL` and `INKVIEW_IMAGE_MODEL`.
pub fn load_settings() -> anyhow::Result<Settings> {
    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    if api_key.trim().is_empty() {
        return Err(anyhow::anyhow!("GEMINI_API_KEY não está configurada"));
    }

    Ok(Settings {
        api_base_url: std::env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.into()),
        api_key,
        prompt_model: std::env::var("INKVIEW_PROMPT_MODEL")
            .unwrap_or_else(|_| DEFAULT_PROMPT_MODEL.into()),
        image_model: std::env::var("INKVIEW_IMAGE_MODEL")
            .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.into()),
    })
}
