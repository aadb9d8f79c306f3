use inkview_core::media::{GeneratedImage, ImageFile};
use inkview_engine::traits::ComposedPrompt;
use inkview_providers::gemini::GeminiApiConfig;

/// [`PromptComposer`](inkview_engine::traits::PromptComposer) backed by the
/// Gemini generateContent endpoint.
#[derive(Debug, Clone)]
pub struct GeminiPromptComposer {
    cfg: GeminiApiConfig,
}

impl GeminiPromptComposer {
    pub fn new(cfg: GeminiApiConfig) -> Self {
        Self { cfg }
    }
}

#[async_trait::async_trait]
impl inkview_engine::traits::PromptComposer for GeminiPromptComposer {
    async fn compose(
        &self,
        model: &str,
        instruction: &str,
        images: &[ImageFile],
    ) -> anyhow::Result<ComposedPrompt> {
        let req = inkview_providers::gemini::build_generate_content_request(
            &self.cfg,
            model,
            instruction,
            images,
        );
        let resp = inkview_providers::runtime::execute(&req).await?;

        if !(200..=299).contains(&resp.status) {
            return Err(anyhow::anyhow!(inkview_providers::parse::vendor_error_message(
                resp.status,
                &resp.body,
            )));
        }

        let text = inkview_providers::parse::parse_generate_content_text(&resp.body)?;
        Ok(ComposedPrompt {
            text,
            provider: "gemini".into(),
            model: model.into(),
        })
    }
}

/// [`ImageGenerator`](inkview_engine::traits::ImageGenerator) backed by the
/// Imagen predict endpoint.
#[derive(Debug, Clone)]
pub struct ImagenImageGenerator {
    cfg: GeminiApiConfig,
}

impl ImagenImageGenerator {
    pub fn new(cfg: GeminiApiConfig) -> Self {
        Self { cfg }
    }
}

#[async_trait::async_trait]
impl inkview_engine::traits::ImageGenerator for ImagenImageGenerator {
    async fn generate_images(
        &self,
        model: &str,
        prompt: &str,
        sample_count: u32,
        output_mime_type: &str,
    ) -> anyhow::Result<Vec<GeneratedImage>> {
        let req = inkview_providers::gemini::build_predict_request(
            &self.cfg,
            model,
            prompt,
            sample_count,
            output_mime_type,
        );
        let resp = inkview_providers::runtime::execute(&req).await?;

        if !(200..=299).contains(&resp.status) {
            return Err(anyhow::anyhow!(inkview_providers::parse::vendor_error_message(
                resp.status,
                &resp.body,
            )));
        }

        inkview_providers::parse::parse_predict_images(&resp.body)
    }
}
