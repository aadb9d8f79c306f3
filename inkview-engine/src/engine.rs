use crate::traits::{ImageGenerator, PromptComposer};
use inkview_core::media::GeneratedImage;
use inkview_core::prompts::{GenerationRequest, build_instruction};
use inkview_core::text::clean_composed_prompt;
use std::future::Future;
use std::sync::Arc;
use thiserror::Error;

pub const STAGE_COMPOSING_PROMPT: &str = "composing-prompt";
pub const STAGE_RENDERING_IMAGE: &str = "rendering-image";

// The wizard previews one result at a time, always as JPEG.
const SAMPLE_COUNT: u32 = 1;
const OUTPUT_MIME_TYPE: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("A IA não conseguiu gerar uma imagem.")]
    NoImageGenerated,
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub prompt_model: String,
    pub image_model: String,
}

/// Two-stage generation pipeline: compose a prompt from the wizard inputs,
/// then render a single image from it.
pub struct GenerationEngine {
    cfg: EngineConfig,
    composer: Arc<dyn PromptComposer>,
    generator: Arc<dyn ImageGenerator>,
}

impl GenerationEngine {
    pub fn new(
        cfg: EngineConfig,
        composer: Arc<dyn PromptComposer>,
        generator: Arc<dyn ImageGenerator>,
    ) -> Self {
        Self {
            cfg,
            composer,
            generator,
        }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> anyhow::Result<GeneratedImage> {
        self.generate_with_hook(request, |_stage| async {}).await
    }

    /// Same as `generate`, but reports the active stage as the pipeline
    /// progresses. The hook must be fast; the pipeline awaits it inline.
    pub async fn generate_with_hook<F, Fut>(
        &self,
        request: &GenerationRequest,
        on_stage: F,
    ) -> anyhow::Result<GeneratedImage>
    where
        F: Fn(&'static str) -> Fut,
        Fut: Future<Output = ()>,
    {
        on_stage(STAGE_COMPOSING_PROMPT).await;
        let instruction = build_instruction(&request.source);
        let images = request.image_parts();
        let composed = self
            .composer
            .compose(&self.cfg.prompt_model, &instruction, &images)
            .await?;
        let prompt = clean_composed_prompt(&composed.text);

        // The render call must only start once the prompt is in hand.
        on_stage(STAGE_RENDERING_IMAGE).await;
        let rendered = self
            .generator
            .generate_images(&self.cfg.image_model, &prompt, SAMPLE_COUNT, OUTPUT_MIME_TYPE)
            .await?;

        rendered
            .into_iter()
            .next()
            .ok_or_else(|| EngineError::NoImageGenerated.into())
    }
}
