use async_trait::async_trait;
use inkview_core::media::{GeneratedImage, ImageFile};
use serde::{Deserialize, Serialize};

/// Output of the prompt-construction call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedPrompt {
    pub text: String,
    pub provider: String,
    pub model: String,
}

/// Multimodal text completion used to turn the wizard inputs into a
/// detailed image-generation prompt.
#[async_trait]
pub trait PromptComposer: Send + Sync {
    /// `images` keeps caller order: the body photo first, then the design
    /// image when the upload branch supplied one.
    async fn compose(
        &self,
        model: &str,
        instruction: &str,
        images: &[ImageFile],
    ) -> anyhow::Result<ComposedPrompt>;
}

/// Text-to-image generation.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Returns at most `sample_count` images; an empty list is a valid
    /// vendor response and is decided on by the caller.
    async fn generate_images(
        &self,
        model: &str,
        prompt: &str,
        sample_count: u32,
        output_mime_type: &str,
    ) -> anyhow::Result<Vec<GeneratedImage>>;
}
