use inkview_core::media::DOWNLOAD_FILE_NAME;
use inkview_engine::controller::WizardController;
use inkview_engine::engine::{EngineConfig, GenerationEngine};
use inkview_runtime::config::load_settings;
use inkview_runtime::gemini::{GeminiPromptComposer, ImagenImageGenerator};
use inkview_runtime::media::read_image_file;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Walks the whole wizard from environment inputs:
    //   INKVIEW_BODY_PHOTO     path to the body photo (required)
    //   INKVIEW_TATTOO_DESIGN  path to a design image, or
    //   INKVIEW_TATTOO_PROMPT  text description of the tattoo
    //   INKVIEW_OUTPUT         where the JPEG lands (default minha-tatuagem-ia.jpg)
    let settings = load_settings()?;

    let body_photo_path = std::env::var("INKVIEW_BODY_PHOTO")
        .map_err(|_| anyhow::anyhow!("INKVIEW_BODY_PHOTO is not set"))?;
    let design_path = std::env::var("INKVIEW_TATTOO_DESIGN").ok();
    let description = std::env::var("INKVIEW_TATTOO_PROMPT").ok();
    let output = std::env::var("INKVIEW_OUTPUT").unwrap_or_else(|_| DOWNLOAD_FILE_NAME.into());

    let api = settings.api_config();
    let engine = GenerationEngine::new(
        EngineConfig {
            prompt_model: settings.prompt_model.clone(),
            image_model: settings.image_model.clone(),
        },
        Arc::new(GeminiPromptComposer::new(api.clone())),
        Arc::new(ImagenImageGenerator::new(api)),
    );
    let mut controller = WizardController::new(engine);

    controller.select_body_photo(read_image_file(&body_photo_path).await?);
    controller.advance_to_method_choice()?;

    match (design_path, description) {
        (Some(path), None) => {
            controller.choose_upload_method()?;
            controller.select_tattoo_design(read_image_file(&path).await?)?;
        }
        (None, Some(text)) => {
            controller.choose_ai_method()?;
            controller.set_tattoo_description(text)?;
        }
        (Some(_), Some(_)) => {
            return Err(anyhow::anyhow!(
                "set only one of INKVIEW_TATTOO_DESIGN and INKVIEW_TATTOO_PROMPT"
            ));
        }
        (None, None) => {
            return Err(anyhow::anyhow!(
                "set INKVIEW_TATTOO_DESIGN or INKVIEW_TATTOO_PROMPT"
            ));
        }
    }

    controller
        .generate_with_hook(|stage| async move {
            println!("stage={stage}");
        })
        .await?;

    let session = controller.session();
    match session.generated_image() {
        Some(image) => {
            tokio::fs::write(&output, &image.bytes).await?;
            println!("saved={output}");
            Ok(())
        }
        None => {
            let message = session
                .last_error()
                .unwrap_or("Ocorreu um erro desconhecido ao gerar a imagem.");
            Err(anyhow::anyhow!("{message}"))
        }
    }
}
