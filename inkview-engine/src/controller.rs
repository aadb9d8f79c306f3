use crate::engine::GenerationEngine;
use inkview_core::media::ImageFile;
use inkview_core::wizard::{Session, WizardError};
use std::future::Future;

// Shown when a failure reaches the user with no message of its own.
const UNKNOWN_GENERATION_ERROR: &str = "Ocorreu um erro desconhecido ao gerar a imagem.";

/// Owns one wizard run and bridges it to the generation engine.
///
/// Vendor failures never escape `generate`: they are recorded on the
/// session's terminal step instead.
pub struct WizardController {
    session: Session,
    engine: GenerationEngine,
}

impl WizardController {
    pub fn new(engine: GenerationEngine) -> Self {
        Self {
            session: Session::new(),
            engine,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn select_body_photo(&mut self, file: ImageFile) {
        self.session.select_body_photo(file);
    }

    pub fn advance_to_method_choice(&mut self) -> Result<(), WizardError> {
        self.session.advance_to_method_choice()
    }

    pub fn choose_upload_method(&mut self) -> Result<(), WizardError> {
        self.session.choose_upload_method()
    }

    pub fn choose_ai_method(&mut self) -> Result<(), WizardError> {
        self.session.choose_ai_method()
    }

    pub fn select_tattoo_design(&mut self, file: ImageFile) -> Result<(), WizardError> {
        self.session.select_tattoo_design(file)
    }

    pub fn set_tattoo_description(&mut self, text: impl Into<String>) -> Result<(), WizardError> {
        self.session.set_tattoo_description(text)
    }

    pub fn go_back(&mut self) {
        self.session.go_back();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Runs the generation for the current branch.
    ///
    /// `Err` only reports precondition failures, in which case the step is
    /// unchanged and the session already carries the inline message. Once
    /// the pipeline is dispatched, the outcome lands on the terminal step
    /// and the call returns `Ok` even when the vendor failed.
    pub async fn generate(&mut self) -> Result<(), WizardError> {
        self.generate_with_hook(|_stage| async {}).await
    }

    pub async fn generate_with_hook<F, Fut>(&mut self, on_stage: F) -> Result<(), WizardError>
    where
        F: Fn(&'static str) -> Fut,
        Fut: Future<Output = ()>,
    {
        let request = self.session.begin_generation()?;
        let outcome = self
            .engine
            .generate_with_hook(&request, on_stage)
            .await
            .map_err(displayable_failure);
        self.session.complete_generation(outcome);
        Ok(())
    }
}

fn displayable_failure(err: anyhow::Error) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        UNKNOWN_GENERATION_ERROR.to_string()
    } else {
        message
    }
}
