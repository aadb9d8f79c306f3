use crate::media::{GeneratedImage, ImageFile};
use crate::prompts::{GenerationRequest, TattooSource};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    SelectBodyPhoto,
    ChooseMethod,
    UploadTattooDesign,
    CreateTattooWithAI,
    Generating,
    Result,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("Por favor, selecione uma foto do local do corpo.")]
    MissingBodyPhoto,
    #[error("Por favor, selecione um design de tatuagem.")]
    MissingTattooDesign,
    #[error("Por favor, descreva a tatuagem que você deseja.")]
    MissingTattooDescription,
    #[error("Etapa de geração inválida.")]
    InvalidGenerationStep,
    #[error("Ação não disponível nesta etapa ({step:?}).")]
    WrongStep { step: WizardStep },
}

/// The single mutable record for one wizard run.
///
/// Created empty, mutated in place by the operations below, discarded wholesale by
/// `reset`. Both tattoo inputs may be populated after back-navigation; the branch
/// step current at generation time decides which one is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    step: WizardStep,
    body_photo: Option<ImageFile>,
    body_photo_preview: Option<String>,
    tattoo_design: Option<ImageFile>,
    tattoo_design_preview: Option<String>,
    tattoo_description: String,
    generated_image: Option<GeneratedImage>,
    last_error: Option<String>,
    in_flight: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectBodyPhoto,
            body_photo: None,
            body_photo_preview: None,
            tattoo_design: None,
            tattoo_design_preview: None,
            tattoo_description: String::new(),
            generated_image: None,
            last_error: None,
            in_flight: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn body_photo(&self) -> Option<&ImageFile> {
        self.body_photo.as_ref()
    }

    pub fn body_photo_preview(&self) -> Option<&str> {
        self.body_photo_preview.as_deref()
    }

    pub fn tattoo_design(&self) -> Option<&ImageFile> {
        self.tattoo_design.as_ref()
    }

    pub fn tattoo_design_preview(&self) -> Option<&str> {
        self.tattoo_design_preview.as_deref()
    }

    pub fn tattoo_description(&self) -> &str {
        &self.tattoo_description
    }

    pub fn generated_image(&self) -> Option<&GeneratedImage> {
        self.generated_image.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// True while a generation is running; a UI uses this to disable its trigger
    /// control. `&mut` receivers already serialize all mutations.
    pub fn is_generating(&self) -> bool {
        self.in_flight
    }

    /// Stores the body photo and its preview. Never advances the wizard; a separate
    /// explicit action does.
    pub fn select_body_photo(&mut self, file: ImageFile) {
        self.body_photo_preview = Some(file.to_data_url());
        self.body_photo = Some(file);
    }

    /// Moves on to method choice once a body photo is present.
    pub fn advance_to_method_choice(&mut self) -> Result<(), WizardError> {
        if self.step != WizardStep::SelectBodyPhoto {
            return Err(WizardError::WrongStep { step: self.step });
        }
        if self.body_photo.is_none() {
            return Err(self.record_error(WizardError::MissingBodyPhoto));
        }
        self.step = WizardStep::ChooseMethod;
        Ok(())
    }

    pub fn choose_upload_method(&mut self) -> Result<(), WizardError> {
        self.enter_branch(WizardStep::UploadTattooDesign)
    }

    pub fn choose_ai_method(&mut self) -> Result<(), WizardError> {
        self.enter_branch(WizardStep::CreateTattooWithAI)
    }

    fn enter_branch(&mut self, branch: WizardStep) -> Result<(), WizardError> {
        if self.step != WizardStep::ChooseMethod {
            return Err(WizardError::WrongStep { step: self.step });
        }
        self.step = branch;
        Ok(())
    }

    pub fn select_tattoo_design(&mut self, file: ImageFile) -> Result<(), WizardError> {
        if self.step != WizardStep::UploadTattooDesign {
            return Err(WizardError::WrongStep { step: self.step });
        }
        self.tattoo_design_preview = Some(file.to_data_url());
        self.tattoo_design = Some(file);
        Ok(())
    }

    pub fn set_tattoo_description(&mut self, text: impl Into<String>) -> Result<(), WizardError> {
        if self.step != WizardStep::CreateTattooWithAI {
            return Err(WizardError::WrongStep { step: self.step });
        }
        self.tattoo_description = text.into();
        Ok(())
    }

    /// Returns to the documented parent step; no-op everywhere else.
    pub fn go_back(&mut self) {
        self.step = match self.step {
            WizardStep::ChooseMethod => WizardStep::SelectBodyPhoto,
            WizardStep::UploadTattooDesign | WizardStep::CreateTattooWithAI => {
                WizardStep::ChooseMethod
            }
            other => other,
        };
    }

    /// Validates the current branch's inputs and enters `Generating`.
    ///
    /// Every precondition is checked before the step changes: on failure the session
    /// stays where it is and the message is recorded for inline display.
    pub fn begin_generation(&mut self) -> Result<GenerationRequest, WizardError> {
        let Some(body_photo) = self.body_photo.clone() else {
            return Err(self.record_error(WizardError::MissingBodyPhoto));
        };

        let source = match self.step {
            WizardStep::UploadTattooDesign => match self.tattoo_design.clone() {
                Some(design) => TattooSource::DesignImage(design),
                None => return Err(self.record_error(WizardError::MissingTattooDesign)),
            },
            WizardStep::CreateTattooWithAI => {
                if self.tattoo_description.trim().is_empty() {
                    return Err(self.record_error(WizardError::MissingTattooDescription));
                }
                TattooSource::TextDescription(self.tattoo_description.clone())
            }
            _ => return Err(self.record_error(WizardError::InvalidGenerationStep)),
        };

        self.last_error = None;
        self.in_flight = true;
        self.step = WizardStep::Generating;
        Ok(GenerationRequest { body_photo, source })
    }

    /// Records the outcome and lands on the terminal step regardless of it. The
    /// terminal view tells success from failure by the presence of an error message,
    /// not by a distinct step.
    pub fn complete_generation(&mut self, outcome: Result<GeneratedImage, String>) {
        match outcome {
            Ok(image) => {
                self.generated_image = Some(image);
                self.last_error = None;
            }
            Err(message) => {
                self.generated_image = None;
                self.last_error = Some(message);
            }
        }
        self.in_flight = false;
        self.step = WizardStep::Result;
    }

    /// Discards everything and starts over.
    pub fn reset(&mut self) {
        *self = Session::new();
    }

    fn record_error(&mut self, err: WizardError) -> WizardError {
        self.last_error = Some(err.to_string());
        err
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
