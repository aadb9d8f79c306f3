use crate::media::ImageFile;
use serde::{Deserialize, Serialize};

/// Where the tattoo comes from, decided by which branch step was entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TattooSource {
    DesignImage(ImageFile),
    TextDescription(String),
}

/// Transient snapshot handed to the orchestrator; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub body_photo: ImageFile,
    pub source: TattooSource,
}

impl GenerationRequest {
    /// Image parts in the order the prompt-construction call expects: body photo
    /// first, then the tattoo design when one is the source.
    pub fn image_parts(&self) -> Vec<ImageFile> {
        match &self.source {
            TattooSource::DesignImage(design) => vec![self.body_photo.clone(), design.clone()],
            TattooSource::TextDescription(_) => vec![self.body_photo.clone()],
        }
    }
}

// The two instruction templates are deliberate near-duplicates: both demand an ENGLISH
// in-painting prompt that keeps the body photo untouched as background; they differ
// only in how the tattoo is sourced (second image vs. interpolated description).

const DESIGN_IMAGE_INSTRUCTION: &str = r#"Você é um engenheiro de prompts especialista em IA de geração de imagem. Sua tarefa é criar um prompt detalhado e de alta fidelidade em INGLÊS para o modelo Imagen 3. Você receberá duas imagens: a primeira é uma foto de uma parte do corpo e a segunda é um desenho de tatuagem.

Seu prompt gerado DEVE instruir a IA a realizar uma operação de "in-painting" (pintura interna) realista. Isso significa:
1. A imagem final DEVE usar a primeira imagem (a parte do corpo) como fundo original e inalterado.
2. Todos os detalhes da primeira imagem (tom de pele, textura, pelos, iluminação, sombras, ambiente de fundo) devem ser perfeitamente preservados.
3. A tatuagem da segunda imagem deve ser realisticamente colocada na parte do corpo da primeira imagem. O design e as cores da tatuagem devem ser replicados exatamente.
4. A tatuagem deve parecer que está na pele, adaptando-se às curvas e contornos do corpo.
5. O prompt deve descrever claramente a parte do corpo e o design da tatuagem para guiar a IA.

Estrutura de exemplo para sua saída:
"Photorealistic in-painting. The base image is a [detailed description of the body part photo, including lighting and skin]. Realistically apply the tattoo from the second image, which is [detailed description of the tattoo design], onto the specified body part. Do not change the base image, only add the exact tattoo design."

Agora, analise as duas imagens a seguir e gere o prompt perfeito."#;

fn text_description_instruction(description: &str) -> String {
    format!(
        r#"Você é um engenheiro de prompts especialista em IA de geração de imagem. Sua tarefa é criar um prompt detalhado e de alta fidelidade em INGLÊS para o modelo Imagen 3. Você receberá uma imagem (uma foto de uma parte do corpo) e uma descrição em texto de uma tatuagem.

Seu prompt gerado DEVE instruir a IA a realizar uma operação de "in-painting" (pintura interna) realista. Isso significa:
1. A imagem final DEVE usar a imagem fornecida (a parte do corpo) como fundo original e inalterado.
2. Todos os detalhes da imagem (tom de pele, textura, pelos, iluminação, sombras, ambiente de fundo) devem ser perfeitamente preservados.
3. Uma nova tatuagem, baseada na descrição do texto do usuário, deve ser gerada e colocada de forma realista na parte do corpo na imagem.
4. A tatuagem deve parecer que está na pele, adaptando-se às curvas e contornos do corpo.
5. A descrição em texto para a tatuagem é: '{description}'.

Estrutura de exemplo para sua saída:
"Photorealistic in-painting. The base image is a [detailed description of the body part photo, including lighting and skin]. Realistically generate and apply a tattoo described as '{description}' onto the specified body part. Do not change the base image, only add the tattoo."

Agora, analise a imagem a seguir e o prompt do usuário para gerar o prompt perfeito para o Imagen."#
    )
}

/// Builds the instruction for the prompt-construction call. The text variant
/// interpolates the user's description verbatim.
pub fn build_instruction(source: &TattooSource) -> String {
    match source {
        TattooSource::DesignImage(_) => DESIGN_IMAGE_INSTRUCTION.to_string(),
        TattooSource::TextDescription(description) => text_description_instruction(description),
    }
}
