//! Prompt templates.

use crate::Tone;

/// Prompt for the full eBook body.
///
/// Fixed structure: H1 title, introduction, three H2 chapters, conclusion,
/// all in markdown.
pub fn ebook_prompt(topic: &str, tone: Tone) -> String {
    format!(
        "Aja como um escritor profissional de best-sellers e especialista em {topic}.\n\
         Escreva um mini-eBook completo sobre o tema: \"{topic}\".\n\
         Tom de voz: {tone}.\n\
         \n\
         Estrutura obrigatória (use Markdown para formatar):\n\
         1. Título Impactante (H1)\n\
         2. Introdução envolvente (explicando o problema e a solução)\n\
         3. 3 Capítulos principais (H2) com conteúdo prático e detalhado.\n\
         4. Conclusão inspiradora.\n\
         \n\
         O conteúdo deve ser original, educativo e formatado perfeitamente para leitura.\n\
         Não inclua notas do autor, apenas o conteúdo do livro.\n",
        tone = tone.label(),
    )
}

/// Prompt asking for three short cover ideas.
pub fn cover_ideas_prompt(topic: &str) -> String {
    format!(
        "Dê 3 ideias curtas e visuais para uma capa de eBook sobre: \"{topic}\". \
         Retorne apenas uma lista simples."
    )
}
