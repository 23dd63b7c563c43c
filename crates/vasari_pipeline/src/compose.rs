//! Stage instruction composition.
//!
//! Pure functions that turn an [`ArticleRequest`] and a pipeline stage into
//! the textual instruction sent to the text backend. No I/O happens here;
//! the same inputs always produce the same instruction, and absent optional
//! fields simply drop their clause.

use vasari_core::{ArticleRequest, ReferenceMaterials};

/// One step of the generation pipeline.
///
/// Stages run strictly in sequence: introduction, `count` body passes,
/// conclusion, references. Each stage maps to exactly one streaming call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Opening section of the article
    Introduction,
    /// One body pass, covering two notional headings
    Body {
        /// Zero-based position of this pass
        index: u32,
        /// Total number of body passes in the run
        count: u32,
    },
    /// Closing section of the article
    Conclusion,
    /// Citation list appended after the conclusion
    References,
}

impl Stage {
    /// The full stage order for a run with `body_count` body passes.
    pub fn sequence(body_count: u32) -> Vec<Stage> {
        let mut stages = Vec::with_capacity(body_count as usize + 3);
        stages.push(Stage::Introduction);
        for index in 0..body_count {
            stages.push(Stage::Body {
                index,
                count: body_count,
            });
        }
        stages.push(Stage::Conclusion);
        stages.push(Stage::References);
        stages
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Introduction => write!(f, "introduction"),
            Stage::Body { index, count } => write!(f, "body {}/{}", index + 1, count),
            Stage::Conclusion => write!(f, "conclusion"),
            Stage::References => write!(f, "references"),
        }
    }
}

/// Compose the instruction text for one stage.
///
/// Reference materials are only woven into the introduction; later stages
/// rely on the conversation context instead of re-sending them.
pub fn compose(
    stage: Stage,
    request: &ArticleRequest,
    materials: Option<&ReferenceMaterials>,
) -> String {
    match stage {
        Stage::Introduction => compose_introduction(request, materials),
        Stage::Body { index, count } => compose_body(request, index, count),
        Stage::Conclusion => compose_conclusion(request),
        Stage::References => compose_references(request),
    }
}

/// Compose the one-shot instruction for the image backend.
///
/// The description is embedded verbatim; the surrounding directive asks
/// for a realistic photographic rendering.
pub fn compose_image_prompt(description: &str) -> String {
    format!(
        "A realistic photograph illustrating the following subject: {description}. \
         Natural lighting, rich detail, no text or watermarks."
    )
}

fn compose_introduction(
    request: &ArticleRequest,
    materials: Option<&ReferenceMaterials>,
) -> String {
    let mut clauses = vec![
        format!(
            "Write the introduction of a long-form article about the following topic: {}.",
            request.description()
        ),
        format!(
            "Structure the article as follows: {}.",
            request.layout_structure()
        ),
        "Respond with markup only and do not include <html>, <head> or <body> wrapper tags. \
         Wrap headings in heading tags and render the heading text in bold through an inline \
         style attribute. Wrap body text in paragraph tags with a regular font weight."
            .to_string(),
    ];

    push_tone_clauses(&mut clauses, request);

    if !request.keywords().is_empty() {
        clauses.push(format!(
            "Work the following keywords into the text, in this order: {}.",
            request.keywords().join(", ")
        ));
    }
    if let Some(cta) = request.call_to_action() {
        clauses.push(format!("Weave in the following call to action: {cta}."));
    }
    if let Some(link) = request.reference_link() {
        clauses.push(format!("Refer the reader to this link: {link}."));
    }
    if let Some(heading) = request.introduction_heading() {
        clauses.push(format!(
            "Use \"{heading}\" as the heading of the introduction."
        ));
    }

    if let Some(materials) = materials {
        if let Some(info) = &materials.info_content {
            clauses.push(format!(
                "Draw on the following background information:\n{info}"
            ));
        }
        if let Some(sample) = &materials.sample_text {
            clauses.push(format!(
                "Match the style of the following sample text:\n{sample}"
            ));
        }
        if let Some(keywords) = &materials.sample_keywords {
            clauses.push(format!("Consider these sample keywords: {keywords}."));
        }
    }

    clauses.join("\n")
}

fn compose_body(request: &ArticleRequest, index: u32, count: u32) -> String {
    let mut clauses = vec![
        format!(
            "Continue the article with body section {} of {}, covering the next two headings \
             of the outline.",
            index + 1,
            count
        ),
        "Do not repeat anything you have already written; pick up where the previous section \
         ended and keep the same markup and styling."
            .to_string(),
    ];

    // Heading override and subheadings apply to the first body pass only.
    if index == 0 {
        if let Some(heading) = request.main_body_heading() {
            clauses.push(format!("Use \"{heading}\" as the heading of this section."));
        }
        if !request.subheadings().is_empty() {
            clauses.push(format!(
                "Cover the following subheadings in order: {}.",
                request.subheadings().join("; ")
            ));
        }
    }

    clauses.join("\n")
}

fn compose_conclusion(request: &ArticleRequest) -> String {
    let mut clauses = vec![
        "Write the conclusion of the article. Do not repeat anything you have already \
         written; keep the same markup and styling."
            .to_string(),
    ];

    if let Some(heading) = request.conclusion_heading() {
        clauses.push(format!(
            "Use \"{heading}\" as the heading of the conclusion."
        ));
    }
    if let Some(cta) = request.call_to_action() {
        clauses.push(format!("Close with the call to action: {cta}."));
    }

    clauses.join("\n")
}

fn compose_references(request: &ArticleRequest) -> String {
    format!(
        "Append a list of references for the article: cite sources with links relevant to \
         {}. Format the list with <ul> and <li> tags, keep the styling of the rest of the \
         article, and do not repeat article content.",
        request.description()
    )
}

fn push_tone_clauses(clauses: &mut Vec<String>, request: &ArticleRequest) {
    if let Some(tone) = request.tone_of_voice() {
        clauses.push(format!("Use a {tone} tone of voice."));
    }
    if let Some(complexity) = request.language_complexity() {
        clauses.push(format!("Keep the language complexity {complexity}."));
    }
    if let Some(vocabulary) = request.vocabulary_level() {
        clauses.push(format!("Use a {vocabulary} vocabulary."));
    }
    if let Some(formality) = request.formality_level() {
        clauses.push(format!("Write with a {formality} level of formality."));
    }
    if let Some(tempo) = request.voice_tempo() {
        clauses.push(format!("Pace the writing at a {tempo} tempo."));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vasari_core::{ArticleLength, HeadingOverrides};

    fn bare_request() -> ArticleRequest {
        ArticleRequest::builder()
            .description("urban beekeeping")
            .article_length(ArticleLength::Six)
            .layout_structure("magazine")
            .build()
            .unwrap()
    }

    #[test]
    fn sequence_orders_stages() {
        let stages = Stage::sequence(2);
        assert_eq!(
            stages,
            vec![
                Stage::Introduction,
                Stage::Body { index: 0, count: 2 },
                Stage::Body { index: 1, count: 2 },
                Stage::Conclusion,
                Stage::References,
            ]
        );
    }

    #[test]
    fn absent_optional_fields_leave_no_clause() {
        let instruction = compose(Stage::Introduction, &bare_request(), None);
        assert!(instruction.contains("urban beekeeping"));
        assert!(instruction.contains("magazine"));
        assert!(!instruction.contains("tone of voice"));
        assert!(!instruction.contains("call to action"));
        assert!(!instruction.contains("keywords"));
        assert!(!instruction.contains("heading of the introduction"));
    }

    #[test]
    fn present_optional_fields_render_their_clause() {
        let request = ArticleRequest::builder()
            .description("urban beekeeping")
            .article_length(ArticleLength::Six)
            .layout_structure("magazine")
            .tone_of_voice("playful")
            .call_to_action("Start your first hive today")
            .keywords(vec!["bees".to_string(), "honey".to_string()])
            .reference_link("https://example.com/hives")
            .build()
            .unwrap();

        let instruction = compose(Stage::Introduction, &request, None);
        assert!(instruction.contains("Use a playful tone of voice."));
        assert!(instruction.contains("Start your first hive today"));
        assert!(instruction.contains("bees, honey"));
        assert!(instruction.contains("https://example.com/hives"));
    }

    #[test]
    fn subheadings_apply_to_first_body_pass_only() {
        let request = ArticleRequest::builder()
            .description("urban beekeeping")
            .article_length(ArticleLength::Six)
            .layout_structure("magazine")
            .headings(HeadingOverrides {
                main_body: Some("Life in the hive".to_string()),
                ..Default::default()
            })
            .subheadings(vec!["Swarming".to_string(), "Winter care".to_string()])
            .build()
            .unwrap();

        let first = compose(Stage::Body { index: 0, count: 2 }, &request, None);
        assert!(first.contains("Life in the hive"));
        assert!(first.contains("Swarming; Winter care"));

        let second = compose(Stage::Body { index: 1, count: 2 }, &request, None);
        assert!(!second.contains("Life in the hive"));
        assert!(!second.contains("Swarming"));
        assert!(second.contains("Do not repeat"));
    }

    #[test]
    fn heading_overrides_land_on_their_own_stage() {
        let request = ArticleRequest::builder()
            .description("urban beekeeping")
            .article_length(ArticleLength::Four)
            .layout_structure("magazine")
            .headings(HeadingOverrides {
                introduction: Some("Why bees".to_string()),
                main_body: Some("The hive".to_string()),
                conclusion: Some("Getting started".to_string()),
            })
            .build()
            .unwrap();

        let intro = compose(Stage::Introduction, &request, None);
        assert!(intro.contains("Why bees"));
        assert!(!intro.contains("The hive"));
        assert!(!intro.contains("Getting started"));

        let conclusion = compose(Stage::Conclusion, &request, None);
        assert!(conclusion.contains("Getting started"));
        assert!(!conclusion.contains("Why bees"));
    }

    #[test]
    fn materials_embed_into_introduction_only() {
        let materials = ReferenceMaterials {
            info_content: Some("Bees pollinate a third of crops.".to_string()),
            sample_text: None,
            sample_keywords: Some("pollination, apiary".to_string()),
        };

        let intro = compose(Stage::Introduction, &bare_request(), Some(&materials));
        assert!(intro.contains("Bees pollinate a third of crops."));
        assert!(intro.contains("pollination, apiary"));

        let body = compose(Stage::Body { index: 0, count: 2 }, &bare_request(), Some(&materials));
        assert!(!body.contains("pollination, apiary"));
    }

    #[test]
    fn references_stage_requests_list_markup() {
        let instruction = compose(Stage::References, &bare_request(), None);
        assert!(instruction.contains("<ul>"));
        assert!(instruction.contains("<li>"));
        assert!(instruction.contains("urban beekeeping"));
    }

    #[test]
    fn image_prompt_embeds_description_verbatim() {
        let prompt = compose_image_prompt("a rooftop apiary in Berlin <spring>");
        assert!(prompt.contains("a rooftop apiary in Berlin <spring>"));
        assert!(prompt.contains("realistic photograph"));
    }
}
