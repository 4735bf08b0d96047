//! JSON bodies of the `generateContent` endpoint.

use serde::{Deserialize, Serialize};

use crate::{GeneratedImage, Source};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateRequest<'a> {
    pub contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl<'a> GenerateRequest<'a> {
    pub fn user(text: &'a str) -> Self {
        Self {
            contents: vec![Content::user(text)],
            system_instruction: None,
            tools: Vec::new(),
            generation_config: None,
        }
    }

    pub fn system(mut self, text: &'a str) -> Self {
        self.system_instruction = Some(Content {
            role: None,
            parts: vec![TextPart { text }],
        });
        self
    }

    pub fn with_search(mut self) -> Self {
        self.tools.push(Tool::default());
        self
    }

    pub fn thinking(mut self, budget: u32) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .thinking_config = Some(ThinkingConfig {
            thinking_budget: budget,
        });
        self
    }

    pub fn image(mut self, size: &'static str) -> Self {
        self.generation_config
            .get_or_insert_with(GenerationConfig::default)
            .image_config = Some(ImageConfig {
            image_size: size,
            aspect_ratio: "1:1",
        });
        self
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    pub parts: Vec<TextPart<'a>>,
}

impl<'a> Content<'a> {
    fn user(text: &'a str) -> Self {
        Self {
            role: Some("user"),
            parts: vec![TextPart { text }],
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TextPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct GoogleSearch {}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThinkingConfig {
    pub thinking_budget: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageConfig {
    pub image_size: &'static str,
    pub aspect_ratio: &'static str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub inline_data: Option<InlineData>,
    #[serde(default)]
    pub thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GroundingMetadata {
    #[serde(default)]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GroundingChunk {
    #[serde(default)]
    pub web: Option<WebChunk>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WebChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
}

impl GenerateResponse {
    fn parts(&self) -> &[Part] {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| content.parts.as_slice())
            .unwrap_or_default()
    }

    /// Concatenated answer text of the first candidate, thoughts excluded.
    pub fn text(&self) -> String {
        self.parts()
            .iter()
            .filter(|part| !part.thought)
            .filter_map(|part| part.text.as_deref())
            .collect()
    }

    /// Web sources of the first candidate. Chunks without a uri are dropped.
    pub fn sources(&self) -> Vec<Source> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .filter_map(|web| {
                        let uri = web.uri.clone()?;
                        Some(Source {
                            title: web.title.clone().unwrap_or_default(),
                            uri,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn first_image(&self) -> Option<GeneratedImage> {
        self.parts()
            .iter()
            .find_map(|part| part.inline_data.as_ref())
            .map(|inline| GeneratedImage {
                mime_type: inline.mime_type.clone(),
                data: inline.data.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn short_question_body() {
        let request = GenerateRequest::user("what is yolo?").system("be brief");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "what is yolo?" }] }],
                "systemInstruction": { "parts": [{ "text": "be brief" }] }
            })
        );
    }

    #[test]
    fn search_thinking_and_image_options() {
        let request = GenerateRequest::user("q")
            .with_search()
            .thinking(32768)
            .image("2K");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{ "role": "user", "parts": [{ "text": "q" }] }],
                "tools": [{ "google_search": {} }],
                "generationConfig": {
                    "thinkingConfig": { "thinkingBudget": 32768 },
                    "imageConfig": { "imageSize": "2K", "aspectRatio": "1:1" }
                }
            })
        );
    }

    #[test]
    fn text_skips_thoughts_and_images() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "pondering", "thought": true },
                        { "text": "Pull Shark, " },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } },
                        { "text": "YOLO" }
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(response.text(), "Pull Shark, YOLO");
        let image = response.first_image().unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data, "AAAA");
    }

    #[test]
    fn sources_drop_chunks_without_uri() {
        let response: GenerateResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "found" }] },
                "groundingMetadata": {
                    "groundingChunks": [
                        { "web": { "uri": "https://docs.github.com", "title": "Docs" } },
                        { "web": { "title": "no link" } },
                        { "retrievedContext": {} },
                        { "web": { "uri": "https://github.blog" } }
                    ]
                }
            }]
        }))
        .unwrap();

        assert_eq!(
            response.sources(),
            vec![
                Source {
                    uri: "https://docs.github.com".to_owned(),
                    title: "Docs".to_owned(),
                },
                Source {
                    uri: "https://github.blog".to_owned(),
                    title: String::new(),
                },
            ]
        );
    }

    #[test]
    fn empty_response_has_nothing() {
        let response: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert_eq!(response.text(), "");
        assert!(response.sources().is_empty());
        assert!(response.first_image().is_none());
    }
}
