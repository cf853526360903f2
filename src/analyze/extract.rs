use crate::analyze::GroundingSource;
use serde_json::Value;

/// The upstream response shapes we know how to read. Different SDK layers
/// of the same providers disagree on where the generated text lives, so
/// the dispatch is an explicit enum tried in `SHAPE_ORDER`, not a chain
/// of ad hoc optional lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Top-level `output_text` convenience string.
    OutputText,
    /// Responses API items: `output[].content[]` entries of type
    /// `output_text`.
    OutputItems,
    /// Chat completions: `choices[0].message.content`.
    ChatChoices,
    /// Gemini: `candidates[0].content.parts[].text`.
    Candidates,
}

/// Fixed priority order. First shape that yields text wins.
pub const SHAPE_ORDER: [ResponseShape; 4] = [
    ResponseShape::OutputText,
    ResponseShape::OutputItems,
    ResponseShape::ChatChoices,
    ResponseShape::Candidates,
];

/// Which shape (if any) this response matches.
pub fn classify(response: &Value) -> Option<ResponseShape> {
    SHAPE_ORDER
        .iter()
        .copied()
        .find(|shape| shape_text(*shape, response).is_some())
}

/// Extract a single text string from whatever shape the upstream
/// returned, defaulting to empty.
pub fn extract_text(response: &Value) -> String {
    classify(response)
        .and_then(|shape| shape_text(shape, response))
        .unwrap_or_default()
}

fn shape_text(shape: ResponseShape, response: &Value) -> Option<String> {
    match shape {
        ResponseShape::OutputText => response
            .get("output_text")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string()),

        ResponseShape::OutputItems => {
            let items = response.get("output")?.as_array()?;
            let mut parts = Vec::new();
            for item in items {
                let Some(contents) = item.get("content").and_then(Value::as_array) else {
                    continue;
                };
                for content in contents {
                    if content.get("type").and_then(Value::as_str) == Some("output_text") {
                        if let Some(text) = content.get("text").and_then(Value::as_str) {
                            parts.push(text);
                        }
                    }
                }
            }
            if parts.is_empty() {
                None
            } else {
                Some(parts.concat().trim().to_string())
            }
        }

        ResponseShape::ChatChoices => response
            .get("choices")?
            .get(0)?
            .get("message")?
            .get("content")
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string()),

        ResponseShape::Candidates => {
            let parts = response
                .get("candidates")?
                .get(0)?
                .get("content")?
                .get("parts")?
                .as_array()?;
            let texts: Vec<&str> = parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .collect();
            if texts.is_empty() {
                None
            } else {
                Some(texts.concat().trim().to_string())
            }
        }
    }
}

/// Grounding citations from search-augmented backends. Empty when the
/// response carries none.
pub fn extract_sources(response: &Value) -> Vec<GroundingSource> {
    let Some(chunks) = response
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("groundingMetadata"))
        .and_then(|m| m.get("groundingChunks"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    chunks
        .iter()
        .filter_map(|chunk| {
            let web = chunk.get("web")?;
            Some(GroundingSource {
                title: web.get("title")?.as_str()?.to_string(),
                uri: web.get("uri")?.as_str()?.to_string(),
            })
        })
        .collect()
}
