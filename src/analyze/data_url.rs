use crate::analyze::AnalyzeError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::str::FromStr;

/// An image ready for transport: mime type plus raw bytes. On the wire it
/// travels as a single `data:<mime>;base64,<payload>` string inside a
/// JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl EmbeddedImage {
    /// Strict parse of the `data:<mime>;base64,<payload>` shape. Anything
    /// that does not match is rejected here, before it can reach the
    /// external API. Only image mime types are accepted.
    pub fn parse(data_url: &str) -> Result<Self, AnalyzeError> {
        let rest = data_url
            .strip_prefix("data:")
            .ok_or_else(|| AnalyzeError::BadDataUrl("missing data: prefix".into()))?;

        let (mime_str, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| AnalyzeError::BadDataUrl("missing ;base64, separator".into()))?;

        let mime = mime::Mime::from_str(mime_str)
            .map_err(|e| AnalyzeError::BadDataUrl(format!("bad mime type {mime_str:?}: {e}")))?;
        if mime.type_() != mime::IMAGE {
            return Err(AnalyzeError::BadDataUrl(format!(
                "not an image mime type: {mime_str}"
            )));
        }

        if payload.is_empty() {
            return Err(AnalyzeError::BadDataUrl("empty base64 payload".into()));
        }

        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| AnalyzeError::BadDataUrl(format!("base64 decode failed: {e}")))?;

        Ok(Self {
            mime: mime_str.to_string(),
            bytes,
        })
    }

    /// Re-assemble the wire form for the outbound API call.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}
