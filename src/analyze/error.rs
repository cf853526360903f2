use std::error::Error;
use std::fmt;

/// Every way one analyze request can fail. Each variant maps to exactly
/// one HTTP status and one JSON error body (see `responses::json`), so
/// the client can tell the failure kinds apart.
#[derive(Debug)]
pub enum AnalyzeError {
    /// Anything but POST.
    MethodNotAllowed,
    /// Body unreadable, too large, or not a JSON object.
    BadBody(String),
    /// No usable image field in the body. Carries the top-level keys the
    /// client actually sent, which makes broken clients easy to debug.
    MissingImage { got_keys: Vec<String> },
    /// No API credential configured. Reported before anything goes
    /// upstream.
    MissingApiKey,
    /// Payload did not match `data:<mime>;base64,<payload>`.
    BadDataUrl(String),
    /// The decoded bytes were not a decodable image.
    ImageDecode(String),
    /// Transport or API failure talking to the model.
    Upstream(String),
    /// The model produced text that is not JSON. Carries a bounded
    /// excerpt, never the full output.
    NotJson { preview: String },
    /// The model produced JSON but not all ten required keys.
    MissingKeys(Vec<String>),
    /// Boundary catch-all.
    Internal(String),
}

impl AnalyzeError {
    pub fn status(&self) -> u16 {
        match self {
            AnalyzeError::MethodNotAllowed => 405,
            AnalyzeError::BadBody(_)
            | AnalyzeError::MissingImage { .. }
            | AnalyzeError::BadDataUrl(_)
            | AnalyzeError::ImageDecode(_) => 400,
            AnalyzeError::MissingApiKey
            | AnalyzeError::Upstream(_)
            | AnalyzeError::NotJson { .. }
            | AnalyzeError::MissingKeys(_)
            | AnalyzeError::Internal(_) => 500,
        }
    }
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::MethodNotAllowed => write!(f, "Method not allowed"),
            AnalyzeError::BadBody(msg) => write!(f, "Invalid request body: {msg}"),
            AnalyzeError::MissingImage { got_keys } => {
                write!(f, "imageDataUrl is required (got keys: {})", got_keys.join(", "))
            }
            AnalyzeError::MissingApiKey => write!(f, "Missing OPENAI_API_KEY"),
            AnalyzeError::BadDataUrl(msg) => write!(f, "Invalid image data URL: {msg}"),
            AnalyzeError::ImageDecode(msg) => write!(f, "Image decode failed: {msg}"),
            AnalyzeError::Upstream(msg) => write!(f, "Upstream error: {msg}"),
            AnalyzeError::NotJson { preview } => {
                write!(f, "Model output was not JSON: {preview}")
            }
            AnalyzeError::MissingKeys(keys) => {
                write!(f, "Model response missing keys: {}", keys.join(", "))
            }
            AnalyzeError::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl Error for AnalyzeError {}
