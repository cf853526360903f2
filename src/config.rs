use std::env;

/// Runtime configuration, read once in `main` and injected into the
/// request state instead of being looked up from the environment deep
/// inside the pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Credential for the vision model API. Absence is not fatal at
    /// startup; analyze requests fail with a 500 until one is set.
    pub api_key: Option<String>,
    /// Model name sent upstream.
    pub model: String,
    /// Address the server binds to.
    pub bind_addr: String,
    /// Larger image dimension sent upstream, in pixels.
    pub max_image_dim: u32,
    /// JPEG quality for the re-encoded upstream payload.
    pub jpeg_quality: u8,
    /// Upper bound (chars) on the diagnostic excerpt of non-JSON model
    /// output. Keeps error payloads bounded.
    pub preview_chars: usize,
    /// Request body cap in bytes.
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            bind_addr: "127.0.0.1:3000".to_string(),
            max_image_dim: 1024,
            jpeg_quality: 80,
            preview_chars: 300,
            max_body_bytes: 8 * 1024 * 1024,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        cfg.api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        if let Ok(model) = env::var("ETSY_MODE_MODEL") {
            if !model.is_empty() {
                cfg.model = model;
            }
        }

        if let Ok(addr) = env::var("ETSY_MODE_ADDR") {
            if !addr.is_empty() {
                cfg.bind_addr = addr;
            }
        }

        cfg
    }
}
