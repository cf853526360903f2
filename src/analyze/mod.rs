mod data_url;
mod error;
mod extract;
mod fence;
mod handler;
mod listing;
mod model;
pub mod prompt;

pub use data_url::EmbeddedImage;
pub use error::AnalyzeError;
pub use handler::{analyze_route, AppState};
pub use listing::{GroundingSource, ListingRecord};
pub use model::{OpenAiVision, VisionModel};
