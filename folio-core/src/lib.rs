//! folio-core: configuration and small helpers shared by the folio crates.

pub mod config;
pub mod slug;

pub use config::{load_dotenv, FolioConfig, LlmSettings, Secrets};
pub use slug::slugify;
