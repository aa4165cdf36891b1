mod config;
mod error;
mod helpers;
mod host;
mod markers;
mod rules;
mod selector;
mod types;

pub use config::{SelectorConfig, DEFAULT_BASE_URL, DEFAULT_SUFFIX};
pub use error::{Error, Result};
pub use helpers::parse_app_version;
pub use host::{MarkupWriter, RecordingHost, StylesheetHost, StylesheetLink};
pub use rules::select_stylesheet;
pub use selector::StylesheetSelector;
pub use types::*;
