pub mod config;
pub mod constant;
pub mod extractor;
pub mod jenkins;
pub mod lens_error;
pub mod locator;
pub mod mcp;
pub mod pretty_log;

pub use extractor::{extract, extract_error_block, ExtractOptions};
pub use locator::{locate, JobLocator, LocatorError};
