//! Single-page fetch and visible-text extraction.

pub mod client;
pub mod error;
pub mod extract;

pub use client::SiteClient;
pub use error::ScraperError;
pub use extract::{extract_visible_text, PageText};
