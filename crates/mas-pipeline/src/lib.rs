//! Orchestration: fetch, extract, prompt, complete, and the canned-agent
//! analysis built on top.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::Pipeline;
