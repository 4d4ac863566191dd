//! Text-generation provider abstraction
//!
//! The recommender only needs "prompt in, free-form text out". Keeping the
//! hosted inference API behind a trait lets the pipeline run against a
//! scripted generator in tests.

use crate::error::GenerationError;

pub mod huggingface;

pub use huggingface::HuggingFaceClient;

/// Trait for text-generation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates free-form text for `prompt`.
    ///
    /// Implementations make a single attempt with no retry. Every failure is
    /// reported as a [`GenerationError`]; callers treat all of them as "use the
    /// fallback".
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
