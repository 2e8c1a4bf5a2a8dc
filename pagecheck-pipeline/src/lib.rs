//! The check pipeline for pagecheck: URL normalization, page fetching,
//! content extraction and language-model classification, combined into a
//! single verdict.

pub mod classify;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod pipeline;

pub use classify::Classifier;
pub use error::{CheckError, Result};
pub use extract::{extract, ExtractedContent};
pub use fetch::{FetchResult, Fetcher};
pub use normalize::normalize;
pub use pipeline::{domain_of, ClassifyFailurePolicy, Pipeline};
