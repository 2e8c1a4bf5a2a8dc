pub mod data;
pub mod labels;
pub mod noise;
pub mod report;
pub mod reputation;
pub mod result;
pub mod verdict;

pub use labels::ClassificationLabels;
pub use noise::noise_score;
pub use reputation::ReputationTable;
pub use result::{CheckMeta, CheckResult, HeadersSubset};
pub use verdict::{combine, Reason, Verdict};
