//! Portfolio aggregation.
//!
//! [`RepoAggregator`] joins repository metadata, language statistics, and
//! discovered images into a [`RepositoryRecord`]. Image discovery is
//! best-effort and never fails an aggregation.

pub mod aggregator;
pub mod images;
pub mod languages;
pub mod quota;
pub mod readme_scan;
pub mod record;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use aggregator::RepoAggregator;
pub use images::{ImageDiscovery, MAX_SEARCH_DEPTH, SearchMode};
pub use languages::{LanguageShare, language_breakdown};
pub use quota::{DEFAULT_FREE_GENERATIONS, GenerationQuota, QuotaDecision, UsageProfile};
pub use readme_scan::scan_readme_images;
pub use record::{ImageSet, RepositoryRecord};
