//! Port for the append-only quality-check log.

use async_trait::async_trait;

use crate::domain::quality::QualityCheck;

use super::StoreError;

/// Port for the `quality_checks` collection. Append-only: no update or
/// delete exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QualityCheckRepository: Send + Sync {
    /// Append a quality check record.
    async fn insert(&self, check: &QualityCheck) -> Result<(), StoreError>;
}
